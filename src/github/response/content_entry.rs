use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
    // symlinks, submodules, and whatever the API grows next
    #[serde(other)]
    Other,
}
