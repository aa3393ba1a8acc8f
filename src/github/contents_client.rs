use super::response::{ContentEntry, EntryKind};
use crate::http::{Error, Headers, HttpClient};
use base64::{prelude::BASE64_STANDARD, Engine};

const API_ROOT: &str = "https://api.github.com";

pub struct ContentsClient {
    http: HttpClient,
    base_url: String,
}

impl ContentsClient {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::with_api_root(API_ROOT, owner, repo)
    }

    fn with_api_root(api_root: &str, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        let base_url = format!(
            "{}/repos/{}/{}/contents",
            api_root,
            owner.into(),
            repo.into()
        );

        ContentsClient {
            http: HttpClient::new(),
            base_url,
        }
    }

    pub async fn list_root_directories(&self) -> Result<Vec<String>, Error> {
        let entries = self.fetch_entries(&self.base_url).await?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::Dir)
            .map(|entry| entry.name)
            .collect())
    }

    pub async fn list_text_files(&self, directory: &str) -> Result<Vec<String>, Error> {
        let url = format!("{}/{}", self.base_url, directory);

        let entries = self.fetch_entries(&url).await?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::File && entry.name.ends_with(".txt"))
            .map(|entry| entry.name)
            .collect())
    }

    /// Returns `None` both when the entry is not a plain file and on any
    /// non-200 response, including 404.
    pub async fn get_file_content(
        &self,
        directory: &str,
        filename: &str,
    ) -> Result<Option<String>, Error> {
        let url = format!("{}/{}/{}", self.base_url, directory, filename);

        let response = self.http.get(&url).contents_headers().send().await?;

        if response.status().as_u16() != 200 {
            return Ok(None);
        }

        let entry = serde_json::from_str::<ContentEntry>(&response.text().await?)?;

        if entry.kind != EntryKind::File {
            return Ok(None);
        }

        match entry.content {
            Some(payload) => Ok(Some(decode_content(&payload)?)),
            None => Ok(None),
        }
    }

    async fn fetch_entries(&self, url: &str) -> Result<Vec<ContentEntry>, Error> {
        let response = self.http.get(url).contents_headers().send().await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(Error::RemoteFetchError { status });
        }

        let entries = serde_json::from_str::<Vec<ContentEntry>>(&response.text().await?)?;

        Ok(entries)
    }
}

// The API wraps base64 payloads with newlines every 60 characters.
fn decode_content(payload: &str) -> Result<String, Error> {
    let compact: String = payload.split_ascii_whitespace().collect();

    let bytes = BASE64_STANDARD.decode(compact)?;

    Ok(String::from_utf8(bytes)?)
}
