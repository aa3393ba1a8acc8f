mod content_entry;

pub use content_entry::ContentEntry;
pub use content_entry::EntryKind;
