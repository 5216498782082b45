//! Ingestion Data Types

use std::time::Duration;

/// How the text of a document is extracted, chosen from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// `.xhtml`, `.xml`: only character data is kept.
    Markup,
    /// `.html`, `.htm`: parsed as HTML5, so void tags like `<br>` are fine.
    /// Script and style contents are not indexed.
    Html,
    /// `.txt`, `.md`: the file content is indexed as-is.
    PlainText,
}

impl DocumentKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "xhtml" | "xml" => Some(Self::Markup),
            "html" | "htm" => Some(Self::Html),
            "txt" | "md" => Some(Self::PlainText),
            _ => None,
        }
    }
}

/// Outcome of one [`index_directory`](super::indexer::index_directory) run.
#[derive(Debug, Clone, Default)]
pub struct IndexReport {
    /// Documents added to the store.
    pub indexed: usize,
    /// Documents with a known extension that could not be read or parsed.
    pub skipped: usize,
    pub elapsed: Duration,
}
