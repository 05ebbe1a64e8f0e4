use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Body must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// The atomic unit of a news corpus.
///
/// `date` is the raw publication date string exactly as the source supplied
/// it; it is not parsed until the ranking stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub date: String,
    pub title: String,
    pub body: String,
}

impl Document {
    pub fn new(
        date: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Document {
            date: date.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Ingest a raw body into a Document.
    ///
    /// Use this when the body comes straight off the wire or disk: it
    /// enforces UTF-8 validity before the document enters a corpus.
    pub fn ingest(
        date: impl Into<String>,
        title: impl Into<String>,
        raw_body: Vec<u8>,
    ) -> Result<Self, DocumentError> {
        let body = String::from_utf8(raw_body)?;

        Ok(Document {
            date: date.into(),
            title: title.into(),
            body,
        })
    }
}
