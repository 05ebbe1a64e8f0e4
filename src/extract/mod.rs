pub mod date;
pub mod words;

use thiserror::Error;

pub use date::{DateExtractor, IsoDateExtractor};
pub use words::{WhitespaceWords, WordExtractor};

/// Failure of a caller-supplied extractor over one input string.
#[derive(Debug, Clone, Error)]
#[error("{reason}: {input:?}")]
pub struct ExtractError {
    pub input: String,
    pub reason: String,
}

impl ExtractError {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ExtractError {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
