use super::ExtractError;

/// Splits a document body into raw word tokens, in body order.
pub trait WordExtractor {
    fn extract(&self, body: &str) -> Result<Vec<String>, ExtractError>;
}

/// v0: lowercase the body and split on whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceWords;

impl WordExtractor for WhitespaceWords {
    fn extract(&self, body: &str) -> Result<Vec<String>, ExtractError> {
        Ok(body
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect())
    }
}
