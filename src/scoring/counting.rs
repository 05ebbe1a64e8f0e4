use thiserror::Error;

use crate::document::Lexicon;
use crate::types::TermCounts;

#[derive(Debug, Error)]
pub enum CountingError {
    #[error("term must be non-empty")]
    EmptyTerm,
}

/// Counting phase for one document: drop tokens the lexicon does not know,
/// map survivors to their canonical root, accumulate occurrence counts.
pub fn count_terms(tokens: Vec<String>, lexicon: &Lexicon) -> Result<TermCounts, CountingError> {
    let mut counts = TermCounts::new();

    for token in tokens {
        if token.is_empty() {
            return Err(CountingError::EmptyTerm);
        }
        if let Some(root) = lexicon.canonical(&token) {
            *counts.entry(root.to_string()).or_insert(0) += 1;
        }
    }

    Ok(counts)
}
