pub mod document;
pub mod lexicon;

pub use document::{Document, DocumentError};
pub use lexicon::Lexicon;
