//! Deterministic term-weight scoring engine for dated news corpora.
//!
//! `terms-core` provides document ingestion, date ranking, lexicon-filtered
//! term counting, and corpus-normalized weighting. All operations are
//! deterministic — identical inputs always produce identical outputs,
//! byte-for-byte.
//!
//! See <https://github.com/termsenginehq/terms-core> for the full platform.

pub mod document;
pub mod extract;
pub mod scoring;
pub mod store;
pub mod types;
