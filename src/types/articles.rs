use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::extract::ExtractError;

/// Occurrence count per canonical term for a single document.
/// BTreeMap keeps iteration and serialization order deterministic.
pub type TermCounts = BTreeMap<String, u64>;

/// A scored document returned in the output.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct ScoredArticle<D> {
    pub date: D,
    pub title: String,

    /// Canonical term → the document's share of that term's corpus-wide
    /// occurrence total. Every value lies in (0, 1]; a term's weights summed
    /// over all documents equal 1.
    pub weights: BTreeMap<String, f64>,
}

/// The final result of a scoring run: one article per input document,
/// ascending by date value, equal dates in original corpus order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticles<D> {
    pub articles: Vec<ScoredArticle<D>>,
}

impl<D> NewsArticles<D> {
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredArticle<D>> {
        self.articles.iter()
    }
}

/// Internal: a document that has been date-ranked but not yet counted.
/// Holds a reference to the original document to avoid cloning the body.
#[derive(Debug, Clone)]
pub struct RankedDocument<'a, D> {
    pub document: &'a Document,
    pub date: D,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("corpus must be non-empty")]
    EmptyCorpus,

    #[error("word extraction produced an empty term in {title:?}")]
    EmptyTerm { title: String },

    #[error("date extraction failed for {title:?}: {source}")]
    Date {
        title: String,
        #[source]
        source: ExtractError,
    },

    #[error("word extraction failed for {title:?}: {source}")]
    Words {
        title: String,
        #[source]
        source: ExtractError,
    },
}
