use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from raw surface word to canonical root word.
///
/// Tokens absent from the lexicon are dropped during counting; surviving
/// tokens are grouped under their root. The map may be empty, in which case
/// every document scores to an empty weight map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    inner: BTreeMap<String, String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, surface: impl Into<String>, root: impl Into<String>) {
        self.inner.insert(surface.into(), root.into());
    }

    /// Canonical root for a surface token, if the lexicon knows it.
    pub fn canonical(&self, token: &str) -> Option<&str> {
        self.inner.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.inner.contains_key(token)
    }

    // Helper to merge another lexicon into this one (overriding common keys)
    pub fn merge(&mut self, other: Lexicon) {
        for (surface, root) in other.inner {
            self.inner.insert(surface, root);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.inner.iter()
    }
}

impl<S, R> FromIterator<(S, R)> for Lexicon
where
    S: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, R)>>(iter: I) -> Self {
        Lexicon {
            inner: iter
                .into_iter()
                .map(|(s, r)| (s.into(), r.into()))
                .collect(),
        }
    }
}
