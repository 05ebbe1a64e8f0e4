pub mod counting;
pub mod weighting;

use log::error;
use thiserror::Error;

use crate::document::{Document, Lexicon};
use crate::extract::{DateExtractor, IsoDateExtractor, WhitespaceWords, WordExtractor};
use crate::types::{NewsArticles, RankedDocument, ScoreError, TermCounts};

pub use counting::{count_terms, CountingError};
pub use weighting::{apply_weights, corpus_totals};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("date extractor is required")]
    MissingDateExtractor,
    #[error("word extractor is required")]
    MissingWordExtractor,
    #[error("lexicon is required")]
    MissingLexicon,
}

/// Scores a dated news corpus in three phases: rank by date, count lexicon
/// terms per document, weight each count by the term's corpus-wide total.
///
/// Holds no mutable state; one instance can score any number of corpora.
pub struct TermScorer<De, We> {
    date_extractor: De,
    word_extractor: We,
    lexicon: Lexicon,
}

impl Default for TermScorer<IsoDateExtractor, WhitespaceWords> {
    fn default() -> Self {
        Self {
            date_extractor: IsoDateExtractor,
            word_extractor: WhitespaceWords,
            lexicon: Lexicon::new(),
        }
    }
}

impl<De, We> TermScorer<De, We>
where
    De: DateExtractor,
    We: WordExtractor,
{
    pub fn new(date_extractor: De, word_extractor: We, lexicon: Lexicon) -> Self {
        Self {
            date_extractor,
            word_extractor,
            lexicon,
        }
    }

    pub fn builder() -> TermScorerBuilder<De, We> {
        TermScorerBuilder::new()
    }

    /// Score a corpus under the all-or-nothing batch contract: any failure
    /// is logged and the whole run yields `None`. Partial results are never
    /// returned, and this never panics.
    pub fn score(&self, corpus: &[Document]) -> Option<NewsArticles<De::Value>> {
        match self.try_score(corpus) {
            Ok(articles) => Some(articles),
            Err(err) => {
                error!("TermScorer::score failed: {err}");
                None
            }
        }
    }

    /// Score a corpus, surfacing the failure cause to the caller.
    pub fn try_score(
        &self,
        corpus: &[Document],
    ) -> Result<NewsArticles<De::Value>, ScoreError> {
        if corpus.is_empty() {
            return Err(ScoreError::EmptyCorpus);
        }

        // 1. Ranking phase
        let ranked = self.rank(corpus)?;

        // 2. Counting phase
        let counted = self.count(&ranked)?;

        // 3. Weighting phase
        Ok(weighting::apply_weights(ranked, counted))
    }

    fn rank<'a>(
        &self,
        corpus: &'a [Document],
    ) -> Result<Vec<RankedDocument<'a, De::Value>>, ScoreError> {
        let mut ranked = Vec::with_capacity(corpus.len());
        for document in corpus {
            let date = self
                .date_extractor
                .extract(document.date.trim())
                .map_err(|source| ScoreError::Date {
                    title: document.title.clone(),
                    source,
                })?;
            ranked.push(RankedDocument { document, date });
        }

        // Stable sort: equal dates keep their original corpus order.
        ranked.sort_by(|a, b| a.date.cmp(&b.date));

        debug_assert!(ranked.windows(2).all(|w| w[0].date <= w[1].date));

        Ok(ranked)
    }

    fn count(
        &self,
        ranked: &[RankedDocument<'_, De::Value>],
    ) -> Result<Vec<TermCounts>, ScoreError> {
        ranked
            .iter()
            .map(|rdoc| {
                let tokens = self
                    .word_extractor
                    .extract(&rdoc.document.body)
                    .map_err(|source| ScoreError::Words {
                        title: rdoc.document.title.clone(),
                        source,
                    })?;
                counting::count_terms(tokens, &self.lexicon).map_err(|_| {
                    ScoreError::EmptyTerm {
                        title: rdoc.document.title.clone(),
                    }
                })
            })
            .collect()
    }
}

/// Builder for [`TermScorer`]. Construction fails if any collaborator was
/// never supplied.
pub struct TermScorerBuilder<De, We> {
    date_extractor: Option<De>,
    word_extractor: Option<We>,
    lexicon: Option<Lexicon>,
}

impl<De, We> TermScorerBuilder<De, We> {
    pub fn new() -> Self {
        Self {
            date_extractor: None,
            word_extractor: None,
            lexicon: None,
        }
    }

    pub fn date_extractor(mut self, date_extractor: De) -> Self {
        self.date_extractor = Some(date_extractor);
        self
    }

    pub fn word_extractor(mut self, word_extractor: We) -> Self {
        self.word_extractor = Some(word_extractor);
        self
    }

    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn build(self) -> Result<TermScorer<De, We>, ConfigError> {
        Ok(TermScorer {
            date_extractor: self
                .date_extractor
                .ok_or(ConfigError::MissingDateExtractor)?,
            word_extractor: self
                .word_extractor
                .ok_or(ConfigError::MissingWordExtractor)?,
            lexicon: self.lexicon.ok_or(ConfigError::MissingLexicon)?,
        })
    }
}

impl<De, We> Default for TermScorerBuilder<De, We> {
    fn default() -> Self {
        Self::new()
    }
}
