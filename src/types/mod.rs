pub mod articles;

pub use articles::{NewsArticles, RankedDocument, ScoreError, ScoredArticle, TermCounts};
