use std::collections::BTreeMap;

use crate::types::{NewsArticles, RankedDocument, ScoredArticle, TermCounts};

/// Element-wise sum of the per-document counts: each term's corpus-wide
/// occurrence total. A term counted in zero documents never appears.
pub fn corpus_totals(counted: &[TermCounts]) -> TermCounts {
    let mut totals = TermCounts::new();
    for counts in counted {
        for (term, count) in counts {
            *totals.entry(term.clone()).or_insert(0) += count;
        }
    }
    totals
}

/// Weighting phase: each document's count for a term becomes its share of
/// that term's corpus-wide total, a value in (0, 1].
///
/// `ranked` and `counted` must be aligned index-for-index in rank order.
pub fn apply_weights<D>(
    ranked: Vec<RankedDocument<'_, D>>,
    counted: Vec<TermCounts>,
) -> NewsArticles<D> {
    debug_assert_eq!(ranked.len(), counted.len());

    let totals = corpus_totals(&counted);

    let articles = ranked
        .into_iter()
        .zip(counted)
        .map(|(rdoc, counts)| {
            let weights: BTreeMap<String, f64> = counts
                .into_iter()
                .map(|(term, count)| {
                    // Every counted term has a positive total by construction.
                    let total = totals[&term];
                    (term, count as f64 / total as f64)
                })
                .collect();

            ScoredArticle {
                date: rdoc.date,
                title: rdoc.document.title.clone(),
                weights,
            }
        })
        .collect();

    NewsArticles { articles }
}
