use chrono::NaiveDate;

use super::ExtractError;

/// Maps a raw publication date string to an orderable date value.
///
/// The `Ord` bound on [`DateExtractor::Value`] is what the ranking stage
/// sorts by; the comparator travels with the trait contract rather than
/// being resolved ambiently.
pub trait DateExtractor {
    type Value: Ord;

    fn extract(&self, raw: &str) -> Result<Self::Value, ExtractError>;
}

/// v0: ISO-8601 calendar dates (`YYYY-MM-DD`).
#[derive(Debug, Default, Clone, Copy)]
pub struct IsoDateExtractor;

impl DateExtractor for IsoDateExtractor {
    type Value = NaiveDate;

    fn extract(&self, raw: &str) -> Result<NaiveDate, ExtractError> {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| ExtractError::new(raw, e.to_string()))
    }
}
