//! Boundary validation and normalization for upstream input.
//!
//! The engine is total over well-formed records and validates nothing
//! itself; everything user- or provider-supplied is checked here before
//! it reaches the engine. Malformed input is rejected, not clamped —
//! the one normalization performed is absent volume to 0, which the
//! engine does on its own.

use crate::error::{ClusterError, Result};
use crate::types::KeywordRecord;
use regex::Regex;

/// Separators accepted in raw keyword input: commas and any newline
/// convention (textarea-style paste).
pub const KEYWORD_SEPARATOR_PATTERN: &str = r",|\r\n|\r|\n";

/// Splits a raw keyword string into individual keywords, trimming
/// surrounding whitespace and dropping empty entries.
#[must_use]
pub fn split_keywords(raw: &str) -> Vec<String> {
    // Pattern is a literal constant; compilation cannot fail.
    let separators = Regex::new(KEYWORD_SEPARATOR_PATTERN).unwrap();
    separators
        .split(raw)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Checks that a merge threshold percentage is within [0,100].
///
/// # Errors
///
/// Returns `ClusterError::ThresholdOutOfRange` for values above 100.
pub fn validate_threshold(threshold_pct: u32) -> Result<u32> {
    if threshold_pct > 100 {
        return Err(ClusterError::ThresholdOutOfRange(threshold_pct));
    }
    Ok(threshold_pct)
}

/// Checks that every record carries non-empty keyword text.
///
/// Duplicate keyword text is allowed through: upstream does not
/// guarantee deduplication, and each occurrence clusters independently.
///
/// # Errors
///
/// Returns `ClusterError::EmptyKeyword` with the offending position.
pub fn validate_records(records: &[KeywordRecord]) -> Result<()> {
    for (idx, record) in records.iter().enumerate() {
        if record.keyword.trim().is_empty() {
            return Err(ClusterError::EmptyKeyword(idx));
        }
    }
    Ok(())
}
