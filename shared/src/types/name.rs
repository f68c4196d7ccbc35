//! Name canonicalization and calendar-date parsing

use chrono::NaiveDate;

use crate::errors::{SharedError, SharedResult};

/// ISO calendar date format used for every persisted date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical form of an exercise or workout name: trimmed and lowercased
pub fn canonical_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Two names refer to the same entity iff their canonical forms match
pub fn same_name(a: &str, b: &str) -> bool {
    canonical_name(a) == canonical_name(b)
}

/// Reject names that are empty once canonicalized
pub fn require_name(raw: &str, field: &str) -> SharedResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SharedError::EmptyName {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Parse a "YYYY-MM-DD" date
pub fn parse_date(input: &str) -> SharedResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| SharedError::InvalidDate {
        input: input.to_string(),
    })
}
