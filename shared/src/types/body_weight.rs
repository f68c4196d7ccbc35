//! Body-weight log entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::set::validate_weight;
use crate::errors::SharedResult;

/// One logged body-weight reading; several may share a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyWeightEntry {
    date: NaiveDate,
    weight: f64,
}

impl BodyWeightEntry {
    pub fn new(date: NaiveDate, weight: f64) -> SharedResult<Self> {
        validate_weight(weight)?;
        Ok(Self { date, weight })
    }

    /// Re-check a deserialized entry
    pub fn validate(&self) -> SharedResult<()> {
        validate_weight(self.weight)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_requires_positive_weight() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(BodyWeightEntry::new(date, 82.4).is_ok());
        assert!(BodyWeightEntry::new(date, 0.0).is_err());
        assert!(BodyWeightEntry::new(date, f64::NAN).is_err());
    }

    #[test]
    fn test_validate_catches_deserialized_bad_weight() {
        let entry: BodyWeightEntry = serde_json::from_str(r#"{"date": "2024-06-01", "weight": -3.0}"#).unwrap();
        assert!(entry.validate().is_err());
    }
}
