//! Sets: the unit of performed or planned work

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};

/// Highest accepted reps-in-reserve value
pub const MAX_RIR: u8 = 5;

/// One completed or planned set. Immutable once built; edit through [`SetDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    weight: f64,
    reps: u32,
    rir: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
}

impl TrainingSet {
    /// Build a validated, undated set
    pub fn new(weight: f64, reps: u32, rir: u8) -> SharedResult<Self> {
        validate_weight(weight)?;
        validate_reps(reps)?;
        validate_rir(rir)?;
        Ok(Self {
            weight,
            reps,
            rir,
            date: None,
        })
    }

    /// Same set stamped with the day it was performed
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn rir(&self) -> u8 {
        self.rir
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Re-check invariants, e.g. after deserializing untrusted data
    pub fn validate(&self) -> SharedResult<()> {
        validate_weight(self.weight)?;
        validate_reps(self.reps)?;
        validate_rir(self.rir)
    }
}

pub fn validate_weight(weight: f64) -> SharedResult<()> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(SharedError::InvalidWeight { value: weight })
    }
}

pub fn validate_reps(reps: u32) -> SharedResult<()> {
    if reps == 0 {
        return Err(SharedError::InvalidReps { value: reps });
    }
    Ok(())
}

pub fn validate_rir(rir: u8) -> SharedResult<()> {
    if rir > MAX_RIR {
        return Err(SharedError::InvalidRir {
            value: rir,
            max: MAX_RIR,
        });
    }
    Ok(())
}

/// Editable buffer for a set that has not been saved yet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetDraft {
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    pub rir: Option<u8>,
    pub date: Option<NaiveDate>,
}

impl SetDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing from an existing set
    pub fn from_set(set: &TrainingSet) -> Self {
        Self {
            weight: Some(set.weight),
            reps: Some(set.reps),
            rir: Some(set.rir),
            date: set.date,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_reps(mut self, reps: u32) -> Self {
        self.reps = Some(reps);
        self
    }

    pub fn with_rir(mut self, rir: u8) -> Self {
        self.rir = Some(rir);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Validate the draft and turn it into an immutable set
    pub fn promote(&self) -> SharedResult<TrainingSet> {
        let weight = self.weight.ok_or_else(|| missing("weight"))?;
        let reps = self.reps.ok_or_else(|| missing("reps"))?;
        // RIR is optional while drafting; an unset value means the set went to failure
        let rir = self.rir.unwrap_or(0);

        let set = TrainingSet::new(weight, reps, rir)?;
        Ok(match self.date {
            Some(date) => set.on(date),
            None => set,
        })
    }
}

fn missing(field: &str) -> SharedError {
    SharedError::IncompleteDraft {
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_validates_ranges() {
        assert!(TrainingSet::new(100.0, 8, 2).is_ok());
        assert!(TrainingSet::new(100.0, 8, MAX_RIR).is_ok());

        assert_eq!(
            TrainingSet::new(0.0, 8, 2),
            Err(SharedError::InvalidWeight { value: 0.0 })
        );
        assert!(TrainingSet::new(-5.0, 8, 2).is_err());
        assert!(TrainingSet::new(f64::NAN, 8, 2).is_err());
        assert!(TrainingSet::new(f64::INFINITY, 8, 2).is_err());
        assert_eq!(
            TrainingSet::new(100.0, 0, 2),
            Err(SharedError::InvalidReps { value: 0 })
        );
        assert_eq!(
            TrainingSet::new(100.0, 8, 6),
            Err(SharedError::InvalidRir { value: 6, max: 5 })
        );
    }

    #[test]
    fn test_set_serializes_date_as_iso_string() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let set = TrainingSet::new(60.0, 10, 1).unwrap().on(date);

        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["date"], "2024-01-15");

        let undated = serde_json::to_value(TrainingSet::new(60.0, 10, 1).unwrap()).unwrap();
        assert!(undated.get("date").is_none());
    }

    #[test]
    fn test_draft_promotion() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
        let set = SetDraft::new()
            .with_weight(80.0)
            .with_reps(5)
            .with_rir(3)
            .with_date(date)
            .promote()
            .unwrap();

        assert_eq!(set.weight(), 80.0);
        assert_eq!(set.reps(), 5);
        assert_eq!(set.rir(), 3);
        assert_eq!(set.date(), Some(date));
    }

    #[test]
    fn test_draft_reports_missing_and_invalid_fields() {
        assert_eq!(
            SetDraft::new().with_reps(5).promote(),
            Err(SharedError::IncompleteDraft {
                field: "weight".to_string()
            })
        );
        assert!(SetDraft::new().with_weight(80.0).with_reps(5).with_rir(9).promote().is_err());

        // Editing an existing set round-trips through the draft
        let original = TrainingSet::new(70.0, 6, 1).unwrap();
        let mut draft = SetDraft::from_set(&original);
        draft.reps = Some(7);
        let edited = draft.promote().unwrap();
        assert_eq!(edited.reps(), 7);
        assert_eq!(edited.weight(), 70.0);
    }
}
