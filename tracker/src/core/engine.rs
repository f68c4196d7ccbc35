//! Progressive-overload recommendation engine
//!
//! Pure functions that turn one reported set (reps, reps in reserve) into a
//! weight for the next attempt. Nothing here fails: missing or unusable data
//! falls back to the best available anchor weight.
//!
//! The base estimate scales the anchor weight by how far the performance
//! landed from the planned target:
//!
//! - target met (reps and RIR both at or above plan): `anchor * (1 + step * surplus)`
//!   where surplus counts extra reps plus extra reserve reps
//! - target missed: `anchor * (1 - step * deficit)` where deficit counts only
//!   the shortfalls
//!
//! The change is clamped to `max_change_fraction` in either direction.

use serde::{Deserialize, Serialize};
use shared::{Component, Exercise, Performance, tracker_debug};

/// Coefficient of the Epley one-rep-max estimate
pub const EPLEY_COEFFICIENT: f64 = 0.0333;

/// Rep count the rep-range extrapolation calibrates to unless told otherwise
pub const DEFAULT_TARGET_REPS: u32 = 6;

/// Tunables for the recommendation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fractional weight change per rep of surplus or deficit
    pub step_fraction: f64,
    /// Largest fractional change applied in one recommendation
    pub max_change_fraction: f64,
    /// Anchor used when neither history, plan, nor caller provides one
    pub minimum_weight: f64,
    /// Plate increment the rep-range recommendation rounds to
    pub rounding_increment: f64,
    pub default_target_reps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_fraction: 0.025,
            max_change_fraction: 0.10,
            minimum_weight: 5.0,
            rounding_increment: 5.0,
            default_target_reps: DEFAULT_TARGET_REPS,
        }
    }
}

/// Stateless engine parameterized by [`EngineConfig`]
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Weight for the next attempt at `exercise` after reporting `performance`
    ///
    /// `current_weight` is the caller's fallback anchor for exercises with no
    /// history and no plan.
    pub fn estimate_next_weight(
        &self,
        exercise: Option<&Exercise>,
        performance: Performance,
        current_weight: Option<f64>,
    ) -> f64 {
        let anchor = self.anchor_weight(exercise, current_weight);
        let target = target_for(exercise).unwrap_or(performance);

        let met = performance.reps >= target.reps && performance.rir >= target.rir;
        let change = if met {
            let surplus = (performance.reps - target.reps).saturating_add((performance.rir - target.rir) as u32);
            (self.config.step_fraction * surplus as f64).min(self.config.max_change_fraction)
        } else {
            let deficit = target
                .reps
                .saturating_sub(performance.reps)
                .saturating_add(target.rir.saturating_sub(performance.rir) as u32);
            -(self.config.step_fraction * deficit as f64).min(self.config.max_change_fraction)
        };

        let next = anchor * (1.0 + change);
        tracker_debug!(
            Component::Engine,
            anchor,
            next,
            reps = performance.reps,
            rir = performance.rir,
            "Estimated next weight"
        );
        next
    }

    /// Weight calibrated to `target_reps` (default 6) via an Epley 1RM round trip,
    /// rounded to the nearest plate increment
    pub fn recommend_for_rep_range(
        &self,
        exercise: Option<&Exercise>,
        performance: Performance,
        current_weight: Option<f64>,
        target_reps: Option<u32>,
    ) -> f64 {
        let base = self.estimate_next_weight(exercise, performance, current_weight);
        let target_reps = target_reps.unwrap_or(self.config.default_target_reps);

        let adjusted_reps = performance.reps_to_failure() as f64;
        let target_adjusted_reps = target_reps as f64 + performance.rir as f64;

        let source_factor = 1.0 + EPLEY_COEFFICIENT * adjusted_reps;
        let target_factor = 1.0 + EPLEY_COEFFICIENT * target_adjusted_reps;
        if source_factor <= 0.0 || target_factor <= 0.0 {
            return self.round_to_increment(base);
        }

        let one_rep_max = base * source_factor;
        let recommended = one_rep_max / target_factor;
        if !recommended.is_finite() {
            return self.round_to_increment(base);
        }
        self.round_to_increment(recommended)
    }

    /// Nearest multiple of the increment, halves rounding up, never below one increment
    pub fn round_to_increment(&self, weight: f64) -> f64 {
        let increment = self.config.rounding_increment;
        if !weight.is_finite() {
            return increment;
        }
        let rounded = (weight / increment + 0.5).floor() * increment;
        rounded.max(increment)
    }

    /// Latest logged weight, then planned weight, then the caller's, then the minimum
    fn anchor_weight(&self, exercise: Option<&Exercise>, current_weight: Option<f64>) -> f64 {
        let logged = exercise.and_then(|e| e.latest_log()).map(|s| s.weight());
        let planned = exercise.and_then(|e| e.planned()).map(|s| s.weight());

        [logged, planned, current_weight]
            .into_iter()
            .flatten()
            .find(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(self.config.minimum_weight)
    }
}

impl EngineConfig {
    /// Replace out-of-range tunables with defaults so the engine output stays positive
    fn sanitized(self) -> Self {
        let defaults = Self::default();
        let positive = |v: f64| v.is_finite() && v > 0.0;
        Self {
            step_fraction: if positive(self.step_fraction) { self.step_fraction } else { defaults.step_fraction },
            max_change_fraction: if positive(self.max_change_fraction) && self.max_change_fraction < 1.0 {
                self.max_change_fraction
            } else {
                defaults.max_change_fraction
            },
            minimum_weight: if positive(self.minimum_weight) { self.minimum_weight } else { defaults.minimum_weight },
            rounding_increment: if positive(self.rounding_increment) {
                self.rounding_increment
            } else {
                defaults.rounding_increment
            },
            default_target_reps: self.default_target_reps.max(1),
        }
    }
}

/// Planned rep/RIR target: the plan's first set, else the latest log
fn target_for(exercise: Option<&Exercise>) -> Option<Performance> {
    let exercise = exercise?;
    exercise
        .planned()
        .or_else(|| exercise.latest_log())
        .map(|set| Performance::new(set.reps(), set.rir()))
}
