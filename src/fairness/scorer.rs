//! Fairness scorer.
//!
//! Rates one member's monthly load on a 0-100 scale, starting from 100:
//!
//! | Penalty | Amount |
//! |---------|--------|
//! | Night load | `max(0, (nights - night_baseline) * night_penalty)` |
//! | Weekend load | `max(0, (weekends - weekend_baseline) * weekend_penalty)` |
//! | Back-to-back nights | `consecutive_night_penalty` per pair |
//!
//! The result is clamped to [0, 100] and rounded. The score is descriptive
//! only; the allocator never reads it.

use serde::{Deserialize, Serialize};

use crate::config::FairnessConfig;
use crate::error::ConfigError;
use crate::models::{Assignment, MemberStats, SchedulePeriod};

/// Night and weekend load figures fed to the scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadFigures {
    pub nights: f64,
    pub weekends: f64,
}

impl LoadFigures {
    pub fn new(nights: f64, weekends: f64) -> Self {
        Self { nights, weekends }
    }

    /// Actual load: nights held and shifts on weekend days.
    pub fn from_assignments(shifts: &[Assignment], period: &SchedulePeriod) -> Self {
        let nights = shifts.iter().filter(|a| a.shift_type.is_night()).count();
        let weekends = shifts.iter().filter(|a| period.is_weekend(a.day)).count();
        Self {
            nights: nights as f64,
            weekends: weekends as f64,
        }
    }
}

impl From<&MemberStats> for LoadFigures {
    fn from(stats: &MemberStats) -> Self {
        Self {
            nights: f64::from(stats.nights),
            weekends: f64::from(stats.weekends),
        }
    }
}

/// Per-component result of a fairness evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairnessBreakdown {
    pub night_penalty: f64,
    pub weekend_penalty: f64,
    pub consecutive_night_pairs: u32,
    pub consecutive_night_penalty: f64,
    /// Final clamped, rounded score.
    pub score: u8,
}

/// Computes fairness scores with configurable constants.
///
/// # Example
///
/// ```
/// use shift_alloc::fairness::{FairnessScorer, LoadFigures};
///
/// let scorer = FairnessScorer::new();
/// assert_eq!(scorer.score(&LoadFigures::new(7.75, 7.0), &[]), 100);
/// assert_eq!(scorer.score(&LoadFigures::new(10.0, 7.0), &[]), 91);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FairnessScorer {
    config: FairnessConfig,
}

impl FairnessScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scoring constants as given. Use [`try_with_config`] for
    /// configs that were not loaded through `from_json_str`.
    ///
    /// [`try_with_config`]: FairnessScorer::try_with_config
    pub fn with_config(mut self, config: FairnessConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the scoring constants after validating them.
    pub fn try_with_config(self, config: FairnessConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(self.with_config(config))
    }

    pub fn config(&self) -> &FairnessConfig {
        &self.config
    }

    /// Score in [0, 100].
    pub fn score(&self, load: &LoadFigures, shifts: &[Assignment]) -> u8 {
        self.evaluate(load, shifts).score
    }

    /// Score together with the penalties that produced it.
    pub fn evaluate(&self, load: &LoadFigures, shifts: &[Assignment]) -> FairnessBreakdown {
        let c = &self.config;
        let night_penalty = ((load.nights - c.night_baseline) * c.night_penalty).max(0.0);
        let weekend_penalty = ((load.weekends - c.weekend_baseline) * c.weekend_penalty).max(0.0);
        let pairs = Self::consecutive_night_pairs(shifts);
        let consecutive_penalty = f64::from(pairs) * c.consecutive_night_penalty;

        let raw = 100.0 - night_penalty - weekend_penalty - consecutive_penalty;
        // A NaN load or baseline drops out through `max(0.0)` above; only a
        // NaN `consecutive_night_penalty` reaches here, and the cast maps it to 0.
        let score = raw.clamp(0.0, 100.0).round() as u8;

        FairnessBreakdown {
            night_penalty,
            weekend_penalty,
            consecutive_night_pairs: pairs,
            consecutive_night_penalty: consecutive_penalty,
            score,
        }
    }

    /// Counts adjacent night pairs: after sorting by day, two neighbouring
    /// entries that are both nights on consecutive days.
    pub fn consecutive_night_pairs(shifts: &[Assignment]) -> u32 {
        let mut sorted: Vec<&Assignment> = shifts.iter().collect();
        sorted.sort_by_key(|a| a.day);

        sorted
            .windows(2)
            .filter(|w| {
                w[0].shift_type.is_night()
                    && w[1].shift_type.is_night()
                    && w[1].day == w[0].day + 1
            })
            .count() as u32
    }
}

/// Scores with the default constants.
pub fn fairness_score(load: &LoadFigures, shifts: &[Assignment]) -> u8 {
    FairnessScorer::new().score(load, shifts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;

    fn night(day: u32) -> Assignment {
        Assignment::new(day, "1", "A", ShiftType::Night, false)
    }

    fn morning(day: u32) -> Assignment {
        Assignment::new(day, "1", "A", ShiftType::Morning, false)
    }

    #[test]
    fn test_baseline_is_perfect() {
        assert_eq!(fairness_score(&LoadFigures::new(7.75, 7.0), &[]), 100);
    }

    #[test]
    fn test_night_excess() {
        let shifts: Vec<Assignment> = (0..10).map(|i| night(1 + i * 3)).collect();
        assert_eq!(fairness_score(&LoadFigures::new(10.0, 7.0), &shifts), 91);
    }

    #[test]
    fn test_weekend_excess() {
        // 100 - (9 - 7) * 3 = 94
        assert_eq!(fairness_score(&LoadFigures::new(0.0, 9.0), &[]), 94);
    }

    #[test]
    fn test_below_baseline_not_rewarded() {
        assert_eq!(fairness_score(&LoadFigures::new(0.0, 0.0), &[]), 100);
    }

    #[test]
    fn test_consecutive_nights() {
        let shifts = vec![night(5), night(3), night(4), morning(6), night(7)];
        // sorted: 3N 4N 5N 6M 7N → pairs (3,4), (4,5)
        assert_eq!(FairnessScorer::consecutive_night_pairs(&shifts), 2);
        assert_eq!(fairness_score(&LoadFigures::new(4.0, 0.0), &shifts), 80);
    }

    #[test]
    fn test_night_then_morning_not_a_pair() {
        let shifts = vec![night(3), morning(4)];
        assert_eq!(FairnessScorer::consecutive_night_pairs(&shifts), 0);
    }

    #[test]
    fn test_clamped_at_zero() {
        assert_eq!(fairness_score(&LoadFigures::new(50.0, 7.0), &[]), 0);
        assert_eq!(fairness_score(&LoadFigures::new(1e9, 1e9), &[]), 0);
    }

    #[test]
    fn test_nan_inputs() {
        assert_eq!(fairness_score(&LoadFigures::new(f64::NAN, 7.0), &[]), 100);
        let scorer = FairnessScorer::new()
            .with_config(FairnessConfig::new().with_penalties(4.0, 3.0, f64::NAN));
        assert_eq!(scorer.score(&LoadFigures::new(0.0, 0.0), &[night(3), night(4)]), 0);
    }

    #[test]
    fn test_try_with_config_rejects_negative_penalty() {
        let flipped = FairnessConfig::new().with_penalties(-4.0, 3.0, 10.0);
        assert!(matches!(
            FairnessScorer::new().try_with_config(flipped),
            Err(ConfigError::InvalidValue { field: "night_penalty", .. })
        ));
        let scorer = FairnessScorer::new()
            .try_with_config(FairnessConfig::new().with_penalties(5.0, 3.0, 10.0))
            .unwrap();
        assert_eq!(scorer.score(&LoadFigures::new(8.75, 7.0), &[]), 95);
    }

    #[test]
    fn test_rounding() {
        // 100 - (8 - 7.75) * 4 = 99
        assert_eq!(fairness_score(&LoadFigures::new(8.0, 7.0), &[]), 99);
        // 100 - (8.1 - 7.75) * 4 = 98.6 → 99
        assert_eq!(fairness_score(&LoadFigures::new(8.1, 7.0), &[]), 99);
        // 100 - (8.2 - 7.75) * 4 = 98.2 → 98
        assert_eq!(fairness_score(&LoadFigures::new(8.2, 7.0), &[]), 98);
    }

    #[test]
    fn test_breakdown() {
        let b = FairnessScorer::new().evaluate(&LoadFigures::new(9.75, 8.0), &[night(1), night(2)]);
        assert!((b.night_penalty - 8.0).abs() < 1e-10);
        assert!((b.weekend_penalty - 3.0).abs() < 1e-10);
        assert_eq!(b.consecutive_night_pairs, 1);
        assert!((b.consecutive_night_penalty - 10.0).abs() < 1e-10);
        assert_eq!(b.score, 79);
    }

    #[test]
    fn test_custom_config() {
        let scorer = FairnessScorer::new()
            .with_config(FairnessConfig::new().with_baselines(5.0, 4.0).with_penalties(1.0, 1.0, 0.0));
        assert_eq!(scorer.score(&LoadFigures::new(7.0, 6.0), &[night(1), night(2)]), 96);
    }

    #[test]
    fn test_load_from_stats_and_assignments() {
        let stats = MemberStats::new(22, 7, 8);
        assert_eq!(LoadFigures::from(&stats), LoadFigures::new(7.0, 8.0));

        let period = SchedulePeriod::new(2026, 1).unwrap();
        // Jan 2 2026 is a Friday.
        let shifts = vec![night(1), night(2), morning(3), morning(5)];
        assert_eq!(
            LoadFigures::from_assignments(&shifts, &period),
            LoadFigures::new(2.0, 2.0)
        );
    }
}
