//! Allocation and fairness configuration.
//!
//! Calibration constants are configuration, not literals. Defaults match
//! the ward's current policy: two staff per shift, at most six shifts per
//! week bucket, a night baseline of 7.75 and a weekend baseline of 7.
//!
//! Both structs deserialize with `#[serde(default)]`, so a configuration
//! document only needs to list the fields it overrides.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Staffing rules for the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Target headcount per slot before uncovered reductions.
    pub slot_capacity: u32,
    /// Maximum shifts per member in one week bucket.
    pub max_shifts_per_week: u32,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            slot_capacity: 2,
            max_shifts_per_week: 6,
        }
    }
}

impl AllocationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-slot headcount.
    pub fn with_slot_capacity(mut self, capacity: u32) -> Self {
        self.slot_capacity = capacity;
        self
    }

    /// Sets the weekly shift cap.
    pub fn with_max_shifts_per_week(mut self, max: u32) -> Self {
        self.max_shifts_per_week = max;
        self
    }

    /// Loads a configuration document, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would make every member ineligible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_shifts_per_week == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_shifts_per_week",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Fairness scoring constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FairnessConfig {
    /// Monthly night load above which the night penalty applies.
    pub night_baseline: f64,
    /// Monthly weekend load above which the weekend penalty applies.
    pub weekend_baseline: f64,
    /// Points per night above baseline.
    pub night_penalty: f64,
    /// Points per weekend shift above baseline.
    pub weekend_penalty: f64,
    /// Points per back-to-back night pair.
    pub consecutive_night_penalty: f64,
    /// Scores below this are flagged in the team summary.
    pub low_fairness_threshold: u8,
}

impl Default for FairnessConfig {
    fn default() -> Self {
        Self {
            night_baseline: 7.75,
            weekend_baseline: 7.0,
            night_penalty: 4.0,
            weekend_penalty: 3.0,
            consecutive_night_penalty: 10.0,
            low_fairness_threshold: 80,
        }
    }
}

impl FairnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the night and weekend baselines.
    pub fn with_baselines(mut self, nights: f64, weekends: f64) -> Self {
        self.night_baseline = nights;
        self.weekend_baseline = weekends;
        self
    }

    /// Sets the per-unit penalties.
    pub fn with_penalties(mut self, night: f64, weekend: f64, consecutive_night: f64) -> Self {
        self.night_penalty = night;
        self.weekend_penalty = weekend;
        self.consecutive_night_penalty = consecutive_night;
        self
    }

    /// Sets the low-fairness flag threshold.
    pub fn with_low_fairness_threshold(mut self, threshold: u8) -> Self {
        self.low_fairness_threshold = threshold.min(100);
        self
    }

    /// Loads a configuration document, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Baselines must be finite; penalties finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let baselines = [
            ("night_baseline", self.night_baseline),
            ("weekend_baseline", self.weekend_baseline),
        ];
        for (field, value) in baselines {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{value} is not a finite number"),
                });
            }
        }

        let penalties = [
            ("night_penalty", self.night_penalty),
            ("weekend_penalty", self.weekend_penalty),
            ("consecutive_night_penalty", self.consecutive_night_penalty),
        ];
        for (field, value) in penalties {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{value} must be a finite, non-negative number"),
                });
            }
        }

        if self.low_fairness_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                field: "low_fairness_threshold",
                reason: "must be within 0..=100".into(),
            });
        }
        Ok(())
    }
}
