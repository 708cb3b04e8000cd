//! Team-level coverage and fairness metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total slots | Sum of effective slot capacities |
//! | Scheduled | Number of assignments |
//! | Coverage | `round(scheduled / total_slots * 100)` |
//! | Average fairness | Rounded mean of member scores |
//! | Rating | Excellent > 90, Good > 80, otherwise NeedsImprovement |

use serde::{Deserialize, Serialize};

use super::{FairnessScorer, LoadFigures};
use crate::models::{Allocation, SchedulePeriod, TeamMember};

/// Qualitative band for the team's average fairness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FairnessRating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl FairnessRating {
    pub fn from_average(average: u8) -> Self {
        if average > 90 {
            FairnessRating::Excellent
        } else if average > 80 {
            FairnessRating::Good
        } else {
            FairnessRating::NeedsImprovement
        }
    }
}

/// One member's actual month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub member_id: String,
    pub name: String,
    pub shifts: u32,
    pub nights: u32,
    pub weekends: u32,
    /// Score over the actual nights, weekends and shifts.
    pub fairness: u8,
}

/// Coverage and fairness for a whole allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub members: Vec<MemberSummary>,
    pub total_slots: u32,
    pub scheduled: u32,
    /// 0-100.
    pub coverage_percent: u8,
    /// 0-100.
    pub average_fairness: u8,
    pub rating: FairnessRating,
    /// IDs of members scoring below the configured threshold.
    pub low_fairness_members: Vec<String>,
}

impl TeamSummary {
    /// Computes the summary for `allocation` over `roster`.
    ///
    /// Members are listed in roster order. An empty roster averages 100,
    /// a period without capacity counts as fully covered.
    pub fn calculate(
        roster: &[TeamMember],
        allocation: &Allocation,
        period: &SchedulePeriod,
        scorer: &FairnessScorer,
    ) -> Self {
        let members: Vec<MemberSummary> = roster
            .iter()
            .map(|m| {
                let shifts = allocation.member_shifts(&m.id);
                let load = LoadFigures::from_assignments(&shifts, period);
                MemberSummary {
                    member_id: m.id.clone(),
                    name: m.name.clone(),
                    shifts: shifts.len() as u32,
                    nights: load.nights as u32,
                    weekends: load.weekends as u32,
                    fairness: scorer.score(&load, &shifts),
                }
            })
            .collect();

        let total_slots = allocation.capacity_total();
        let scheduled = allocation.assignment_count() as u32;
        let coverage_percent = if total_slots == 0 {
            100
        } else {
            (f64::from(scheduled) / f64::from(total_slots) * 100.0).round() as u8
        };

        let average_fairness = if members.is_empty() {
            100
        } else {
            let sum: f64 = members.iter().map(|m| f64::from(m.fairness)).sum();
            (sum / members.len() as f64).round() as u8
        };

        let threshold = scorer.config().low_fairness_threshold;
        let low_fairness_members = members
            .iter()
            .filter(|m| m.fairness < threshold)
            .map(|m| m.member_id.clone())
            .collect();

        Self {
            members,
            total_slots,
            scheduled,
            coverage_percent,
            average_fairness,
            rating: FairnessRating::from_average(average_fairness),
            low_fairness_members,
        }
    }

    /// Summary row for one member.
    pub fn member(&self, member_id: &str) -> Option<&MemberSummary> {
        self.members.iter().find(|m| m.member_id == member_id)
    }
}
