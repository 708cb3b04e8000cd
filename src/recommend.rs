//! Candidate recommendation for manually filling one slot.
//!
//! Filters out members who already work that day or who would get no rest
//! between two consecutive shifts, then ranks the rest: lowest coverage
//! first, highest fairness next, roster order last.
//!
//! # Rest conflicts
//!
//! | Target | Conflicts with |
//! |--------|----------------|
//! | Morning on D | night on D-1, evening on D |
//! | Evening on D | morning on D, night on D |
//! | Night on D | evening on D, morning on D+1 |

use serde::{Deserialize, Serialize};

use crate::fairness::{FairnessScorer, LoadFigures};
use crate::models::{Assignment, SchedulePeriod, ShiftType, SlotKey, TeamMember};

/// A ranked candidate for a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub member_id: String,
    pub name: String,
    pub coverage: u8,
    /// Current fairness over the member's existing assignments.
    pub fairness: u8,
}

/// Whether holding `held` blocks taking `target` for rest reasons.
fn rest_conflict(target: SlotKey, held: SlotKey) -> bool {
    let (d, h) = (target.day, held.day);
    match target.shift_type {
        ShiftType::Morning => {
            (h + 1 == d && held.shift_type == ShiftType::Night)
                || (h == d && held.shift_type == ShiftType::Evening)
        }
        ShiftType::Evening => {
            h == d && matches!(held.shift_type, ShiftType::Morning | ShiftType::Night)
        }
        ShiftType::Night => {
            (h == d && held.shift_type == ShiftType::Evening)
                || (h == d + 1 && held.shift_type == ShiftType::Morning)
        }
    }
}

/// Ranks roster members who may take `slot` given `scheduled`.
///
/// # Example
///
/// ```
/// use shift_alloc::models::{Assignment, SchedulePeriod, ShiftType, SlotKey, TeamMember};
/// use shift_alloc::fairness::FairnessScorer;
/// use shift_alloc::recommend::recommend_candidates;
///
/// let roster = vec![
///     TeamMember::new("1", "Michal").with_coverage(85),
///     TeamMember::new("2", "Dani").with_coverage(88),
/// ];
/// let scheduled = vec![Assignment::new(15, "2", "Dani", ShiftType::Morning, false)];
/// let period = SchedulePeriod::new(2026, 1).unwrap();
///
/// let ranked = recommend_candidates(
///     SlotKey::new(15, ShiftType::Evening),
///     &roster,
///     &scheduled,
///     &period,
///     &FairnessScorer::new(),
/// );
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].member_id, "1");
/// ```
pub fn recommend_candidates(
    slot: SlotKey,
    roster: &[TeamMember],
    scheduled: &[Assignment],
    period: &SchedulePeriod,
    scorer: &FairnessScorer,
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = roster
        .iter()
        .filter_map(|m| {
            let held: Vec<Assignment> = scheduled
                .iter()
                .filter(|a| a.member_id == m.id)
                .cloned()
                .collect();

            let blocked = held
                .iter()
                .any(|a| a.day == slot.day || rest_conflict(slot, a.slot()));
            if blocked {
                return None;
            }

            let load = LoadFigures::from_assignments(&held, period);
            Some(Candidate {
                member_id: m.id.clone(),
                name: m.name.clone(),
                coverage: m.stats.coverage,
                fairness: scorer.score(&load, &held),
            })
        })
        .collect();

    // Stable: equal coverage and fairness keep roster order.
    candidates.sort_by(|a, b| {
        a.coverage
            .cmp(&b.coverage)
            .then_with(|| b.fairness.cmp(&a.fairness))
    });
    candidates
}
