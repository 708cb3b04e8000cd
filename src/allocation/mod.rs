//! Shift allocation engine.
//!
//! Fills every slot of a month greedily, one pass per concern (weekends,
//! weekday nights, weekday day shifts, backfill), each pass ordering
//! candidates by the quota it cares about.
//!
//! # Usage
//!
//! ```
//! use shift_alloc::allocation::allocate;
//! use shift_alloc::models::TeamMember;
//!
//! let roster = vec![TeamMember::new("1", "Michal").with_quotas(22, 7, 7)];
//! let allocation = allocate(&roster, &[], 1, 2026);
//! assert!(allocation.assignment_count() <= 22);
//! ```
//!
//! # Eligibility
//!
//! In every pass a member is skipped when they already work that day,
//! already hold the weekly maximum in the day's week bucket, would work
//! nights on two adjacent days, or have no remaining quota for the pass.

mod engine;
pub mod rules;
mod state;

pub use engine::{Pass, ShiftAllocator};
pub use rules::SelectionRule;
pub use state::{MemberQuota, WorkingRoster};

use tracing::warn;

use crate::models::{Allocation, SchedulePeriod, TeamMember, UncoveredShift};

/// Allocates `month` (1-based) of `year` with the default staffing rules.
///
/// An unusable month or year yields an empty allocation.
pub fn allocate(
    roster: &[TeamMember],
    uncovered: &[UncoveredShift],
    month: u32,
    year: i32,
) -> Allocation {
    match SchedulePeriod::new(year, month) {
        Ok(period) => ShiftAllocator::new().allocate(roster, uncovered, &period),
        Err(err) => {
            warn!(%err, "nothing to allocate");
            Allocation::new()
        }
    }
}
