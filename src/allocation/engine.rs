//! Multi-pass greedy shift allocator.
//!
//! # Algorithm
//!
//! 1. Weekend pass: every weekend day × every shift, by most weekends left.
//! 2. Night pass: weekday nights, by most nights left.
//! 3. Day-shift pass: weekday mornings and evenings, by most total left.
//! 4. Backfill: any slot still short, by most total left.
//!
//! Later passes only fill seats earlier passes left open. Within a slot,
//! candidates are ranked once and taken in order until the slot reaches
//! its effective capacity. Slots that stay short are reported, not raised.
//!
//! # Complexity
//! O(p * d * s * m log m) where p=passes, d=days, s=shifts/day, m=members.

use std::collections::BTreeMap;

use tracing::{debug, info, trace};

use super::rules::{self, MostNightsLeft, MostTotalLeft, MostWeekendsLeft, SelectionRule};
use super::{MemberQuota, WorkingRoster};
use crate::config::AllocationConfig;
use crate::error::ConfigError;
use crate::models::{
    Allocation, Assignment, SchedulePeriod, ShiftType, SlotKey, TeamMember, UncoveredShift,
    UnfilledSlot,
};

/// Allocation pass, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Weekend,
    Night,
    DayShift,
    Backfill,
}

impl Pass {
    /// All passes in execution order.
    pub const ORDER: [Pass; 4] = [Pass::Weekend, Pass::Night, Pass::DayShift, Pass::Backfill];

    pub fn name(&self) -> &'static str {
        match self {
            Pass::Weekend => "weekend",
            Pass::Night => "night",
            Pass::DayShift => "day-shift",
            Pass::Backfill => "backfill",
        }
    }

    /// Candidate ordering for this pass.
    pub fn rule(&self) -> &'static dyn SelectionRule {
        match self {
            Pass::Weekend => &MostWeekendsLeft,
            Pass::Night => &MostNightsLeft,
            Pass::DayShift | Pass::Backfill => &MostTotalLeft,
        }
    }

    /// Slots this pass visits, in visiting order.
    fn slots(&self, period: &SchedulePeriod) -> Vec<SlotKey> {
        let types: &[ShiftType] = match self {
            Pass::Weekend | Pass::Backfill => &ShiftType::ALL,
            Pass::Night => &[ShiftType::Night],
            Pass::DayShift => &[ShiftType::Morning, ShiftType::Evening],
        };
        period
            .days()
            .filter(|&day| match self {
                Pass::Weekend => period.is_weekend(day),
                Pass::Night | Pass::DayShift => !period.is_weekend(day),
                Pass::Backfill => true,
            })
            .flat_map(|day| types.iter().map(move |&t| SlotKey::new(day, t)))
            .collect()
    }

    /// Whether the member's remaining quotas allow this pass to pick them
    /// for `shift_type` on a weekend (`weekend`) or weekday.
    ///
    /// The same quota rule holds in every pass: total quota left, plus
    /// night quota for nights and weekend quota for weekend days.
    fn quota_allows(&self, quota: &MemberQuota, shift_type: ShiftType, weekend: bool) -> bool {
        quota.allows(shift_type, weekend)
    }
}

/// Effective capacity and placements of one slot.
#[derive(Debug, Clone, Default)]
struct SlotState {
    capacity: u32,
    members: Vec<usize>,
}

impl SlotState {
    #[inline]
    fn is_full(&self) -> bool {
        self.members.len() as u32 >= self.capacity
    }
}

/// Multi-pass greedy shift allocator.
///
/// Pure: every call builds its own working state from the roster, so
/// identical inputs always produce identical allocations.
///
/// # Example
///
/// ```
/// use shift_alloc::allocation::ShiftAllocator;
/// use shift_alloc::models::{SchedulePeriod, TeamMember};
///
/// let roster = vec![
///     TeamMember::new("1", "Michal").with_quotas(22, 7, 7),
///     TeamMember::new("2", "Dani").with_quotas(23, 8, 7),
/// ];
/// let period = SchedulePeriod::new(2026, 1).unwrap();
///
/// let allocation = ShiftAllocator::new().allocate(&roster, &[], &period);
/// assert!(allocation.assignment_count() > 0);
/// assert!(!allocation.is_fully_covered()); // two people cannot staff a month
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftAllocator {
    config: AllocationConfig,
}

impl ShiftAllocator {
    /// Creates an allocator with the default staffing rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the staffing rules as given. Use [`try_with_config`] for
    /// configs that were not loaded through `from_json_str`.
    ///
    /// [`try_with_config`]: ShiftAllocator::try_with_config
    pub fn with_config(mut self, config: AllocationConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the staffing rules after validating them.
    pub fn try_with_config(self, config: AllocationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(self.with_config(config))
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Allocates the whole period.
    ///
    /// `uncovered` entries outside the period are ignored.
    pub fn allocate(
        &self,
        roster: &[TeamMember],
        uncovered: &[UncoveredShift],
        period: &SchedulePeriod,
    ) -> Allocation {
        let mut board = self.build_board(uncovered, period);
        let mut working = WorkingRoster::new(roster);

        for pass in Pass::ORDER {
            let placed = self.run_pass(pass, &mut board, &mut working, period);
            debug!(pass = pass.name(), rule = pass.rule().name(), placed, "allocation pass complete");
        }

        let allocation = collect(&board, &working, period);
        info!(
            year = period.year(),
            month = period.month(),
            members = roster.len(),
            assigned = allocation.assignment_count(),
            capacity = allocation.capacity_total(),
            unfilled_slots = allocation.unfilled.len(),
            "shift allocation finished"
        );
        allocation
    }

    /// Effective capacity per slot: configured headcount minus matching
    /// uncovered entries, floored at zero.
    pub fn slot_capacities(
        &self,
        uncovered: &[UncoveredShift],
        period: &SchedulePeriod,
    ) -> BTreeMap<SlotKey, u32> {
        let mut reductions: BTreeMap<SlotKey, u32> = BTreeMap::new();
        for u in uncovered {
            if let Some(day) = period.day_of(u.date) {
                *reductions.entry(SlotKey::new(day, u.shift_type)).or_insert(0) += 1;
            }
        }

        period
            .days()
            .flat_map(|day| ShiftType::ALL.into_iter().map(move |t| SlotKey::new(day, t)))
            .map(|slot| {
                let reduction = reductions.get(&slot).copied().unwrap_or(0);
                (slot, self.config.slot_capacity.saturating_sub(reduction))
            })
            .collect()
    }

    fn build_board(
        &self,
        uncovered: &[UncoveredShift],
        period: &SchedulePeriod,
    ) -> BTreeMap<SlotKey, SlotState> {
        self.slot_capacities(uncovered, period)
            .into_iter()
            .map(|(slot, capacity)| {
                (
                    slot,
                    SlotState {
                        capacity,
                        members: Vec::new(),
                    },
                )
            })
            .collect()
    }

    /// Runs one pass; returns the number of placements made.
    fn run_pass(
        &self,
        pass: Pass,
        board: &mut BTreeMap<SlotKey, SlotState>,
        working: &mut WorkingRoster<'_>,
        period: &SchedulePeriod,
    ) -> usize {
        let mut placed = 0;

        for slot in pass.slots(period) {
            let Some(state) = board.get_mut(&slot) else {
                continue;
            };
            if state.is_full() {
                continue;
            }

            let weekend = period.is_weekend(slot.day);
            let candidates = rules::rank(pass.rule(), working.quotas());

            for idx in candidates {
                if state.is_full() {
                    break;
                }
                if !pass.quota_allows(working.quota(idx), slot.shift_type, weekend) {
                    continue;
                }
                if !working.can_work(
                    idx,
                    slot.day,
                    slot.shift_type,
                    period,
                    self.config.max_shifts_per_week,
                ) {
                    continue;
                }

                working.record(idx, slot.day, slot.shift_type, weekend);
                state.members.push(idx);
                placed += 1;
                trace!(pass = pass.name(), %slot, member = %working.member(idx).id, "placed");
            }
        }

        placed
    }
}

/// Flattens the slot board into assignments and unfilled slots.
fn collect(
    board: &BTreeMap<SlotKey, SlotState>,
    working: &WorkingRoster<'_>,
    period: &SchedulePeriod,
) -> Allocation {
    let mut allocation = Allocation::new();

    for (slot, state) in board {
        let weekend = period.is_weekend(slot.day);
        for &idx in &state.members {
            let member = working.member(idx);
            allocation.assignments.push(Assignment::new(
                slot.day,
                &member.id,
                &member.name,
                slot.shift_type,
                weekend,
            ));
        }

        let filled = state.members.len() as u32;
        if filled < state.capacity {
            allocation.unfilled.push(UnfilledSlot {
                day: slot.day,
                shift_type: slot.shift_type,
                capacity: state.capacity,
                filled,
            });
        }
    }

    allocation
}
