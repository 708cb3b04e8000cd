//! Allocation (solution) model.
//!
//! The result of one allocation run: every assignment made, plus every
//! slot left below its effective capacity.

use serde::{Deserialize, Serialize};

use super::{Assignment, ShiftType, SlotKey};

/// Output of an allocation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Assignments ordered by day, shift type, then placement order.
    pub assignments: Vec<Assignment>,
    /// Slots that ended below capacity, ordered by day then shift type.
    pub unfilled: Vec<UnfilledSlot>,
}

/// A slot left short after all passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnfilledSlot {
    pub day: u32,
    pub shift_type: ShiftType,
    /// Effective capacity (after uncovered reductions).
    pub capacity: u32,
    /// Members actually placed.
    pub filled: u32,
}

impl UnfilledSlot {
    /// Seats still open.
    #[inline]
    pub fn missing(&self) -> u32 {
        self.capacity.saturating_sub(self.filled)
    }

    #[inline]
    pub fn slot(&self) -> SlotKey {
        SlotKey::new(self.day, self.shift_type)
    }
}

impl Allocation {
    /// Creates an empty allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether every slot reached its effective capacity.
    pub fn is_fully_covered(&self) -> bool {
        self.unfilled.is_empty()
    }

    /// Total open seats across all unfilled slots.
    pub fn missing_total(&self) -> u32 {
        self.unfilled.iter().map(UnfilledSlot::missing).sum()
    }

    /// Sum of effective capacities over the month.
    pub fn capacity_total(&self) -> u32 {
        self.assignments.len() as u32 + self.missing_total()
    }

    /// All assignments on `day`.
    pub fn assignments_for_day(&self, day: u32) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.day == day).collect()
    }

    /// All assignments held by `member_id`, in day order.
    pub fn assignments_for_member(&self, member_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.member_id == member_id)
            .collect()
    }

    /// Owned copies of the assignments held by `member_id`.
    pub fn member_shifts(&self, member_id: &str) -> Vec<Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.member_id == member_id)
            .cloned()
            .collect()
    }

    /// Member names placed into `slot`, in placement order.
    pub fn slot_members(&self, slot: SlotKey) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.slot() == slot)
            .map(|a| a.member_name.as_str())
            .collect()
    }

    /// The unfilled record for `slot`, if it ended short.
    pub fn unfilled_slot(&self, slot: SlotKey) -> Option<&UnfilledSlot> {
        self.unfilled.iter().find(|u| u.slot() == slot)
    }
}
