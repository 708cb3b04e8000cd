//! Team member model.
//!
//! A member is a ward staffer with period targets: how many shifts in
//! total, how many nights and how many weekend shifts they should work
//! this month. The allocator treats these targets as budgets.

use serde::{Deserialize, Serialize};

/// A ward staffer who can be placed into shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Unique member identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Job title (e.g., "Head Nurse").
    #[serde(default)]
    pub role: String,
    /// Period targets.
    #[serde(default)]
    pub stats: MemberStats,
}

/// Period targets for one member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStats {
    /// Total shift quota.
    pub shifts: u32,
    /// Night shift quota.
    pub nights: u32,
    /// Weekend shift quota.
    pub weekends: u32,
    /// Recent coverage percentage (0-100). Only used to rank candidates
    /// for manual assignment.
    #[serde(default)]
    pub coverage: u8,
}

impl TeamMember {
    /// Creates a member with zero quotas.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: String::new(),
            stats: MemberStats::default(),
        }
    }

    /// Sets the job title.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the total, night and weekend quotas.
    pub fn with_quotas(mut self, shifts: u32, nights: u32, weekends: u32) -> Self {
        self.stats.shifts = shifts;
        self.stats.nights = nights;
        self.stats.weekends = weekends;
        self
    }

    /// Sets the coverage percentage (clamped to 100).
    pub fn with_coverage(mut self, coverage: u8) -> Self {
        self.stats.coverage = coverage.min(100);
        self
    }

    /// Whether this member can receive any assignment at all.
    pub fn has_quota(&self) -> bool {
        self.stats.shifts > 0
    }
}

impl MemberStats {
    pub fn new(shifts: u32, nights: u32, weekends: u32) -> Self {
        Self {
            shifts,
            nights,
            weekends,
            coverage: 0,
        }
    }
}
