//! Per-call working state for the allocator.
//!
//! Built fresh from the roster at the start of every allocation and
//! dropped at the end; nothing here outlives a call.

use std::collections::BTreeMap;

use crate::models::{SchedulePeriod, ShiftType, TeamMember};

/// Remaining quotas for one member during an allocation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberQuota {
    pub total_left: u32,
    pub nights_left: u32,
    pub weekends_left: u32,
}

impl MemberQuota {
    /// Initial quotas taken from a member's period targets.
    pub fn from_member(member: &TeamMember) -> Self {
        Self {
            total_left: member.stats.shifts,
            nights_left: member.stats.nights,
            weekends_left: member.stats.weekends,
        }
    }

    /// Whether one more shift of the given kind fits the remaining quotas:
    /// total quota, plus night quota for nights and weekend quota for
    /// weekend days.
    pub fn allows(&self, shift_type: ShiftType, weekend: bool) -> bool {
        self.total_left > 0
            && (!shift_type.is_night() || self.nights_left > 0)
            && (!weekend || self.weekends_left > 0)
    }

    /// Consumes one shift of the given kind. Counters never drop below zero.
    pub fn consume(&mut self, shift_type: ShiftType, weekend: bool) {
        self.total_left = self.total_left.saturating_sub(1);
        if shift_type.is_night() {
            self.nights_left = self.nights_left.saturating_sub(1);
        }
        if weekend {
            self.weekends_left = self.weekends_left.saturating_sub(1);
        }
    }
}

/// Mutable roster view: quotas plus what each member already works.
#[derive(Debug, Clone)]
pub struct WorkingRoster<'a> {
    members: &'a [TeamMember],
    quotas: Vec<MemberQuota>,
    /// Per member: day → shift held that day.
    worked: Vec<BTreeMap<u32, ShiftType>>,
}

impl<'a> WorkingRoster<'a> {
    pub fn new(members: &'a [TeamMember]) -> Self {
        Self {
            members,
            quotas: members.iter().map(MemberQuota::from_member).collect(),
            worked: vec![BTreeMap::new(); members.len()],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn member(&self, idx: usize) -> &'a TeamMember {
        &self.members[idx]
    }

    #[inline]
    pub fn quota(&self, idx: usize) -> &MemberQuota {
        &self.quotas[idx]
    }

    pub fn quotas(&self) -> &[MemberQuota] {
        &self.quotas
    }

    /// Shift held by member `idx` on `day`, if any.
    pub fn shift_on(&self, idx: usize, day: u32) -> Option<ShiftType> {
        self.worked[idx].get(&day).copied()
    }

    /// Number of shifts member `idx` holds in the week bucket of `day`.
    pub fn shifts_in_week(&self, idx: usize, day: u32, period: &SchedulePeriod) -> u32 {
        let week = period.week_of(day);
        self.worked[idx]
            .keys()
            .filter(|&&d| period.week_of(d) == week)
            .count() as u32
    }

    /// Calendar eligibility of member `idx` for `shift_type` on `day`.
    ///
    /// Checks one-shift-per-day, the weekly cap and the no-adjacent-nights
    /// rule. Quotas are the pass's concern.
    pub fn can_work(
        &self,
        idx: usize,
        day: u32,
        shift_type: ShiftType,
        period: &SchedulePeriod,
        max_shifts_per_week: u32,
    ) -> bool {
        if self.worked[idx].contains_key(&day) {
            return false;
        }
        if self.shifts_in_week(idx, day, period) >= max_shifts_per_week {
            return false;
        }
        if shift_type.is_night() {
            let night_before = day > 1 && self.shift_on(idx, day - 1) == Some(ShiftType::Night);
            let night_after = self.shift_on(idx, day + 1) == Some(ShiftType::Night);
            if night_before || night_after {
                return false;
            }
        }
        true
    }

    /// Records a placement and consumes the matching quotas.
    pub fn record(&mut self, idx: usize, day: u32, shift_type: ShiftType, weekend: bool) {
        self.worked[idx].insert(day, shift_type);
        self.quotas[idx].consume(shift_type, weekend);
    }
}
