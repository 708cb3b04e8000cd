//! Input validation for allocation requests.
//!
//! Checks the roster and uncovered list before allocating. Detects:
//! - Duplicate member IDs
//! - Members without a name
//! - Uncovered entries dated outside the period
//! - More uncovered entries for one slot than the slot can hold
//!
//! Validation is advisory: the allocator accepts anything and degrades to
//! an empty or partial result.

use crate::config::AllocationConfig;
use crate::models::{SchedulePeriod, SlotKey, TeamMember, UncoveredShift};
use std::collections::{BTreeMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two members share the same ID.
    DuplicateId,
    /// A member has an empty name.
    EmptyName,
    /// An uncovered entry is dated outside the period.
    OutOfPeriod,
    /// More uncovered entries for a slot than its configured capacity.
    OverReportedSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster and uncovered list for `period`.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_roster(
    roster: &[TeamMember],
    uncovered: &[UncoveredShift],
    period: &SchedulePeriod,
    config: &AllocationConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut member_ids = HashSet::new();
    for m in roster {
        if !member_ids.insert(m.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate member ID: {}", m.id),
            ));
        }
        if m.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Member '{}' has no name", m.id),
            ));
        }
    }

    let mut per_slot: BTreeMap<SlotKey, u32> = BTreeMap::new();
    for u in uncovered {
        match period.day_of(u.date) {
            Some(day) => *per_slot.entry(SlotKey::new(day, u.shift_type)).or_insert(0) += 1,
            None => errors.push(ValidationError::new(
                ValidationErrorKind::OutOfPeriod,
                format!(
                    "Uncovered {} shift on {} is outside {}-{:02}",
                    u.shift_type,
                    u.date,
                    period.year(),
                    period.month()
                ),
            )),
        }
    }

    for (slot, count) in per_slot {
        if count > config.slot_capacity {
            errors.push(ValidationError::new(
                ValidationErrorKind::OverReportedSlot,
                format!(
                    "Slot {slot} has {count} uncovered entries but capacity {}",
                    config.slot_capacity
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
