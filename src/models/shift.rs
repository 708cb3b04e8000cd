//! Shift types, slots, uncovered entries and assignments.
//!
//! A ward day is split into three fixed shifts. A slot is one
//! (day, shift type) pair of the target month; an assignment places one
//! member into one slot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseShiftTypeError;

/// One of the three daily shifts.
///
/// Ordering follows the clock: morning < evening < night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    /// 07:00 - 15:00.
    Morning,
    /// 15:00 - 23:00.
    Evening,
    /// 23:00 - 07:00 (ends on the following day).
    Night,
}

impl ShiftType {
    /// All shift types in daily order.
    pub const ALL: [ShiftType; 3] = [ShiftType::Morning, ShiftType::Evening, ShiftType::Night];

    /// Lowercase identifier (`morning`, `evening`, `night`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Morning => "morning",
            ShiftType::Evening => "evening",
            ShiftType::Night => "night",
        }
    }

    /// Display time range.
    pub fn time_range(&self) -> &'static str {
        match self {
            ShiftType::Morning => "07:00 - 15:00",
            ShiftType::Evening => "15:00 - 23:00",
            ShiftType::Night => "23:00 - 07:00",
        }
    }

    /// Display title. Weekend mornings carry their own label.
    pub fn title(&self, weekend: bool) -> &'static str {
        match (self, weekend) {
            (ShiftType::Morning, true) => "Weekend Morning",
            (ShiftType::Morning, false) => "Morning Shift",
            (ShiftType::Evening, _) => "Evening Shift",
            (ShiftType::Night, _) => "Night Shift",
        }
    }

    #[inline]
    pub fn is_night(&self) -> bool {
        matches!(self, ShiftType::Night)
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftType {
    type Err = ParseShiftTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(ShiftType::Morning),
            "evening" => Ok(ShiftType::Evening),
            "night" => Ok(ShiftType::Night),
            _ => Err(ParseShiftTypeError(s.to_string())),
        }
    }
}

/// Addressable unit of allocation: a (day, shift type) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    /// Day of month (1-based).
    pub day: u32,
    pub shift_type: ShiftType,
}

impl SlotKey {
    pub fn new(day: u32, shift_type: ShiftType) -> Self {
        Self { day, shift_type }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.shift_type)
    }
}

/// A slot the caller already knows is short-staffed.
///
/// Never assigned to directly: each entry lowers the headcount the
/// allocator aims for in the matching slot by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncoveredShift {
    /// Caller-side identifier, if any.
    #[serde(default)]
    pub id: Option<String>,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
}

impl UncoveredShift {
    pub fn new(date: NaiveDate, shift_type: ShiftType) -> Self {
        Self {
            id: None,
            date,
            shift_type,
        }
    }

    /// Sets the caller-side identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Display time range of the uncovered shift.
    pub fn time_range(&self) -> &'static str {
        self.shift_type.time_range()
    }
}

/// One member placed into one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Day of month (1-based).
    pub day: u32,
    pub member_id: String,
    pub member_name: String,
    pub shift_type: ShiftType,
    /// Display title.
    pub title: String,
    /// Display time range.
    pub time: String,
}

impl Assignment {
    /// Creates an assignment with the standard title and time range.
    pub fn new(
        day: u32,
        member_id: impl Into<String>,
        member_name: impl Into<String>,
        shift_type: ShiftType,
        weekend: bool,
    ) -> Self {
        Self {
            day,
            member_id: member_id.into(),
            member_name: member_name.into(),
            shift_type,
            title: shift_type.title(weekend).to_string(),
            time: shift_type.time_range().to_string(),
        }
    }

    /// The slot this assignment fills.
    #[inline]
    pub fn slot(&self) -> SlotKey {
        SlotKey::new(self.day, self.shift_type)
    }
}
