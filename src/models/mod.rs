//! Shift allocation domain models.
//!
//! Provides the data types exchanged with callers: the roster going in,
//! the assignments and unfilled slots coming out, and the calendar month
//! tying them together.
//!
//! # Mapping onto the ward
//!
//! | Type | Ward concept |
//! |------|--------------|
//! | `TeamMember` | Nurse / doctor on the roster |
//! | `MemberStats` | Monthly targets (total, nights, weekends) |
//! | `SlotKey` | One shift on one day |
//! | `UncoveredShift` | Slot already flagged as short-staffed |
//! | `Assignment` | A member placed into a slot |
//! | `Allocation` | The month's roster plus its gaps |

mod allocation;
mod member;
mod period;
mod shift;

pub use allocation::{Allocation, UnfilledSlot};
pub use member::{MemberStats, TeamMember};
pub use period::SchedulePeriod;
pub use shift::{Assignment, ShiftType, SlotKey, UncoveredShift};
