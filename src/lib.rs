//! Ward shift allocation.
//!
//! Builds a month of ward shifts from a staff roster: who works which
//! morning, evening and night, within each member's quotas and the ward's
//! rest rules. Then scores how fairly the load was spread.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TeamMember`, `ShiftType`, `SlotKey`,
//!   `UncoveredShift`, `Assignment`, `Allocation`, `SchedulePeriod`
//! - **`allocation`**: Multi-pass greedy allocator and its selection rules
//! - **`fairness`**: Per-member fairness score and team coverage summary
//! - **`recommend`**: Ranked candidates for filling one slot by hand
//! - **`validation`**: Input integrity checks (duplicate IDs, stray dates)
//! - **`config`**: Staffing and scoring constants
//!
//! # Quick start
//!
//! ```
//! use shift_alloc::{allocate, fairness_score, LoadFigures, TeamMember};
//!
//! let roster = vec![
//!     TeamMember::new("1", "Michal").with_quotas(22, 7, 7),
//!     TeamMember::new("2", "Dani").with_quotas(23, 8, 7),
//!     TeamMember::new("3", "Sara").with_quotas(23, 8, 7),
//! ];
//!
//! let allocation = allocate(&roster, &[], 1, 2026);
//! for member in &roster {
//!     let shifts = allocation.member_shifts(&member.id);
//!     let score = fairness_score(&LoadFigures::from(&member.stats), &shifts);
//!     assert!(score <= 100);
//! }
//! ```
//!
//! # Side effects
//!
//! None. Every call works on its own copy of the roster state. The crate
//! emits `tracing` events but never installs a subscriber.

pub mod allocation;
pub mod config;
pub mod error;
pub mod fairness;
pub mod models;
pub mod recommend;
pub mod validation;

pub use allocation::{allocate, ShiftAllocator};
pub use config::{AllocationConfig, FairnessConfig};
pub use error::{ConfigError, ParseShiftTypeError, PeriodError};
pub use fairness::{fairness_score, FairnessScorer, LoadFigures, TeamSummary};
pub use models::{
    Allocation, Assignment, MemberStats, SchedulePeriod, ShiftType, SlotKey, TeamMember,
    UncoveredShift, UnfilledSlot,
};
