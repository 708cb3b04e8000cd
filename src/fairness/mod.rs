//! Fairness scoring and team metrics.
//!
//! `FairnessScorer` rates one member's month; `TeamSummary` rolls member
//! scores and slot coverage up to the ward level. Both are evaluated after
//! allocation and never feed back into it.

mod scorer;
mod summary;

pub use scorer::{fairness_score, FairnessBreakdown, FairnessScorer, LoadFigures};
pub use summary::{FairnessRating, MemberSummary, TeamSummary};
