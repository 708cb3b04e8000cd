//! Candidate selection rules.
//!
//! Each allocation pass walks the roster in the order given by one rule.
//! Rules score a member's working quotas; **higher key = picked first**.
//! Ranking is a stable sort, so members with equal keys keep roster order.

use std::fmt::Debug;

use super::MemberQuota;

/// Ordering key extracted from a member's remaining quotas.
pub type RuleKey = u32;

/// A rule ordering candidates for one pass.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "MWL").
    fn name(&self) -> &'static str;

    /// Ordering key; larger keys are tried first.
    fn key(&self, quota: &MemberQuota) -> RuleKey;

    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Most Weekends Left.
///
/// Spreads weekend load by favouring members furthest from their
/// weekend target.
#[derive(Debug, Clone, Copy)]
pub struct MostWeekendsLeft;

impl SelectionRule for MostWeekendsLeft {
    fn name(&self) -> &'static str {
        "MWL"
    }

    fn key(&self, quota: &MemberQuota) -> RuleKey {
        quota.weekends_left
    }

    fn description(&self) -> &'static str {
        "Most Weekends Left"
    }
}

/// Most Nights Left.
#[derive(Debug, Clone, Copy)]
pub struct MostNightsLeft;

impl SelectionRule for MostNightsLeft {
    fn name(&self) -> &'static str {
        "MNL"
    }

    fn key(&self, quota: &MemberQuota) -> RuleKey {
        quota.nights_left
    }

    fn description(&self) -> &'static str {
        "Most Nights Left"
    }
}

/// Most Total shifts Left.
///
/// Used for day shifts and backfill.
#[derive(Debug, Clone, Copy)]
pub struct MostTotalLeft;

impl SelectionRule for MostTotalLeft {
    fn name(&self) -> &'static str {
        "MTL"
    }

    fn key(&self, quota: &MemberQuota) -> RuleKey {
        quota.total_left
    }

    fn description(&self) -> &'static str {
        "Most Total Left"
    }
}

/// Returns member indices ordered by descending rule key.
///
/// Stable: ties preserve the input (roster) order.
pub fn rank(rule: &dyn SelectionRule, quotas: &[MemberQuota]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..quotas.len()).collect();
    indices.sort_by(|&a, &b| rule.key(&quotas[b]).cmp(&rule.key(&quotas[a])));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quota(total: u32, nights: u32, weekends: u32) -> MemberQuota {
        MemberQuota {
            total_left: total,
            nights_left: nights,
            weekends_left: weekends,
        }
    }

    #[test]
    fn test_rank_descending() {
        let quotas = vec![quota(5, 1, 0), quota(9, 3, 2), quota(7, 2, 1)];
        assert_eq!(rank(&MostTotalLeft, &quotas), vec![1, 2, 0]);
        assert_eq!(rank(&MostNightsLeft, &quotas), vec![1, 2, 0]);
        assert_eq!(rank(&MostWeekendsLeft, &quotas), vec![1, 2, 0]);
    }

    #[test]
    fn test_rank_ties_keep_roster_order() {
        let quotas = vec![quota(4, 2, 1), quota(6, 2, 1), quota(4, 2, 1), quota(6, 0, 1)];
        assert_eq!(rank(&MostTotalLeft, &quotas), vec![1, 3, 0, 2]);
        assert_eq!(rank(&MostNightsLeft, &quotas), vec![0, 1, 2, 3]);
        assert_eq!(rank(&MostWeekendsLeft, &quotas), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&MostTotalLeft, &[]).is_empty());
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(MostWeekendsLeft.name(), "MWL");
        assert_eq!(MostNightsLeft.description(), "Most Nights Left");
        assert_eq!(MostTotalLeft.description(), "Most Total Left");
    }
}
