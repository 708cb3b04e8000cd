//! Allocation invariants over seeded random rosters.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shift_alloc::fairness::FairnessScorer;
use shift_alloc::validation::validate_roster;
use shift_alloc::{
    allocate, fairness_score, AllocationConfig, LoadFigures, SchedulePeriod, ShiftAllocator,
    ShiftType, SlotKey, TeamMember, TeamSummary, UncoveredShift,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_roster(rng: &mut StdRng) -> Vec<TeamMember> {
    let size = rng.random_range(0..=12);
    (0..size)
        .map(|i| {
            let shifts = rng.random_range(0..=31);
            let nights = rng.random_range(0..=shifts);
            let weekends = rng.random_range(0..=10);
            TeamMember::new(format!("m{i}"), format!("Member {i}"))
                .with_quotas(shifts, nights, weekends)
                .with_coverage(rng.random_range(0..=100))
        })
        .collect()
}

fn random_uncovered(rng: &mut StdRng, period: &SchedulePeriod) -> Vec<UncoveredShift> {
    let count = rng.random_range(0..=6);
    (0..count)
        .map(|_| {
            let day = rng.random_range(1..=period.days_in_month());
            let shift_type = ShiftType::ALL[rng.random_range(0..3)];
            UncoveredShift::new(period.date(day).unwrap(), shift_type)
        })
        .collect()
}

fn uncovered_count(uncovered: &[UncoveredShift], period: &SchedulePeriod, slot: SlotKey) -> u32 {
    uncovered
        .iter()
        .filter(|u| period.day_of(u.date) == Some(slot.day) && u.shift_type == slot.shift_type)
        .count() as u32
}

#[test]
fn random_rosters_respect_every_rule() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for round in 0..60 {
        let year = 2025 + (round % 3) as i32;
        let month = 1 + (round % 12) as u32;
        let period = SchedulePeriod::new(year, month).unwrap();
        let roster = random_roster(&mut rng);
        let uncovered = random_uncovered(&mut rng, &period);

        let allocation = ShiftAllocator::new().allocate(&roster, &uncovered, &period);

        let mut per_slot: HashMap<SlotKey, u32> = HashMap::new();
        let mut worked: HashSet<(String, u32)> = HashSet::new();
        let mut per_week: HashMap<(String, u32), u32> = HashMap::new();
        let mut nights: HashSet<(String, u32)> = HashSet::new();
        let mut per_member: HashMap<String, u32> = HashMap::new();
        let mut nights_held: HashMap<String, u32> = HashMap::new();
        let mut weekends_held: HashMap<String, u32> = HashMap::new();

        for a in &allocation.assignments {
            assert!(period.contains_day(a.day));
            *per_slot.entry(a.slot()).or_insert(0) += 1;
            assert!(
                worked.insert((a.member_id.clone(), a.day)),
                "round {round}: {} works twice on day {}",
                a.member_id,
                a.day
            );
            *per_week.entry((a.member_id.clone(), period.week_of(a.day))).or_insert(0) += 1;
            *per_member.entry(a.member_id.clone()).or_insert(0) += 1;
            if a.shift_type == ShiftType::Night {
                nights.insert((a.member_id.clone(), a.day));
                *nights_held.entry(a.member_id.clone()).or_insert(0) += 1;
            }
            if period.is_weekend(a.day) {
                *weekends_held.entry(a.member_id.clone()).or_insert(0) += 1;
            }
        }

        for (slot, count) in &per_slot {
            let cap = 2u32.saturating_sub(uncovered_count(&uncovered, &period, *slot));
            assert!(*count <= cap, "round {round}: slot {slot} holds {count} > {cap}");
        }
        assert!(per_week.values().all(|&n| n <= 6), "round {round}: weekly cap broken");
        for (member, day) in &nights {
            assert!(
                !nights.contains(&(member.clone(), day + 1)),
                "round {round}: {member} has nights on {day} and {}",
                day + 1
            );
        }
        for m in &roster {
            let held = per_member.get(&m.id).copied().unwrap_or(0);
            assert!(held <= m.stats.shifts, "round {round}: {} over quota", m.id);
            let held_nights = nights_held.get(&m.id).copied().unwrap_or(0);
            assert!(held_nights <= m.stats.nights, "round {round}: {} over night quota", m.id);
            let held_weekends = weekends_held.get(&m.id).copied().unwrap_or(0);
            assert!(
                held_weekends <= m.stats.weekends,
                "round {round}: {} over weekend quota",
                m.id
            );
        }

        let expected_capacity: u32 = period
            .days()
            .flat_map(|d| ShiftType::ALL.into_iter().map(move |t| SlotKey::new(d, t)))
            .map(|slot| 2u32.saturating_sub(uncovered_count(&uncovered, &period, slot)))
            .sum();
        assert_eq!(allocation.capacity_total(), expected_capacity, "round {round}");

        for m in &roster {
            let shifts = allocation.member_shifts(&m.id);
            let score = fairness_score(&LoadFigures::from_assignments(&shifts, &period), &shifts);
            assert!(score <= 100);
        }
    }
}

#[test]
fn allocation_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);
    let period = SchedulePeriod::new(2026, 3).unwrap();
    let roster = random_roster(&mut rng);
    let uncovered = random_uncovered(&mut rng, &period);

    let first = allocate(&roster, &uncovered, 3, 2026);
    let second = allocate(&roster, &uncovered, 3, 2026);
    assert_eq!(first, second);
}

#[test]
fn january_ward_end_to_end() {
    init_tracing();
    let jan = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
    let roster = vec![
        TeamMember::new("1", "Michal Avraham").with_role("Head Nurse").with_quotas(22, 7, 7),
        TeamMember::new("2", "Dani Cohen").with_role("Registered Nurse").with_quotas(23, 8, 7),
        TeamMember::new("3", "Sara Levi").with_role("Nurse").with_quotas(23, 8, 7),
        TeamMember::new("4", "Yossi Avraham").with_role("Nurse").with_quotas(23, 8, 8),
        TeamMember::new("5", "Rachel David").with_role("Nurse").with_quotas(23, 9, 8),
        TeamMember::new("6", "Alon Mizrahi").with_role("Nurse").with_quotas(23, 8, 8),
        TeamMember::new("7", "Adi Levi").with_role("Nurse").with_quotas(23, 7, 8),
        TeamMember::new("8", "Omer Golan").with_role("Nurse").with_quotas(23, 8, 8),
    ];
    let uncovered = vec![
        UncoveredShift::new(jan(15), ShiftType::Evening).with_id("u1"),
        UncoveredShift::new(jan(20), ShiftType::Night).with_id("u2"),
        UncoveredShift::new(jan(25), ShiftType::Morning).with_id("u3"),
    ];
    let period = SchedulePeriod::new(2026, 1).unwrap();
    assert!(validate_roster(&roster, &uncovered, &period, &AllocationConfig::default()).is_ok());

    let allocation = allocate(&roster, &uncovered, 1, 2026);
    assert_eq!(allocation.capacity_total(), 31 * 3 * 2 - 3);
    for (day, t) in [(15, ShiftType::Evening), (20, ShiftType::Night), (25, ShiftType::Morning)] {
        assert!(allocation.slot_members(SlotKey::new(day, t)).len() <= 1);
    }

    let summary = TeamSummary::calculate(&roster, &allocation, &period, &FairnessScorer::new());
    assert_eq!(summary.members.len(), 8);
    assert_eq!(summary.scheduled as usize, allocation.assignment_count());
    assert!(summary.coverage_percent <= 100);
    assert!(summary.average_fairness <= 100);
}
