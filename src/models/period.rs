//! Schedule period (target month) model.
//!
//! Maps days of the target month onto the real calendar: weekday,
//! weekend membership and week bucket.
//!
//! # Week buckets
//! Bucket 1 runs from day 1 to the first end of week; every later bucket
//! spans seven days starting on `week_start`. With Sunday-started weeks,
//! January 2026 (which starts on a Thursday) maps days 1-3 → 1,
//! 4-10 → 2, 11-17 → 3, 18-24 → 4, 25-31 → 5.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::PeriodError;

/// A calendar month to be scheduled, with its weekend and week rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulePeriod {
    year: i32,
    /// Month, 1-based.
    month: u32,
    first: NaiveDate,
    days_in_month: u32,
    /// Weekdays counted as weekend (default: Friday, Saturday).
    weekend_days: Vec<Weekday>,
    /// First day of a week bucket (default: Sunday).
    week_start: Weekday,
}

impl SchedulePeriod {
    /// Creates a period for `month` (1-based) of `year`.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeriodError::InvalidYear(year))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or(PeriodError::InvalidYear(year))?;
        let days_in_month = next_first.signed_duration_since(first).num_days() as u32;

        Ok(Self {
            year,
            month,
            first,
            days_in_month,
            weekend_days: vec![Weekday::Fri, Weekday::Sat],
            week_start: Weekday::Sun,
        })
    }

    /// Sets the weekdays treated as weekend.
    pub fn with_weekend_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.weekend_days = days.into_iter().collect();
        self
    }

    /// Sets the weekday on which week buckets start.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Days of the month, 1-based.
    pub fn days(&self) -> impl Iterator<Item = u32> {
        1..=self.days_in_month
    }

    pub fn weekend_days(&self) -> &[Weekday] {
        &self.weekend_days
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Whether `day` belongs to this month.
    #[inline]
    pub fn contains_day(&self, day: u32) -> bool {
        day >= 1 && day <= self.days_in_month
    }

    /// Calendar date of `day`, if it belongs to this month.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        if !self.contains_day(day) {
            return None;
        }
        self.first.checked_add_days(Days::new(u64::from(day - 1)))
    }

    /// Day of month for `date`, if the date falls in this period.
    pub fn day_of(&self, date: NaiveDate) -> Option<u32> {
        (date.year() == self.year && date.month() == self.month).then(|| date.day())
    }

    /// Weekday of `day`.
    pub fn weekday(&self, day: u32) -> Option<Weekday> {
        self.date(day).map(|d| d.weekday())
    }

    /// Whether `day` falls on a weekend weekday. Out-of-range days are not.
    pub fn is_weekend(&self, day: u32) -> bool {
        self.weekday(day)
            .is_some_and(|wd| self.weekend_days.contains(&wd))
    }

    /// Weekend days of the month, ascending.
    pub fn weekends(&self) -> Vec<u32> {
        self.days().filter(|&d| self.is_weekend(d)).collect()
    }

    /// Week bucket of `day` (1-based). Out-of-range days map to 0.
    pub fn week_of(&self, day: u32) -> u32 {
        if !self.contains_day(day) {
            return 0;
        }
        let first = self.first.weekday().num_days_from_monday();
        let start = self.week_start.num_days_from_monday();
        let offset = (first + 7 - start) % 7;
        (day - 1 + offset) / 7 + 1
    }
}
