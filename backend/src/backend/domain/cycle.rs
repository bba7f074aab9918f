//! Budget cycle date logic for the expense tracker.
//!
//! This module contains all business logic for resolving the current cycle
//! window of a budget and the calendar ranges used by spending reports.
//! Callers pass in the reference "today" so computations stay deterministic.

use chrono::{Datelike, NaiveDate};
use log::warn;

use crate::backend::domain::models::budget::{Budget, CycleType};

/// Date format used throughout storage and the API: YYYY-MM-DD
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time format used throughout storage and the API: HH:MM:SS
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Inclusive date range of one budget cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Reporting period for category summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    Daily,
    Weekly,
    Monthly,
}

/// Cycle service that handles all recurring-period date calculations
#[derive(Clone)]
pub struct CycleService;

impl CycleService {
    /// Create a new CycleService instance
    pub fn new() -> Self {
        Self
    }

    /// Resolve the budget cycle window containing `today`.
    ///
    /// MONTHLY: the window starts on the most recent occurrence of the cycle
    /// day-of-month (clamped to month length) that is not after `today`, and
    /// ends one day before the next occurrence.
    ///
    /// WEEKLY: the window starts on the most recent occurrence of the cycle
    /// weekday that is not after `today`, and ends six days later.
    ///
    /// If the budget's stored start date does not parse, the window degrades
    /// to the single day `today` instead of failing the computation.
    pub fn current_window(&self, budget: &Budget, today: NaiveDate) -> CycleWindow {
        if NaiveDate::parse_from_str(&budget.start_date, DATE_FORMAT).is_err() {
            warn!(
                "Budget {} has malformed start date '{}', falling back to single-day window",
                budget.id, budget.start_date
            );
            return CycleWindow {
                start: today,
                end: today,
            };
        }

        match budget.cycle_type {
            CycleType::Monthly => self.monthly_window(budget.cycle_value, today),
            CycleType::Weekly => self.weekly_window(budget.cycle_value, today),
        }
    }

    fn monthly_window(&self, cycle_day: u32, today: NaiveDate) -> CycleWindow {
        // Candidate occurrence in the current month, clamped to month length
        let mut start = self.day_of_month(today.year(), today.month(), cycle_day);

        // Not yet reached this month, so the cycle began last month
        if start > today {
            let (prev_month, prev_year) = self.previous_month(today.month(), today.year());
            start = self.day_of_month(prev_year, prev_month, cycle_day);
        }

        // End is one day before the next occurrence
        let (next_month, next_year) = self.next_month(start.month(), start.year());
        let next_occurrence = self.day_of_month(next_year, next_month, cycle_day);
        let end = next_occurrence - chrono::Duration::days(1);

        CycleWindow { start, end }
    }

    fn weekly_window(&self, cycle_weekday: u32, today: NaiveDate) -> CycleWindow {
        let current = today.weekday().num_days_from_sunday();
        let days_back = (current + 7 - (cycle_weekday % 7)) % 7;

        let start = today - chrono::Duration::days(days_back as i64);
        let end = start + chrono::Duration::days(6);

        CycleWindow { start, end }
    }

    /// Calendar range for a reporting timeframe containing `reference`.
    /// DAILY is the single day, WEEKLY the Sunday-through-Saturday week,
    /// MONTHLY the first through last day of the month.
    pub fn timeframe_range(
        &self,
        timeframe: Timeframe,
        reference: NaiveDate,
    ) -> (NaiveDate, NaiveDate) {
        match timeframe {
            Timeframe::Daily => (reference, reference),
            Timeframe::Weekly => {
                let offset = reference.weekday().num_days_from_sunday();
                let start = reference - chrono::Duration::days(offset as i64);
                (start, start + chrono::Duration::days(6))
            }
            Timeframe::Monthly => {
                let start = self.day_of_month(reference.year(), reference.month(), 1);
                let end = self.day_of_month(
                    reference.year(),
                    reference.month(),
                    self.days_in_month(reference.month(), reference.year()),
                );
                (start, end)
            }
        }
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Build a date in the given month, clamping the day to the month length
    fn day_of_month(&self, year: i32, month: u32, day: u32) -> NaiveDate {
        let clamped = day.clamp(1, self.days_in_month(month, year));
        // This never fails: the day is clamped into the month
        NaiveDate::from_ymd_opt(year, month, clamped).expect("clamped day is inside the month")
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Navigate to the next month
    pub fn next_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 12 {
            (1, current_year + 1)
        } else {
            (current_month + 1, current_year)
        }
    }
}

impl Default for CycleService {
    fn default() -> Self {
        Self::new()
    }
}
