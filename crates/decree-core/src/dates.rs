//! Calendar arithmetic for decree periods.
//!
//! One canonical definition of "months plus leftover days" is used
//! everywhere: with `end` inclusive, whole months are counted by advancing
//! from `start` in calendar-month steps anchored to the start date
//! (day-of-month clamped at short months), and the leftover days are
//! measured against the exclusive bound `end + 1 day`. The day fraction of
//! a partial month divides by the length of the calendar month the cursor
//! landed in.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;

/// Urdu words used in decree report durations.
pub const MONTHS_WORD: &str = "مہینے";
pub const DAYS_WORD: &str = "دن";

/// Days in a calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Add calendar months, clamping the day at month ends (Jan 31 + 1 = Feb 28).
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month() as i32 - 1 + months;
    let new_year = total.div_euclid(12);
    let new_month = (total.rem_euclid(12) + 1) as u32;
    let day = date.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(date)
}

/// Add calendar years (Feb 29 clamps to Feb 28 in non-leap years).
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    add_months(date, years * 12)
}

/// Whole months and leftover days between two dates, end inclusive.
///
/// A reversed range yields `(0, 0)`. If the leftover days reach the length
/// of the month the cursor landed in, one more month is counted and the
/// days reset to zero; otherwise clamped month steps can leave 28+ "days"
/// that are really a full month.
pub fn month_day_span(start: NaiveDate, end: NaiveDate) -> (u32, u32) {
    if end < start {
        return (0, 0);
    }
    let bound = end + Duration::days(1);
    let mut months: u32 = 0;
    while add_months(start, months as i32 + 1) <= bound {
        months += 1;
    }
    let cursor = add_months(start, months as i32);
    let mut days = (bound - cursor).num_days() as u32;
    if days >= days_in_month(cursor.year(), cursor.month()) {
        months += 1;
        days = 0;
    }
    (months, days)
}

/// Duration in months as a decimal fraction, the engine's rate multiplier.
///
/// The fractional part is leftover days divided by the length of the
/// calendar month they fall in.
pub fn months_fraction(start: NaiveDate, end: NaiveDate) -> Decimal {
    if end < start {
        return Decimal::ZERO;
    }
    let (months, days) = month_day_span(start, end);
    if days == 0 {
        return Decimal::from(months);
    }
    let cursor = add_months(start, months as i32);
    Decimal::from(months)
        + Decimal::from(days) / Decimal::from(days_in_month(cursor.year(), cursor.month()))
}

/// Human-readable Urdu duration, omitting zero components.
pub fn duration_display(start: NaiveDate, end: NaiveDate) -> String {
    if end < start {
        return format!("0 {DAYS_WORD}");
    }
    let (months, days) = month_day_span(start, end);
    match (months, days) {
        (0, d) => format!("{d} {DAYS_WORD}"),
        (m, 0) => format!("{m} {MONTHS_WORD}"),
        (m, d) => format!("{m} {MONTHS_WORD}, {d} {DAYS_WORD}"),
    }
}
