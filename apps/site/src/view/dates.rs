//! Date labels shown on the page: "Mar 2020" month labels, "1 year, 6 months"
//! durations and the period heading of a position.
//!
//! Durations count whole calendar months and ignore the day of month, so
//! 31 Jan → 1 Feb reads as "1 month".

use chrono::{Datelike, NaiveDate};

/// Formats a date as `<abbreviated month> <year>` in the en-GB convention, e.g. `Jan 2020`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Whole-month difference between two dates, ignoring day of month.
/// Negative when `end` precedes `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    years * 12 + months
}

/// Human-readable elapsed time between two dates: `"2 years, 3 months"`, `"1 year"`,
/// `"6 months"`, or an empty string when less than a month has passed.
///
/// Ranges where `end` precedes `start` are not rejected; they also yield an empty string.
pub fn duration(start: NaiveDate, end: NaiveDate) -> String {
    let total = months_between(start, end);
    let years = total / 12;
    let months = total % 12;

    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        parts.push(counted(years, "year"));
    }
    if months > 0 {
        parts.push(counted(months, "month"));
    }
    parts.join(", ")
}

fn counted(n: i32, unit: &str) -> String {
    if n > 1 {
        format!("{n} {unit}s")
    } else {
        format!("{n} {unit}")
    }
}

/// Period heading for a dated range: `Since <start>` while ongoing,
/// `<start> – <end>` once ended.
pub fn period(start: NaiveDate, end: Option<NaiveDate>) -> String {
    match end {
        None => format!("Since {}", format_month_year(start)),
        Some(end) => format!(
            "{} \u{2013} {}",
            format_month_year(start),
            format_month_year(end)
        ),
    }
}
