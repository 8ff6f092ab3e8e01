use crate::domain::staff::StaffRecord;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::info;

// ASCII digits only; `\d` would also accept full-width and other Unicode digits
static SENIORITY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)年([0-9]+)個月").expect("valid seniority pattern"));

/// Tenure at the school, stored by the backend as `"<N>年<M>個月"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Seniority {
    pub years: u64,
    pub months: u64,
}

impl Seniority {
    pub fn new(years: u64, months: u64) -> Self {
        Self { years, months }
    }

    /// Parses the first `<N>年<M>個月` found in a description.
    ///
    /// Returns `None` when the description has no such pattern, so callers can
    /// tell an unknown tenure from a zero one.
    pub fn parse(description: &str) -> Option<Self> {
        let captures = SENIORITY_PATTERN.captures(description)?;
        let years = captures.get(1)?.as_str().parse().ok()?;
        let months = captures.get(2)?.as_str().parse().ok()?;
        Some(Self { years, months })
    }

    /// Whole years and remaining months from `entry` up to `today`.
    ///
    /// A month is counted once its day-of-month is reached; an entry on the
    /// 31st completes a month on the last day of shorter months. An entry
    /// date after `today` gives zero tenure.
    pub fn between(entry: NaiveDate, today: NaiveDate) -> Self {
        if entry >= today {
            return Self::default();
        }

        let mut total_months = (today.year() - entry.year()) * 12 + today.month() as i32
            - entry.month() as i32;

        let anniversary_day = entry.day().min(days_in_month(today.year(), today.month()));
        if today.day() < anniversary_day {
            total_months -= 1;
        }

        let total_months = total_months.max(0) as u64;
        Self {
            years: total_months / 12,
            months: total_months % 12,
        }
    }

    /// Tenure as fractional years (`years + months / 12`)
    pub fn as_years(&self) -> f64 {
        self.years as f64 + self.months as f64 / 12.0
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}個月", self.years, self.months)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Fractional years encoded in a seniority description.
///
/// Missing or malformed descriptions yield `0.0`, the same value as a
/// genuine zero tenure.
pub fn extract_seniority_years(description: Option<&str>) -> f64 {
    description.and_then(fractional_years).unwrap_or(0.0)
}

fn fractional_years(description: &str) -> Option<f64> {
    let captures = SENIORITY_PATTERN.captures(description)?;
    let years: f64 = captures.get(1)?.as_str().parse().ok()?;
    let months: f64 = captures.get(2)?.as_str().parse().ok()?;
    Some(years + months / 12.0)
}

/// Recomputes a record's seniority description as of `today`.
///
/// Inactive staff and records without a usable entry date get `0年0個月`.
/// Returns `true` when the stored description changed.
pub fn refresh_seniority(record: &mut StaffRecord, today: NaiveDate) -> bool {
    let seniority = match record.entry_date() {
        Some(entry) if record.is_active() => Seniority::between(entry, today),
        _ => Seniority::default(),
    };

    let description = seniority.to_string();
    if record.school_seniority_description() == Some(description.as_str()) {
        return false;
    }

    info!(
        staff_id = %record.staff_id(),
        old = record.school_seniority_description().unwrap_or(""),
        new = %description,
        "seniority updated"
    );
    record.set_school_seniority_description(description);
    true
}
