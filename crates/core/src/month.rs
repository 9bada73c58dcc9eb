// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The academic-year month sequence.
//!
//! Performance is tracked per month of an academic year running from
//! September through August. The labels are the ones the remote spreadsheet
//! uses, so they double as wire values.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::error::{Error, Result};

/// Canonical month labels, September first.
pub const MONTHS: [&str; 12] = [
    "Сент", "Окт", "Нояб", "Дек", "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг",
];

/// Number of months in the canonical sequence.
pub const MONTH_COUNT: usize = MONTHS.len();

/// Position of a month label in the canonical sequence.
pub fn month_index(label: &str) -> Option<usize> {
    let label = label.trim();
    MONTHS.iter().position(|m| *m == label)
}

/// Resolve user input to a canonical label.
///
/// Accepts the label itself or a 1-based calendar month number ("9" is
/// September).
pub fn parse_month(input: &str) -> Result<&'static str> {
    if let Some(idx) = month_index(input) {
        return Ok(MONTHS[idx]);
    }
    match input.trim().parse::<u32>() {
        Ok(n @ 1..=12) => Ok(MONTHS[calendar_to_index(n)]),
        _ => Err(Error::InvalidMonth(input.to_string())),
    }
}

/// Map a calendar month (1-12) to its position in the academic sequence.
fn calendar_to_index(month: u32) -> usize {
    ((month + 3) % 12) as usize
}

/// The canonical label for the month containing `date`.
pub fn month_label_for(date: DateTime<Utc>) -> &'static str {
    MONTHS[calendar_to_index(date.month())]
}

/// An academic season, September 1 through August 31.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub start_year: i32,
    pub end_year: i32,
}

impl Season {
    /// The season that contains `date`.
    ///
    /// September to December belong to the season starting that year,
    /// January to August to the one that started the year before.
    pub fn containing(date: DateTime<Utc>) -> Self {
        let start_year = if date.month() >= 9 {
            date.year()
        } else {
            date.year() - 1
        };
        Season {
            start_year,
            end_year: start_year + 1,
        }
    }

    /// The season that contains the current moment.
    pub fn current() -> Self {
        Self::containing(Utc::now())
    }

    /// Display name, e.g. `2024-2025`.
    pub fn name(&self) -> String {
        format!("{}-{}", self.start_year, self.end_year)
    }

    /// First instant of the season (September 1, UTC).
    pub fn start(&self) -> Option<DateTime<Utc>> {
        NaiveDate::from_ymd_opt(self.start_year, 9, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| Utc.from_utc_datetime(&dt))
    }

    /// Last day of the season (August 31, UTC, end of day).
    pub fn end(&self) -> Option<DateTime<Utc>> {
        NaiveDate::from_ymd_opt(self.end_year, 8, 31)
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .map(|dt| Utc.from_utc_datetime(&dt))
    }
}

#[cfg(test)]
#[path = "month_tests.rs"]
mod tests;
