// SPDX-License-Identifier: MIT

//!
//! The display window shown in the holiday overview & the calendar years it
//! touches
//!

use chrono::{Datelike, Months, NaiveDate};
use log::warn;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// The number of months shown in the overview
pub const WINDOW_MONTHS: u32 = 10;

/// The minimum year that can be requested
pub const MIN_YEAR: i32 = 1;

/// The maximum year that can be requested
pub const MAX_YEAR: i32 = 9999;

/// Errors that can arise in relation to a [`DisplayWindow`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Moving the reference date by half the window leaves the representable
    /// date range
    #[error("Window around `{0}` is out of range")]
    OutOfRange(NaiveDate),
}

/// Work out the date the overview is centred on.
///
/// If no year was requested, or the requested year is the current year, this
/// is `today`.  Otherwise it's the 1st of January of the requested year.  A
/// requested year that isn't a number in [`MIN_YEAR`]..=[`MAX_YEAR`] is
/// treated as if no year had been requested.
pub fn resolve_reference_date(requested_year: Option<&str>, today: NaiveDate) -> NaiveDate {
    let Some(raw) = requested_year.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return today;
    };

    let year = match raw.parse::<i32>() {
        Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => year,
        _ => {
            warn!("Ignoring malformed year `{raw}`");
            return today;
        }
    };

    if year == today.year() {
        return today;
    }

    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(today)
}

/// The span of calendar time shown to the user, centred on a reference date
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayWindow {
    reference_date: NaiveDate,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl DisplayWindow {
    /// A [`WINDOW_MONTHS`] window with half the months before the reference
    /// date and half after.  Days past the end of a shorter month are clamped
    /// to its last day (e.g. 31st Jul - 5 months = 28th/29th Feb).
    pub fn centred_on(reference_date: NaiveDate) -> Result<Self, WindowError> {
        let half = Months::new(WINDOW_MONTHS / 2);
        let start_date = reference_date
            .checked_sub_months(half)
            .ok_or(WindowError::OutOfRange(reference_date))?;
        let end_date = reference_date
            .checked_add_months(half)
            .ok_or(WindowError::OutOfRange(reference_date))?;
        Ok(Self {
            reference_date,
            start_date,
            end_date,
        })
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Whether the date falls inside the window (inclusive at both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start_date..=self.end_date).contains(&date)
    }

    /// The calendar years the window touches
    pub fn years(&self) -> YearRequestSet {
        YearRequestSet::from_iter([self.start_date.year(), self.end_date.year()])
    }
}

/// The distinct calendar years that data has to be requested for (always in
/// ascending order)
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct YearRequestSet(BTreeSet<i32>);

impl YearRequestSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.0.contains(&year)
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<i32> for YearRequestSet {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
