// SPDX-License-Identifier: MIT

//!
//! Public holidays, absences, and the per-year collection of both
//!

use crate::DayLength;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public holiday that applies to the person
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    pub date: NaiveDate,
    pub description: String,
    pub day_length: DayLength,
}

/// The kind of absence.  Kinds this crate doesn't know about are read as
/// [`AbsenceType::Other`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AbsenceType {
    Vacation,
    SickNote,
    NoWorkday,
    #[serde(other)]
    Other,
}

/// A single day (or half day) on which the person is absent
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Absence {
    pub date: NaiveDate,

    #[serde(rename = "absent")]
    pub day_length: DayLength,

    #[serde(rename = "type")]
    pub absence_type: AbsenceType,

    /// e.g. `WAITING`, `ALLOWED`
    #[serde(default)]
    pub status: Option<String>,
}

/// The public holidays & absences of a single calendar year
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct YearData {
    pub public_holidays: Vec<PublicHoliday>,
    pub absences: Vec<Absence>,
}

impl YearData {
    /// The public holiday on the given date (if there is one)
    pub fn public_holiday_on(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        self.public_holidays.iter().find(|holiday| holiday.date == date)
    }

    /// All absences on the given date (a morning & an afternoon absence can
    /// fall on the same day)
    pub fn absences_on(&self, date: NaiveDate) -> Vec<&Absence> {
        self.absences
            .iter()
            .filter(|absence| absence.date == date)
            .collect()
    }
}
