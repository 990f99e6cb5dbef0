// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The calendar rendering seam, plus a plain text summary renderer
//!

use crate::{FetchReport, HolidayData};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use holiday_overview_core::{AbsenceType, DisplayWindow, I18n};
use log::warn;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Mutex;

const DEFAULT_RENDER_TARGET: &str = "#datepicker";

/// Names the container the calendar is rendered into
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderTarget(String);

impl RenderTarget {
    pub fn new<S: ToString>(target: S) -> Self {
        Self(target.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RenderTarget {
    fn default() -> Self {
        Self(DEFAULT_RENDER_TARGET.to_string())
    }
}

/// Implementing types draw the holiday calendar.  Called once per
/// controller run, after every request has settled.
#[async_trait]
pub trait CalendarRenderer: Send + Sync {
    /// `data` already holds whatever the initial requests fetched & can fetch
    /// further years on demand.  `report` says which initial requests failed.
    async fn render(
        &self,
        target: &RenderTarget,
        data: HolidayData,
        reference_date: NaiveDate,
        i18n: &I18n,
        report: &FetchReport,
    );
}

/// Writes a line per public holiday & absence in the display window.  Only
/// uses data already held (nothing is fetched).
pub struct TextRenderer<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Take back the writer
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    async fn lines(
        data: &HolidayData,
        reference_date: NaiveDate,
        i18n: &I18n,
        report: &FetchReport,
    ) -> Vec<String> {
        let mut lines = Vec::new();
        let window = match DisplayWindow::centred_on(reference_date) {
            Ok(window) => window,
            Err(error) => {
                warn!("Nothing to render: {error}");
                return lines;
            }
        };

        // Heading
        lines.push(format!(
            "{} ({} - {})",
            i18n.get("overview.calendar.title"),
            window.start_date(),
            window.end_date()
        ));

        // Entries, in date order
        let mut entries: Vec<(NaiveDate, String)> = Vec::new();
        for year in window.years().iter() {
            let Some(year_data) = data.cached_year(year).await else {
                continue;
            };
            for holiday in year_data
                .public_holidays
                .iter()
                .filter(|h| window.contains(h.date))
            {
                entries.push((
                    holiday.date,
                    format!(
                        "{}: {} ({:?})",
                        i18n.get("overview.calendar.publicHoliday"),
                        holiday.description,
                        holiday.day_length
                    ),
                ));
            }
            for absence in year_data
                .absences
                .iter()
                .filter(|a| window.contains(a.date))
            {
                entries.push((
                    absence.date,
                    format!(
                        "{} ({:?})",
                        i18n.get(absence_type_key(absence.absence_type)),
                        absence.day_length
                    ),
                ));
            }
        }
        entries.sort_by_key(|(date, _)| *date);
        for (date, entry) in entries {
            let marker = if date == reference_date { "*" } else { " " };
            lines.push(format!("{marker} {date} {:<3} {entry}", weekday(date)));
        }

        // Partial data
        if !report.is_complete() {
            let failed: Vec<String> = report
                .failed()
                .iter()
                .map(|failed| failed.request.to_string())
                .collect();
            lines.push(format!(
                "{}: {}",
                i18n.get("overview.calendar.partial"),
                failed.join(", ")
            ));
        }

        lines
    }
}

#[async_trait]
impl<W: Write + Send + 'static> CalendarRenderer for TextRenderer<W> {
    async fn render(
        &self,
        target: &RenderTarget,
        data: HolidayData,
        reference_date: NaiveDate,
        i18n: &I18n,
        report: &FetchReport,
    ) {
        let lines = Self::lines(&data, reference_date, i18n, report).await;
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        for line in lines {
            if let Err(error) = writeln!(out, "{line}") {
                warn!("Failed to render into {}: {error}", target.as_str());
                return;
            }
        }
        if let Err(error) = out.flush() {
            warn!("Failed to flush {}: {error}", target.as_str());
        }
    }
}

fn absence_type_key(absence_type: AbsenceType) -> &'static str {
    match absence_type {
        AbsenceType::Vacation => "absence.type.VACATION",
        AbsenceType::SickNote => "absence.type.SICK_NOTE",
        AbsenceType::NoWorkday => "absence.type.NO_WORKDAY",
        AbsenceType::Other => "absence.type.OTHER",
    }
}

fn weekday(date: NaiveDate) -> String {
    date.weekday().to_string()
}
