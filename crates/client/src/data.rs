// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The data handle given to the calendar renderer
//!

use crate::{Dataset, FetchError, FetchRequest, HolidayService, Settled};
use chrono::{Datelike, NaiveDate};
use holiday_overview_core::{Absence, PersonId, PublicHoliday, YearData};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// What has been fetched so far for one year (each half is fetched
/// separately, so one can be present without the other)
#[derive(Debug, Clone, Default)]
struct CachedYear {
    public_holidays: Option<Vec<PublicHoliday>>,
    absences: Option<Vec<Absence>>,
}

/// Holds the public holidays & absences fetched for one render pass, and
/// fetches (then keeps) any other year the renderer asks for.
///
/// Cloning is cheap & clones share the same cache.
#[derive(Clone)]
pub struct HolidayData {
    service: Arc<dyn HolidayService>,
    person_id: PersonId,
    cache: Arc<RwLock<HashMap<i32, CachedYear>>>,
}

impl HolidayData {
    /// Create an empty handle
    pub fn new(service: Arc<dyn HolidayService>, person_id: PersonId) -> Self {
        Self {
            service,
            person_id,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn person_id(&self) -> PersonId {
        self.person_id
    }

    /// Keep the data of every successful request (failed ones are left out so
    /// that they are fetched again if asked for)
    pub async fn insert_settled(&self, settled: &[Settled]) {
        let mut cache = self.cache.write().await;
        for Settled { request, outcome } in settled {
            let Ok(dataset) = outcome else {
                continue;
            };
            let entry = cache.entry(request.year()).or_default();
            match dataset {
                Dataset::PublicHolidays(holidays) => {
                    entry.public_holidays = Some(holidays.clone())
                }
                Dataset::Absences(absences) => entry.absences = Some(absences.clone()),
            }
        }
    }

    /// The public holidays of the year (fetched if not already held)
    pub async fn public_holidays(&self, year: i32) -> Result<Vec<PublicHoliday>, FetchError> {
        let cached = {
            let cache = self.cache.read().await;
            cache.get(&year).and_then(|y| y.public_holidays.clone())
        };
        if let Some(holidays) = cached {
            return Ok(holidays);
        }

        info!("Fetching public holidays for {year} on demand");
        let holidays = self.service.fetch_public_holidays(year).await?;
        let mut cache = self.cache.write().await;
        cache.entry(year).or_default().public_holidays = Some(holidays.clone());
        Ok(holidays)
    }

    /// The person's absences in the year (fetched if not already held)
    pub async fn absences(&self, year: i32) -> Result<Vec<Absence>, FetchError> {
        let cached = {
            let cache = self.cache.read().await;
            cache.get(&year).and_then(|y| y.absences.clone())
        };
        if let Some(absences) = cached {
            return Ok(absences);
        }

        info!("Fetching absences for {year} on demand");
        let absences = self.service.fetch_absences(self.person_id, year).await?;
        let mut cache = self.cache.write().await;
        cache.entry(year).or_default().absences = Some(absences.clone());
        Ok(absences)
    }

    /// Whatever is held for the year, without fetching.  A half that hasn't
    /// been fetched is empty.
    pub async fn cached_year(&self, year: i32) -> Option<YearData> {
        let cache = self.cache.read().await;
        cache.get(&year).map(|cached| YearData {
            public_holidays: cached.public_holidays.clone().unwrap_or_default(),
            absences: cached.absences.clone().unwrap_or_default(),
        })
    }

    /// The public holiday on the date, if one is held
    pub async fn public_holiday_on(&self, date: NaiveDate) -> Option<PublicHoliday> {
        let year = self.cached_year(date.year()).await?;
        year.public_holiday_on(date).cloned()
    }

    /// The absences held for the date
    pub async fn absences_on(&self, date: NaiveDate) -> Vec<Absence> {
        match self.cached_year(date.year()).await {
            Some(year) => year.absences_on(date).into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// The years that have at least some data held (ascending)
    pub async fn cached_years(&self) -> Vec<i32> {
        let cache = self.cache.read().await;
        let mut years: Vec<i32> = cache.keys().copied().collect();
        years.sort_unstable();
        debug!("Cached years = {years:?}");
        years
    }

    /// Whether both halves of the year are held
    pub async fn is_complete(&self, year: i32) -> bool {
        let cache = self.cache.read().await;
        cache
            .get(&year)
            .is_some_and(|y| y.public_holidays.is_some() && y.absences.is_some())
    }

    /// The requests still needed to hold both halves of the year
    pub async fn missing_requests(&self, year: i32) -> Vec<FetchRequest> {
        let cache = self.cache.read().await;
        let cached = cache.get(&year);
        let mut missing = Vec::new();
        if cached.is_none_or(|y| y.public_holidays.is_none()) {
            missing.push(FetchRequest::PublicHolidays { year });
        }
        if cached.is_none_or(|y| y.absences.is_none()) {
            missing.push(FetchRequest::Absences {
                person_id: self.person_id,
                year,
            });
        }
        missing
    }
}
