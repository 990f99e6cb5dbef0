// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Fetching public holidays & absences
//!

use crate::FetchError;
use async_trait::async_trait;
use holiday_overview_core::{Absence, PersonId, PublicHoliday};
use log::debug;
use serde::Deserialize;
use std::fmt;

/// Implementing types can fetch the public holidays and absences of a year.
/// Must be safe to call concurrently for different years.
#[async_trait]
pub trait HolidayService: Send + Sync {
    /// Fetch the public holidays of the given year
    async fn fetch_public_holidays(&self, year: i32) -> Result<Vec<PublicHoliday>, FetchError>;

    /// Fetch the absences of the person in the given year
    async fn fetch_absences(
        &self,
        person_id: PersonId,
        year: i32,
    ) -> Result<Vec<Absence>, FetchError>;
}

/// A single request for data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchRequest {
    PublicHolidays { year: i32 },
    Absences { person_id: PersonId, year: i32 },
}

/// The data returned by a [`FetchRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dataset {
    PublicHolidays(Vec<PublicHoliday>),
    Absences(Vec<Absence>),
}

impl FetchRequest {
    /// Both requests (public holidays & absences) needed for one year
    pub fn pair_for_year(person_id: PersonId, year: i32) -> [FetchRequest; 2] {
        [
            FetchRequest::PublicHolidays { year },
            FetchRequest::Absences { person_id, year },
        ]
    }

    pub fn year(&self) -> i32 {
        match self {
            FetchRequest::PublicHolidays { year } => *year,
            FetchRequest::Absences { year, .. } => *year,
        }
    }

    /// Run the request against the service
    pub async fn run(self, service: &dyn HolidayService) -> Result<Dataset, FetchError> {
        match self {
            FetchRequest::PublicHolidays { year } => service
                .fetch_public_holidays(year)
                .await
                .map(Dataset::PublicHolidays),
            FetchRequest::Absences { person_id, year } => service
                .fetch_absences(person_id, year)
                .await
                .map(Dataset::Absences),
        }
    }
}

impl fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchRequest::PublicHolidays { year } => write!(f, "public holidays for {year}"),
            FetchRequest::Absences { person_id, year } => {
                write!(f, "absences of person {person_id} for {year}")
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicHolidaysResponse {
    public_holidays: Vec<PublicHoliday>,
}

#[derive(Deserialize)]
struct AbsencesResponse {
    absences: Vec<Absence>,
}

/// Fetches from the JSON web API.
///
/// Public holidays depend on where the person works, so they are requested
/// under the person the service was created for.
#[derive(Debug, Clone)]
pub struct HttpHolidayService {
    client: reqwest::Client,
    api_prefix: String,
    person_id: PersonId,
}

impl HttpHolidayService {
    pub fn new(client: reqwest::Client, api_prefix: &str, person_id: PersonId) -> Self {
        Self {
            client,
            api_prefix: api_prefix.trim_end_matches('/').to_string(),
            person_id,
        }
    }

    /// e.g. `<api prefix>/persons/1/absences?from=2024-01-01&to=2024-12-31`
    fn url(&self, person_id: PersonId, resource: &str, year: i32) -> String {
        format!(
            "{}/persons/{person_id}/{resource}?from={year:04}-01-01&to={year:04}-12-31",
            self.api_prefix
        )
    }
}

#[async_trait]
impl HolidayService for HttpHolidayService {
    async fn fetch_public_holidays(&self, year: i32) -> Result<Vec<PublicHoliday>, FetchError> {
        let url = self.url(self.person_id, "public-holidays", year);
        debug!("GET {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: PublicHolidaysResponse = response.json().await?;
        debug!(
            "Fetched public holidays for {year} (count = {})",
            body.public_holidays.len()
        );
        Ok(body.public_holidays)
    }

    async fn fetch_absences(
        &self,
        person_id: PersonId,
        year: i32,
    ) -> Result<Vec<Absence>, FetchError> {
        let url = self.url(person_id, "absences", year);
        debug!("GET {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: AbsencesResponse = response.json().await?;
        debug!(
            "Fetched absences of person {person_id} for {year} (count = {})",
            body.absences.len()
        );
        Ok(body.absences)
    }
}
