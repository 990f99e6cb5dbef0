// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The holiday overview controller: work out the display window, fetch the
//! data for every year it touches, then hand it all to the renderer
//!

use crate::{
    CalendarRenderer, FetchReport, FetchRequest, HolidayData, HolidayService,
    HttpHolidayService, PageContext, settle_all,
};
use chrono::{Local, NaiveDate};
use holiday_overview_core::{
    DisplayWindow, WindowError, YearRequestSet, resolve_reference_date,
};
use log::{debug, info, warn};
use std::sync::Arc;

/// What a single controller run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRun {
    pub reference_date: NaiveDate,
    pub window: DisplayWindow,
    pub years: YearRequestSet,
    pub report: FetchReport,
}

/// Drives one holiday overview.  All collaborators are passed in.
pub struct HolidayOverviewController {
    context: PageContext,
    service: Arc<dyn HolidayService>,
    renderer: Arc<dyn CalendarRenderer>,
}

impl HolidayOverviewController {
    pub fn new(
        context: PageContext,
        service: Arc<dyn HolidayService>,
        renderer: Arc<dyn CalendarRenderer>,
    ) -> Self {
        Self {
            context,
            service,
            renderer,
        }
    }

    /// A controller that fetches from the context's JSON API
    pub fn with_http(
        context: PageContext,
        client: reqwest::Client,
        renderer: Arc<dyn CalendarRenderer>,
    ) -> Self {
        let service = HttpHolidayService::new(client, &context.api_prefix, context.person_id);
        Self::new(context, Arc::new(service), renderer)
    }

    pub fn context(&self) -> &PageContext {
        &self.context
    }

    /// Run the overview for the requested year (the raw `year` parameter, if
    /// there was one) relative to today's local date
    pub async fn initialize(
        &self,
        requested_year: Option<&str>,
    ) -> Result<OverviewRun, WindowError> {
        self.initialize_on(requested_year, Local::now().date_naive())
            .await
    }

    /// Run the overview again for a year the user navigated to
    pub async fn navigate_to_year(&self, year: i32) -> Result<OverviewRun, WindowError> {
        info!("Navigating to {year}");
        self.initialize(Some(&year.to_string())).await
    }

    /// Run the overview as if today were `today`.
    ///
    /// Failed requests don't stop the run: each is logged, left out of the
    /// data, and listed in the report given to the renderer.  The renderer is
    /// called exactly once.
    pub async fn initialize_on(
        &self,
        requested_year: Option<&str>,
        today: NaiveDate,
    ) -> Result<OverviewRun, WindowError> {
        let person_id = self.context.person_id;

        // Work out what to show
        let reference_date = resolve_reference_date(requested_year, today);
        let window = DisplayWindow::centred_on(reference_date)?;
        let years = window.years();
        info!(
            "Holiday overview for person {person_id} around {reference_date} ({} to {})",
            window.start_date(),
            window.end_date()
        );
        debug!("Years to fetch = {years:?}");

        // Fetch everything at once & wait for it all to settle
        let requests = years
            .iter()
            .flat_map(|year| FetchRequest::pair_for_year(person_id, year));
        let settled = settle_all(&self.service, requests).await;

        // Keep what arrived
        let data = HolidayData::new(Arc::clone(&self.service), person_id);
        data.insert_settled(&settled).await;
        let report = FetchReport::from_settled(&settled);
        for failed in report.failed() {
            warn!("Failed to fetch {}: {}", failed.request, failed.error);
        }
        info!(
            "{} of {} requests succeeded",
            report.succeeded().len(),
            report.total()
        );

        // Render
        self.renderer
            .render(
                &self.context.render_target,
                data,
                reference_date,
                &self.context.translations,
                &report,
            )
            .await;

        Ok(OverviewRun {
            reference_date,
            window,
            years,
            report,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{FetchError, RenderTarget};
    use async_trait::async_trait;
    use holiday_overview_core::{Absence, I18n, PersonId, PublicHoliday};
    use std::sync::Mutex;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Records every request.  Years in `failing` fail.
    #[derive(Default)]
    struct RecordingService {
        requests: Mutex<Vec<FetchRequest>>,
        failing: Vec<i32>,
    }

    impl RecordingService {
        fn record(&self, request: FetchRequest) -> Result<(), FetchError> {
            self.requests.lock().unwrap().push(request);
            if self.failing.contains(&request.year()) {
                Err(FetchError::Join(format!("{request} unavailable")))
            } else {
                Ok(())
            }
        }

        fn recorded(&self) -> Vec<FetchRequest> {
            let mut requests = self.requests.lock().unwrap().clone();
            requests.sort_by_key(|r| (r.year(), matches!(r, FetchRequest::Absences { .. })));
            requests
        }
    }

    #[async_trait]
    impl HolidayService for RecordingService {
        async fn fetch_public_holidays(
            &self,
            year: i32,
        ) -> Result<Vec<PublicHoliday>, FetchError> {
            self.record(FetchRequest::PublicHolidays { year })?;
            Ok(Vec::new())
        }

        async fn fetch_absences(
            &self,
            person_id: PersonId,
            year: i32,
        ) -> Result<Vec<Absence>, FetchError> {
            self.record(FetchRequest::Absences { person_id, year })?;
            Ok(Vec::new())
        }
    }

    struct Rendered {
        target: RenderTarget,
        reference_date: NaiveDate,
        cached_years: Vec<i32>,
        report: FetchReport,
        missing_translation: String,
    }

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Mutex<Vec<Rendered>>,
    }

    #[async_trait]
    impl CalendarRenderer for RecordingRenderer {
        async fn render(
            &self,
            target: &RenderTarget,
            data: HolidayData,
            reference_date: NaiveDate,
            i18n: &I18n,
            report: &FetchReport,
        ) {
            let cached_years = data.cached_years().await;
            self.calls.lock().unwrap().push(Rendered {
                target: target.clone(),
                reference_date,
                cached_years,
                report: report.clone(),
                missing_translation: i18n.get("missing.key"),
            });
        }
    }

    fn person_id() -> PersonId {
        PersonId::from(11).unwrap()
    }

    fn setup(
        failing: Vec<i32>,
    ) -> (
        Arc<RecordingService>,
        Arc<RecordingRenderer>,
        HolidayOverviewController,
    ) {
        let service = Arc::new(RecordingService {
            requests: Mutex::new(Vec::new()),
            failing,
        });
        let renderer = Arc::new(RecordingRenderer::default());
        let context = PageContext {
            person_id: person_id(),
            web_prefix: "/web".to_string(),
            api_prefix: "/api".to_string(),
            translations: I18n::default(),
            render_target: RenderTarget::default(),
        };
        let controller = HolidayOverviewController::new(context, service.clone(), renderer.clone());
        (service, renderer, controller)
    }

    #[tokio::test]
    async fn current_year() {
        let (service, renderer, controller) = setup(Vec::new());
        let today = date(2024, 6, 15);
        let run = controller.initialize_on(None, today).await.unwrap();

        assert_eq!(run.reference_date, today);
        assert_eq!(run.window.start_date(), date(2024, 1, 15));
        assert_eq!(run.window.end_date(), date(2024, 11, 15));
        assert_eq!(run.years.iter().collect::<Vec<_>>(), vec![2024]);

        // One pair of requests, not two
        assert_eq!(service.recorded(), FetchRequest::pair_for_year(person_id(), 2024));
        assert!(run.report.is_complete());

        let calls = renderer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].reference_date, today);
        assert_eq!(calls[0].target.as_str(), "#datepicker");
        assert_eq!(calls[0].cached_years, vec![2024]);
        assert_eq!(calls[0].missing_translation, "/i18n:missing.key/");
    }

    #[tokio::test]
    async fn other_year_spans_two_years() {
        let (service, renderer, controller) = setup(Vec::new());
        let run = controller
            .initialize_on(Some("2022"), date(2024, 6, 15))
            .await
            .unwrap();

        assert_eq!(run.reference_date, date(2022, 1, 1));
        assert_eq!(run.window.start_date(), date(2021, 8, 1));
        assert_eq!(run.window.end_date(), date(2022, 6, 1));
        assert_eq!(run.years.iter().collect::<Vec<_>>(), vec![2021, 2022]);

        let mut expected = FetchRequest::pair_for_year(person_id(), 2021).to_vec();
        expected.extend(FetchRequest::pair_for_year(person_id(), 2022));
        assert_eq!(service.recorded(), expected);
        assert_eq!(renderer.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_year_means_today() {
        let (_, _, controller) = setup(Vec::new());
        let today = date(2024, 6, 15);
        let run = controller.initialize_on(Some("next"), today).await.unwrap();
        assert_eq!(run.reference_date, today);
    }

    #[tokio::test]
    async fn renders_once_despite_failures() {
        let (service, renderer, controller) = setup(vec![2021]);
        let run = controller
            .initialize_on(Some("2022"), date(2024, 6, 15))
            .await
            .unwrap();

        // Every request was still made
        assert_eq!(service.recorded().len(), 4);
        assert_eq!(run.report.failed().len(), 2);
        assert_eq!(run.report.succeeded().len(), 2);

        let calls = renderer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].report, run.report);
        assert_eq!(calls[0].cached_years, vec![2022]);
    }

    #[tokio::test]
    async fn renders_once_when_everything_fails() {
        let (_, renderer, controller) = setup(vec![2024]);
        let run = controller.initialize_on(None, date(2024, 6, 15)).await.unwrap();
        assert_eq!(run.report.succeeded().len(), 0);
        let calls = renderer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].cached_years.is_empty());
    }

    #[tokio::test]
    async fn each_navigation_renders_again() {
        let (_, renderer, controller) = setup(Vec::new());
        controller.navigate_to_year(2020).await.unwrap();
        let run = controller.navigate_to_year(2019).await.unwrap();
        assert_eq!(run.reference_date, date(2019, 1, 1));
        assert_eq!(renderer.calls.lock().unwrap().len(), 2);
    }
}
