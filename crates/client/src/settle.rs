// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Run requests concurrently & wait for every one of them to finish, whether
//! it succeeded or not
//!

use crate::{Dataset, FetchError, FetchRequest, HolidayService};
use log::debug;
use std::sync::Arc;

/// A request that has finished, along with how it finished
#[derive(Debug)]
pub struct Settled {
    pub request: FetchRequest,
    pub outcome: Result<Dataset, FetchError>,
}

/// Run all the requests concurrently and wait for all of them to settle.
///
/// A failed request never stops the others.  The results are returned in the
/// same order as the requests.
pub async fn settle_all<I>(service: &Arc<dyn HolidayService>, requests: I) -> Vec<Settled>
where
    I: IntoIterator<Item = FetchRequest>,
{
    // Start every request before waiting on any of them
    let handles: Vec<_> = requests
        .into_iter()
        .map(|request| {
            let service = Arc::clone(service);
            let handle = tokio::spawn(async move { request.run(service.as_ref()).await });
            (request, handle)
        })
        .collect();
    debug!("Started {} requests", handles.len());

    // Wait for them all
    let mut settled = Vec::with_capacity(handles.len());
    for (request, handle) in handles {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(error) => Err(FetchError::Join(error.to_string())),
        };
        settled.push(Settled { request, outcome });
    }
    settled
}

/// A request that failed & why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRequest {
    pub request: FetchRequest,
    pub error: String,
}

/// Which requests of a settle pass succeeded & which failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    succeeded: Vec<FetchRequest>,
    failed: Vec<FailedRequest>,
}

impl FetchReport {
    pub fn from_settled(settled: &[Settled]) -> Self {
        let mut report = FetchReport::default();
        for Settled { request, outcome } in settled {
            match outcome {
                Ok(_) => report.succeeded.push(*request),
                Err(error) => report.failed.push(FailedRequest {
                    request: *request,
                    error: error.to_string(),
                }),
            }
        }
        report
    }

    pub fn succeeded(&self) -> &[FetchRequest] {
        &self.succeeded
    }

    pub fn failed(&self) -> &[FailedRequest] {
        &self.failed
    }

    /// Whether every request succeeded
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// The number of requests that settled
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}
