// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Errors that can occur when fetching holiday data or loading the config
//!

use holiday_overview_core::PersonIdError;
use thiserror::Error;

/// Errors that can occur when fetching public holidays or absences
#[derive(Debug, Error)]
pub enum FetchError {
    /// An error when fetching from the web API (including non-2xx responses)
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// The task running the request panicked or was cancelled
    #[error("Request task failed: {0}")]
    Join(String),
}

/// Errors that can occur when loading or saving the page context
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occured when reading or writing the config file
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// The config file isn't valid JSON (or doesn't match the expected shape)
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// No home directory so there's nowhere to look for the config
    #[error("Unable to determine the project directories")]
    NoProjectDirs,

    #[error(transparent)]
    PersonId(#[from] PersonIdError),
}
