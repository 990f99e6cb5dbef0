// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider holiday overview project*
//!
//! This crate fetches & hands over the data shown in a person's holiday
//! overview.  It does the following:
//!
//! - Works out the display window & the years it touches
//! - Fetches public holidays & absences for those years concurrently (from
//! the JSON web API, or any other [`HolidayService`])
//! - Waits for every request to settle, keeping failures rather than
//! aborting on them
//! - Gives the data (plus a handle to fetch more) to a [`CalendarRenderer`]
//!
//! This crate makes use of the `core` crate for primitive types, and is itself
//! used by the `bins` crate.
//!

mod context;
mod controller;
mod data;
mod error;
mod render;
mod service;
mod settle;

pub use context::*;
pub use controller::*;
pub use data::*;
pub use error::*;
pub use render::*;
pub use service::*;
pub use settle::*;
