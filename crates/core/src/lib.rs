// SPDX-License-Identifier: MIT

//!
//! *Part of the wider holiday overview project*
//!
//! This crate defines the basic datatypes used across the holiday overview
//! (the person, public holidays, absences, the display window, and the
//! translation lookup).  It does no I/O.
//!
//! The types aim to be valid once they have been instantiated.
//!

mod day_length;
mod holiday;
mod i18n;
mod person;
mod window;

pub use day_length::*;
pub use holiday::*;
pub use i18n::*;
pub use person::*;
pub use window::*;
