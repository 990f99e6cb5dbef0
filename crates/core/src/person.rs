// SPDX-License-Identifier: MIT

//!
//! The person identifier type
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`PersonId`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonIdError {
    #[error("Person ID cannot be 0")]
    Zero,

    #[error("Person ID `{0}` is not a number")]
    NotANumber(String),
}

/// The numeric identifier of the person whose holidays are being shown.  Can
/// never be 0.
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    /// Create a new [`PersonId`] if the result will be valid
    pub fn from(value: u64) -> Result<Self, PersonIdError> {
        if value == 0 {
            Err(PersonIdError::Zero)
        } else {
            Ok(PersonId(value))
        }
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::str::FromStr for PersonId {
    type Err = PersonIdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| PersonIdError::NotANumber(s.to_string()))?;
        PersonId::from(value)
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        PersonId::from(value).map_err(serde::de::Error::custom)
    }
}
