// SPDX-License-Identifier: MIT

//!
//! How much of a day a public holiday or absence covers
//!

use serde::{Deserialize, Serialize};

/// The part of a day covered by a public holiday or an absence
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayLength {
    /// The whole day
    Full,

    /// The morning only
    Morning,

    /// The afternoon only
    Noon,

    /// None of the day
    Zero,
}

impl DayLength {
    pub fn is_full(&self) -> bool {
        *self == DayLength::Full
    }

    pub fn is_morning(&self) -> bool {
        *self == DayLength::Morning
    }

    pub fn is_noon(&self) -> bool {
        *self == DayLength::Noon
    }

    /// Fraction of a working day
    pub fn duration(&self) -> f64 {
        match self {
            DayLength::Full => 1.0,
            DayLength::Morning | DayLength::Noon => 0.5,
            DayLength::Zero => 0.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::DayLength;

    #[test]
    fn duration() {
        assert_eq!(DayLength::Full.duration(), 1.0);
        assert_eq!(DayLength::Morning.duration(), 0.5);
        assert_eq!(DayLength::Noon.duration(), 0.5);
        assert_eq!(DayLength::Zero.duration(), 0.0);
    }

    #[test]
    fn wire_format() {
        let length: DayLength = serde_json::from_str(r#""MORNING""#).unwrap();
        assert!(length.is_morning());
        assert_eq!(serde_json::to_string(&DayLength::Full).unwrap(), r#""FULL""#);
        assert!(serde_json::from_str::<DayLength>(r#""EVENING""#).is_err());
    }
}
