use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::json::JSON;
use crate::scheduling::obligation::ScheduleError;

/// A payment frequency, measured in lunar months per period.
///
/// The wire names (`monthly`, `3_months`, `6_months`, `yearly`) are those stored by
/// the surrounding record-keeper and are preserved through serde and [`FromStr`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// A period every lunar month.
    #[serde(rename = "monthly")]
    Monthly,
    /// A period every three lunar months.
    #[serde(rename = "3_months")]
    Quarterly,
    /// A period every six lunar months.
    #[serde(rename = "6_months")]
    SemiAnnual,
    /// A period every twelve lunar months.
    #[serde(rename = "yearly")]
    Annual,
}

impl Frequency {
    /// The lunar-month step between consecutive due dates.
    pub fn step_months(&self) -> i32 {
        match self {
            Frequency::Monthly => 1,
            Frequency::Quarterly => 3,
            Frequency::SemiAnnual => 6,
            Frequency::Annual => 12,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "3_months",
            Frequency::SemiAnnual => "6_months",
            Frequency::Annual => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Frequency::Monthly),
            "3_months" => Ok(Frequency::Quarterly),
            "6_months" => Ok(Frequency::SemiAnnual),
            "yearly" => Ok(Frequency::Annual),
            _ => Err(ScheduleError::UnknownFrequency {
                name: s.to_string(),
            }),
        }
    }
}

impl JSON for Frequency {}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_months() {
        let options: Vec<(Frequency, i32)> = vec![
            (Frequency::Monthly, 1),
            (Frequency::Quarterly, 3),
            (Frequency::SemiAnnual, 6),
            (Frequency::Annual, 12),
        ];
        for (frequency, step) in options.iter() {
            assert_eq!(*step, frequency.step_months());
        }
    }

    #[test]
    fn test_wire_names_round_trip() {
        for frequency in [
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::SemiAnnual,
            Frequency::Annual,
        ] {
            assert_eq!(frequency, frequency.to_string().parse().unwrap());
            let js = frequency.to_json().unwrap();
            assert_eq!(format!("\"{}\"", frequency), js);
            assert_eq!(frequency, Frequency::from_json(&js).unwrap());
        }
    }

    #[test]
    fn test_unknown_frequency() {
        assert!("weekly".parse::<Frequency>().is_err());
    }
}
