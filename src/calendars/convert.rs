use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendars::daycount::{gregorian_to_jdn, jdn_to_gregorian, try_ndt};
use crate::calendars::hijri::HijriDate;
use crate::json::JSON;

/// Errors arising from invalid calendar-date input.
///
/// Conversion itself is total; only malformed (year, month, day) triples fail. A
/// caller receiving this must treat the input as non-recoverable and not persist
/// any derived result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("year {year} is out of range, years are counted from 1")]
    InvalidYear { year: i32 },
    #[error("{year}-{month}-{day} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// One of the two calendar systems the core converts between.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    Gregorian,
    Hijri,
}

impl JSON for Calendar {}

/// Day count of a (year, month, day) triple in the given calendar.
pub fn to_day_count(calendar: Calendar, year: i32, month: u32, day: u32) -> Result<i64, CalendarError> {
    match calendar {
        Calendar::Gregorian => {
            try_ndt(year, month, day)?;
            Ok(gregorian_to_jdn(year, month, day))
        }
        Calendar::Hijri => Ok(HijriDate::try_new(year, month, day)?.to_jdn()),
    }
}

/// The (year, month, day) triple holding a day count in the given calendar.
pub fn from_day_count(calendar: Calendar, day_count: i64) -> (i32, u32, u32) {
    match calendar {
        Calendar::Gregorian => jdn_to_gregorian(day_count),
        Calendar::Hijri => {
            let h = HijriDate::from_jdn(day_count);
            (h.year, h.month, h.day)
        }
    }
}

/// Convert a (year, month, day) triple from one calendar to another.
///
/// Converting a calendar to itself validates the input and returns it unchanged.
///
/// # Examples
/// ```rust
/// # use ijara::calendars::{convert, Calendar};
/// let g = convert(Calendar::Hijri, Calendar::Gregorian, 1445, 1, 1).unwrap();
/// assert_eq!((2023, 7, 19), g);
/// ```
pub fn convert(
    from: Calendar,
    to: Calendar,
    year: i32,
    month: u32,
    day: u32,
) -> Result<(i32, u32, u32), CalendarError> {
    let jdn = to_day_count(from, year, month, day)?;
    Ok(from_day_count(to, jdn))
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_both_directions() {
        let h = convert(Calendar::Gregorian, Calendar::Hijri, 2023, 7, 19).unwrap();
        assert_eq!((1445, 1, 1), h);
        let g = convert(Calendar::Hijri, Calendar::Gregorian, 1445, 1, 1).unwrap();
        assert_eq!((2023, 7, 19), g);
    }

    #[test]
    fn test_round_trip_supported_range() {
        // every day of the supported Hijri range survives both directions exactly
        let start = to_day_count(Calendar::Hijri, 1300, 1, 1).unwrap();
        let end = to_day_count(Calendar::Hijri, 1500, 12, 29).unwrap();
        for jdn in start..=end {
            let (gy, gm, gd) = from_day_count(Calendar::Gregorian, jdn);
            let (hy, hm, hd) = from_day_count(Calendar::Hijri, jdn);
            assert_eq!(
                (hy, hm, hd),
                convert(Calendar::Gregorian, Calendar::Hijri, gy, gm, gd).unwrap()
            );
            assert_eq!(
                (gy, gm, gd),
                convert(Calendar::Hijri, Calendar::Gregorian, hy, hm, hd).unwrap()
            );
        }
    }

    #[test]
    fn test_identity_conversion_validates() {
        assert_eq!(
            (2024, 2, 29),
            convert(Calendar::Gregorian, Calendar::Gregorian, 2024, 2, 29).unwrap()
        );
        assert!(convert(Calendar::Gregorian, Calendar::Gregorian, 2023, 2, 29).is_err());
        assert!(convert(Calendar::Hijri, Calendar::Gregorian, 1445, 2, 30).is_err());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(to_day_count(Calendar::Gregorian, 0, 1, 1).is_err());
        assert!(to_day_count(Calendar::Gregorian, -100, 1, 1).is_err());
        assert!(to_day_count(Calendar::Hijri, 1445, 13, 1).is_err());
        assert!(to_day_count(Calendar::Hijri, 1445, 1, 31).is_err());
    }
}
