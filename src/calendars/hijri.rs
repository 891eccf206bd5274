use std::fmt;

use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calendars::daycount::{date_to_jdn, jdn_to_date};
use crate::calendars::CalendarError;

/// Day number of 1 Muharram 1 AH, expressed at UTC midnight.
pub(crate) const HIJRI_EPOCH_JDN: i64 = 1_948_439;

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-awwal",
    "Rabi' al-thani",
    "Jumada al-ula",
    "Jumada al-ukhra",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// A date in the tabular Hijri calendar.
///
/// Years are 354 days, or 355 in the eleven leap years of each 30-year cycle. Month
/// lengths alternate 30/29 beginning with Muharram, with the leap day appended to
/// Dhu al-Hijjah. This is the arithmetic calendar of the original record-keeper, not
/// an observational one, so conversion is exact and deterministic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    /// Create a validated Hijri calendar date.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if year < 1 {
            return Err(CalendarError::InvalidYear { year });
        }
        if !(1..=12).contains(&month) || day < 1 || day > Self::month_length(year, month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(HijriDate { year, month, day })
    }

    /// Whether `year` is one of the eleven leap years of its 30-year cycle.
    pub fn is_leap_year(year: i32) -> bool {
        (11 * year as i64 + 3).rem_euclid(30) >= 19
    }

    /// Number of days in the given month: odd months 30, even months 29, with
    /// Dhu al-Hijjah extended to 30 in leap years.
    pub fn month_length(year: i32, month: u32) -> u32 {
        if month % 2 == 1 || (month == 12 && Self::is_leap_year(year)) {
            30
        } else {
            29
        }
    }

    /// Day count of this date.
    pub fn to_jdn(&self) -> i64 {
        let (y, m, d) = (self.year as i64, self.month as i64, self.day as i64);
        // days of the 30/29 alternation before this month
        let elapsed_month_days = (59 * (m - 1) + 1).div_euclid(2);
        d + elapsed_month_days + 354 * (y - 1) + (3 + 11 * y).div_euclid(30) + HIJRI_EPOCH_JDN - 1
    }

    /// The date holding a day count. Total for any input.
    pub fn from_jdn(jdn: i64) -> Self {
        let year = ((30 * (jdn - HIJRI_EPOCH_JDN) + 10646).div_euclid(10631)) as i32;
        let year_start = HijriDate {
            year,
            month: 1,
            day: 1,
        }
        .to_jdn();
        let offset = jdn - year_start - 29;
        // ceil(2 * offset / 59), valid for negative offsets at the year boundary
        let month = (-((-2 * offset).div_euclid(59)) + 1).min(12) as u32;
        let month_start = HijriDate {
            year,
            month,
            day: 1,
        }
        .to_jdn();
        HijriDate {
            year,
            month,
            day: (jdn - month_start + 1) as u32,
        }
    }

    /// Convert a Gregorian calendar-day instant into the Hijri calendar.
    pub fn from_gregorian(date: &NaiveDateTime) -> Self {
        Self::from_jdn(date_to_jdn(date))
    }

    /// Convert this date into a Gregorian calendar-day instant.
    pub fn to_gregorian(&self) -> NaiveDateTime {
        jdn_to_date(self.to_jdn())
    }

    /// Add months with year carry, keeping the day-of-month.
    ///
    /// # Notes
    /// A day-of-month exceeding the target month's length clamps to the last valid
    /// day of that month; the result never rolls into the following month. Negative
    /// `months` carry backwards through the year correctly, although the scheduling
    /// components of this crate only ever step forwards.
    pub fn add_months(&self, months: i32) -> Self {
        let total = self.month as i32 - 1 + months;
        let year = self.year + total.div_euclid(12);
        let month = total.rem_euclid(12) as u32 + 1;
        let day = self.day.min(Self::month_length(year, month));
        HijriDate { year, month, day }
    }

    /// English name of this date's month.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl fmt::Display for HijriDate {
    /// Formats as `dd-mm-yyyyH`, the rendering used by the record-keeper's reports.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{}H", self.day, self.month, self.year)
    }
}
