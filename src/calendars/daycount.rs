use chrono::prelude::*;

use crate::calendars::CalendarError;

/// Day number of the proleptic Gregorian epoch, expressed at UTC midnight.
///
/// The astronomical epoch is JD 1721425.5; every date in this module is a midnight
/// instant so the half-day offset is dropped and all arithmetic stays in integers.
pub(crate) const GREGORIAN_EPOCH_JDN: i64 = 1_721_424;

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Create a `NaiveDateTime` with default null time, failing on invalid input.
///
/// This is the boundary-crossing variant of [`ndt`] for values received from a
/// caller rather than written in source.
pub fn try_ndt(year: i32, month: u32, day: u32) -> Result<NaiveDateTime, CalendarError> {
    if year < 1 {
        return Err(CalendarError::InvalidYear { year });
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|d| d.and_hms_opt(0, 0, 0).unwrap())
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

pub(crate) fn is_gregorian_leap(year: i32) -> bool {
    year % 4 == 0 && !(year % 100 == 0 && year % 400 != 0)
}

/// Day count of a proleptic Gregorian calendar date.
pub(crate) fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64 - 1;
    let leap_adj: i64 = if month <= 2 {
        0
    } else if is_gregorian_leap(year) {
        -1
    } else {
        -2
    };
    GREGORIAN_EPOCH_JDN
        + 365 * y
        + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        + (367 * month as i64 - 362).div_euclid(12)
        + leap_adj
        + day as i64
}

/// Proleptic Gregorian calendar date of a day count. Total for any input.
pub(crate) fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    let depoch = jdn - GREGORIAN_EPOCH_JDN - 1;
    let quadricent = depoch.div_euclid(146_097);
    let dqc = depoch.rem_euclid(146_097);
    let cent = dqc.div_euclid(36_524);
    let dcent = dqc.rem_euclid(36_524);
    let quad = dcent.div_euclid(1461);
    let dquad = dcent.rem_euclid(1461);
    let yindex = dquad.div_euclid(365);
    let mut year = (quadricent * 400 + cent * 100 + quad * 4 + yindex) as i32;
    if !(cent == 4 || yindex == 4) {
        year += 1;
    }
    let yearday = jdn - gregorian_to_jdn(year, 1, 1);
    let leapadj = if jdn < gregorian_to_jdn(year, 3, 1) {
        0
    } else if is_gregorian_leap(year) {
        1
    } else {
        2
    };
    let month = (((yearday + leapadj) * 12) + 373).div_euclid(367) as u32;
    let day = (jdn - gregorian_to_jdn(year, month, 1) + 1) as u32;
    (year, month, day)
}

pub(crate) fn date_to_jdn(date: &NaiveDateTime) -> i64 {
    gregorian_to_jdn(date.year(), date.month(), date.day())
}

pub(crate) fn jdn_to_date(jdn: i64) -> NaiveDateTime {
    let (year, month, day) = jdn_to_gregorian(jdn);
    ndt(year, month, day)
}
