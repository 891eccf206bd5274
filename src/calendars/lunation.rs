use chrono::prelude::*;

use crate::calendars::hijri::HijriDate;

/// Add lunar months to a Gregorian calendar-day instant.
///
/// The date is converted into the Hijri calendar, the month is stepped with year
/// carry, and the result converted back. Recurring-period arithmetic is anchored
/// to lunar months this way even though agreement dates are stored Gregorian;
/// stepping the Gregorian month instead would silently drift every schedule by
/// roughly eleven days a year against the contract calendar.
///
/// # Notes
/// Day-of-month is preserved, clamping to the last valid day when the target
/// month is shorter (see [`HijriDate::add_months`]).
///
/// # Examples
/// ```rust
/// # use ijara::calendars::{add_lunar_months, ndt};
/// assert_eq!(ndt(2023, 8, 18), add_lunar_months(&ndt(2023, 7, 19), 1));
/// ```
pub fn add_lunar_months(date: &NaiveDateTime, months: i32) -> NaiveDateTime {
    HijriDate::from_gregorian(date)
        .add_months(months)
        .to_gregorian()
}

/// Add lunar years to a Gregorian calendar-day instant, as twelve-month steps.
pub fn add_lunar_years(date: &NaiveDateTime, years: i32) -> NaiveDateTime {
    add_lunar_months(date, years * 12)
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::ndt;

    #[test]
    fn test_add_lunar_months() {
        // 2023-07-19 is 1 Muharram 1445; Muharram has 30 days, Safar 29
        let options: Vec<(NaiveDateTime, i32, NaiveDateTime)> = vec![
            (ndt(2023, 7, 19), 1, ndt(2023, 8, 18)),
            (ndt(2023, 7, 19), 2, ndt(2023, 9, 16)),
            (ndt(2023, 7, 19), 12, ndt(2024, 7, 8)),
            (ndt(2023, 7, 19), 0, ndt(2023, 7, 19)),
        ];
        for (date, months, expected) in options.iter() {
            assert_eq!(*expected, add_lunar_months(date, *months));
        }
    }

    #[test]
    fn test_twelve_months_equals_one_year() {
        let mut date = ndt(2022, 1, 3);
        for _ in 0..40 {
            assert_eq!(add_lunar_years(&date, 1), add_lunar_months(&date, 12));
            assert_eq!(add_lunar_years(&date, 3), add_lunar_months(&date, 36));
            date = date + chrono::Days::new(17);
        }
    }

    #[test]
    fn test_lunar_year_is_shorter_than_gregorian() {
        // twelve lunar months are 354 or 355 days
        let start = ndt(2020, 6, 1);
        let after = add_lunar_years(&start, 1);
        let days = (after - start).num_days();
        assert!(days == 354 || days == 355, "lunar year was {days} days");
    }

    #[test]
    fn test_day_clamp_on_short_month() {
        // 30 Muharram 1445 = 2023-08-17; Safar 1445 has 29 days so the day clamps
        let start = HijriDate { year: 1445, month: 1, day: 30 }.to_gregorian();
        let next = add_lunar_months(&start, 1);
        let hijri = HijriDate::from_gregorian(&next);
        assert_eq!(HijriDate { year: 1445, month: 2, day: 29 }, hijri);
    }
}
