//! Convert dates between the Gregorian and Hijri calendars and perform lunar month arithmetic.
//!
//! The two calendars share no fixed offset, so every conversion passes through a common
//! integer day count (a Julian day number, abbreviated *JDN* throughout). The Gregorian
//! side uses the proleptic Gregorian algorithm with the century/400-year leap exceptions;
//! the Hijri side uses the tabular 30-year cycle in which eleven years of each cycle
//! receive a leap day at the end of Dhu al-Hijjah. Both directions are exact integer
//! inverses, so round-tripping any valid date returns the original.
//!
//! # Conversion
//!
//! Triple-based conversion is provided by [`convert`], [`to_day_count`] and
//! [`from_day_count`] with the calendar selected by the [`Calendar`] enum. Invalid
//! inputs (year below 1, month or day out of range) fail with a [`CalendarError`].
//!
//! ```rust
//! # use ijara::calendars::{convert, Calendar};
//! let hijri = convert(Calendar::Gregorian, Calendar::Hijri, 2023, 7, 19).unwrap();
//! assert_eq!((1445, 1, 1), hijri);
//! ```
//!
//! # Lunar month arithmetic
//!
//! All recurring-period arithmetic in this crate is anchored to Hijri months even when
//! the stored dates are Gregorian: [`add_lunar_months`] converts its input to the Hijri
//! calendar, steps the month with year carry, and converts back. A day-of-month that
//! exceeds the target month's length (day 30 landing in a 29-day month) clamps to the
//! last valid day rather than rolling into the next month.
//!
//! ```rust
//! # use ijara::calendars::{add_lunar_months, ndt};
//! // one lunar month is 29 or 30 calendar days, never 31
//! let next = add_lunar_months(&ndt(2024, 1, 15), 1);
//! assert_eq!(ndt(2024, 2, 14), next);
//! ```

mod convert;
mod daycount;
mod hijri;
mod lunation;

pub use crate::calendars::{
    convert::{convert, from_day_count, to_day_count, Calendar, CalendarError},
    daycount::{ndt, try_ndt},
    hijri::HijriDate,
    lunation::{add_lunar_months, add_lunar_years},
};
