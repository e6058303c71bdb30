// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Calendar ⇄ Julian Day
//!
//! Conversion between civil calendar dates and Julian Days following
//! Jean Meeus, *Astronomical Algorithms* (2nd ed. 1998), chapter 7.
//!
//! Dates on or after **1582-10-15** are Gregorian; earlier dates are read in
//! the Julian calendar (the century correction `B` is forced to zero).  Years
//! use astronomical numbering: 1 BC is year 0, 2 BC is year −1.
//!
//! Julian Days are on whatever time scale the civil date was given in.  The
//! pipeline feeds Universal Time, so [`julian_day`] returns a
//! [`UniversalTime`].
//!
//! ```rust
//! use sunpos::calendar::{julian_day, calendar_date};
//!
//! let jd = julian_day(2000, 1, 1.0, 12.0, 0.0, 0.0);
//! assert_eq!(jd.value(), 2_451_545.0);
//!
//! let date = calendar_date(jd.value()).unwrap();
//! assert_eq!((date.year, date.month), (2000, 1));
//! ```

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::{Error, Result};
use crate::UniversalTime;

/// First Julian Day number (at noon) that is read in the Gregorian calendar.
const GREGORIAN_START_JDN: f64 = 2_299_161.0;

/// A civil date and time of day.
///
/// `day` may carry a fraction; `hour`, `minute` and `second` are added on
/// top of it.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl CivilDate {
    /// Date at 0h, without validation.
    pub const fn new(year: i32, month: u32, day: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0.0,
            minute: 0.0,
            second: 0.0,
        }
    }

    /// Date at 0h, validating month and day.
    pub fn try_new(year: i32, month: u32, day: f64) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { month });
        }
        if !day.is_finite() || !(0.0..32.0).contains(&day) {
            return Err(Error::InvalidDay { day });
        }
        Ok(Self::new(year, month, day))
    }

    /// Same date with a time of day.
    ///
    /// Components must be finite and non-negative; overflowing values such as
    /// `minute = 90` are accepted and simply carried into the day fraction.
    pub fn with_time(self, hour: f64, minute: f64, second: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !(valid(hour) && valid(minute) && valid(second)) {
            return Err(Error::InvalidTimeOfDay {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            ..self
        })
    }

    /// Civil date of a UTC timestamp, with sub-second precision.
    pub fn from_datetime(datetime: &DateTime<Utc>) -> Self {
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: f64::from(datetime.day()),
            hour: f64::from(datetime.hour()),
            minute: f64::from(datetime.minute()),
            second: f64::from(datetime.second())
                + f64::from(datetime.nanosecond()) / 1e9,
        }
    }

    /// Day of month with the time of day folded in.
    #[inline]
    pub fn fractional_day(&self) -> f64 {
        self.day + self.hour / 24.0 + self.minute / 1_440.0 + self.second / 86_400.0
    }

    /// Julian Day of this date.
    pub fn to_julian_day(&self) -> UniversalTime {
        UniversalTime::new(julian_day_number(self.year, self.month, self.fractional_day()))
    }
}

impl From<DateTime<Utc>> for CivilDate {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(&datetime)
    }
}

/// A calendar date recovered from a Julian Day; `day` carries the time of
/// day as a fraction.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: f64,
}

impl From<CalendarDate> for CivilDate {
    fn from(date: CalendarDate) -> Self {
        CivilDate::new(date.year, date.month, date.day)
    }
}

/// Output mode of [`from_julian_day`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JulianDayFormat {
    /// Calendar date with fractional day.
    #[default]
    Day,
    /// Year with the elapsed part of the year as a fraction.
    Year,
}

/// Result of [`from_julian_day`], one variant per [`JulianDayFormat`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarValue {
    Date(CalendarDate),
    DecimalYear(f64),
}

/// Julian Day of a civil date and time (Meeus 7.1).
///
/// ```rust
/// use sunpos::calendar::julian_day;
/// assert_eq!(julian_day(1582, 10, 15.0, 0.0, 0.0, 0.0).value(), 2_299_160.5);
/// ```
pub fn julian_day(
    year: i32,
    month: u32,
    day: f64,
    hour: f64,
    minute: f64,
    second: f64,
) -> UniversalTime {
    CivilDate {
        year,
        month,
        day,
        hour,
        minute,
        second,
    }
    .to_julian_day()
}

/// Core of Meeus 7.1 on a fractional day of month.
fn julian_day_number(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    let b = if is_julian_calendar(year, month, day) {
        0.0
    } else {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    };

    (365.25 * (y + 4_716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1_524.5
}

/// Dates strictly before 1582-10-15 are in the Julian calendar.
#[inline]
fn is_julian_calendar(year: i32, month: u32, day: f64) -> bool {
    year < 1582 || (year == 1582 && (month < 10 || (month == 10 && day < 15.0)))
}

/// Inverse of [`julian_day`] (Meeus 7.3).
///
/// Julian Days on or after JD 2299160.5 are returned as Gregorian dates,
/// earlier ones as Julian-calendar dates.
///
/// # Errors
/// [`Error::UnsupportedJulianDay`] for negative or non-finite input; the
/// algorithm is not defined before the Julian epoch.
pub fn from_julian_day(jd: f64, format: JulianDayFormat) -> Result<CalendarValue> {
    Ok(match format {
        JulianDayFormat::Day => CalendarValue::Date(calendar_date(jd)?),
        JulianDayFormat::Year => CalendarValue::DecimalYear(decimal_year(jd)?),
    })
}

/// Calendar date of a Julian Day.
///
/// # Errors
/// See [`from_julian_day`].
pub fn calendar_date(jd: f64) -> Result<CalendarDate> {
    if !jd.is_finite() || jd < 0.0 {
        return Err(Error::UnsupportedJulianDay { jd });
    }

    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z >= GREGORIAN_START_JDN {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    } else {
        z
    };

    let b = a + 1_524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4_716.0 } else { c - 4_715.0 };

    Ok(CalendarDate {
        year: year as i32,
        month: month as u32,
        day,
    })
}

/// Year of a Julian Day with the elapsed fraction of that year.
///
/// The fraction is the time since January 1st 0h divided by the length of
/// that calendar year, measured in the calendar the date is read in. Julian
/// years before the reform are 366 days in every fourth year, centuries
/// included, and 1582 is 355 days long.
///
/// # Errors
/// See [`from_julian_day`].
pub fn decimal_year(jd: f64) -> Result<f64> {
    let date = calendar_date(jd)?;
    let new_year = julian_day_number(date.year, 1, 1.0);
    let next_new_year = julian_day_number(date.year + 1, 1, 1.0);
    Ok(f64::from(date.year) + (jd - new_year) / (next_new_year - new_year))
}

/// Gregorian leap-year rule, applied to every year.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 366 for Gregorian leap years, 365 otherwise.
#[inline]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    #[test]
    fn j2000_epoch() {
        assert_eq!(julian_day(2000, 1, 1.0, 12.0, 0.0, 0.0).value(), 2_451_545.0);
    }

    #[test]
    fn gregorian_cutover() {
        assert_eq!(julian_day(1582, 10, 15.0, 0.0, 0.0, 0.0).value(), 2_299_160.5);
        // Julian calendar: B = 0, and the day before the reform follows directly.
        assert_eq!(julian_day(1582, 10, 4.0, 0.0, 0.0, 0.0).value(), 2_299_159.5);
    }

    #[test]
    fn meeus_examples() {
        // Example 7.a: 1957 October 4.81 (Sputnik 1).
        assert_abs_diff_eq!(
            CivilDate::new(1957, 10, 4.81).to_julian_day().value(),
            2_436_116.31,
            epsilon = 1e-9
        );
        // Example 7.b: 333 January 27.5 (Julian calendar).
        assert_abs_diff_eq!(
            CivilDate::new(333, 1, 27.5).to_julian_day().value(),
            1_842_713.0,
            epsilon = 1e-9
        );
        // Julian-calendar year 0 and the epoch itself.
        assert_eq!(julian_day(-4712, 1, 1.0, 12.0, 0.0, 0.0).value(), 0.0);
    }

    #[test]
    fn time_of_day_folds_into_the_fraction() {
        let jd = julian_day(2012, 10, 12.0, 6.0, 30.0, 36.0).value();
        assert_abs_diff_eq!(jd, 2_456_212.5 + 6.51 / 24.0, epsilon = 1e-9);
    }

    #[test]
    fn inverse_meeus_examples() {
        // Example 7.c: JD 2436116.31 → 1957 October 4.81.
        let date = calendar_date(2_436_116.31).unwrap();
        assert_eq!((date.year, date.month), (1957, 10));
        assert_abs_diff_eq!(date.day, 4.81, epsilon = 1e-6);

        // 1842713.0 → 333 January 27.5 (Julian calendar).
        let date = calendar_date(1_842_713.0).unwrap();
        assert_eq!((date.year, date.month), (333, 1));
        assert_abs_diff_eq!(date.day, 27.5, epsilon = 1e-9);

        // -1000 July 12.5: astronomical year numbering.
        let date = calendar_date(1_356_001.0).unwrap();
        assert_eq!((date.year, date.month), (-1000, 7));
        assert_abs_diff_eq!(date.day, 12.5, epsilon = 1e-9);
    }

    #[test]
    fn inverse_across_the_reform() {
        let before = calendar_date(2_299_159.5).unwrap();
        assert_eq!((before.year, before.month, before.day), (1582, 10, 4.0));
        let after = calendar_date(2_299_160.5).unwrap();
        assert_eq!((after.year, after.month, after.day), (1582, 10, 15.0));
    }

    #[test]
    fn gregorian_roundtrip() {
        let mut year = 1583;
        while year <= 2400 {
            for month in 1..=12 {
                for &day in &[1.0, 15.25, 28.999] {
                    let civil = CivilDate::new(year, month, day);
                    let jd = civil.to_julian_day().value();
                    let back = calendar_date(jd).unwrap();
                    assert_eq!((back.year, back.month), (year, month), "jd {jd}");
                    assert_abs_diff_eq!(back.day, day, epsilon = 1e-6);
                }
            }
            year += 37;
        }
    }

    #[test]
    fn julian_day_roundtrip() {
        let mut jd = 0.0;
        while jd < 2_600_000.0 {
            let date = calendar_date(jd).unwrap();
            let back = CivilDate::from(date).to_julian_day().value();
            assert_abs_diff_eq!(back, jd, epsilon = 1e-6);
            jd += 12_345.678;
        }
    }

    #[test]
    fn negative_julian_day_is_rejected() {
        assert_eq!(
            calendar_date(-0.5),
            Err(Error::UnsupportedJulianDay { jd: -0.5 })
        );
        assert!(decimal_year(f64::NAN).is_err());
    }

    #[test]
    fn decimal_year_output() {
        // Midnight starting 2012-10-12 is day 285 of a leap year.
        let jd = julian_day(2012, 10, 12.0, 0.0, 0.0, 0.0).value();
        let year = decimal_year(jd).unwrap();
        assert_abs_diff_eq!(year, 2012.0 + 285.0 / 366.0, epsilon = 1e-9);

        assert_eq!(decimal_year(julian_day(2001, 1, 1.0, 0.0, 0.0, 0.0).value()), Ok(2001.0));
        // J2000.0 is half a day into a leap year.
        assert_abs_diff_eq!(
            decimal_year(2_451_545.0).unwrap(),
            2000.0 + 0.5 / 366.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn decimal_year_across_julian_century_leap_years() {
        // 1500 is a leap year in the Julian calendar but not by the
        // Gregorian rule.
        let last_evening = julian_day(1500, 12, 31.0, 18.0, 0.0, 0.0).value();
        let new_year = julian_day(1501, 1, 1.0, 0.0, 0.0, 0.0).value();
        assert_eq!(new_year - julian_day(1500, 1, 1.0, 0.0, 0.0, 0.0).value(), 366.0);

        let before = decimal_year(last_evening).unwrap();
        let after = decimal_year(new_year).unwrap();
        assert_abs_diff_eq!(before, 1500.0 + 365.75 / 366.0, epsilon = 1e-9);
        assert!(before < 1501.0);
        assert_eq!(after, 1501.0);
        assert!(before < after);

        // Monotonic hour by hour through every turn of the century.
        for year in [1100, 1300, 1400, 1500, 1582, 1700] {
            let start = julian_day(year, 12, 30.0, 0.0, 0.0, 0.0).value();
            let mut previous = decimal_year(start).unwrap();
            for hour in 1..=72 {
                let y = decimal_year(start + f64::from(hour) / 24.0).unwrap();
                assert!(y > previous, "{year} + {hour}h: {y} <= {previous}");
                assert!(y < f64::from(year) + 2.0);
                previous = y;
            }
        }
    }

    #[test]
    fn from_julian_day_dispatches_on_format() {
        match from_julian_day(2_456_212.5, JulianDayFormat::Day).unwrap() {
            CalendarValue::Date(date) => {
                assert_eq!((date.year, date.month, date.day), (2012, 10, 12.0))
            }
            other => panic!("unexpected {other:?}"),
        }
        match from_julian_day(2_456_212.5, JulianDayFormat::Year).unwrap() {
            CalendarValue::DecimalYear(y) => assert!(y > 2012.7 && y < 2012.8),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2012));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2011));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
    }

    #[test]
    fn validation() {
        assert_eq!(CivilDate::try_new(2012, 13, 1.0), Err(Error::InvalidMonth { month: 13 }));
        assert_eq!(CivilDate::try_new(2012, 0, 1.0), Err(Error::InvalidMonth { month: 0 }));
        assert!(CivilDate::try_new(2012, 2, f64::NAN).is_err());
        assert!(CivilDate::try_new(2012, 2, 40.0).is_err());
        let date = CivilDate::try_new(2012, 10, 12.0).unwrap();
        assert!(date.with_time(-1.0, 0.0, 0.0).is_err());
        assert!(date.with_time(0.0, f64::INFINITY, 0.0).is_err());
        assert_eq!(date.with_time(6.0, 0.0, 0.0).unwrap().hour, 6.0);
    }

    #[test]
    fn datetime_input() {
        let dt = Utc.with_ymd_and_hms(2012, 10, 12, 18, 0, 0).unwrap();
        let civil = CivilDate::from(dt);
        assert_eq!((civil.year, civil.month, civil.day), (2012, 10, 12.0));
        assert_eq!(civil.to_julian_day().value(), 2_456_213.25);
    }
}
