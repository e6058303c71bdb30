// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! J2000.0-relative counts shared by the solar and sidereal formulas.

use qtty::*;

use super::instant::{Time, TimeScale};

/// J2000.0 epoch as a raw Julian Day number (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

impl<S: TimeScale> Time<S> {
    /// J2000.0 epoch on this scale's axis.
    pub const J2000: Self = Self::new(J2000_JD);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Days elapsed since J2000.0 on this scale (`D` in the solar formulas).
    #[inline]
    pub fn days_since_j2000(&self) -> f64 {
        (*self - Self::J2000).value()
    }

    /// Julian centuries since J2000.0 (`T` in the nutation and sidereal formulas).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// The Julian Day of the preceding 0h on this scale.
    ///
    /// Julian Days change at noon, so civil midnight sits at `.5`.
    #[inline]
    pub fn previous_midnight(&self) -> Self {
        Self::new((self.value() - 0.5).trunc() + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::{TT, UT};

    #[test]
    fn j2000_is_zero_days() {
        assert_eq!(Time::<TT>::J2000.days_since_j2000(), 0.0);
        assert_eq!(Time::<UT>::new(2_451_546.5).days_since_j2000(), 1.5);
    }

    #[test]
    fn centuries_since_j2000() {
        let jd = Time::<TT>::J2000 + Days::new(36_525.0 * 3.0);
        assert!((jd.julian_centuries() - Centuries::new(3.0)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn previous_midnight_of_noon_and_evening() {
        assert_eq!(Time::<UT>::new(2_451_545.0).previous_midnight().value(), 2_451_544.5);
        assert_eq!(Time::<UT>::new(2_451_545.75).previous_midnight().value(), 2_451_545.5);
        assert_eq!(Time::<UT>::new(2_456_212.5).previous_midnight().value(), 2_456_212.5);
    }
}
