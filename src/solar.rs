// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Apparent geocentric position of the Sun
//!
//! Low-order analytic solar theory (the *Astronomical Almanac* "low
//! precision" formulae, ≈0.01° between 1950 and 2050) with the short
//! nutation series and the IAU 1980 mean obliquity from Meeus, chapter 22.
//!
//! All quantities are referred to the TT axis: pass a [`TerrestrialTime`],
//! typically obtained from a UT instant through
//! [`ut_to_tt`](crate::ut_to_tt).
//!
//! ```rust
//! use sunpos::{solar, TerrestrialTime};
//!
//! let sun = solar::apparent_position(TerrestrialTime::new(2_451_545.0));
//! assert!((sun.declination.value() + 23.03).abs() < 0.01);
//! ```
//!
//! The true obliquity `ε = ε₀ + Δε` is the only obliquity used: it drives
//! the ecliptic → equatorial rotation and is the value reported in
//! [`SolarCoordinates::obliquity`].

use qtty::{Arcseconds, AstronomicalUnits, Degree, Degrees, HourAngles, Minutes};

use crate::math::{asin_deg, atan2_deg, cos_deg, fix_angle, fix_hour, sin_deg};
use crate::TerrestrialTime;

/// Mean obliquity at J2000.0: 23°26′21.448″.
const OBLIQUITY_J2000_ARCSEC: f64 = 23.0 * 3_600.0 + 26.0 * 60.0 + 21.448;

/// Right ascension and declination.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialPosition {
    /// In `[0, 24)` hours.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub right_ascension: HourAngles,
    /// In `[-90, 90]` degrees.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub declination: Degrees,
}

/// Nutation in longitude (ΔΨ) and in obliquity (Δε).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nutation {
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub longitude: Degrees,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub obliquity: Degrees,
}

/// Everything the solar theory produces for one TT instant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarCoordinates {
    /// Mean anomaly `g`, in `[0, 360)`.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub mean_anomaly: Degrees,
    /// Mean longitude `q`, in `[0, 360)`.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub mean_longitude: Degrees,
    /// Geocentric apparent ecliptic longitude `L`, in `[0, 360)`.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub apparent_longitude: Degrees,
    pub nutation: Nutation,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub mean_obliquity: Degrees,
    /// True obliquity `ε₀ + Δε`.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub obliquity: Degrees,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub right_ascension: HourAngles,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub declination: Degrees,
    /// Earth–Sun distance.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub distance: AstronomicalUnits,
    /// Apparent minus mean solar time, in `[-720, 720)` minutes.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub equation_of_time: Minutes,
}

impl SolarCoordinates {
    /// Right ascension and declination only.
    #[inline]
    pub fn equatorial(&self) -> EquatorialPosition {
        EquatorialPosition {
            right_ascension: self.right_ascension,
            declination: self.declination,
        }
    }
}

/// Nutation from the four largest terms (Meeus 22, ≈0.5″ in ΔΨ, ≈0.1″ in Δε).
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    // Longitude of the ascending node of the Moon's mean orbit.
    let omega = fix_angle(
        125.04452 - 1_934.136261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0,
    );
    let sun_mean = 280.4665 + 36_000.7698 * t;
    let moon_mean = 218.3165 + 481_267.8813 * t;

    let delta_psi = -17.20 * sin_deg(omega)
        - 1.32 * sin_deg(2.0 * sun_mean)
        - 0.23 * sin_deg(2.0 * moon_mean)
        + 0.21 * sin_deg(2.0 * omega);
    let delta_epsilon = 9.20 * cos_deg(omega)
        + 0.57 * cos_deg(2.0 * sun_mean)
        + 0.10 * cos_deg(2.0 * moon_mean)
        - 0.09 * cos_deg(2.0 * omega);

    Nutation {
        longitude: Arcseconds::new(delta_psi).to::<Degree>(),
        obliquity: Arcseconds::new(delta_epsilon).to::<Degree>(),
    }
}

/// Mean obliquity of the ecliptic, IAU 1980 (Meeus 22.2).
pub fn mean_obliquity(t: f64) -> Degrees {
    let arcsec = OBLIQUITY_J2000_ARCSEC - 46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    Arcseconds::new(arcsec).to::<Degree>()
}

/// Apparent geocentric position of the Sun at a TT instant.
pub fn apparent_position(jd: TerrestrialTime) -> SolarCoordinates {
    let d = jd.days_since_j2000();
    let t = jd.julian_centuries().value();

    let g = fix_angle(357.529 + 0.985_600_28 * d);
    let q = fix_angle(280.459 + 0.985_647_36 * d);
    let l = fix_angle(q + 1.915 * sin_deg(g) + 0.020 * sin_deg(2.0 * g));
    let r = 1.000_14 - 0.016_71 * cos_deg(g) - 0.000_14 * cos_deg(2.0 * g);

    let nutation = nutation(t);
    let mean_obliquity = mean_obliquity(t);
    let e = (mean_obliquity + nutation.obliquity).value();

    let ra = fix_hour(atan2_deg(cos_deg(e) * sin_deg(l), cos_deg(l)) / 15.0);
    let dec = asin_deg(sin_deg(e) * sin_deg(l));
    let eot_hours = fix_hour(q / 15.0 - ra + 12.0) - 12.0;

    log::trace!("sun at {jd}: L = {l:.5}°, ε = {e:.5}°, RA = {ra:.5}h, δ = {dec:.5}°");

    SolarCoordinates {
        mean_anomaly: Degrees::new(g),
        mean_longitude: Degrees::new(q),
        apparent_longitude: Degrees::new(l),
        nutation,
        mean_obliquity,
        obliquity: Degrees::new(e),
        right_ascension: HourAngles::new(ra),
        declination: Degrees::new(dec),
        distance: AstronomicalUnits::new(r),
        equation_of_time: Minutes::new(eot_hours * 60.0),
    }
}

/// Right ascension and declination of the Sun at a TT instant.
#[inline]
pub fn solar_equatorial(jd: TerrestrialTime) -> EquatorialPosition {
    apparent_position(jd).equatorial()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::julian_day;
    use crate::delta_t::ut_to_tt;
    use approx::assert_abs_diff_eq;

    /// 2012-10-12 00:00 UT on the TT axis.
    fn sao_paulo_tt() -> TerrestrialTime {
        ut_to_tt(julian_day(2012, 10, 12.0, 0.0, 0.0, 0.0))
    }

    #[test]
    fn mean_obliquity_at_j2000() {
        assert_abs_diff_eq!(mean_obliquity(0.0).value(), 23.439_291_111, epsilon = 1e-9);
        // Meeus example 22.a: 1987-04-10 0h TD, T = -0.127296372348.
        assert_abs_diff_eq!(
            mean_obliquity(-0.127_296_372_348).value(),
            23.0 + 26.0 / 60.0 + 27.407 / 3_600.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn nutation_meeus_example() {
        // Example 22.a: ΔΨ = -3.788″, Δε = +9.443″ (full series); the four
        // term series agrees to about half an arcsecond.
        let n = nutation(-0.127_296_372_348);
        assert_abs_diff_eq!(n.longitude.value() * 3_600.0, -3.788, epsilon = 0.5);
        assert_abs_diff_eq!(n.obliquity.value() * 3_600.0, 9.443, epsilon = 0.1);
    }

    #[test]
    fn nutation_is_bounded() {
        let mut t = -3.0;
        while t < 3.0 {
            let n = nutation(t);
            assert!(n.longitude.value().abs() <= 18.96 / 3_600.0 + 1e-12);
            assert!(n.obliquity.value().abs() <= 9.96 / 3_600.0 + 1e-12);
            t += 0.0137;
        }
    }

    #[test]
    fn sao_paulo_2012_10_12() {
        let sun = apparent_position(sao_paulo_tt());
        assert_abs_diff_eq!(sun.mean_anomaly.value(), 277.819_069, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.mean_longitude.value(), 200.968_815, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.apparent_longitude.value(), 199.066_229, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.distance.value(), 0.998_002, epsilon = 1e-6);
        assert_abs_diff_eq!(sun.obliquity.value(), 23.436_420, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.right_ascension.value(), 13.172_949, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.declination.value(), -7.465_155, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.equation_of_time.value(), 13.498, epsilon = 1e-2);
    }

    #[test]
    fn j2000_position() {
        let sun = apparent_position(TerrestrialTime::new(2_451_545.0));
        assert_abs_diff_eq!(sun.apparent_longitude.value(), 280.374_714, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.right_ascension.value(), 18.752_312, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.declination.value(), -23.032_220, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.distance.value(), 0.983_306, epsilon = 1e-6);
        assert_abs_diff_eq!(sun.equation_of_time.value(), -3.303, epsilon = 1e-2);
    }

    #[test]
    fn june_solstice_2020() {
        let tt = ut_to_tt(julian_day(2020, 6, 20.0, 21.0, 44.0, 0.0));
        let sun = apparent_position(tt);
        assert_abs_diff_eq!(sun.apparent_longitude.value(), 90.0, epsilon = 0.01);
        assert_abs_diff_eq!(sun.declination.value(), sun.obliquity.value(), epsilon = 1e-4);
        assert_abs_diff_eq!(sun.right_ascension.value(), 6.0, epsilon = 1e-3);
    }

    #[test]
    fn declination_is_bounded_by_obliquity() {
        const JD_1800: f64 = 2_378_496.5;
        const JD_2200: f64 = 2_524_593.5;

        let mut jd = JD_1800;
        while jd < JD_2200 {
            let sun = apparent_position(TerrestrialTime::new(jd));
            let dec = sun.declination.value();
            assert!(dec.abs() <= 23.5, "jd {jd}: δ = {dec}");
            assert!(dec.abs() <= sun.obliquity.value() + 1e-9);
            let ra = sun.right_ascension.value();
            assert!((0.0..24.0).contains(&ra), "jd {jd}: RA = {ra}");
            jd += 3.7;
        }
    }

    #[test]
    fn equatorial_projection() {
        let sun = apparent_position(sao_paulo_tt());
        let eq = solar_equatorial(sao_paulo_tt());
        assert_eq!(eq, sun.equatorial());
        assert_eq!(eq.right_ascension, sun.right_ascension);
    }
}
