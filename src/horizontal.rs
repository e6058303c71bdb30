// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Sidereal time and horizontal coordinates
//!
//! Rotates an apparent equatorial position into the observer's horizon
//! frame:
//!
//! 1. Greenwich mean sidereal time from the UT Julian Day (USNO
//!    approximation, ≈0.1 s per century).
//! 2. Apparent sidereal time via the short equation of the equinoxes.
//! 3. Local sidereal time and hour angle for the observer's longitude.
//! 4. Azimuth (north through east) and geometric altitude.
//!
//! Sidereal time follows Earth rotation, so every function here takes a
//! [`UniversalTime`].
//!
//! ## Refraction
//!
//! [`refraction`] is Sæmundsson's formula. It is defined here as zero for
//! altitudes below −1° (the formula has a pole at −5.11°) and never goes
//! negative. The reported [`HorizontalPosition::altitude`] is geometric;
//! add the correction with [`HorizontalPosition::apparent_altitude`].

use qtty::{Arcminutes, Degree, Degrees, HourAngles};

use crate::math::{asin_deg, atan2_deg, cos_deg, fix_angle, fix_hour, sin_deg, tan_deg};
use crate::observer::Observer;
use crate::solar::EquatorialPosition;
use crate::UniversalTime;

/// Below this geometric altitude no refraction is applied.
const REFRACTION_CUTOFF_DEG: f64 = -1.0;

/// Horizon-frame position of a body for one observer.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalPosition {
    /// Measured from north through east, in `[0, 360)`.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub azimuth: Degrees,
    /// Geometric altitude above the horizon.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub altitude: Degrees,
    /// Local hour angle, in `[0, 360)`.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub hour_angle: Degrees,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub local_sidereal_time: HourAngles,
    /// Refraction estimate at [`altitude`](Self::altitude).
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub refraction: Arcminutes,
}

impl HorizontalPosition {
    /// Geometric altitude plus refraction.
    #[inline]
    pub fn apparent_altitude(&self) -> Degrees {
        self.altitude + self.refraction.to::<Degree>()
    }

    /// Whether the geometric altitude is above the horizon.
    #[inline]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude.value() > 0.0
    }
}

/// Greenwich mean sidereal time, in `[0, 24)` hours.
pub fn greenwich_mean_sidereal_time(jd: UniversalTime) -> HourAngles {
    let jd0 = jd.previous_midnight();
    let d0 = jd0.days_since_j2000();
    let h = (jd - jd0).value() * 24.0;
    let t = jd.julian_centuries().value();

    HourAngles::new(fix_hour(
        6.697_374_558 + 0.065_709_824_419_08 * d0 + 1.002_737_909_35 * h + 0.000_026 * t * t,
    ))
}

/// Nutation in right ascension (GAST − GMST), in hours.
pub fn equation_of_the_equinoxes(jd: UniversalTime) -> HourAngles {
    let d = jd.days_since_j2000();
    let omega = 125.04 - 0.052_954 * d;
    let l = 280.47 + 0.985_65 * d;
    let epsilon = 23.4393 - 0.000_000_4 * d;

    HourAngles::new(
        (-0.000_319 * sin_deg(omega) - 0.000_024 * sin_deg(2.0 * l)) * cos_deg(epsilon),
    )
}

/// Greenwich apparent sidereal time, in `[0, 24)` hours.
pub fn greenwich_apparent_sidereal_time(jd: UniversalTime) -> HourAngles {
    let gast = greenwich_mean_sidereal_time(jd) + equation_of_the_equinoxes(jd);
    HourAngles::new(fix_hour(gast.value()))
}

/// Local apparent sidereal time at an east-positive longitude.
pub fn local_sidereal_time(jd: UniversalTime, longitude: Degrees) -> HourAngles {
    let gast = greenwich_apparent_sidereal_time(jd);
    HourAngles::new(fix_hour(gast.value() + longitude.value() / 15.0))
}

/// Atmospheric refraction for a geometric altitude, in arc-minutes.
///
/// Zero below −1° and clamped at zero near the zenith, where the formula
/// dips slightly negative.
pub fn refraction(altitude: Degrees) -> Arcminutes {
    let a = altitude.value();
    if a.is_nan() || a < REFRACTION_CUTOFF_DEG {
        return Arcminutes::new(0.0);
    }
    let r = 1.02 / tan_deg(a + 10.3 / (a + 5.11));
    Arcminutes::new(r.max(0.0))
}

/// Horizontal coordinates of an apparent equatorial position.
pub fn to_horizontal(
    jd: UniversalTime,
    equatorial: &EquatorialPosition,
    observer: &Observer,
) -> HorizontalPosition {
    let lst = local_sidereal_time(jd, observer.longitude);
    let h = fix_angle((lst.value() - equatorial.right_ascension.value()) * 15.0);
    let dec = equatorial.declination.value();
    let lat = observer.latitude.value();

    let azimuth = fix_angle(atan2_deg(
        -cos_deg(dec) * sin_deg(h),
        -sin_deg(lat) * cos_deg(dec) * cos_deg(h) + cos_deg(lat) * sin_deg(dec),
    ));
    let altitude = Degrees::new(asin_deg(
        sin_deg(lat) * sin_deg(dec) + cos_deg(lat) * cos_deg(dec) * cos_deg(h),
    ));

    log::trace!(
        "horizon at {jd}: LST = {:.6}h, H = {h:.5}°, A = {azimuth:.5}°, a = {:.5}°",
        lst.value(),
        altitude.value()
    );

    HorizontalPosition {
        azimuth: Degrees::new(azimuth),
        altitude,
        hour_angle: Degrees::new(h),
        local_sidereal_time: lst,
        refraction: refraction(altitude),
    }
}
