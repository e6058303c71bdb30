// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # sunpos
//!
//! Apparent position of the Sun for an observer on Earth, after
//! Jean Meeus, *Astronomical Algorithms*, and the *Astronomical Almanac*
//! low-precision solar formulae.
//!
//! A query runs four stages:
//!
//! | Stage | Module | Produces |
//! |-------|--------|----------|
//! | Calendar → Julian Day | [`calendar`] | [`UniversalTime`] |
//! | ΔT = TT − UT | [`delta_t`] | [`TerrestrialTime`] |
//! | Solar theory | [`solar`] | [`SolarCoordinates`] |
//! | Sidereal time, horizon frame | [`horizontal`] | [`HorizontalPosition`] |
//!
//! [`sun_position`] chains them for one instant and one [`Observer`].
//!
//! ```rust
//! use qtty::Degrees;
//! use sunpos::{CivilDate, Observer, SunPosition};
//!
//! let sao_paulo = Observer::new(Degrees::new(-46.6332), Degrees::new(-23.5666))?;
//! let sun = SunPosition::at_civil(CivilDate::new(2012, 10, 12.0), &sao_paulo);
//!
//! assert_eq!(sun.ut.value(), 2_456_212.5);
//! assert!((sun.solar.right_ascension.value() - 13.17).abs() < 0.01);
//! assert!(sun.horizontal.altitude.value() < 0.0); // local night
//! # Ok::<(), sunpos::Error>(())
//! ```
//!
//! # Time scales
//!
//! Julian Days are typed by the scale they count on:
//!
//! | Marker | Alias | Used for |
//! |--------|-------|----------|
//! | [`UT`] | [`UniversalTime`] | civil input, sidereal time |
//! | [`TT`] | [`TerrestrialTime`] | solar theory |
//!
//! The difference **ΔT = TT − UT** is interpolated from a yearly table
//! (−700 … 2027) and applied by [`ut_to_tt`] / [`tt_to_ut`] or
//! [`Time::to`].
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every public value type.
//!   Instants and quantities are written as bare numbers.
//!
//! # Logging
//!
//! Pipeline stages emit `trace!` records through the [`log`] facade, and
//! ΔT queries outside the table emit a `debug!`. No logger is installed.

pub mod calendar;
pub mod delta_t;
mod error;
pub mod horizontal;
pub(crate) mod instant;
mod julian_date_ext;
pub mod math;
mod observer;
pub(crate) mod scales;
#[cfg(feature = "serde")]
mod serde_quantity;
pub mod sexagesimal;
pub mod solar;

use chrono::{DateTime, Utc};
use qtty::Seconds;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    calendar_date, decimal_year, from_julian_day, julian_day, CalendarDate, CalendarValue,
    CivilDate, JulianDayFormat,
};
pub use delta_t::{estimate_delta_t, tt_to_ut, ut_to_tt, DeltaTEntry};
pub use error::{Error, Result};
pub use horizontal::{to_horizontal, HorizontalPosition};
pub use instant::{Time, TimeScale};
pub use julian_date_ext::J2000_JD;
pub use observer::Observer;
pub use scales::{TT, UT};
pub use sexagesimal::{Sexagesimal, SexagesimalUnit};
pub use solar::{apparent_position, solar_equatorial, EquatorialPosition, SolarCoordinates};

/// Universal Time, the Earth-rotation scale civil dates are read in.
///
/// This is a type alias for [`Time<UT>`].
pub type UniversalTime = Time<UT>;

/// Terrestrial Time, the uniform scale of the solar theory.
///
/// This is a type alias for [`Time<TT>`].
pub type TerrestrialTime = Time<TT>;

/// Solar position for one instant and one observer.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    pub ut: UniversalTime,
    pub tt: TerrestrialTime,
    /// TT − UT at this instant.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub delta_t: Seconds,
    pub solar: SolarCoordinates,
    pub horizontal: HorizontalPosition,
}

impl SunPosition {
    /// Position at a civil date and time read as UT.
    pub fn at_civil(date: CivilDate, observer: &Observer) -> Self {
        sun_position(date.to_julian_day(), observer)
    }

    /// Position at a UTC timestamp (UTC is taken as UT).
    pub fn from_utc(datetime: DateTime<Utc>, observer: &Observer) -> Self {
        Self::at_civil(CivilDate::from_datetime(&datetime), observer)
    }

    /// Right ascension and declination only.
    #[inline]
    pub fn equatorial(&self) -> EquatorialPosition {
        self.solar.equatorial()
    }
}

/// Runs the full pipeline: UT → TT, solar theory on TT, horizon frame on UT.
pub fn sun_position(ut: UniversalTime, observer: &Observer) -> SunPosition {
    let delta_t = ut.delta_t();
    let tt = ut_to_tt(ut);
    log::trace!("sun_position: {ut} -> {tt} (ΔT = {:.3} s)", delta_t.value());

    let solar = apparent_position(tt);
    let horizontal = to_horizontal(ut, &solar.equatorial(), observer);

    SunPosition {
        ut,
        tt,
        delta_t,
        solar,
        horizontal,
    }
}
