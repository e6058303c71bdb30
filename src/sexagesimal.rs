// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degrees/hours to sexagesimal components for display.

use std::fmt;

use qtty::{Degrees, HourAngles};

/// Whether the components are arc (°′″) or time (h m s) units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SexagesimalUnit {
    Arc,
    Time,
}

/// An angle split into whole units, minutes and seconds.
///
/// The whole and minute parts are truncated toward zero; the sign is held
/// separately so `-0°30′` survives the split.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sexagesimal {
    pub negative: bool,
    /// Degrees or hours.
    pub whole: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub unit: SexagesimalUnit,
}

impl Sexagesimal {
    /// `d°m′s″` from decimal degrees.
    pub fn from_degrees(angle: Degrees) -> Self {
        Self::split(angle.value(), SexagesimalUnit::Arc)
    }

    /// `h m s` from decimal hours.
    pub fn from_hours(hours: HourAngles) -> Self {
        Self::split(hours.value(), SexagesimalUnit::Time)
    }

    fn split(value: f64, unit: SexagesimalUnit) -> Self {
        let magnitude = value.abs();
        let whole = magnitude.trunc();
        let minutes = ((magnitude - whole) * 60.0).trunc();
        let seconds = ((magnitude - whole) * 60.0 - minutes) * 60.0;
        Self {
            negative: value.is_sign_negative() && magnitude > 0.0,
            whole: whole as u32,
            minutes: minutes as u32,
            seconds,
            unit,
        }
    }

    /// Back to a signed decimal value in the original unit.
    pub fn to_decimal(&self) -> f64 {
        let magnitude =
            f64::from(self.whole) + f64::from(self.minutes) / 60.0 + self.seconds / 3_600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for Sexagesimal {
    /// Seconds are shown with the formatter's precision (default 2) and
    /// carried into minutes and whole units when rounding reaches 60.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        let scale = 10f64.powi(precision as i32);

        let mut seconds = (self.seconds * scale).round() / scale;
        let mut minutes = self.minutes;
        let mut whole = self.whole;
        if seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            whole += 1;
        }

        let sign = if self.negative { "-" } else { "" };
        let width = if precision == 0 { 2 } else { precision + 3 };
        match self.unit {
            SexagesimalUnit::Arc => write!(
                f,
                "{sign}{whole:02}°{minutes:02}′{seconds:0width$.precision$}″"
            ),
            SexagesimalUnit::Time => write!(
                f,
                "{sign}{whole:02}h{minutes:02}m{seconds:0width$.precision$}s"
            ),
        }
    }
}
