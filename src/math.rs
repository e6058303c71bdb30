// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-based trigonometry and range fixing.
//!
//! Every formula in this crate is written in degrees (and hours of right
//! ascension), as in the published low-precision solar algorithms.  These
//! helpers take and return degrees so formula bodies read like the
//! literature; the conversion to radians happens only here.

/// Sine of an angle in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Tangent of an angle in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

/// Arc sine, in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arc cosine, in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Arc tangent, in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// Four-quadrant arc tangent of `y / x`, in degrees within `(-180, 180]`.
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Reduces `value` into `[0, period)`.
///
/// Negative inputs wrap upwards (`fix(-30, 360) == 330`).  Non-finite inputs
/// propagate as `NaN`.
#[inline]
pub fn fix(value: f64, period: f64) -> f64 {
    let reduced = value - period * (value / period).floor();
    if reduced < 0.0 {
        reduced + period
    } else if reduced >= period {
        // (value / period).floor() can round up for tiny negative values.
        reduced - period
    } else {
        reduced
    }
}

/// Reduces an angle in degrees into `[0, 360)`.
#[inline]
pub fn fix_angle(degrees: f64) -> f64 {
    fix(degrees, 360.0)
}

/// Reduces an hour-valued quantity into `[0, 24)`.
#[inline]
pub fn fix_hour(hours: f64) -> f64 {
    fix(hours, 24.0)
}
