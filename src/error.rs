// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for input validation.
//!
//! The numeric pipeline itself is total; errors only arise when building
//! inputs (civil dates, observers) or when inverting a Julian Day outside the
//! supported range.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid month {month} (must be between 1 and 12)")]
    InvalidMonth { month: u32 },

    #[error("invalid day {day} (must be finite and between 0 and 32)")]
    InvalidDay { day: f64 },

    #[error("invalid time of day {hour}h {minute}m {second}s")]
    InvalidTimeOfDay { hour: f64, minute: f64, second: f64 },

    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("non-finite {field} in geographic coordinate")]
    NonFiniteCoordinate { field: &'static str },

    /// Calendar inversion is only defined for finite, non-negative Julian Days.
    #[error("unsupported Julian Day {jd} (must be finite and >= 0)")]
    UnsupportedJulianDay { jd: f64 },
}
