// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic position of the observer.
//!
//! Longitude is east-positive and latitude north-positive, both geodetic and
//! in degrees. Coordinates are always addressed by name; there is no tuple
//! form to get the order wrong.
//!
//! ```rust
//! use qtty::Degrees;
//! use sunpos::Observer;
//!
//! // São Paulo, given as 313.3668° E.
//! let obs = Observer::new(Degrees::new(313.3668), Degrees::new(-23.5666))?;
//! assert!((obs.longitude.value() + 46.6332).abs() < 1e-9);
//! # Ok::<(), sunpos::Error>(())
//! ```

use qtty::{Degrees, Meters};

use crate::error::{Error, Result};
use crate::math::fix_angle;

/// An observing site on the Earth's surface.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    /// East-positive, in `(-180, 180]`.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub longitude: Degrees,
    /// North-positive, in `[-90, 90]`.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub latitude: Degrees,
    /// Height above the reference ellipsoid. Carried for callers; the
    /// low-precision solar model does not use it.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub elevation: Meters,
}

impl Observer {
    /// A sea-level observer.
    ///
    /// Longitude is wrapped into `(-180, 180]`, so 313.3668° becomes
    /// −46.6332°.
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteCoordinate`] for NaN or infinite input and
    /// [`Error::InvalidLatitude`] outside `[-90, 90]`.
    pub fn new(longitude: Degrees, latitude: Degrees) -> Result<Self> {
        let lon = longitude.value();
        let lat = latitude.value();
        if !lon.is_finite() {
            return Err(Error::NonFiniteCoordinate { field: "longitude" });
        }
        if !lat.is_finite() {
            return Err(Error::NonFiniteCoordinate { field: "latitude" });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidLatitude { value: lat });
        }

        Ok(Self {
            longitude: Degrees::new(wrap_longitude(lon)),
            latitude,
            elevation: Meters::new(0.0),
        })
    }

    /// Sets the elevation.
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteCoordinate`] if `elevation` is NaN or infinite.
    pub fn with_elevation(mut self, elevation: Meters) -> Result<Self> {
        if !elevation.value().is_finite() {
            return Err(Error::NonFiniteCoordinate { field: "elevation" });
        }
        self.elevation = elevation;
        Ok(self)
    }
}

fn wrap_longitude(lon: f64) -> f64 {
    if lon > -180.0 && lon <= 180.0 {
        return lon;
    }
    let wrapped = fix_angle(lon);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn east_longitude_is_wrapped_west() {
        let obs = Observer::new(Degrees::new(313.3668), Degrees::new(-23.5666)).unwrap();
        assert_abs_diff_eq!(obs.longitude.value(), -46.6332, epsilon = 1e-9);
        assert_eq!(obs.latitude.value(), -23.5666);
        assert_eq!(obs.elevation.value(), 0.0);
    }

    #[test]
    fn in_range_longitude_is_stored_exactly() {
        let obs = Observer::new(Degrees::new(-46.6332), Degrees::new(-23.5666)).unwrap();
        assert_eq!(obs.longitude.value(), -46.6332);
        assert_eq!(obs.longitude.value().to_bits(), (-46.6332f64).to_bits());
        for lon in [-179.999_999, -0.1, 0.1, 12.345_678_9, 180.0] {
            assert_eq!(wrap_longitude(lon).to_bits(), lon.to_bits());
        }
    }

    #[test]
    fn longitude_wrap_boundaries() {
        assert_eq!(wrap_longitude(180.0), 180.0);
        assert_eq!(wrap_longitude(-180.0), 180.0);
        assert_eq!(wrap_longitude(0.0), 0.0);
        assert_eq!(wrap_longitude(-0.5), -0.5);
        assert_abs_diff_eq!(wrap_longitude(540.25), 180.25 - 360.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_longitude(-190.0), 170.0, epsilon = 1e-12);
    }

    #[test]
    fn latitude_out_of_range() {
        let err = Observer::new(Degrees::new(0.0), Degrees::new(90.5)).unwrap_err();
        assert_eq!(err, Error::InvalidLatitude { value: 90.5 });
        assert!(Observer::new(Degrees::new(0.0), Degrees::new(-90.0)).is_ok());
        assert!(Observer::new(Degrees::new(0.0), Degrees::new(90.0)).is_ok());
    }

    #[test]
    fn non_finite_input() {
        assert_eq!(
            Observer::new(Degrees::new(f64::NAN), Degrees::new(0.0)).unwrap_err(),
            Error::NonFiniteCoordinate { field: "longitude" }
        );
        assert_eq!(
            Observer::new(Degrees::new(0.0), Degrees::new(f64::INFINITY)).unwrap_err(),
            Error::NonFiniteCoordinate { field: "latitude" }
        );
        let obs = Observer::new(Degrees::new(0.0), Degrees::new(0.0)).unwrap();
        assert_eq!(
            obs.with_elevation(Meters::new(f64::NAN)).unwrap_err(),
            Error::NonFiniteCoordinate { field: "elevation" }
        );
    }

    #[test]
    fn elevation_is_kept() {
        let obs = Observer::new(Degrees::new(-155.4681), Degrees::new(19.8207))
            .and_then(|o| o.with_elevation(Meters::new(4205.0)))
            .unwrap();
        assert_eq!(obs.elevation.value(), 4205.0);
    }
}
