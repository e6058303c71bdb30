// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! | Marker | Description | Relation to JD(TT) |
//! |--------|-------------|--------------------|
//! | [`TT`] | Terrestrial Time, the uniform scale of the solar theory | identity |
//! | [`UT`] | Universal Time, tied to Earth rotation | `+ ΔT` |

use super::instant::TimeScale;
use qtty::Days;

/// Terrestrial Time, the uniform dynamical scale used by the ephemeris.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "TT";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Universal Time, the civil scale tied to Earth's rotation.
///
/// Converting to JD(TT) adds the ΔT estimated from the historical table in
/// [`delta_t`](crate::delta_t); the inverse is a fixed-point iteration.
/// Sidereal time and hour angles are computed on this axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "UT";

    #[inline]
    fn to_jd_tt(ut_value: Days) -> Days {
        super::delta_t::ut_to_tt(super::instant::Time::<UT>::from_days(ut_value)).quantity()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        super::delta_t::tt_to_ut(super::instant::Time::<TT>::from_days(jd_tt)).quantity()
    }
}

impl From<super::instant::Time<UT>> for super::instant::Time<TT> {
    #[inline]
    fn from(t: super::instant::Time<UT>) -> Self {
        t.to::<TT>()
    }
}

impl From<super::instant::Time<TT>> for super::instant::Time<UT> {
    #[inline]
    fn from(t: super::instant::Time<TT>) -> Self {
        t.to::<UT>()
    }
}
