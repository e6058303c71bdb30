// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T): the UT ↔ TT correction
//!
//! **ΔT = TT − UT** is the accumulated drift of Earth-rotation time against
//! uniform dynamical time.  It is not predictable from theory, so this module
//! carries a table of observed (and, for the last few years, predicted)
//! values and interpolates it.
//!
//! ## Model
//!
//! For a query year the table row with the closest year is located (on an
//! exact tie the earlier row wins).  A quadratic is passed through that row
//! and its two neighbours and evaluated at the query year.  On a uniformly
//! spaced stretch of the table this is Meeus's interpolation formula (3.3)
//!
//! ```text
//! ΔT = y2 + n/2 · (a + b + n·c),   a = y2 − y1,  b = y3 − y2,  c = b − a
//! ```
//!
//! with `n` the signed offset from the central row in table steps.  The table
//! switches from a 100-year to a 1-year step at 1600/1620, so the same
//! quadratic is evaluated in its three-point Lagrange form, which does not
//! assume equal spacing.
//!
//! When the closest row is the first or the last, the three-row window is
//! clamped inward instead of reaching past the table.  Years outside
//! −700…2027 are therefore extrapolated along the edge quadratic; no error
//! is raised.
//!
//! ## Integration with Time Scales
//!
//! The [`UT`](super::UT) scale applies this correction when converted to
//! [`TT`](super::TT), so `Time::<UT>::to::<TT>()` and [`ut_to_tt`] agree.
//!
//! ```rust
//! use sunpos::{calendar::julian_day, delta_t, TT};
//!
//! let ut = julian_day(2012, 10, 12.0, 0.0, 0.0, 0.0);
//! let tt = delta_t::ut_to_tt(ut);
//! assert_eq!(tt, ut.to::<TT>());
//! println!("ΔT = {}", ut.delta_t());
//! ```
//!
//! ## Sources
//! * Meeus (1998), *Astronomical Algorithms*, ch. 3 and 10.
//! * IERS / USNO `deltat.data` and `deltat.preds` series.

use super::calendar::decimal_year;
use super::instant::Time;
use super::julian_date_ext::J2000_JD;
use super::scales::{TT, UT};
use super::{TerrestrialTime, UniversalTime};
use qtty::{Day, Seconds};

/// One tabulated ΔT value.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeltaTEntry {
    pub year: i32,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_quantity"))]
    pub delta_t: Seconds,
}

const fn row(year: i32, seconds: f64) -> DeltaTEntry {
    DeltaTEntry {
        year,
        delta_t: Seconds::new(seconds),
    }
}

/// Number of tabulated rows.
const TERMS: usize = 432;

/// Historical and predicted ΔT in seconds: −700…1600 per century, 1620…2027
/// yearly.  Strictly increasing in year.
#[rustfmt::skip]
static DELTA_T_TABLE: [DeltaTEntry; TERMS] = [
    row(-700, 20400.0), row(-600, 18800.0), row(-500, 17190.0), row(-400, 15530.0), row(-300, 14080.0), row(-200, 12790.0),
    row(-100, 11640.0), row(0, 10580.0), row(100, 9600.0), row(200, 8640.0), row(300, 7680.0), row(400, 6700.0),
    row(500, 5710.0), row(600, 4740.0), row(700, 3810.0), row(800, 2960.0), row(900, 2200.0), row(1000, 1570.0),
    row(1100, 1090.0), row(1200, 740.0), row(1300, 490.0), row(1400, 320.0), row(1500, 200.0), row(1600, 120.0),
    row(1620, 124.0), row(1621, 119.0), row(1622, 115.0), row(1623, 110.0), row(1624, 106.0), row(1625, 102.0),
    row(1626, 98.0), row(1627, 95.0), row(1628, 91.0), row(1629, 88.0), row(1630, 85.0), row(1631, 82.0),
    row(1632, 79.0), row(1633, 77.0), row(1634, 74.0), row(1635, 72.0), row(1636, 70.0), row(1637, 67.0),
    row(1638, 65.0), row(1639, 63.0), row(1640, 62.0), row(1641, 60.0), row(1642, 58.0), row(1643, 57.0),
    row(1644, 55.0), row(1645, 54.0), row(1646, 53.0), row(1647, 51.0), row(1648, 50.0), row(1649, 49.0),
    row(1650, 48.0), row(1651, 47.0), row(1652, 46.0), row(1653, 45.0), row(1654, 44.0), row(1655, 43.0),
    row(1656, 42.0), row(1657, 41.0), row(1658, 40.0), row(1659, 38.0), row(1660, 37.0), row(1661, 36.0),
    row(1662, 35.0), row(1663, 34.0), row(1664, 33.0), row(1665, 32.0), row(1666, 31.0), row(1667, 30.0),
    row(1668, 28.0), row(1669, 27.0), row(1670, 26.0), row(1671, 25.0), row(1672, 24.0), row(1673, 23.0),
    row(1674, 22.0), row(1675, 21.0), row(1676, 20.0), row(1677, 19.0), row(1678, 18.0), row(1679, 17.0),
    row(1680, 16.0), row(1681, 15.0), row(1682, 14.0), row(1683, 14.0), row(1684, 13.0), row(1685, 12.0),
    row(1686, 12.0), row(1687, 11.0), row(1688, 11.0), row(1689, 10.0), row(1690, 10.0), row(1691, 10.0),
    row(1692, 9.0), row(1693, 9.0), row(1694, 9.0), row(1695, 9.0), row(1696, 9.0), row(1697, 9.0),
    row(1698, 9.0), row(1699, 9.0), row(1700, 9.0), row(1701, 9.0), row(1702, 9.0), row(1703, 9.0),
    row(1704, 9.0), row(1705, 9.0), row(1706, 9.0), row(1707, 9.0), row(1708, 10.0), row(1709, 10.0),
    row(1710, 10.0), row(1711, 10.0), row(1712, 10.0), row(1713, 10.0), row(1714, 10.0), row(1715, 10.0),
    row(1716, 10.0), row(1717, 11.0), row(1718, 11.0), row(1719, 11.0), row(1720, 11.0), row(1721, 11.0),
    row(1722, 11.0), row(1723, 11.0), row(1724, 11.0), row(1725, 11.0), row(1726, 11.0), row(1727, 11.0),
    row(1728, 11.0), row(1729, 11.0), row(1730, 11.0), row(1731, 11.0), row(1732, 11.0), row(1733, 11.0),
    row(1734, 12.0), row(1735, 12.0), row(1736, 12.0), row(1737, 12.0), row(1738, 12.0), row(1739, 12.0),
    row(1740, 12.0), row(1741, 12.0), row(1742, 12.0), row(1743, 12.0), row(1744, 13.0), row(1745, 13.0),
    row(1746, 13.0), row(1747, 13.0), row(1748, 13.0), row(1749, 13.0), row(1750, 13.0), row(1751, 14.0),
    row(1752, 14.0), row(1753, 14.0), row(1754, 14.0), row(1755, 14.0), row(1756, 14.0), row(1757, 14.0),
    row(1758, 15.0), row(1759, 15.0), row(1760, 15.0), row(1761, 15.0), row(1762, 15.0), row(1763, 15.0),
    row(1764, 15.0), row(1765, 16.0), row(1766, 16.0), row(1767, 16.0), row(1768, 16.0), row(1769, 16.0),
    row(1770, 16.0), row(1771, 16.0), row(1772, 16.0), row(1773, 16.0), row(1774, 16.0), row(1775, 17.0),
    row(1776, 17.0), row(1777, 17.0), row(1778, 17.0), row(1779, 17.0), row(1780, 17.0), row(1781, 17.0),
    row(1782, 17.0), row(1783, 17.0), row(1784, 17.0), row(1785, 17.0), row(1786, 17.0), row(1787, 17.0),
    row(1788, 17.0), row(1789, 17.0), row(1790, 17.0), row(1791, 17.0), row(1792, 16.0), row(1793, 16.0),
    row(1794, 16.0), row(1795, 16.0), row(1796, 15.0), row(1797, 15.0), row(1798, 14.0), row(1799, 14.0),
    row(1800, 13.7), row(1801, 13.4), row(1802, 13.1), row(1803, 12.9), row(1804, 12.7), row(1805, 12.6),
    row(1806, 12.5), row(1807, 12.5), row(1808, 12.5), row(1809, 12.5), row(1810, 12.5), row(1811, 12.5),
    row(1812, 12.5), row(1813, 12.5), row(1814, 12.5), row(1815, 12.5), row(1816, 12.5), row(1817, 12.4),
    row(1818, 12.3), row(1819, 12.2), row(1820, 12.0), row(1821, 11.7), row(1822, 11.4), row(1823, 11.1),
    row(1824, 10.6), row(1825, 10.2), row(1826, 9.6), row(1827, 9.1), row(1828, 8.6), row(1829, 8.0),
    row(1830, 7.5), row(1831, 7.0), row(1832, 6.6), row(1833, 6.3), row(1834, 6.0), row(1835, 5.8),
    row(1836, 5.7), row(1837, 5.6), row(1838, 5.6), row(1839, 5.6), row(1840, 5.7), row(1841, 5.8),
    row(1842, 5.9), row(1843, 6.1), row(1844, 6.2), row(1845, 6.3), row(1846, 6.5), row(1847, 6.6),
    row(1848, 6.8), row(1849, 6.9), row(1850, 7.1), row(1851, 7.2), row(1852, 7.3), row(1853, 7.4),
    row(1854, 7.5), row(1855, 7.6), row(1856, 7.7), row(1857, 7.7), row(1858, 7.8), row(1859, 7.8),
    row(1860, 7.88), row(1861, 7.82), row(1862, 7.54), row(1863, 6.97), row(1864, 6.4), row(1865, 6.02),
    row(1866, 5.41), row(1867, 4.1), row(1868, 2.92), row(1869, 1.82), row(1870, 1.61), row(1871, 0.1),
    row(1872, -1.02), row(1873, -1.28), row(1874, -2.69), row(1875, -3.24), row(1876, -3.64), row(1877, -4.54),
    row(1878, -4.71), row(1879, -5.11), row(1880, -5.4), row(1881, -5.42), row(1882, -5.2), row(1883, -5.46),
    row(1884, -5.46), row(1885, -5.79), row(1886, -5.63), row(1887, -5.64), row(1888, -5.8), row(1889, -5.66),
    row(1890, -5.87), row(1891, -6.01), row(1892, -6.19), row(1893, -6.64), row(1894, -6.44), row(1895, -6.47),
    row(1896, -6.09), row(1897, -5.76), row(1898, -4.66), row(1899, -3.74), row(1900, -2.72), row(1901, -1.54),
    row(1902, -0.02), row(1903, 1.24), row(1904, 2.64), row(1905, 3.86), row(1906, 5.37), row(1907, 6.14),
    row(1908, 7.75), row(1909, 9.13), row(1910, 10.46), row(1911, 11.53), row(1912, 13.36), row(1913, 14.65),
    row(1914, 16.01), row(1915, 17.2), row(1916, 18.24), row(1917, 19.06), row(1918, 20.25), row(1919, 20.95),
    row(1920, 21.16), row(1921, 22.25), row(1922, 22.41), row(1923, 23.03), row(1924, 23.49), row(1925, 23.62),
    row(1926, 23.68), row(1927, 24.49), row(1928, 24.34), row(1929, 24.08), row(1930, 24.02), row(1931, 24.0),
    row(1932, 23.87), row(1933, 23.95), row(1934, 23.86), row(1935, 23.93), row(1936, 23.73), row(1937, 23.92),
    row(1938, 23.96), row(1939, 24.02), row(1940, 24.33), row(1941, 24.83), row(1942, 25.3), row(1943, 25.7),
    row(1944, 26.24), row(1945, 26.77), row(1946, 27.28), row(1947, 27.78), row(1948, 28.25), row(1949, 28.71),
    row(1950, 29.15), row(1951, 29.57), row(1952, 29.97), row(1953, 30.36), row(1954, 30.72), row(1955, 31.07),
    row(1956, 31.35), row(1957, 31.68), row(1958, 32.18), row(1959, 32.68), row(1960, 33.15), row(1961, 33.59),
    row(1962, 34.0), row(1963, 34.47), row(1964, 35.03), row(1965, 35.73), row(1966, 36.54), row(1967, 37.43),
    row(1968, 38.29), row(1969, 39.2), row(1970, 40.18), row(1971, 41.17), row(1972, 42.23), row(1973, 43.37),
    row(1974, 44.4841), row(1975, 45.4761), row(1976, 46.4567), row(1977, 47.5214), row(1978, 48.5344), row(1979, 49.5861),
    row(1980, 50.5387), row(1981, 51.3808), row(1982, 52.1668), row(1983, 52.9565), row(1984, 53.7882), row(1985, 54.3427),
    row(1986, 54.8712), row(1987, 55.3222), row(1988, 55.8197), row(1989, 56.3), row(1990, 56.8553), row(1991, 57.5653),
    row(1992, 58.3092), row(1993, 59.1218), row(1994, 59.9845), row(1995, 60.7853), row(1996, 61.6287), row(1997, 62.295),
    row(1998, 62.9659), row(1999, 63.4673), row(2000, 63.8285), row(2001, 64.0908), row(2002, 64.2998), row(2003, 64.4734),
    row(2004, 64.5736), row(2005, 64.6876), row(2006, 64.8452), row(2007, 65.1464), row(2008, 65.4574), row(2009, 65.7768),
    row(2010, 66.0699), row(2011, 66.3246), row(2012, 66.603), row(2013, 66.9069), row(2014, 67.281), row(2015, 67.6439),
    row(2016, 68.1024), row(2017, 68.5927), row(2018, 68.9677), row(2019, 69.2202), row(2020, 69.87), row(2021, 70.39),
    row(2022, 70.91), row(2023, 71.4), row(2024, 71.88), row(2025, 72.36), row(2026, 72.83), row(2027, 73.32),
];

/// The tabulated ΔT rows, ordered by year.
#[inline]
pub fn table() -> &'static [DeltaTEntry] {
    &DELTA_T_TABLE
}

/// Index of the row whose year is closest to `year`; the earlier row wins a tie.
fn nearest_index(year: f64) -> usize {
    let mut best_index = 0;
    let mut best_diff = f64::INFINITY;
    for (i, entry) in DELTA_T_TABLE.iter().enumerate() {
        let diff = (year - f64::from(entry.year)).abs();
        if diff < best_diff {
            best_diff = diff;
            best_index = i;
        }
    }
    best_index
}

/// Estimated **ΔT = TT − UT** for a (possibly fractional) calendar year.
pub fn estimate_delta_t(year: f64) -> Seconds {
    let first = DELTA_T_TABLE[0].year;
    let last = DELTA_T_TABLE[TERMS - 1].year;
    if year < f64::from(first) || year > f64::from(last) {
        log::debug!("ΔT for year {year} extrapolated beyond the {first}..={last} table");
    }

    let centre = nearest_index(year).clamp(1, TERMS - 2);
    let [p1, p2, p3] = [
        DELTA_T_TABLE[centre - 1],
        DELTA_T_TABLE[centre],
        DELTA_T_TABLE[centre + 1],
    ];
    let (x1, x2, x3) = (f64::from(p1.year), f64::from(p2.year), f64::from(p3.year));

    let l1 = (year - x2) * (year - x3) / ((x1 - x2) * (x1 - x3));
    let l2 = (year - x1) * (year - x3) / ((x2 - x1) * (x2 - x3));
    let l3 = (year - x1) * (year - x2) / ((x3 - x1) * (x3 - x2));

    p1.delta_t * l1 + p2.delta_t * l2 + p3.delta_t * l3
}

/// ΔT at a UT Julian Day.
///
/// The calendar year is recovered from the Julian Day; before the Julian
/// epoch, where the calendar is undefined, a Julian-year count from J2000.0
/// stands in.
pub fn delta_t_for(jd: UniversalTime) -> Seconds {
    let year = decimal_year(jd.value())
        .unwrap_or_else(|_| 2_000.0 + (jd.value() - J2000_JD) / 365.25);
    estimate_delta_t(year)
}

/// Universal Time → Terrestrial Time: `jd + ΔT / 86400`.
pub fn ut_to_tt(jd: UniversalTime) -> TerrestrialTime {
    let delta_t = delta_t_for(jd);
    log::trace!("ΔT at {jd} = {delta_t}");
    TerrestrialTime::from_days(jd.quantity() + delta_t.to::<Day>())
}

/// Terrestrial Time → Universal Time.
///
/// Solves `ut + ΔT(ut) = tt` by fixed-point iteration; ΔT changes by well
/// under a second per day, so three steps are enough.
pub fn tt_to_ut(jd: TerrestrialTime) -> UniversalTime {
    let mut ut = UniversalTime::from_days(jd.quantity());
    for _ in 0..3 {
        ut = UniversalTime::from_days(jd.quantity() - delta_t_for(ut).to::<Day>());
    }
    ut
}

impl Time<UT> {
    /// Returns **ΔT = TT − UT** for this UT epoch.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_for(*self)
    }
}

impl Time<TT> {
    /// Returns **ΔT = TT − UT** for this TT epoch.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_for(tt_to_ut(*self))
    }
}
