//! # Constants and type definitions for lunisolar
//!
//! This module centralizes the **physical constants**, **conversion factors**, and the
//! time type alias used throughout the `lunisolar` library.
//!
//! All ephemeris lookups are keyed on a single continuous time scale: days elapsed
//! since the J2000 epoch (2000-01-01 12:00:00) in the TDB time system. The crate
//! calls that quantity [`MjdJ2k`]; it is a plain `f64`, signed and fractional, with
//! no calendar semantics attached.

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Days since the J2000 epoch (2000-01-01 12:00:00 TDB), in the TDB time system.
///
/// This is the Modified Julian Date rebased on J2000: `mjd_tdb - 51544.5`.
pub type MjdJ2k = f64;

/// First instant covered by the DE430-derived coefficient tables \[days from J2000 TDB\]
pub const DE430_START_MJDJ2K: MjdJ2k = -8.5;

/// Last instant covered by the DE430-derived coefficient tables, roughly one
/// century after the epoch \[days from J2000 TDB\]
pub const DE430_STOP_MJDJ2K: MjdJ2k = 36535.5;

/// Number of Chebyshev coefficients per axis in each DE430-derived table segment
pub const DE430_COEFFS_PER_SEGMENT: usize = 15;
