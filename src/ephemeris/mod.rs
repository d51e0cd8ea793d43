//! Piecewise-Chebyshev ephemeris tables.
//!
//! Overview
//! -----------------
//! * [`segmented_table`] — one interpolation table: three axes of contiguous,
//!   equal-width Chebyshev segments plus the index arithmetic that maps a query
//!   time onto the right segment.
//! * [`barycentric`] — the four concrete tables the solar ephemeris is built
//!   from (Moon/Earth, Earth/EMB, EMB/SSB, Sun/SSB) and the Earth/SSB
//!   composition derived from them.
//!
//! Tables are immutable after construction and hold no interior mutability, so
//! a shared reference can be evaluated from any number of threads.

pub mod barycentric;
pub mod segmented_table;
