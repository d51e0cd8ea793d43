//! # lunisolar: Sun, Earth and Moon states from piecewise Chebyshev tables
//!
//! This crate evaluates the position and velocity of the Sun, the Earth and the
//! Moon relative to any of four reference centers (Solar System Barycenter,
//! Sun, Earth, Moon) from precomputed DE430-style Chebyshev coefficient tables
//! — no equations of motion are integrated.
//!
//! ## Layout
//!
//! 1. [`chebyshev`] — Clenshaw-recurrence evaluation of a Chebyshev series and
//!    its derivative, backward form for numerical stability.
//! 2. [`ephemeris`] — the segmented interpolation table
//!    ([`SegmentedTable`]) and the four-table barycentric set
//!    ([`BarycentricTables`]) with the derived Earth/SSB composition.
//! 3. [`bodies`] — per-body views ([`Earth`], [`Moon`], [`Sun`]) composing the
//!    barycentric quantities into a state relative to a chosen
//!    [`CentralBody`].
//!
//! ## Time scale
//!
//! Every query takes fractional days since the J2000 epoch in the TDB time
//! system ([`constants::MjdJ2k`]); [`time`] converts from `hifitime::Epoch`.
//! The DE430-derived data covers −8.5 … 36535.5 days, roughly one century from
//! the epoch.
//!
//! ## Units and frame
//!
//! Positions are km, velocities km/s, always in one fixed, non-rotating,
//! GCRF-aligned frame: choosing a central body moves the origin, never the
//! axes.
//!
//! ## Concurrency
//!
//! Tables are immutable after construction and every evaluation is a pure
//! function over them, so a `&BarycentricTables` can be shared across threads
//! freely.
//!
//! ```rust
//! use lunisolar::{BarycentricTables, CentralBody, Moon};
//! # fn demo(tables: BarycentricTables) -> Result<(), lunisolar::LunisolarError> {
//! let moon = Moon::new(&tables);
//! let geocentric = moon.geocentric_position(12.25)?;         // km
//! let heliocentric = moon.position(12.25, CentralBody::Sun)?; // km
//! # Ok(())
//! # }
//! ```

pub mod bodies;
pub mod chebyshev;
pub mod constants;
pub mod ephemeris;
pub mod lunisolar_errors;
pub mod time;

pub use bodies::central_body::CentralBody;
pub use bodies::earth::Earth;
pub use bodies::moon::Moon;
pub use bodies::sun::Sun;
pub use ephemeris::barycentric::BarycentricTables;
pub use ephemeris::segmented_table::SegmentedTable;
pub use lunisolar_errors::LunisolarError;
