//! Celestial body views and central-body frame composition.
//!
//! Overview
//! -----------------
//! Each of [`Earth`](earth::Earth), [`Moon`](moon::Moon) and [`Sun`](sun::Sun)
//! is a lightweight view over a shared [`BarycentricTables`] set. A view
//! exposes `position` / `velocity` relative to a caller-chosen
//! [`CentralBody`](central_body::CentralBody), composing the stored
//! barycentric quantities by fixed vector sums and differences — the axis
//! orientation never changes, only the origin does.
//!
//! Velocity uses the identical composition as position: derivatives distribute
//! over the vector sums because everything is evaluated in one fixed,
//! non-rotating frame.
//!
//! [`BarycentricTables`]: crate::ephemeris::barycentric::BarycentricTables

pub mod central_body;
pub mod earth;
pub mod moon;
pub mod sun;
