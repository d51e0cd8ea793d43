//! The four barycentric tables behind the solar ephemeris.
//!
//! Overview
//! -----------------
//! [`BarycentricTables`] bundles the four quantities the DE430-derived data
//! actually stores, each as a [`SegmentedTable`]:
//!
//! * Moon w.r.t. Earth — finest resolution (4-day segments, lunar motion is fastest),
//! * Earth w.r.t. the Earth-Moon barycenter — 4-day segments,
//! * Earth-Moon barycenter w.r.t. the SSB — 16-day segments,
//! * Sun w.r.t. the SSB — 32-day segments.
//!
//! Earth w.r.t. the SSB is **derived, not stored**: it is the vector sum of the
//! Earth/EMB and EMB/SSB quantities, recomputed on every call. Evaluation is a
//! single O(1) table lookup per quantity, so caching the sum would only add
//! staleness risk.
//!
//! All vectors share one fixed, non-rotating, GCRF-aligned frame; only the
//! origin differs between tables. Construction takes pre-built tables — turning
//! raw kernel files into [`SegmentedTable`] data is the job of an external
//! loader and out of scope here.

use nalgebra::Vector3;

use super::segmented_table::SegmentedTable;
use crate::constants::MjdJ2k;
use crate::lunisolar_errors::LunisolarError;

/// Immutable set of the four stored barycentric quantities.
///
/// Built once at startup and shared by reference afterwards; the struct holds
/// no interior mutability, so concurrent lookups need no locking.
#[derive(Debug, Clone)]
pub struct BarycentricTables {
    /// Moon w.r.t. Earth \[km\].
    moon_from_earth: SegmentedTable,
    /// Earth w.r.t. the Earth-Moon barycenter \[km\].
    earth_from_emb: SegmentedTable,
    /// Earth-Moon barycenter w.r.t. the SSB \[km\].
    emb_from_ssb: SegmentedTable,
    /// Sun w.r.t. the SSB \[km\].
    sun_from_ssb: SegmentedTable,
    /// First instant covered by all four tables \[days from J2000 TDB\].
    start: MjdJ2k,
    /// Last instant covered by all four tables \[days from J2000 TDB\].
    stop: MjdJ2k,
}

impl BarycentricTables {
    /// Assemble the table set and compute the common valid span.
    ///
    /// Arguments
    /// -----------------
    /// * `moon_from_earth`: Moon w.r.t. Earth table.
    /// * `earth_from_emb`: Earth w.r.t. EMB table.
    /// * `emb_from_ssb`: EMB w.r.t. SSB table.
    /// * `sun_from_ssb`: Sun w.r.t. SSB table.
    ///
    /// Return
    /// ----------
    /// * The assembled set, or [`LunisolarError::InvalidTableDimensions`] if
    ///   the table spans have no common interval.
    pub fn new(
        moon_from_earth: SegmentedTable,
        earth_from_emb: SegmentedTable,
        emb_from_ssb: SegmentedTable,
        sun_from_ssb: SegmentedTable,
    ) -> Result<Self, LunisolarError> {
        let tables = [
            &moon_from_earth,
            &earth_from_emb,
            &emb_from_ssb,
            &sun_from_ssb,
        ];
        let start = tables.iter().map(|t| t.start()).fold(f64::MIN, f64::max);
        let stop = tables.iter().map(|t| t.stop()).fold(f64::MAX, f64::min);
        if start >= stop {
            return Err(LunisolarError::InvalidTableDimensions(format!(
                "table spans share no common interval (start = {start}, stop = {stop})"
            )));
        }

        Ok(BarycentricTables {
            moon_from_earth,
            earth_from_emb,
            emb_from_ssb,
            sun_from_ssb,
            start,
            stop,
        })
    }

    /// First instant covered by every table in the set \[days from J2000 TDB\].
    pub fn start(&self) -> MjdJ2k {
        self.start
    }

    /// Last instant covered by every table in the set \[days from J2000 TDB\].
    pub fn stop(&self) -> MjdJ2k {
        self.stop
    }

    /// Moon w.r.t. Earth table.
    pub fn moon_from_earth(&self) -> &SegmentedTable {
        &self.moon_from_earth
    }

    /// Earth w.r.t. EMB table.
    pub fn earth_from_emb(&self) -> &SegmentedTable {
        &self.earth_from_emb
    }

    /// EMB w.r.t. SSB table.
    pub fn emb_from_ssb(&self) -> &SegmentedTable {
        &self.emb_from_ssb
    }

    /// Sun w.r.t. SSB table.
    pub fn sun_from_ssb(&self) -> &SegmentedTable {
        &self.sun_from_ssb
    }

    /// Position of the Earth w.r.t. the SSB \[km\], composed as
    /// Earth/EMB + EMB/SSB.
    pub fn earth_from_ssb_position(&self, mjdj2k: MjdJ2k) -> Result<Vector3<f64>, LunisolarError> {
        Ok(self.earth_from_emb.position(mjdj2k)? + self.emb_from_ssb.position(mjdj2k)?)
    }

    /// Velocity of the Earth w.r.t. the SSB \[km/s\], composed as
    /// Earth/EMB + EMB/SSB.
    pub fn earth_from_ssb_velocity(&self, mjdj2k: MjdJ2k) -> Result<Vector3<f64>, LunisolarError> {
        Ok(self.earth_from_emb.velocity(mjdj2k)? + self.emb_from_ssb.velocity(mjdj2k)?)
    }
}
