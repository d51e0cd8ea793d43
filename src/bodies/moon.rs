//! Position and velocity of the Moon relative to a chosen central body.

use hifitime::Epoch;
use nalgebra::Vector3;

use super::central_body::CentralBody;
use crate::constants::MjdJ2k;
use crate::ephemeris::barycentric::BarycentricTables;
use crate::lunisolar_errors::LunisolarError;
use crate::time::epoch_to_mjdj2k;

/// View over a [`BarycentricTables`] set computing Moon states.
#[derive(Debug, Clone, Copy)]
pub struct Moon<'a> {
    tables: &'a BarycentricTables,
}

impl<'a> Moon<'a> {
    pub fn new(tables: &'a BarycentricTables) -> Self {
        Self { tables }
    }

    /// Position of the Moon relative to `central_body` \[km\].
    ///
    /// Arguments
    /// -----------------
    /// * `mjdj2k`: Query time \[days from J2000 TDB\].
    /// * `central_body`: Reference origin of the returned vector.
    ///
    /// Return
    /// ----------
    /// * Position vector \[km\] in the fixed inertial frame of the tables.
    pub fn position(
        &self,
        mjdj2k: MjdJ2k,
        central_body: CentralBody,
    ) -> Result<Vector3<f64>, LunisolarError> {
        match central_body {
            CentralBody::Ssb => Ok(self.tables.moon_from_earth().position(mjdj2k)?
                + self.tables.earth_from_ssb_position(mjdj2k)?),
            CentralBody::Sun => Ok(self.tables.moon_from_earth().position(mjdj2k)?
                + self.tables.earth_from_ssb_position(mjdj2k)?
                - self.tables.sun_from_ssb().position(mjdj2k)?),
            CentralBody::Earth => self.tables.moon_from_earth().position(mjdj2k),
            // Self-relative: exact zero, no table lookup.
            CentralBody::Moon => Ok(Vector3::zeros()),
        }
    }

    /// Velocity of the Moon relative to `central_body` \[km/s\].
    ///
    /// Same composition as [`Self::position`], routed through the derivative
    /// evaluations.
    pub fn velocity(
        &self,
        mjdj2k: MjdJ2k,
        central_body: CentralBody,
    ) -> Result<Vector3<f64>, LunisolarError> {
        match central_body {
            CentralBody::Ssb => Ok(self.tables.moon_from_earth().velocity(mjdj2k)?
                + self.tables.earth_from_ssb_velocity(mjdj2k)?),
            CentralBody::Sun => Ok(self.tables.moon_from_earth().velocity(mjdj2k)?
                + self.tables.earth_from_ssb_velocity(mjdj2k)?
                - self.tables.sun_from_ssb().velocity(mjdj2k)?),
            CentralBody::Earth => self.tables.moon_from_earth().velocity(mjdj2k),
            CentralBody::Moon => Ok(Vector3::zeros()),
        }
    }

    /// Position with the default (Earth) center \[km\].
    pub fn geocentric_position(&self, mjdj2k: MjdJ2k) -> Result<Vector3<f64>, LunisolarError> {
        self.position(mjdj2k, CentralBody::Earth)
    }

    /// Velocity with the default (Earth) center \[km/s\].
    pub fn geocentric_velocity(&self, mjdj2k: MjdJ2k) -> Result<Vector3<f64>, LunisolarError> {
        self.velocity(mjdj2k, CentralBody::Earth)
    }

    /// [`Self::position`] keyed on a [`hifitime::Epoch`] instead of raw days.
    pub fn position_at_epoch(
        &self,
        epoch: &Epoch,
        central_body: CentralBody,
    ) -> Result<Vector3<f64>, LunisolarError> {
        self.position(epoch_to_mjdj2k(epoch), central_body)
    }

    /// [`Self::velocity`] keyed on a [`hifitime::Epoch`] instead of raw days.
    pub fn velocity_at_epoch(
        &self,
        epoch: &Epoch,
        central_body: CentralBody,
    ) -> Result<Vector3<f64>, LunisolarError> {
        self.velocity(epoch_to_mjdj2k(epoch), central_body)
    }
}
