//! Position and velocity of the Earth relative to a chosen central body.

use hifitime::Epoch;
use nalgebra::Vector3;

use super::central_body::CentralBody;
use crate::constants::MjdJ2k;
use crate::ephemeris::barycentric::BarycentricTables;
use crate::lunisolar_errors::LunisolarError;
use crate::time::epoch_to_mjdj2k;

/// View over a [`BarycentricTables`] set computing Earth states.
///
/// The view is `Copy`-cheap and holds only a shared reference; create one per
/// call site or keep it around, both are fine.
#[derive(Debug, Clone, Copy)]
pub struct Earth<'a> {
    tables: &'a BarycentricTables,
}

impl<'a> Earth<'a> {
    pub fn new(tables: &'a BarycentricTables) -> Self {
        Self { tables }
    }

    /// Position of the Earth relative to `central_body` \[km\].
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
            CentralBody::Ssb => self.tables.earth_from_ssb_position(mjdj2k),
            CentralBody::Sun => Ok(self.tables.earth_from_ssb_position(mjdj2k)?
                - self.tables.sun_from_ssb().position(mjdj2k)?),
            // Self-relative: exact zero, no table lookup.
            CentralBody::Earth => Ok(Vector3::zeros()),
            CentralBody::Moon => Ok(-self.tables.moon_from_earth().position(mjdj2k)?),
        }
    }

    /// Velocity of the Earth relative to `central_body` \[km/s\].
    ///
    /// Same composition as [`Self::position`], routed through the derivative
    /// evaluations.
    pub fn velocity(
        &self,
        mjdj2k: MjdJ2k,
        central_body: CentralBody,
    ) -> Result<Vector3<f64>, LunisolarError> {
        match central_body {
            CentralBody::Ssb => self.tables.earth_from_ssb_velocity(mjdj2k),
            CentralBody::Sun => Ok(self.tables.earth_from_ssb_velocity(mjdj2k)?
                - self.tables.sun_from_ssb().velocity(mjdj2k)?),
            CentralBody::Earth => Ok(Vector3::zeros()),
            CentralBody::Moon => Ok(-self.tables.moon_from_earth().velocity(mjdj2k)?),
        }
    }

    /// Position with the default (Earth) center — identically zero, kept for
    /// interface uniformity with [`Moon`](super::moon::Moon) and
    /// [`Sun`](super::sun::Sun).
    pub fn geocentric_position(&self, mjdj2k: MjdJ2k) -> Result<Vector3<f64>, LunisolarError> {
        self.position(mjdj2k, CentralBody::Earth)
    }

    /// Velocity with the default (Earth) center — identically zero.
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

#[cfg(test)]
mod test_earth {
    use super::*;
    use crate::bodies::{moon::Moon, sun::Sun};
    use crate::unit_test_global::EPHEMERIS_FIXTURE;

    #[test]
    fn test_earth_self_reference_is_exact_zero() {
        let earth = Earth::new(&EPHEMERIS_FIXTURE);
        for k in 0..8 {
            let t = -8.5 + 8.0 * k as f64;
            assert_eq!(
                earth.position(t, CentralBody::Earth).unwrap(),
                Vector3::zeros()
            );
            assert_eq!(
                earth.velocity(t, CentralBody::Earth).unwrap(),
                Vector3::zeros()
            );
            assert_eq!(earth.geocentric_position(t).unwrap(), Vector3::zeros());
            assert_eq!(earth.geocentric_velocity(t).unwrap(), Vector3::zeros());
        }
    }

    #[test]
    fn test_earth_moon_antisymmetry() {
        let earth = Earth::new(&EPHEMERIS_FIXTURE);
        let moon = Moon::new(&EPHEMERIS_FIXTURE);
        for k in 0..8 {
            let t = -8.5 + 8.0 * k as f64;
            assert_eq!(
                earth.position(t, CentralBody::Moon).unwrap(),
                -moon.position(t, CentralBody::Earth).unwrap()
            );
            assert_eq!(
                earth.velocity(t, CentralBody::Moon).unwrap(),
                -moon.velocity(t, CentralBody::Earth).unwrap()
            );
        }
    }

    #[test]
    fn test_earth_sun_antisymmetry() {
        let earth = Earth::new(&EPHEMERIS_FIXTURE);
        let sun = Sun::new(&EPHEMERIS_FIXTURE);
        for k in 0..8 {
            let t = -8.5 + 8.0 * k as f64;
            assert_eq!(
                earth.position(t, CentralBody::Sun).unwrap(),
                -sun.position(t, CentralBody::Earth).unwrap()
            );
        }
    }

    #[test]
    fn test_earth_ssb_heliocentric_difference() {
        // Earth w.r.t. Sun must equal the difference of the two SSB states.
        let earth = Earth::new(&EPHEMERIS_FIXTURE);
        let sun = Sun::new(&EPHEMERIS_FIXTURE);
        let t = 12.25;
        let heliocentric = earth.position(t, CentralBody::Sun).unwrap();
        let by_hand = earth.position(t, CentralBody::Ssb).unwrap()
            - sun.position(t, CentralBody::Ssb).unwrap();
        assert_eq!(heliocentric, by_hand);
    }

    #[test]
    fn test_earth_epoch_wrapper_agrees_with_raw_days() {
        let earth = Earth::new(&EPHEMERIS_FIXTURE);
        let t = 3.75;
        let epoch = crate::time::mjdj2k_to_epoch(t);
        // The TDB round trip through hifitime is exact to well below a
        // millisecond; allow for meters of drift at orbital speeds.
        let pos_diff = earth.position_at_epoch(&epoch, CentralBody::Ssb).unwrap()
            - earth.position(t, CentralBody::Ssb).unwrap();
        assert!(pos_diff.norm() < 1e-3);
        let vel_diff = earth.velocity_at_epoch(&epoch, CentralBody::Ssb).unwrap()
            - earth.velocity(t, CentralBody::Ssb).unwrap();
        assert!(vel_diff.norm() < 1e-9);
    }
}
