use hifitime::Epoch;

use crate::constants::{MjdJ2k, SECONDS_PER_DAY};

/// Transformation from a [`hifitime::Epoch`] to days since J2000 in the TDB time system
///
/// Argument
/// --------
/// * `epoch`: the epoch to convert, in any of hifitime's time scales
///
/// Return
/// ------
/// * the same instant expressed as fractional days since J2000 (TDB), the time
///   value every ephemeris table is keyed on
pub fn epoch_to_mjdj2k(epoch: &Epoch) -> MjdJ2k {
    epoch.to_et_seconds() / SECONDS_PER_DAY
}

/// Transformation from days since J2000 (TDB) to a [`hifitime::Epoch`]
///
/// Argument
/// --------
/// * `mjdj2k`: fractional days since J2000 in the TDB time system
///
/// Return
/// ------
/// * the corresponding epoch
pub fn mjdj2k_to_epoch(mjdj2k: MjdJ2k) -> Epoch {
    Epoch::from_et_seconds(mjdj2k * SECONDS_PER_DAY)
}

#[cfg(test)]
mod test_time {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_epoch_round_trip() {
        for mjdj2k in [-8.5, 0.0, 1.25, 36535.5] {
            let epoch = mjdj2k_to_epoch(mjdj2k);
            assert_abs_diff_eq!(epoch_to_mjdj2k(&epoch), mjdj2k, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_j2000_is_zero() {
        let j2000 = Epoch::from_et_seconds(0.0);
        assert_abs_diff_eq!(epoch_to_mjdj2k(&j2000), 0.0, epsilon = 1e-12);
    }
}
