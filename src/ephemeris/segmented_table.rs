//! Segmented Chebyshev interpolation table for one vector-valued quantity.
//!
//! Overview
//! -----------------
//! A [`SegmentedTable`] owns three parallel coefficient sequences (axes x, y, z),
//! cut into fixed-width time segments: segment `i` covers
//! `[start + i * days_per_segment, start + (i + 1) * days_per_segment)`.
//! Given a query time the table locates the segment, evaluates the three axis
//! series with the segment's exact bounds, and assembles the result vector.
//!
//! Bounds policy
//! -----------------
//! The table-level range check is **strict**: a time below `start` or above
//! `stop` has no coefficients at all and is refused with no tolerance. This is
//! deliberately asymmetric with the per-segment evaluator, which tolerates
//! `1e-6`-level excursions past a segment edge — those are rounding artifacts
//! of the index arithmetic, not missing data.
//!
//! Units
//! -----------------
//! * time: days from J2000 (TDB), see [`MjdJ2k`]
//! * position: kilometers
//! * velocity: kilometers per second

use nalgebra::Vector3;

use crate::chebyshev::{chebyshev_derivative_eval, chebyshev_eval, DEFAULT_EXTRAPOLATION_TOL};
use crate::constants::{MjdJ2k, SECONDS_PER_DAY};
use crate::lunisolar_errors::LunisolarError;

/// Immutable piecewise-Chebyshev table for one quantity (e.g. Moon w.r.t. Earth).
///
/// Coefficients are stored flattened, segment-major: the coefficients of
/// segment `i` on axis x are `x[i * ncoeff .. (i + 1) * ncoeff]`, lowest order
/// first, with the Numerical Recipes leading-coefficient convention (weight 0.5
/// applied at evaluation time).
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedTable {
    /// First instant covered by the table \[days from J2000 TDB\].
    start: MjdJ2k,
    /// Last instant covered by the table \[days from J2000 TDB\].
    stop: MjdJ2k,
    /// Time span of every segment \[days\].
    days_per_segment: f64,
    /// Number of Chebyshev coefficients per axis and segment.
    ncoeff: usize,
    /// Flattened x-axis coefficients \[km\].
    x: Vec<f64>,
    /// Flattened y-axis coefficients \[km\].
    y: Vec<f64>,
    /// Flattened z-axis coefficients \[km\].
    z: Vec<f64>,
}

impl SegmentedTable {
    /// Build a table from flattened per-axis coefficient data.
    ///
    /// Arguments
    /// -----------------
    /// * `start`: First instant covered by the table \[days from J2000 TDB\].
    /// * `days_per_segment`: Width of every segment \[days\].
    /// * `ncoeff`: Coefficients per axis and segment (at least two).
    /// * `x`, `y`, `z`: Flattened segment-major coefficients, one slice of
    ///   `ncoeff` values per segment \[km\].
    ///
    /// Return
    /// ----------
    /// * The validated table, with `stop` computed as
    ///   `start + days_per_segment * segment_count`.
    pub fn new(
        start: MjdJ2k,
        days_per_segment: f64,
        ncoeff: usize,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
    ) -> Result<Self, LunisolarError> {
        if ncoeff < 2 {
            return Err(LunisolarError::InvalidTableDimensions(format!(
                "at least two coefficients per segment are required, got {ncoeff}"
            )));
        }
        if !(days_per_segment > 0.0) {
            return Err(LunisolarError::InvalidTableDimensions(format!(
                "days_per_segment must be strictly positive, got {days_per_segment}"
            )));
        }
        if x.is_empty() || x.len() % ncoeff != 0 {
            return Err(LunisolarError::InvalidTableDimensions(format!(
                "axis length {} is not a non-zero multiple of ncoeff = {ncoeff}",
                x.len()
            )));
        }
        if y.len() != x.len() || z.len() != x.len() {
            return Err(LunisolarError::InvalidTableDimensions(format!(
                "axis lengths differ: x = {}, y = {}, z = {}",
                x.len(),
                y.len(),
                z.len()
            )));
        }

        let segment_count = x.len() / ncoeff;
        let stop = start + days_per_segment * segment_count as f64;
        Ok(SegmentedTable {
            start,
            stop,
            days_per_segment,
            ncoeff,
            x,
            y,
            z,
        })
    }

    /// First instant covered by the table \[days from J2000 TDB\].
    pub fn start(&self) -> MjdJ2k {
        self.start
    }

    /// Last instant covered by the table \[days from J2000 TDB\].
    pub fn stop(&self) -> MjdJ2k {
        self.stop
    }

    /// Number of segments per axis.
    pub fn segment_count(&self) -> usize {
        self.x.len() / self.ncoeff
    }

    /// Width of every segment \[days\].
    pub fn days_per_segment(&self) -> f64 {
        self.days_per_segment
    }

    /// Index of the segment covering `mjdj2k`.
    ///
    /// The bounds check is exact: no extrapolation tolerance applies at this
    /// layer (see the module docs). The terminal instant `stop` maps onto the
    /// last segment rather than one past it.
    ///
    /// Arguments
    /// -----------------
    /// * `mjdj2k`: Query time \[days from J2000 TDB\].
    ///
    /// Return
    /// ----------
    /// * Segment index in `0..segment_count()`, or
    ///   [`LunisolarError::TimeOutOfRange`].
    pub fn segment_index(&self, mjdj2k: MjdJ2k) -> Result<usize, LunisolarError> {
        if mjdj2k < self.start || mjdj2k > self.stop {
            return Err(LunisolarError::TimeOutOfRange {
                mjdj2k,
                start: self.start,
                stop: self.stop,
            });
        }
        let index = ((mjdj2k - self.start) / self.days_per_segment) as usize;
        Ok(index.min(self.segment_count() - 1))
    }

    /// Exact time bounds of segment `index` \[days from J2000 TDB\].
    fn segment_bounds(&self, index: usize) -> (MjdJ2k, MjdJ2k) {
        let lb = self.start + index as f64 * self.days_per_segment;
        (lb, lb + self.days_per_segment)
    }

    /// Coefficient slice of segment `index` on one axis.
    fn segment(axis: &[f64], index: usize, ncoeff: usize) -> &[f64] {
        &axis[index * ncoeff..(index + 1) * ncoeff]
    }

    /// Interpolated position at `mjdj2k`.
    ///
    /// Arguments
    /// -----------------
    /// * `mjdj2k`: Query time \[days from J2000 TDB\].
    ///
    /// Return
    /// ----------
    /// * Position vector \[km\], or an error if the time is outside the table span.
    pub fn position(&self, mjdj2k: MjdJ2k) -> Result<Vector3<f64>, LunisolarError> {
        let index = self.segment_index(mjdj2k)?;
        let (lb, ub) = self.segment_bounds(index);
        let ncoeff = self.ncoeff;

        Ok(Vector3::new(
            chebyshev_eval(
                mjdj2k,
                lb,
                ub,
                Self::segment(&self.x, index, ncoeff),
                0.5,
                DEFAULT_EXTRAPOLATION_TOL,
            )?,
            chebyshev_eval(
                mjdj2k,
                lb,
                ub,
                Self::segment(&self.y, index, ncoeff),
                0.5,
                DEFAULT_EXTRAPOLATION_TOL,
            )?,
            chebyshev_eval(
                mjdj2k,
                lb,
                ub,
                Self::segment(&self.z, index, ncoeff),
                0.5,
                DEFAULT_EXTRAPOLATION_TOL,
            )?,
        ))
    }

    /// Interpolated velocity at `mjdj2k`.
    ///
    /// The derivative evaluator returns km/day (the segment bounds are in
    /// days); the result is rescaled to km/s.
    ///
    /// Arguments
    /// -----------------
    /// * `mjdj2k`: Query time \[days from J2000 TDB\].
    ///
    /// Return
    /// ----------
    /// * Velocity vector \[km/s\], or an error if the time is outside the table span.
    pub fn velocity(&self, mjdj2k: MjdJ2k) -> Result<Vector3<f64>, LunisolarError> {
        let index = self.segment_index(mjdj2k)?;
        let (lb, ub) = self.segment_bounds(index);
        let ncoeff = self.ncoeff;

        let km_per_day = Vector3::new(
            chebyshev_derivative_eval(
                mjdj2k,
                lb,
                ub,
                Self::segment(&self.x, index, ncoeff),
                DEFAULT_EXTRAPOLATION_TOL,
            )?,
            chebyshev_derivative_eval(
                mjdj2k,
                lb,
                ub,
                Self::segment(&self.y, index, ncoeff),
                DEFAULT_EXTRAPOLATION_TOL,
            )?,
            chebyshev_derivative_eval(
                mjdj2k,
                lb,
                ub,
                Self::segment(&self.z, index, ncoeff),
                DEFAULT_EXTRAPOLATION_TOL,
            )?,
        );

        Ok(km_per_day / SECONDS_PER_DAY)
    }
}

#[cfg(test)]
mod test_segmented_table {
    use super::*;
    use crate::unit_test_global::{build_lunar_distance_table, FIT_START, FIT_STOP};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_new_rejects_bad_dimensions() {
        let bad = SegmentedTable::new(0.0, 4.0, 1, vec![1.0], vec![1.0], vec![1.0]);
        assert!(matches!(
            bad,
            Err(LunisolarError::InvalidTableDimensions(_))
        ));

        let bad = SegmentedTable::new(0.0, 0.0, 2, vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0, 2.0]);
        assert!(matches!(
            bad,
            Err(LunisolarError::InvalidTableDimensions(_))
        ));

        let bad = SegmentedTable::new(
            0.0,
            4.0,
            2,
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
        );
        assert!(matches!(
            bad,
            Err(LunisolarError::InvalidTableDimensions(_))
        ));

        let bad = SegmentedTable::new(0.0, 4.0, 2, vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0]);
        assert!(matches!(
            bad,
            Err(LunisolarError::InvalidTableDimensions(_))
        ));
    }

    #[test]
    fn test_segment_index_arithmetic() {
        let table = build_lunar_distance_table();
        assert_eq!(table.start(), FIT_START);
        assert_eq!(table.stop(), FIT_STOP);

        assert_eq!(table.segment_index(FIT_START).unwrap(), 0);
        assert_eq!(table.segment_index(FIT_START + 3.999).unwrap(), 0);
        assert_eq!(table.segment_index(FIT_START + 4.0).unwrap(), 1);
        assert_eq!(table.segment_index(0.0).unwrap(), 2);
        // The terminal instant belongs to the last segment.
        assert_eq!(
            table.segment_index(FIT_STOP).unwrap(),
            table.segment_count() - 1
        );
    }

    #[test]
    fn test_hard_bounds_no_tolerance() {
        let table = build_lunar_distance_table();

        // One full day outside on either side.
        assert_eq!(
            table.position(FIT_START - 1.0),
            Err(LunisolarError::TimeOutOfRange {
                mjdj2k: FIT_START - 1.0,
                start: FIT_START,
                stop: FIT_STOP,
            })
        );
        assert!(table.velocity(FIT_STOP + 1.0).is_err());

        // The outer check is strict: even a hair outside is refused, unlike
        // the per-segment evaluator.
        assert!(table.segment_index(FIT_START - 1e-9).is_err());
        assert!(table.segment_index(FIT_STOP + 1e-9).is_err());

        // Both endpoints themselves evaluate.
        assert!(table.position(FIT_START).is_ok());
        assert!(table.position(FIT_STOP).is_ok());
    }

    #[test]
    fn test_position_matches_generating_function() {
        let table = build_lunar_distance_table();
        let model = crate::unit_test_global::lunar_distance_model();
        for k in 0..=64 {
            let t = FIT_START + (FIT_STOP - FIT_START) * k as f64 / 64.0;
            let pos = table.position(t).unwrap();
            for axis in 0..3 {
                // Absolute tolerance: components cross zero along the orbit.
                assert_abs_diff_eq!(pos[axis], model.coordinate(axis, t), epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_velocity_matches_central_difference() {
        let table = build_lunar_distance_table();
        let h = 1e-3;
        for k in 1..16 {
            let t = FIT_START + 4.0 * k as f64 + 1.7;
            if t + h > FIT_STOP {
                break;
            }
            let vel = table.velocity(t).unwrap();
            let diff =
                (table.position(t + h).unwrap() - table.position(t - h).unwrap()) / (2.0 * h);
            for axis in 0..3 {
                // vel is km/s, the central difference km/day.
                assert_relative_eq!(
                    vel[axis] * SECONDS_PER_DAY,
                    diff[axis],
                    epsilon = 5e-3,
                    max_relative = 1e-6
                );
            }
        }
    }

    #[test]
    fn test_segment_boundary_continuity() {
        let table = build_lunar_distance_table();
        let eps = 1e-9;
        for i in 1..table.segment_count() {
            let boundary = table.start() + i as f64 * table.days_per_segment();
            let before = table.position(boundary - eps).unwrap();
            let after = table.position(boundary + eps).unwrap();
            // Less than a meter of discontinuity across the seam.
            assert_abs_diff_eq!((before - after).norm(), 0.0, epsilon = 1e-3);
        }
    }
}
