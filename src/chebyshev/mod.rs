//! Chebyshev polynomial evaluation with Clenshaw's recurrence.
//!
//! Overview
//! -----------------
//! The ephemeris tables store each coordinate as a Chebyshev series over a short
//! time interval. This module provides the evaluator for those series:
//!
//! * [`chebyshev_eval`] / [`chebyshev_eval_order`] — series value at a point,
//! * [`chebyshev_derivative_eval`] — derivative of the series at a point,
//! * `*_packed` variants for coefficient slices that carry their own bounds
//!   (`[lb, ub, c0, c1, ...]`, the layout used by CSpice planetary kernels).
//!
//! Both evaluators run Clenshaw's recurrence **backward**, from the highest-order
//! coefficient down to index 1. The backward direction is load-bearing: the
//! high-order coefficients of an ephemeris segment are many orders of magnitude
//! smaller than the leading ones, and a forward summation would lose them.
//!
//! Leading-coefficient convention
//! -----------------
//! Numerical Recipes' `chebft` produces a `c[0]` that enters the sum with weight
//! one half, while CSpice kernels ship `c[0]` already halved. The value evaluator
//! therefore takes a `coeff_0_factor` (0.5 or 1.0) selecting the convention of the
//! data at hand. The derivative never references `c[0]`, so it takes no factor.
//!
//! All functions here are pure: no allocation outlives the call and concurrent
//! use requires no synchronization.
//!
//! See also
//! -----------------
//! * Numerical Recipes in Fortran 77, p. 187-189, routines `chebev` and `chder`.
//! * [`crate::ephemeris::segmented_table::SegmentedTable`] — the main caller.

mod derivative;
mod eval;

pub use derivative::{chebyshev_derivative_eval, chebyshev_derivative_eval_packed};
pub use eval::{chebyshev_eval, chebyshev_eval_order, chebyshev_eval_packed};

use crate::lunisolar_errors::LunisolarError;

/// Maximum distance a query point may fall outside `[lb, ub]` before evaluation
/// is refused. Excursions within the tolerance are accepted as-is; they come
/// from floating-point rounding at segment boundaries, not from misuse.
pub const DEFAULT_EXTRAPOLATION_TOL: f64 = 1e-6;

/// Transform a variable from the Chebyshev range `[-1, 1]` to the range `[lb, ub]`.
///
/// Reference: Numerical Recipes in Fortran 77, p. 186, Eq. 5.8.10.
pub fn transform_from_chebyshev_range(x: f64, lb: f64, ub: f64) -> f64 {
    x * 0.5 * (ub - lb) + 0.5 * (ub + lb)
}

/// Transform a variable from the range `[lb, ub]` to the Chebyshev range `[-1, 1]`.
///
/// Reference: Numerical Recipes in Fortran 77, p. 186, Eq. 5.8.10.
pub fn transform_to_chebyshev_range(x: f64, lb: f64, ub: f64) -> f64 {
    (x - 0.5 * (ub + lb)) / (0.5 * (ub - lb))
}

/// Refuse evaluation if `x` exceeds `[lb, ub]` by more than `extrapolation_tol`.
pub(crate) fn check_interpolant_range(
    x: f64,
    lb: f64,
    ub: f64,
    extrapolation_tol: f64,
) -> Result<(), LunisolarError> {
    if (x < lb && (x - lb).abs() > extrapolation_tol)
        || (x > ub && (x - ub).abs() > extrapolation_tol)
    {
        return Err(LunisolarError::OutsideInterpolantRange { x, lb, ub });
    }
    Ok(())
}
