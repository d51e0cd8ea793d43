//! Derivative of a Chebyshev series (coupled backward Clenshaw recurrences).

use super::{check_interpolant_range, transform_to_chebyshev_range};
use crate::lunisolar_errors::LunisolarError;

/// Evaluate the derivative of a Chebyshev series at `x ∈ [lb, ub]`.
///
/// Runs two coupled recurrences in reverse: one rebuilding the value state
/// (whose running sum feeds the derivative), the other accumulating the
/// derivative itself. The result is scaled by `2 / (ub - lb)` to account for
/// the change of variables onto `[-1, 1]`, so the derivative is taken with
/// respect to `x` in its native units.
///
/// The leading coefficient never contributes to the derivative (`T0' = 0`),
/// so there is no `coeff_0_factor` here and both storage conventions evaluate
/// identically.
///
/// Arguments
/// -----------------
/// * `x`: Value at which the derivative is evaluated.
/// * `lb`: Lower bound of the function range.
/// * `ub`: Upper bound of the function range.
/// * `coeff`: Chebyshev coefficients, lowest order first.
/// * `extrapolation_tol`: Maximum distance `x` may lie outside `[lb, ub]`.
///
/// Return
/// ----------
/// * `d/dx` of the series at `x`, or an error on an empty coefficient slice or
///   an out-of-range `x`.
///
/// See also
/// ------------
/// * [`super::chebyshev_eval`] — value counterpart.
/// * Numerical Recipes in Fortran 77, p. 189, routine `chder`.
pub fn chebyshev_derivative_eval(
    x: f64,
    lb: f64,
    ub: f64,
    coeff: &[f64],
    extrapolation_tol: f64,
) -> Result<f64, LunisolarError> {
    if coeff.is_empty() {
        return Err(LunisolarError::NotEnoughCoefficients);
    }
    check_interpolant_range(x, lb, ub, extrapolation_tol)?;

    let y = transform_to_chebyshev_range(x, lb, ub);
    let y2 = 2. * y;

    // Value recurrence state (d, dd) and derivative state (dp, ddp). The
    // derivative update must run first within each step: it consumes the value
    // state from the previous iteration.
    let mut d = 0.;
    let mut dd = 0.;
    let mut dp = 0.;
    let mut ddp = 0.;

    for k in (1..coeff.len()).rev() {
        let svp = dp;
        dp = y2 * dp - ddp + 2. * d;
        ddp = svp;

        let sv = d;
        d = y2 * d - dd + coeff[k];
        dd = sv;
    }

    // Normalize to the interval ub - lb.
    let factor = 2. / (ub - lb);
    Ok(factor * (y * dp - ddp + d))
}

/// Derivative evaluation for the packed `[lb, ub, c0, c1, ...]` layout.
///
/// Adapter over [`chebyshev_derivative_eval`]; errors if the slice holds fewer
/// than three values.
pub fn chebyshev_derivative_eval_packed(
    x: f64,
    lb_ub_coeff: &[f64],
    extrapolation_tol: f64,
) -> Result<f64, LunisolarError> {
    if lb_ub_coeff.len() < 3 {
        return Err(LunisolarError::NotEnoughCoefficients);
    }
    chebyshev_derivative_eval(
        x,
        lb_ub_coeff[0],
        lb_ub_coeff[1],
        &lb_ub_coeff[2..],
        extrapolation_tol,
    )
}

#[cfg(test)]
mod test_chebyshev_derivative {
    use super::*;
    use crate::chebyshev::{chebyshev_eval, DEFAULT_EXTRAPOLATION_TOL};
    use approx::assert_relative_eq;

    const COEFF: [f64; 3] = [2.0, 2.0, 3.0];

    #[test]
    fn test_derivative_against_analytic_series() {
        // f(y) = 1 + 2y + 3(2y^2 - 1)  =>  f'(y) = 2 + 12y on [-1, 1].
        for k in 0..=20 {
            let y = -1.0 + 0.1 * k as f64;
            let deriv =
                chebyshev_derivative_eval(y, -1.0, 1.0, &COEFF, DEFAULT_EXTRAPOLATION_TOL).unwrap();
            assert_relative_eq!(deriv, 2.0 + 12.0 * y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_derivative_interval_scaling() {
        // On [10, 18], dy/dx = 1/4, so f'(x) = (2 + 12y)/4.
        let x = 13.0;
        let y = (x - 14.0) / 4.0;
        let deriv =
            chebyshev_derivative_eval(x, 10.0, 18.0, &COEFF, DEFAULT_EXTRAPOLATION_TOL).unwrap();
        assert_relative_eq!(deriv, (2.0 + 12.0 * y) / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_matches_central_difference() {
        let (lb, ub) = (0.0, 4.0);
        let coeff = [1.4, -0.8, 0.31, -0.04, 0.007];
        let h = 1e-5;
        for k in 1..=9 {
            let x = lb + (ub - lb) * k as f64 / 10.0;
            let deriv =
                chebyshev_derivative_eval(x, lb, ub, &coeff, DEFAULT_EXTRAPOLATION_TOL).unwrap();
            let plus =
                chebyshev_eval(x + h, lb, ub, &coeff, 0.5, DEFAULT_EXTRAPOLATION_TOL).unwrap();
            let minus =
                chebyshev_eval(x - h, lb, ub, &coeff, 0.5, DEFAULT_EXTRAPOLATION_TOL).unwrap();
            assert_relative_eq!(deriv, (plus - minus) / (2.0 * h), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_derivative_ignores_leading_coefficient() {
        let shifted = [99.0, 2.0, 3.0];
        let a = chebyshev_derivative_eval(0.4, -1.0, 1.0, &COEFF, DEFAULT_EXTRAPOLATION_TOL)
            .unwrap();
        let b = chebyshev_derivative_eval(0.4, -1.0, 1.0, &shifted, DEFAULT_EXTRAPOLATION_TOL)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_derivative_rejects_bad_input() {
        assert_eq!(
            chebyshev_derivative_eval(0.0, -1.0, 1.0, &[], DEFAULT_EXTRAPOLATION_TOL),
            Err(LunisolarError::NotEnoughCoefficients)
        );
        assert!(matches!(
            chebyshev_derivative_eval(2.0, -1.0, 1.0, &COEFF, DEFAULT_EXTRAPOLATION_TOL),
            Err(LunisolarError::OutsideInterpolantRange { .. })
        ));
    }

    #[test]
    fn test_derivative_packed_matches_split_layout() {
        let packed = [10.0, 18.0, 2.0, 2.0, 3.0];
        let from_packed =
            chebyshev_derivative_eval_packed(13.0, &packed, DEFAULT_EXTRAPOLATION_TOL).unwrap();
        let from_split =
            chebyshev_derivative_eval(13.0, 10.0, 18.0, &COEFF, DEFAULT_EXTRAPOLATION_TOL)
                .unwrap();
        assert_eq!(from_packed, from_split);
    }
}
