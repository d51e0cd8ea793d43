//! Chebyshev series value evaluation (Clenshaw's recurrence, backward form).

use super::{check_interpolant_range, transform_to_chebyshev_range};
use crate::lunisolar_errors::LunisolarError;

/// Evaluate a Chebyshev series at `x ∈ [lb, ub]`, truncated to the given order.
///
/// The recurrence is applied in reverse (highest coefficient first) to preserve
/// the contribution of the small high-order coefficients.
///
/// Arguments
/// -----------------
/// * `x`: Value at which the Chebyshev polynomial is evaluated.
/// * `lb`: Lower bound of the function range.
/// * `ub`: Upper bound of the function range.
/// * `coeff`: Chebyshev coefficients, lowest order first.
/// * `order`: Order of the truncated series; clamped to `coeff.len() - 1`.
/// * `coeff_0_factor`: Weight applied to `coeff[0]`. Use `0.5` for Numerical
///   Recipes style coefficients, `1.0` for CSpice data where `coeff[0]` is
///   already halved.
/// * `extrapolation_tol`: Maximum distance `x` may lie outside `[lb, ub]`.
///
/// Return
/// ----------
/// * The series value at `x`, or an error if the coefficient slice is too short
///   or `x` falls outside the interpolant range beyond the tolerance.
///
/// See also
/// ------------
/// * [`chebyshev_eval`] — full-order convenience wrapper.
/// * [`super::chebyshev_derivative_eval`] — derivative counterpart.
pub fn chebyshev_eval_order(
    x: f64,
    lb: f64,
    ub: f64,
    coeff: &[f64],
    order: usize,
    coeff_0_factor: f64,
    extrapolation_tol: f64,
) -> Result<f64, LunisolarError> {
    // Guard against an order larger than the data supports.
    let order = order.min(coeff.len().saturating_sub(1));
    if coeff.is_empty() || order < 1 {
        return Err(LunisolarError::NotEnoughCoefficients);
    }
    check_interpolant_range(x, lb, ub, extrapolation_tol)?;

    // Change of variables onto [-1, 1].
    let y = transform_to_chebyshev_range(x, lb, ub);
    let y2 = 2. * y;

    // Clenshaw's recurrence in reverse to preserve small numbers.
    let mut d = 0.;
    let mut dd = 0.;
    for k in (1..=order).rev() {
        let sv = d;
        d = y2 * d - dd + coeff[k];
        dd = sv;
    }

    Ok(y * d - dd + coeff_0_factor * coeff[0])
}

/// Evaluate a Chebyshev series at `x ∈ [lb, ub]` using all coefficients.
///
/// Equivalent to [`chebyshev_eval_order`] with `order = coeff.len() - 1`.
///
/// Arguments
/// -----------------
/// * `x`: Value at which the Chebyshev polynomial is evaluated.
/// * `lb`: Lower bound of the function range.
/// * `ub`: Upper bound of the function range.
/// * `coeff`: Chebyshev coefficients, lowest order first.
/// * `coeff_0_factor`: Weight applied to `coeff[0]` (see [`chebyshev_eval_order`]).
/// * `extrapolation_tol`: Maximum distance `x` may lie outside `[lb, ub]`.
///
/// Return
/// ----------
/// * The series value at `x`.
pub fn chebyshev_eval(
    x: f64,
    lb: f64,
    ub: f64,
    coeff: &[f64],
    coeff_0_factor: f64,
    extrapolation_tol: f64,
) -> Result<f64, LunisolarError> {
    chebyshev_eval_order(
        x,
        lb,
        ub,
        coeff,
        coeff.len().saturating_sub(1),
        coeff_0_factor,
        extrapolation_tol,
    )
}

/// Evaluate a Chebyshev series stored in the packed `[lb, ub, c0, c1, ...]`
/// layout used by CSpice planetary coefficients.
///
/// This is a thin adapter over [`chebyshev_eval`]; the recurrence is not
/// duplicated.
///
/// Arguments
/// -----------------
/// * `x`: Value at which the Chebyshev polynomial is evaluated.
/// * `lb_ub_coeff`: Slice containing the bounds followed by the coefficients.
/// * `coeff_0_factor`: Weight applied to the leading coefficient.
/// * `extrapolation_tol`: Maximum distance `x` may lie outside `[lb, ub]`.
///
/// Return
/// ----------
/// * The series value at `x`, or an error if the slice holds fewer than three
///   values.
pub fn chebyshev_eval_packed(
    x: f64,
    lb_ub_coeff: &[f64],
    coeff_0_factor: f64,
    extrapolation_tol: f64,
) -> Result<f64, LunisolarError> {
    if lb_ub_coeff.len() < 3 {
        return Err(LunisolarError::NotEnoughCoefficients);
    }
    chebyshev_eval(
        x,
        lb_ub_coeff[0],
        lb_ub_coeff[1],
        &lb_ub_coeff[2..],
        coeff_0_factor,
        extrapolation_tol,
    )
}
