//! Max-shifted exponentiation of linear-index weights.
//!
//! Provides the overflow guard used when turning linear-index parameters
//! into multiplicative logit weights. The naïve form `exp(weight)`
//! overflows `f64` once a weight exceeds ~709.8; the guarded strategy
//! here subtracts the maximum weight before exponentiating, the same
//! max-shift technique used in stable softmax implementations, so every
//! stored weight lies in `(0, 1]`.
//!
//! Shift invariance is what makes this safe: every exploded-logit term is
//! a ratio `w_j / (Σ w_k + D)` in which numerator and denominator both
//! carry the common factor `exp(shift)`, so centering the weights leaves
//! all likelihood values unchanged while removing the overflow path
//! entirely.

use ndarray::Array1;

/// Largest weight of a parameter vector, used as the centering constant.
///
/// Parameters
/// ----------
/// - `params`: `&[f64]`
///   Linear-index weights, one per category. Must be non-empty and
///   finite when called from validated entry points.
///
/// Returns
/// -------
/// `f64`
///   `max_j params[j]`, or `0.0` for an empty slice so that callers
///   composing with [`shifted_exp_weights`] degrade gracefully.
///
/// Notes
/// -----
/// - Uses `fold` with `f64::max` rather than `Iterator::max`, since `f64`
///   is not `Ord`. NaN inputs are excluded by upstream validation.
#[inline]
pub fn max_shift(params: &[f64]) -> f64 {
    if params.is_empty() {
        return 0.0;
    }
    params.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Exponentiate a weight vector after centering at its maximum.
///
/// Parameters
/// ----------
/// - `params`: `&[f64]`
///   Linear-index weights, one per category. Must be non-empty and
///   finite when called from validated entry points.
///
/// Returns
/// -------
/// `Array1<f64>`
///   `exp(params[j] − shift)` for all `j`, where `shift = max_j
///   params[j]`. Every entry lies in `(0, 1]`; the entry attaining the
///   maximum is exactly `1.0`.
///
/// Notes
/// -----
/// - Entries far below the maximum underflow to `0.0`. That is the
///   correct limit: a category whose weight trails the leader by more
///   than ~745 nats carries no representable probability mass in `f64`.
/// - The centering constant is not retained; all downstream likelihood
///   terms are ratios that cancel it exactly.
#[inline]
pub fn shifted_exp_weights(params: &[f64]) -> Array1<f64> {
    let shift = max_shift(params);
    params.iter().map(|&w| (w - shift).exp()).collect()
}
