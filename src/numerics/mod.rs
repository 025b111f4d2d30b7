//! numerics — numerically robust helpers for likelihood evaluation.
//!
//! Purpose
//! -------
//! Collect the small numerical guards shared by the ranking likelihood
//! layer. The single concern handled here is safe exponentiation of
//! linear-index weights: raw `exp(weight)` overflows to `inf` for
//! moderately large weights and silently poisons every downstream
//! likelihood product. This module centralizes the max-shift convention
//! that keeps all exponentiated weights inside `(0, 1]`.
//!
//! Key behaviors
//! -------------
//! - Provide [`max_shift`] to locate the largest weight of a parameter
//!   vector, used as the common centering constant.
//! - Provide [`shifted_exp_weights`] to exponentiate a weight vector
//!   after subtracting that constant, guaranteeing finite output for any
//!   finite input.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite `f64` weights; finiteness validation is enforced
//!   in the ranking layer before these helpers run, not here.
//! - Every likelihood term downstream is a ratio whose numerator and
//!   denominator carry the same `exp(shift)` factor, so centering leaves
//!   all evaluated likelihoods bit-for-bit invariant in exact arithmetic
//!   and overflow-free in `f64`.
//!
//! Conventions
//! -----------
//! - Helpers operate on slices and return `ndarray` vectors, matching the
//!   parameter storage used by the model layer.
//! - This module never logs, performs I/O, or touches global state; it is
//!   pure numerical helpers suitable for use inside tight inner loops.
//!
//! Downstream usage
//! ----------------
//! - The ranking model calls [`shifted_exp_weights`] once at
//!   construction; evaluation consults only the centered weights.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`stabilization`] cover agreement with naïve `exp` on
//!   small weights, boundedness for extreme weights, and invariance of
//!   weight ratios under the shift.

pub mod stabilization;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::stabilization::{max_shift, shifted_exp_weights};
