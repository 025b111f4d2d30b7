//! ranking::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the tied-ranking logit
//! layer, together with a conversion to Python exceptions for PyO3-based
//! bindings. This keeps construction-time and evaluation-time failures
//! localized while exposing a clean error surface to both Rust and
//! Python.
//!
//! Key behaviors
//! -------------
//! - Define [`RankResult`] and [`RankError`] as the canonical result and
//!   error types for ranking-model construction, input validation, and
//!   likelihood evaluation.
//! - Attach human-readable `Display` messages to each error variant so
//!   that diagnostics and logs are meaningful without additional context.
//! - Implement `From<RankError> for PyErr` to map Rust-side failures into
//!   `PyValueError` values visible to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Modules which use this error type are expected to validate their
//!   inputs (parameter finiteness, ranking length and sign) and return
//!   [`RankResult<T>`] instead of panicking.
//! - `RankError` values are small, cheap to clone, and suitable for use
//!   in both unit tests and higher-level orchestration code.
//!
//! Conventions
//! -----------
//! - This module is focused on ranking-model errors; mixture-layer error
//!   types live in their own `errors` module under `mixture`.
//! - Error messages are phrased in terms of domain constraints (e.g.
//!   "rank values must be non-negative") rather than low-level details.
//!
//! Downstream usage
//! ----------------
//! - `RankLogitModel::new` and `RankLogitModel::pmf` return
//!   [`RankResult<T>`] to propagate failures cleanly to callers.
//! - Python bindings rely on `From<RankError> for PyErr` to raise
//!   `ValueError` instances instead of returning results explicitly.
//! - Higher-level Rust code (e.g. the mixture layer) may match on
//!   [`RankError`] variants to implement custom recovery or reporting.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (offending value or dimensions).
//! - The PyO3 conversion path is exercised by Python-level tests, not
//!   here, since it requires linking the Python C API.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type RankResult<T> = Result<T, RankError>;

/// RankError — error conditions for tied-ranking logit models.
///
/// Purpose
/// -------
/// Represent all construction and evaluation failures of the ranking
/// layer: degenerate or non-finite parameter vectors, rankings that do
/// not match the model dimension, rank values outside the observation
/// contract, and likelihood products that fall out of `f64` range.
///
/// Variants
/// --------
/// - `EmptyParameterVector`
///   The model was constructed with zero categories; no likelihood is
///   defined over an empty choice set.
/// - `NonFiniteParameter(value: f64)`
///   A linear-index weight is NaN or ±∞ and cannot be exponentiated
///   meaningfully.
/// - `DimensionMismatch { expected: usize, actual: usize }`
///   An observed ranking's length disagrees with the number of model
///   categories.
/// - `InvalidObservation(value: i64)`
///   A rank value is negative; observed ranks must be non-negative
///   integers (ties and gaps are permitted, sign is not).
/// - `NumericOverflow`
///   The accumulated likelihood product became non-finite despite the
///   max-shift guard; weight gaps exceeded `f64` underflow range so the
///   tie-group denominators degenerated.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending value or
///   dimensions) to allow downstream logging and debugging without
///   leaking large data structures.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`]
///   so it can be used with idiomatic `?`-based error propagation.
/// - A blanket `From<RankError> for PyErr` implementation maps all of
///   these cases to `PyValueError` at the Python boundary, with the
///   human-readable message taken from the `Display` implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum RankError {
    //------ Construction-time errors ------
    EmptyParameterVector,
    NonFiniteParameter(f64),
    //------ Evaluation-time errors ------
    DimensionMismatch { expected: usize, actual: usize },
    InvalidObservation(i64),
    NumericOverflow,
}

impl std::error::Error for RankError {}

impl std::fmt::Display for RankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankError::EmptyParameterVector => {
                write!(f, "Parameter vector must contain at least one category weight.")
            }
            RankError::NonFiniteParameter(value) => {
                write!(f, "Invalid parameter value: {value}. Must be a finite number.")
            }
            RankError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Ranking length {actual} does not match the number of categories {expected}."
                )
            }
            RankError::InvalidObservation(value) => {
                write!(f, "Invalid rank value: {value}. Rank values must be non-negative.")
            }
            RankError::NumericOverflow => {
                write!(
                    f,
                    "Likelihood evaluation produced a non-finite value; \
                     parameter magnitudes exceed f64 range."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<RankError> for PyErr {
    fn from(err: RankError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic `Display` formatting for RankError variants.
    // - Embedding of payload values (weights, dimensions, rank values)
    //   into error messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<RankError> for PyErr` conversion, since exercising it
    //   requires linking against the Python C API and is better handled
    //   by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `RankError::EmptyParameterVector` formats to a
    // non-empty, human-readable message.
    //
    // Given
    // -----
    // - A `RankError::EmptyParameterVector` value.
    //
    // Expect
    // ------
    // - `format!("{err}")` is non-empty.
    fn rank_error_empty_parameter_vector_has_nonempty_display_message() {
        // Arrange
        let err = RankError::EmptyParameterVector;

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            !msg.trim().is_empty(),
            "Display message for EmptyParameterVector should not be empty."
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `RankError::NonFiniteParameter` includes the offending
    // weight in its `Display` representation.
    //
    // Given
    // -----
    // - A `RankError::NonFiniteParameter` with value NaN.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "NaN".
    fn rank_error_non_finite_parameter_includes_payload_in_display() {
        // Arrange
        let err = RankError::NonFiniteParameter(f64::NAN);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("NaN"), "Display message should include offending value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `RankError::DimensionMismatch` reports both the
    // expected and the actual length.
    //
    // Given
    // -----
    // - A `RankError::DimensionMismatch` with expected = 4, actual = 3.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains both "4" and "3".
    fn rank_error_dimension_mismatch_includes_both_lengths_in_display() {
        // Arrange
        let err = RankError::DimensionMismatch { expected: 4, actual: 3 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains('4') && msg.contains('3'),
            "Display message should include expected and actual lengths.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `RankError::InvalidObservation` reports the offending
    // rank value in its `Display` representation.
    //
    // Given
    // -----
    // - A `RankError::InvalidObservation` with value -2.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "-2".
    fn rank_error_invalid_observation_includes_rank_value_in_display() {
        // Arrange
        let err = RankError::InvalidObservation(-2);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains("-2"),
            "Display message should include offending rank value.\nGot: {msg}"
        );
    }
}
