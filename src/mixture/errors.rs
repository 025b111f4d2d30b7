//! mixture::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the latent-class mixture
//! layer: per-feature model construction, joint-observation evaluation,
//! and posterior normalization. Ranking-layer failures are wrapped so
//! that `?` composes across the two subtrees.
//!
//! Key behaviors
//! -------------
//! - Define [`MixtureResult`] and [`MixtureError`] as the canonical
//!   result and error types for multinoulli models, latent-class
//!   wrappers, and the mixture classifier.
//! - Attach human-readable `Display` messages to each variant and embed
//!   the offending payloads (values, dimensions, category indices).
//! - Wrap [`RankError`] via `From`, and convert to `PyValueError` behind
//!   the `python-bindings` feature.
//!
//! Invariants & assumptions
//! ------------------------
//! - Mixture modules validate their inputs and return
//!   [`MixtureResult<T>`] instead of panicking; degenerate evaluations
//!   surface as explicit variants (`CategoryOutOfRange`,
//!   `ZeroNormalizer`) rather than as an index panic or a silent
//!   division by zero.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g.
//!   "priors must be non-negative") rather than low-level details.
//!
//! Downstream usage
//! ----------------
//! - All public mixture entry points return [`MixtureResult<T>`];
//!   Python bindings raise `ValueError` via the `From` conversion.
//!
//! Testing notes
//! -------------
//! - Unit tests verify payload embedding for the variants carrying
//!   diagnostic values and the `From<RankError>` wrapping.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::ranking::errors::RankError;

pub type MixtureResult<T> = Result<T, MixtureError>;

/// MixtureError — error conditions for the latent-class mixture layer.
///
/// Purpose
/// -------
/// Represent construction and evaluation failures across the mixture
/// layer's three levels: per-feature models (multinoulli), per-class
/// wrappers (feature sets), and the mixture classifier (priors and
/// posterior normalization).
///
/// Variants
/// --------
/// - `EmptyMixture`
///   The mixture was constructed with zero latent classes.
/// - `EmptyFeatureSet`
///   A latent-class wrapper was constructed with zero feature models.
/// - `EmptyProbabilityVector`
///   A multinoulli model was constructed with zero categories.
/// - `ClassPriorMismatch { classes, priors }`
///   The number of class-conditional models and prior weights disagree.
/// - `FeatureCountMismatch { expected, actual }`
///   A joint observation's feature count disagrees with the class
///   wrapper's feature-model count.
/// - `InvalidPrior(value)`
///   A prior weight is negative or non-finite.
/// - `ZeroPriorMass`
///   The prior weights sum to zero, so no class carries any mass.
/// - `InvalidProbability(value)`
///   A multinoulli mass is negative or non-finite.
/// - `ZeroProbabilityMass`
///   All multinoulli masses are zero.
/// - `CategoryOutOfRange { category, support }`
///   A multinoulli observation indexes past the support.
/// - `ObservationTypeMismatch { expected, found }`
///   A feature model was handed the wrong observation kind (e.g. a
///   category where a ranking was required).
/// - `ZeroNormalizer`
///   Every class assigned the observation zero weighted likelihood, so
///   posteriors cannot be normalized.
/// - `Ranking(RankError)`
///   A wrapped ranking-layer failure, preserved for matching.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`]
///   and is convertible to `PyErr` behind the `python-bindings` feature.
#[derive(Debug, Clone, PartialEq)]
pub enum MixtureError {
    //------ Construction-time errors ------
    EmptyMixture,
    EmptyFeatureSet,
    EmptyProbabilityVector,
    ClassPriorMismatch { classes: usize, priors: usize },
    InvalidPrior(f64),
    ZeroPriorMass,
    InvalidProbability(f64),
    ZeroProbabilityMass,
    //------ Evaluation-time errors ------
    FeatureCountMismatch { expected: usize, actual: usize },
    CategoryOutOfRange { category: usize, support: usize },
    ObservationTypeMismatch { expected: &'static str, found: &'static str },
    ZeroNormalizer,
    //------ Wrapped ranking-layer errors ------
    Ranking(RankError),
}

impl std::error::Error for MixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MixtureError::Ranking(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for MixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MixtureError::EmptyMixture => {
                write!(f, "Mixture must contain at least one latent class.")
            }
            MixtureError::EmptyFeatureSet => {
                write!(f, "Latent class must contain at least one feature model.")
            }
            MixtureError::EmptyProbabilityVector => {
                write!(f, "Multinoulli model must contain at least one category mass.")
            }
            MixtureError::ClassPriorMismatch { classes, priors } => {
                write!(f, "Different number of class models ({classes}) and priors ({priors}).")
            }
            MixtureError::InvalidPrior(value) => {
                write!(f, "Invalid prior weight: {value}. Must be finite and non-negative.")
            }
            MixtureError::ZeroPriorMass => {
                write!(f, "Prior weights sum to zero; at least one class must carry mass.")
            }
            MixtureError::InvalidProbability(value) => {
                write!(f, "Invalid category mass: {value}. Must be finite and non-negative.")
            }
            MixtureError::ZeroProbabilityMass => {
                write!(f, "Category masses sum to zero; at least one category must carry mass.")
            }
            MixtureError::FeatureCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Observation has {actual} features but the class expects {expected}."
                )
            }
            MixtureError::CategoryOutOfRange { category, support } => {
                write!(
                    f,
                    "Observed category {category} is outside the support 0..{support}."
                )
            }
            MixtureError::ObservationTypeMismatch { expected, found } => {
                write!(f, "Observation type mismatch: expected {expected}, found {found}.")
            }
            MixtureError::ZeroNormalizer => {
                write!(
                    f,
                    "All classes assign zero weighted likelihood to this observation; \
                     posteriors are undefined."
                )
            }
            MixtureError::Ranking(err) => write!(f, "Ranking feature failed: {err}"),
        }
    }
}

impl From<RankError> for MixtureError {
    fn from(err: RankError) -> MixtureError {
        MixtureError::Ranking(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<MixtureError> for PyErr {
    fn from(err: MixtureError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
