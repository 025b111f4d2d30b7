//! rust_ranklogit — exact tied-ranking logit likelihoods with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the tied-ranking likelihood core and the latent-class mixture
//! layer to Python via the `_rust_ranklogit` extension module. When the
//! `python-bindings` feature is enabled, this module defines the
//! Python-facing classes and submodules used by the `rust_ranklogit`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`ranking`, `mixture`, `numerics`)
//!   as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for
//!   the `_rust_ranklogit` Python extension.
//! - Create and register Python submodules (`models`, `mixture`) under
//!   `rust_ranklogit` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules;
//!   this file performs only FFI glue, input extraction, and error
//!   mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror
//!   the invariants and signatures of their Rust counterparts
//!   (`RankLogitModel`, `MultinoulliModel`, `LatentClassMixture`).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_ranklogit.<submodule>` and
//!   are typically wrapped by thin pure-Python facades in the top-level
//!   `rust_ranklogit` package.
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner
//!   modules and can ignore the PyO3 items guarded by the
//!   `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_ranklogit` module
//!   defined here and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner
//!   modules and by the `tests/` integration suite.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed, called, and round-tripped correctly from Python.

pub mod mixture;
pub mod numerics;
pub mod ranking;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    mixture::{FeatureModel, LatentClassMixture, LatentClassModel, MultinoulliModel},
    ranking::{cache::CACHE_TIED_THRESHOLD, model::RankLogitModel},
    utils::{
        extract_f64_array, extract_feature_models, extract_i64_ranking, extract_joint_observation,
    },
};

/// TiedRankLogit — Python-facing wrapper for the tied-ranking logit model.
///
/// Purpose
/// -------
/// Expose [`RankLogitModel`] to Python callers: exact likelihoods of
/// observed, possibly-tied rankings under a fixed linear-index parameter
/// vector, with the tie-group cache and its diagnostics.
///
/// Key behaviors
/// -------------
/// - Validate and convert Python parameter inputs into a contiguous
///   `f64` vector at construction; weights are exponentiated eagerly
///   with the max-shift guard.
/// - Evaluate `pmf(observed_ranking)` by delegating to
///   [`RankLogitModel::pmf`] and mapping errors to `ValueError`.
/// - Expose `n_categories`, `cache_hits`, and `cached_groups` as
///   read-only properties.
///
/// Parameters
/// ----------
/// Constructed from Python via `TiedRankLogit(parameters, cache_threshold=None)`:
/// - `parameters`: `&PyAny`
///   One-dimensional array-like of finite `f64` linear-index weights,
///   one per category, length ≥ 1.
/// - `cache_threshold`: `Option<usize>`
///   Minimum tied-set size for caching kernel results; defaults to the
///   crate's threshold. Pass a value past any realistic group size to
///   disable caching.
///
/// Fields
/// ------
/// - `inner`: [`RankLogitModel`]
///   Rust-side model holding the parameter vector, centered weights,
///   and tie-group cache.
///
/// Invariants
/// ----------
/// - `inner` is always a validated model: J ≥ 1 and finite weights.
///
/// Performance
/// -----------
/// - One allocation copies Python data into the Rust parameter vector;
///   evaluation allocates only per-tie-group scratch.
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native
///   Rust code should prefer [`RankLogitModel`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_ranklogit.models")]
pub struct TiedRankLogit {
    /// The underlying Rust ranking model.
    pub inner: RankLogitModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl TiedRankLogit {
    /// Rank-ordered (exploded) logit model with exact tie handling.
    ///
    /// The likelihood of a ranking sums over every internal ordering of
    /// each tied group; higher rank value = more preferred.
    #[new]
    #[pyo3(
        text_signature = "(parameters, /, cache_threshold=None)",
        signature = (parameters, cache_threshold = None)
    )]
    pub fn new<'py>(
        py: Python<'py>, parameters: &Bound<'py, PyAny>, cache_threshold: Option<usize>,
    ) -> PyResult<TiedRankLogit> {
        let arr = extract_f64_array(py, parameters)?;
        let weights = arr.as_slice().map_err(|_| {
            PyValueError::new_err("parameters must be a 1-D contiguous float64 array or sequence")
        })?;
        let params = Array1::from(weights.to_vec());
        let threshold = cache_threshold.unwrap_or(CACHE_TIED_THRESHOLD);
        let inner = RankLogitModel::with_cache_threshold(params, threshold)?;
        Ok(TiedRankLogit { inner })
    }

    /// Exact likelihood of an observed, possibly-tied ranking.
    ///
    /// `observed_ranking` is index-aligned with the parameters; larger
    /// value = more preferred, equal values = tied. Returns a
    /// probability-scale float.
    #[pyo3(text_signature = "(self, observed_ranking, /)")]
    pub fn pmf<'py>(&self, py: Python<'py>, observed_ranking: &Bound<'py, PyAny>) -> PyResult<f64> {
        let ranking = extract_i64_ranking(py, observed_ranking)?;
        Ok(self.inner.pmf(&ranking)?)
    }

    /// Number of categories fixed at construction.
    #[getter]
    pub fn n_categories(&self) -> usize {
        self.inner.n_categories()
    }

    /// The linear-index weights as supplied at construction.
    #[getter]
    pub fn parameters(&self) -> Vec<f64> {
        self.inner.parameters().to_vec()
    }

    /// Number of tie-group evaluations served from the cache.
    #[getter]
    pub fn cache_hits(&self) -> usize {
        self.inner.cache_hits()
    }

    /// Number of distinct tie groups currently cached.
    #[getter]
    pub fn cached_groups(&self) -> usize {
        self.inner.cached_groups()
    }
}

/// Multinoulli — Python-facing wrapper for the categorical feature model.
///
/// Purpose
/// -------
/// Expose [`MultinoulliModel`] to Python callers: one draw from a finite
/// category set, observed as a 0-based category index.
///
/// Key behaviors
/// -------------
/// - Validate and convert Python mass inputs at construction.
/// - Evaluate `pmf(category)` with explicit out-of-range errors.
///
/// Parameters
/// ----------
/// Constructed from Python via `Multinoulli(probabilities)`:
/// - `probabilities`: `&PyAny`
///   One-dimensional array-like of finite, non-negative masses with a
///   positive total; not forced to sum to one.
///
/// Fields
/// ------
/// - `inner`: [`MultinoulliModel`]
///   Rust-side mass vector.
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should use
///   [`MultinoulliModel`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_ranklogit.models")]
pub struct Multinoulli {
    /// The underlying Rust multinoulli model.
    pub inner: MultinoulliModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Multinoulli {
    /// Categorical (multinomial with n = 1) feature model.
    #[new]
    #[pyo3(text_signature = "(probabilities, /)")]
    pub fn new<'py>(py: Python<'py>, probabilities: &Bound<'py, PyAny>) -> PyResult<Multinoulli> {
        let arr = extract_f64_array(py, probabilities)?;
        let masses = arr.as_slice().map_err(|_| {
            PyValueError::new_err(
                "probabilities must be a 1-D contiguous float64 array or sequence",
            )
        })?;
        let inner = MultinoulliModel::new(masses.to_vec())?;
        Ok(Multinoulli { inner })
    }

    /// Mass of the observed category (0-based index).
    #[pyo3(text_signature = "(self, category, /)")]
    pub fn pmf(&self, category: usize) -> PyResult<f64> {
        Ok(self.inner.pmf(category)?)
    }

    /// Number of categories in the support.
    #[getter]
    pub fn support(&self) -> usize {
        self.inner.support()
    }
}

/// LCAMixture — Python-facing latent-class mixture classifier.
///
/// Purpose
/// -------
/// Expose [`LatentClassMixture`] to Python callers: posterior class
/// probabilities and classification for joint observations over
/// ranking and categorical features.
///
/// Key behaviors
/// -------------
/// - Build class-conditional models from per-class lists of
///   `TiedRankLogit` / `Multinoulli` objects (inner models are cloned
///   out; later mutation of the Python objects does not affect the
///   mixture).
/// - Require every class to carry the same feature-kind signature, so
///   one joint observation is meaningful for all classes.
/// - Evaluate `predict_proba(observation)` and `predict(observation)`
///   by pairing each observation slot with its feature kind.
///
/// Parameters
/// ----------
/// Constructed from Python via `LCAMixture(classes, priors)`:
/// - `classes`: `&PyAny`
///   Sequence of per-class feature-model sequences.
/// - `priors`: `&PyAny`
///   One-dimensional array-like of non-negative class weights with a
///   positive total; rescaling all priors changes nothing.
///
/// Fields
/// ------
/// - `inner`: [`LatentClassMixture`]
///   Rust-side mixture owning cloned feature models and priors.
///
/// Invariants
/// ----------
/// - All classes share one feature-kind signature, checked at
///   construction.
///
/// Notes
/// -----
/// - `predict` returns a 0-based class index.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_ranklogit.mixture")]
pub struct LCAMixture {
    /// The underlying Rust mixture.
    pub inner: LatentClassMixture,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LCAMixture {
    /// Linearly weighted Bayesian mixture over latent classes.
    #[new]
    #[pyo3(text_signature = "(classes, priors, /)")]
    pub fn new<'py>(
        py: Python<'py>, classes: &Bound<'py, PyAny>, priors: &Bound<'py, PyAny>,
    ) -> PyResult<LCAMixture> {
        let mut class_models = Vec::new();
        for class_features in classes.try_iter()? {
            let features = extract_feature_models(&class_features?)?;
            class_models.push(LatentClassModel::new(features)?);
        }

        // One observation layout must fit every class.
        if let Some(first) = class_models.first() {
            let signature: Vec<&'static str> =
                first.features().iter().map(feature_kind).collect();
            for (index, class) in class_models.iter().enumerate().skip(1) {
                let kinds: Vec<&'static str> = class.features().iter().map(feature_kind).collect();
                if kinds != signature {
                    return Err(PyValueError::new_err(format!(
                        "class {index} has feature kinds {kinds:?} but class 0 has {signature:?}"
                    )));
                }
            }
        }

        let prior_arr = extract_f64_array(py, priors)?;
        let prior_slice = prior_arr.as_slice().map_err(|_| {
            PyValueError::new_err("priors must be a 1-D contiguous float64 array or sequence")
        })?;
        let inner = LatentClassMixture::new(class_models, prior_slice.to_vec())?;
        Ok(LCAMixture { inner })
    }

    /// Posterior class probabilities for one joint observation.
    ///
    /// `observation` is a sequence with one entry per feature: a
    /// ranking sequence for ranking features, an integer for
    /// categorical features.
    #[pyo3(text_signature = "(self, observation, /)")]
    pub fn predict_proba<'py>(
        &self, py: Python<'py>, observation: &Bound<'py, PyAny>,
    ) -> PyResult<Vec<f64>> {
        let features = self.inner.classes()[0].features();
        let observations = extract_joint_observation(py, features, observation)?;
        Ok(self.inner.posterior(&observations)?)
    }

    /// Most probable latent class (0-based index) for one observation.
    #[pyo3(text_signature = "(self, observation, /)")]
    pub fn predict<'py>(
        &self, py: Python<'py>, observation: &Bound<'py, PyAny>,
    ) -> PyResult<usize> {
        let features = self.inner.classes()[0].features();
        let observations = extract_joint_observation(py, features, observation)?;
        Ok(self.inner.classify(&observations)?)
    }

    /// Number of latent classes.
    #[getter]
    pub fn n_classes(&self) -> usize {
        self.inner.n_classes()
    }

    /// The prior weights in class order.
    #[getter]
    pub fn priors(&self) -> Vec<f64> {
        self.inner.priors().to_vec()
    }
}

/// Feature-kind tag used for the cross-class signature check.
#[cfg(feature = "python-bindings")]
fn feature_kind(feature: &FeatureModel) -> &'static str {
    match feature {
        FeatureModel::Ranking(_) => "ranking",
        FeatureModel::Multinoulli(_) => "multinoulli",
    }
}

/// _rust_ranklogit — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_ranklogit` Python module and register its
/// submodules used by the public `rust_ranklogit` package.
///
/// Key behaviors
/// -------------
/// - Create `models` and `mixture` submodules.
/// - Attach those submodules to the parent `_rust_ranklogit` module.
/// - Register the submodules in `sys.modules` so they are importable
///   via dotted paths from Python.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing
///   the compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_ranklogit<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let models_mod = PyModule::new(_py, "models")?;
    let mixture_mod = PyModule::new(_py, "mixture")?;
    models(_py, m, &models_mod)?;
    mixture_submodule(_py, m, &mixture_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_ranklogit.models", models_mod)?;

    _py.import("sys")?.getattr("modules")?.set_item("rust_ranklogit.mixture", mixture_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn models<'py>(
    _py: Python, rust_ranklogit: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<TiedRankLogit>()?;
    m.add_class::<Multinoulli>()?;
    rust_ranklogit.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn mixture_submodule<'py>(
    _py: Python, rust_ranklogit: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<LCAMixture>()?;
    rust_ranklogit.add_submodule(m)?;
    Ok(())
}
