//! mixture — latent-class composition of per-feature likelihood models.
//!
//! Purpose
//! -------
//! Compose independent per-feature likelihood models into latent-class
//! models and a linearly weighted Bayesian mixture classifier. A joint
//! observation carries one value per feature; each latent class prices
//! it as a product of per-feature likelihoods, and the mixture turns
//! those class-conditional likelihoods plus priors into posterior class
//! probabilities.
//!
//! Key behaviors
//! -------------
//! - Provide the closed per-feature family
//!   [`FeatureModel`](latent_class::FeatureModel) (tied-ranking logit
//!   and multinoulli) dispatched over matching
//!   [`Observation`](latent_class::Observation) kinds.
//! - Provide [`LatentClassModel`](latent_class::LatentClassModel), the
//!   per-class product of feature likelihoods, and
//!   [`LatentClassMixture`](lca::LatentClassMixture) with
//!   [`posterior`](lca::LatentClassMixture::posterior) and
//!   [`classify`](lca::LatentClassMixture::classify).
//! - Centralize error types in [`errors`], wrapping ranking-layer
//!   failures so `?` composes across subtrees.
//!
//! Invariants & assumptions
//! ------------------------
//! - Feature and class order are fixed at construction; observation
//!   vectors and posterior vectors are index-aligned with them.
//! - Priors and multinoulli masses are validated non-negative and
//!   finite with positive totals, but are not forced to sum to one;
//!   the posterior normalizes itself.
//! - Degenerate evaluations (all-zero weighted likelihoods,
//!   out-of-range categories, mis-paired observation kinds) surface as
//!   explicit [`MixtureError`](errors::MixtureError) variants, never as
//!   NaN or a panic.
//!
//! Conventions
//! -----------
//! - Class and category indices are 0-based throughout.
//! - This subtree owns no I/O; ingestion of observation tables is a
//!   caller concern.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code builds a mixture bottom-up:
//!
//!   ```rust
//!   use ndarray::array;
//!   use rust_ranklogit::mixture::{
//!       FeatureModel, LatentClassMixture, LatentClassModel, MultinoulliModel, Observation,
//!   };
//!   use rust_ranklogit::ranking::RankLogitModel;
//!
//!   let class = LatentClassModel::new(vec![
//!       FeatureModel::Ranking(RankLogitModel::new(array![0.0, 1.0])?),
//!       FeatureModel::Multinoulli(MultinoulliModel::new(vec![0.3, 0.7])?),
//!   ])?;
//!   let mixture = LatentClassMixture::new(vec![class.clone(), class], vec![0.5, 0.5])?;
//!   let posterior = mixture.posterior(&[
//!       Observation::Ranking(vec![2, 1]),
//!       Observation::Category(0),
//!   ])?;
//!   # Ok::<(), rust_ranklogit::mixture::MixtureError>(())
//!   ```
//!
//! - Python bindings expose the same composition as classes in
//!   `_rust_ranklogit.mixture`.
//!
//! Testing notes
//! -------------
//! - Unit tests per module cover construction guards, dispatch,
//!   normalization, and tie resolution; the integration suite runs the
//!   full ranking-plus-multinoulli pipeline end-to-end.

pub mod errors;
pub mod latent_class;
pub mod lca;
pub mod multinoulli;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{MixtureError, MixtureResult};
pub use self::latent_class::{FeatureModel, LatentClassModel, Observation};
pub use self::lca::LatentClassMixture;
pub use self::multinoulli::MultinoulliModel;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_ranklogit::mixture::prelude::*;
//
// to import the main mixture surface in a single line.

pub mod prelude {
    pub use super::errors::{MixtureError, MixtureResult};
    pub use super::latent_class::{FeatureModel, LatentClassModel, Observation};
    pub use super::lca::LatentClassMixture;
    pub use super::multinoulli::MultinoulliModel;
}
