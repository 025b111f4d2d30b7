//! Per-class feature composition: one model per feature, one product.
//!
//! A latent class is modeled as a set of mutually independent per-feature
//! models; the class-conditional likelihood of a joint observation is the
//! product of the per-feature likelihoods. Feature models form a closed
//! family ([`FeatureModel`]) dispatched over a matching [`Observation`]
//! kind, so a mis-paired observation fails explicitly instead of being
//! coerced.

use crate::{
    mixture::{
        errors::{MixtureError, MixtureResult},
        multinoulli::MultinoulliModel,
    },
    ranking::model::RankLogitModel,
};

/// One feature's observed value within a joint observation.
///
/// Index-aligned with the owning class's feature models: feature `i` of
/// an observation must match the kind of feature model `i`.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// A possibly-tied ranking over the feature's category set.
    Ranking(Vec<i64>),
    /// A single observed category index.
    Category(usize),
}

impl Observation {
    /// Human-readable kind, used in mismatch diagnostics.
    fn kind(&self) -> &'static str {
        match self {
            Observation::Ranking(_) => "a ranking",
            Observation::Category(_) => "a category",
        }
    }
}

/// Closed family of per-feature model types.
///
/// Mirrors the set of observation kinds: a ranking feature is priced by
/// a [`RankLogitModel`], a categorical feature by a
/// [`MultinoulliModel`]. Dispatch is by matching the model family with
/// the observation kind.
///
/// # Notes
/// - A closed enum keeps the mixture layer object-safe for bindings and
///   makes the supported families explicit; new feature types extend
///   both enums together.
#[derive(Debug, Clone)]
pub enum FeatureModel {
    Ranking(RankLogitModel),
    Multinoulli(MultinoulliModel),
}

impl FeatureModel {
    /// Likelihood of one feature's observed value under this model.
    ///
    /// ## Errors
    /// - [`MixtureError::ObservationTypeMismatch`] when the observation
    ///   kind does not match the model family.
    /// - Wrapped [`MixtureError::Ranking`] failures from the ranking
    ///   layer; multinoulli errors pass through unchanged.
    pub fn pmf(&self, observation: &Observation) -> MixtureResult<f64> {
        match (self, observation) {
            (FeatureModel::Ranking(model), Observation::Ranking(ranking)) => {
                Ok(model.pmf(ranking)?)
            }
            (FeatureModel::Multinoulli(model), Observation::Category(category)) => {
                model.pmf(*category)
            }
            (FeatureModel::Ranking(_), observed) => Err(MixtureError::ObservationTypeMismatch {
                expected: "a ranking",
                found: observed.kind(),
            }),
            (FeatureModel::Multinoulli(_), observed) => {
                Err(MixtureError::ObservationTypeMismatch {
                    expected: "a category",
                    found: observed.kind(),
                })
            }
        }
    }
}

/// Independent per-feature models composing one latent class.
///
/// The class-conditional likelihood of a joint observation is the
/// product of each feature model's `pmf` on its slot of the
/// observation vector.
///
/// # Notes
/// - Feature order is fixed at construction and must match the order of
///   the observation vector on every evaluation.
#[derive(Debug, Clone)]
pub struct LatentClassModel {
    features: Vec<FeatureModel>,
}

impl LatentClassModel {
    /// Construct a class from its per-feature models.
    ///
    /// ## Errors
    /// - [`MixtureError::EmptyFeatureSet`] for zero features.
    pub fn new(features: Vec<FeatureModel>) -> MixtureResult<LatentClassModel> {
        if features.is_empty() {
            return Err(MixtureError::EmptyFeatureSet);
        }
        Ok(LatentClassModel { features })
    }

    /// Class-conditional likelihood of a joint observation.
    ///
    /// ## Arguments
    /// - `observations`: one [`Observation`] per feature, index-aligned
    ///   with the feature models.
    ///
    /// ## Errors
    /// - [`MixtureError::FeatureCountMismatch`] when the observation
    ///   vector length disagrees with the feature count.
    /// - Any per-feature failure, propagated from the matching model.
    pub fn pmf(&self, observations: &[Observation]) -> MixtureResult<f64> {
        if observations.len() != self.features.len() {
            return Err(MixtureError::FeatureCountMismatch {
                expected: self.features.len(),
                actual: observations.len(),
            });
        }

        let mut likelihood = 1.0_f64;
        for (model, observation) in self.features.iter().zip(observations) {
            likelihood *= model.pmf(observation)?;
        }
        Ok(likelihood)
    }

    /// Number of features in this class.
    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    /// The per-feature models in class order.
    pub fn features(&self) -> &[FeatureModel] {
        &self.features
    }
}
