//! Latent-class mixture classifier: priors, posteriors, and argmax.
//!
//! Composes class-conditional likelihoods with prior class weights into
//! posterior class probabilities for one joint observation:
//! posterior_c ∝ prior_c · pmf_c(observation), normalized across
//! classes. The degenerate case where every class assigns zero weighted
//! likelihood surfaces as an explicit error rather than a silent
//! division by zero.

use crate::mixture::{
    errors::{MixtureError, MixtureResult},
    latent_class::{LatentClassModel, Observation},
};

/// Linearly weighted Bayesian mixture over latent classes.
///
/// Holds one class-conditional model and one prior weight per latent
/// class. Priors need not be normalized; normalization happens in the
/// posterior itself.
///
/// # Notes
/// - Class order is fixed at construction; posterior vectors and
///   classification indices refer to that order (0-based).
#[derive(Debug, Clone)]
pub struct LatentClassMixture {
    classes: Vec<LatentClassModel>,
    priors: Vec<f64>,
}

impl LatentClassMixture {
    /// Construct a mixture from class-conditional models and priors.
    ///
    /// ## Arguments
    /// - `classes`: one [`LatentClassModel`] per latent class.
    /// - `priors`: one non-negative weight per class; rescaling all
    ///   priors by a common factor leaves every posterior unchanged.
    ///
    /// ## Errors
    /// - [`MixtureError::EmptyMixture`] for zero classes.
    /// - [`MixtureError::ClassPriorMismatch`] when the counts disagree.
    /// - [`MixtureError::InvalidPrior`] for a negative or non-finite
    ///   weight.
    /// - [`MixtureError::ZeroPriorMass`] when every weight is zero.
    pub fn new(
        classes: Vec<LatentClassModel>, priors: Vec<f64>,
    ) -> MixtureResult<LatentClassMixture> {
        if classes.is_empty() {
            return Err(MixtureError::EmptyMixture);
        }
        if classes.len() != priors.len() {
            return Err(MixtureError::ClassPriorMismatch {
                classes: classes.len(),
                priors: priors.len(),
            });
        }
        for &weight in &priors {
            if !weight.is_finite() || weight < 0.0 {
                return Err(MixtureError::InvalidPrior(weight));
            }
        }
        if priors.iter().sum::<f64>() <= 0.0 {
            return Err(MixtureError::ZeroPriorMass);
        }
        Ok(LatentClassMixture { classes, priors })
    }

    /// Posterior class probabilities for one joint observation.
    ///
    /// ## Steps
    /// 1. Evaluate every class-conditional likelihood on the
    ///    observation and weight it by the class prior.
    /// 2. Normalize the weighted likelihoods to sum to one.
    ///
    /// ## Returns
    /// - A vector of length `n_classes` summing to 1, in class order.
    ///
    /// ## Errors
    /// - Any per-class evaluation failure, propagated unchanged.
    /// - [`MixtureError::ZeroNormalizer`] when every weighted
    ///   likelihood is zero, leaving the posterior undefined.
    pub fn posterior(&self, observations: &[Observation]) -> MixtureResult<Vec<f64>> {
        let mut weighted = Vec::with_capacity(self.classes.len());
        for (class, &prior) in self.classes.iter().zip(&self.priors) {
            weighted.push(prior * class.pmf(observations)?);
        }

        let normalizer: f64 = weighted.iter().sum();
        if normalizer <= 0.0 {
            return Err(MixtureError::ZeroNormalizer);
        }
        for value in &mut weighted {
            *value /= normalizer;
        }
        Ok(weighted)
    }

    /// Most probable latent class for one joint observation.
    ///
    /// ## Returns
    /// - The 0-based index of the class with the largest posterior;
    ///   ties resolve to the lowest index.
    ///
    /// ## Errors
    /// - Same failure modes as [`posterior`](Self::posterior).
    pub fn classify(&self, observations: &[Observation]) -> MixtureResult<usize> {
        let posterior = self.posterior(observations)?;
        let mut best = 0;
        for (index, &probability) in posterior.iter().enumerate().skip(1) {
            if probability > posterior[best] {
                best = index;
            }
        }
        Ok(best)
    }

    /// Number of latent classes.
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// The class-conditional models in class order.
    pub fn classes(&self) -> &[LatentClassModel] {
        &self.classes
    }

    /// The prior weights in class order, as supplied at construction.
    pub fn priors(&self) -> &[f64] {
        &self.priors
    }
}
