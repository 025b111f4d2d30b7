//! Multinoulli feature model: a categorical mass vector behind `pmf`.
//!
//! The simplest per-feature model the mixture layer composes: one draw
//! from a finite category set, with the observation encoded as the
//! category index. Masses are validated at construction but not forced
//! to sum to one — the mixture layer renormalizes posteriors itself, so
//! unnormalized masses only rescale every class identically.

use crate::mixture::errors::{MixtureError, MixtureResult};

/// Categorical (multinomial with n = 1) per-feature model.
///
/// Holds one non-negative mass per category; `pmf(k)` returns the mass
/// of category `k`. Out-of-range observations fail explicitly instead
/// of panicking on the index.
///
/// # Notes
/// - Construction requires a non-empty mass vector with finite,
///   non-negative entries and positive total mass.
/// - Masses are used as-is; see the module docs for why normalization
///   is not enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct MultinoulliModel {
    probabilities: Vec<f64>,
}

impl MultinoulliModel {
    /// Construct a multinoulli model from per-category masses.
    ///
    /// ## Arguments
    /// - `probabilities`: one mass per category, index-aligned with the
    ///   observation encoding. Consumed; the model owns its masses.
    ///
    /// ## Errors
    /// - [`MixtureError::EmptyProbabilityVector`] for zero categories.
    /// - [`MixtureError::InvalidProbability`] for a negative or
    ///   non-finite mass.
    /// - [`MixtureError::ZeroProbabilityMass`] when every mass is zero.
    pub fn new(probabilities: Vec<f64>) -> MixtureResult<MultinoulliModel> {
        if probabilities.is_empty() {
            return Err(MixtureError::EmptyProbabilityVector);
        }
        for &mass in &probabilities {
            if !mass.is_finite() || mass < 0.0 {
                return Err(MixtureError::InvalidProbability(mass));
            }
        }
        if probabilities.iter().sum::<f64>() <= 0.0 {
            return Err(MixtureError::ZeroProbabilityMass);
        }
        Ok(MultinoulliModel { probabilities })
    }

    /// Mass of the observed category.
    ///
    /// ## Arguments
    /// - `category`: 0-based category index.
    ///
    /// ## Errors
    /// - [`MixtureError::CategoryOutOfRange`] when `category` indexes
    ///   past the support.
    pub fn pmf(&self, category: usize) -> MixtureResult<f64> {
        self.probabilities.get(category).copied().ok_or(MixtureError::CategoryOutOfRange {
            category,
            support: self.probabilities.len(),
        })
    }

    /// Number of categories in the support.
    pub fn support(&self) -> usize {
        self.probabilities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction validation: empty vector, negative mass, all-zero
    //   masses.
    // - In-range and out-of-range pmf lookups.
    //
    // They intentionally DO NOT cover:
    // - Composition with other feature models, which is exercised in the
    //   latent-class and mixture tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that construction rejects empty, negative, and all-zero
    // mass vectors with the matching error variants.
    //
    // Given
    // -----
    // - An empty vector, a vector containing -0.1, and [0.0, 0.0].
    //
    // Expect
    // ------
    // - `EmptyProbabilityVector`, `InvalidProbability(-0.1)`, and
    //   `ZeroProbabilityMass` respectively.
    fn new_rejects_empty_negative_and_zero_mass_vectors() {
        // Act & Assert: empty
        match MultinoulliModel::new(Vec::new()) {
            Err(MixtureError::EmptyProbabilityVector) => (),
            other => panic!("expected EmptyProbabilityVector, got {other:?}"),
        }

        // Act & Assert: negative mass
        match MultinoulliModel::new(vec![0.5, -0.1, 0.6]) {
            Err(MixtureError::InvalidProbability(v)) => assert_eq!(v, -0.1),
            other => panic!("expected InvalidProbability, got {other:?}"),
        }

        // Act & Assert: zero total mass
        match MultinoulliModel::new(vec![0.0, 0.0]) {
            Err(MixtureError::ZeroProbabilityMass) => (),
            other => panic!("expected ZeroProbabilityMass, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `pmf` returns the stored mass for in-range categories
    // and an explicit error past the support.
    //
    // Given
    // -----
    // - Masses [0.2, 0.3, 0.5].
    //
    // Expect
    // ------
    // - pmf(1) == 0.3; pmf(3) fails with
    //   `CategoryOutOfRange { category: 3, support: 3 }`.
    fn pmf_returns_mass_in_range_and_errors_out_of_range() {
        // Arrange
        let model = MultinoulliModel::new(vec![0.2, 0.3, 0.5]).expect("valid masses");

        // Act & Assert: in range
        assert_eq!(model.pmf(1).unwrap(), 0.3);
        assert_eq!(model.support(), 3);

        // Act & Assert: out of range
        match model.pmf(3) {
            Err(MixtureError::CategoryOutOfRange { category: 3, support: 3 }) => (),
            other => panic!("expected CategoryOutOfRange, got {other:?}"),
        }
    }
}
