//! Tied-ranking logit model: exact likelihoods for possibly-tied rankings.
//!
//! This module wires parameter storage, numerical stabilization, the
//! permutation-sum kernel, and the tie-group cache into one model type.
//! An observed ranking is decomposed into tie groups by descending rank
//! value; each non-bottom group contributes one kernel factor and the
//! product is the exact marginal likelihood of the observation.
//!
//! Key ideas:
//! - Weights are exponentiated once at construction with a max shift, so
//!   evaluation never exponentiates and never overflows.
//! - The descent iterates over the **distinct rank values present**, not
//!   the raw numeric range, so sparse codes (e.g. 1 and 1000) cost the
//!   same as dense ones.
//! - The bottom-most group has nothing ranked below it and contributes a
//!   factor of exactly 1; the descent stops there.
//! - Evaluation is `&self`: the only mutable state is the lock-guarded
//!   tie-group cache, so one model instance serves concurrent calls.

use ndarray::Array1;

use crate::{
    numerics::stabilization::shifted_exp_weights,
    ranking::{
        cache::{CACHE_TIED_THRESHOLD, TieGroupCache},
        errors::{RankError, RankResult},
        kernel::permutation_sum,
        validation::{validate_parameters, validate_ranking},
    },
};

/// Rank-ordered (exploded) logit model over a fixed category set, with
/// exact handling of ties.
///
/// Holds the immutable linear-index parameter vector (one weight per
/// category), its max-shifted exponentiation, and the tie-group result
/// cache. Likelihood evaluation ([`pmf`](Self::pmf)) is read-only apart
/// from the cache's internal state.
///
/// # Notes
/// - Observed rankings are integer vectors index-aligned with the
///   parameter vector; larger value = more preferred, equal values =
///   tied with internal order unobserved.
/// - Cloning a model clones its parameters and a snapshot of its cache;
///   clones share no state.
#[derive(Debug, Clone)]
pub struct RankLogitModel {
    /// Linear-index weights as supplied at construction.
    params: Array1<f64>,
    /// Max-shifted exponentiated weights; the only representation
    /// consulted during evaluation.
    exp_params: Array1<f64>,
    /// Memoized kernel results for recurring large tie groups.
    cache: TieGroupCache,
}

impl RankLogitModel {
    /// Construct a model with the default cache policy.
    ///
    /// ## Arguments
    /// - `params`: linear-index weights, one per category (J ≥ 1, all
    ///   finite). Consumed; the model owns its parameter vector.
    ///
    /// ## Returns
    /// - `Ok(RankLogitModel)` with weights exponentiated eagerly, or a
    ///   validation error.
    ///
    /// ## Errors
    /// - [`RankError::EmptyParameterVector`] for J = 0.
    /// - [`RankError::NonFiniteParameter`] for NaN or ±∞ weights.
    pub fn new(params: Array1<f64>) -> RankResult<RankLogitModel> {
        RankLogitModel::with_cache_threshold(params, CACHE_TIED_THRESHOLD)
    }

    /// Construct a model with an explicit tie-group cache threshold.
    ///
    /// ## Arguments
    /// - `params`: linear-index weights, as for [`new`](Self::new).
    /// - `cache_threshold`: minimum tied-set size for caching kernel
    ///   results. `usize::MAX` disables caching; this changes
    ///   performance only, never any `pmf` value.
    ///
    /// ## Errors
    /// - Same validation errors as [`new`](Self::new).
    pub fn with_cache_threshold(
        params: Array1<f64>, cache_threshold: usize,
    ) -> RankResult<RankLogitModel> {
        let weights = params.as_slice().expect("owned parameter vector is contiguous");
        validate_parameters(weights)?;
        let exp_params = shifted_exp_weights(weights);
        Ok(RankLogitModel { params, exp_params, cache: TieGroupCache::new(cache_threshold) })
    }

    /// Exact likelihood of an observed, possibly-tied ranking.
    ///
    /// ## Steps
    /// 1. Validate length agreement and non-negative rank values.
    /// 2. A fully tied observation (every value identical, J = 1
    ///    included) returns exactly 1.0: it carries no discriminating
    ///    information under this model.
    /// 3. Otherwise walk the distinct rank values present in strictly
    ///    descending order. Per level: collect the tied indices and the
    ///    strictly-lower indices; the bottom level (empty lower set)
    ///    contributes 1 and ends the walk; every other level multiplies
    ///    in one permutation-sum factor, routed through the cache.
    ///
    /// ## Arguments
    /// - `observed_ranking`: rank values index-aligned with the
    ///   parameter vector; larger = more preferred, ties permitted,
    ///   gaps permitted.
    ///
    /// ## Returns
    /// - `Ok(likelihood)` on the probability scale (in [0, 1]).
    ///
    /// ## Errors
    /// - [`RankError::DimensionMismatch`] if the ranking length differs
    ///   from the number of categories.
    /// - [`RankError::InvalidObservation`] if any rank value is negative.
    /// - [`RankError::NumericOverflow`] if the product degenerates to a
    ///   non-finite value (weight gaps beyond `f64` underflow can zero
    ///   every term of a denominator).
    pub fn pmf(&self, observed_ranking: &[i64]) -> RankResult<f64> {
        validate_ranking(observed_ranking, self.n_categories())?;

        let mut levels: Vec<i64> = observed_ranking.to_vec();
        levels.sort_unstable_by(|a, b| b.cmp(a));
        levels.dedup();
        if levels.len() == 1 {
            return Ok(1.0);
        }

        let mut likelihood = 1.0_f64;
        for &level in &levels {
            // Index filters yield ascending order, which is exactly the
            // canonical form the cache key requires.
            let tied: Vec<usize> =
                (0..observed_ranking.len()).filter(|&j| observed_ranking[j] == level).collect();
            let lower: Vec<usize> =
                (0..observed_ranking.len()).filter(|&j| observed_ranking[j] < level).collect();

            if lower.is_empty() {
                break;
            }
            likelihood *= self.tie_group_factor(&tied, &lower);
        }

        if !likelihood.is_finite() {
            return Err(RankError::NumericOverflow);
        }
        Ok(likelihood)
    }

    /// Number of categories J fixed at construction.
    pub fn n_categories(&self) -> usize {
        self.params.len()
    }

    /// The linear-index weights as supplied at construction.
    pub fn parameters(&self) -> &Array1<f64> {
        &self.params
    }

    /// Number of tie-group evaluations served from the cache.
    pub fn cache_hits(&self) -> usize {
        self.cache.hits()
    }

    /// Number of distinct tie groups currently cached.
    pub fn cached_groups(&self) -> usize {
        self.cache.len()
    }

    /// One tie group's likelihood factor, via the cache for large groups.
    ///
    /// `tied` and `lower` are ascending index sets; `lower` is nonempty
    /// (the bottom group never reaches the kernel).
    fn tie_group_factor(&self, tied: &[usize], lower: &[usize]) -> f64 {
        let pending_key = if self.cache.should_cache(tied.len()) {
            let key = (tied.to_vec(), lower.to_vec());
            if let Some(value) = self.cache.lookup(&key) {
                return value;
            }
            Some(key)
        } else {
            None
        };

        let tied_weights: Vec<f64> = tied.iter().map(|&j| self.exp_params[j]).collect();
        let lower_sum: f64 = lower.iter().map(|&j| self.exp_params[j]).sum();
        let value = permutation_sum(&tied_weights, lower_sum);

        if let Some(key) = pending_key {
            self.cache.insert(key, value);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction validation (empty and non-finite parameter vectors).
    // - The fully tied and single-category identities (pmf == 1.0).
    // - Closed-form agreement for the binary-logit pair and for chains
    //   of strict preferences.
    // - The documented three-category tied scenario.
    // - Relabeling invariance (pmf depends only on the ordered partition,
    //   not the numeric rank codes) and shift invariance of parameters.
    // - Cache transparency and hit accounting.
    // - Error surfacing for mismatched, negative, and degenerate inputs.
    //
    // They intentionally DO NOT cover:
    // - Kernel-vs-brute-force agreement for larger tie groups, which is
    //   tested in the kernel module and the integration suite.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that construction rejects an empty parameter vector and a
    // vector containing a non-finite weight.
    //
    // Given
    // -----
    // - An empty vector and a vector containing NaN.
    //
    // Expect
    // ------
    // - `EmptyParameterVector` and `NonFiniteParameter` respectively.
    fn new_rejects_empty_and_non_finite_parameters() {
        // Act & Assert: empty
        match RankLogitModel::new(Array1::from(Vec::<f64>::new())) {
            Err(RankError::EmptyParameterVector) => (),
            other => panic!("expected EmptyParameterVector, got {other:?}"),
        }

        // Act & Assert: NaN weight
        match RankLogitModel::new(array![0.0, f64::NAN]) {
            Err(RankError::NonFiniteParameter(_)) => (),
            other => panic!("expected NonFiniteParameter, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the fully tied identity: any ranking with every value equal
    // has likelihood exactly 1.0, including the J = 1 boundary.
    //
    // Given
    // -----
    // - A three-category model with distinct weights and the rankings
    //   [5, 5, 5] and [0, 0, 0].
    // - A single-category model with rankings [0] and [7].
    //
    // Expect
    // ------
    // - `pmf` returns exactly 1.0 in every case.
    fn pmf_fully_tied_and_single_category_return_one() {
        // Arrange
        let model = RankLogitModel::new(array![0.0, 1.0, 2.0]).expect("valid parameters");
        let singleton = RankLogitModel::new(array![3.7]).expect("valid parameters");

        // Act & Assert
        assert_eq!(model.pmf(&[5, 5, 5]).unwrap(), 1.0);
        assert_eq!(model.pmf(&[0, 0, 0]).unwrap(), 1.0);
        assert_eq!(singleton.pmf(&[0]).unwrap(), 1.0);
        assert_eq!(singleton.pmf(&[7]).unwrap(), 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the binary-logit reduction for J = 2: each strict ordering
    // has the standard two-alternative logit probability of its winner.
    //
    // Given
    // -----
    // - Parameters [0.0, b] with b = 1.3.
    //
    // Expect
    // ------
    // - pmf([1, 2]) == exp(b) / (1 + exp(b)) and
    //   pmf([2, 1]) == 1 / (1 + exp(b)), each to within 1e-15, and the
    //   two probabilities sum to 1.
    fn pmf_two_categories_reduces_to_binary_logit() {
        // Arrange
        let b = 1.3_f64;
        let model = RankLogitModel::new(array![0.0, b]).expect("valid parameters");

        // Act
        let second_preferred = model.pmf(&[1, 2]).unwrap();
        let first_preferred = model.pmf(&[2, 1]).unwrap();

        // Assert
        let p_second = b.exp() / (1.0 + b.exp());
        assert!((second_preferred - p_second).abs() < 1e-15);
        assert!((first_preferred - (1.0 - p_second)).abs() < 1e-15);
        assert!((second_preferred + first_preferred - 1.0).abs() < 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Verify the strict-chain decomposition for three categories: a
    // ranking with no ties is the product of sequential exploded-logit
    // terms, and the bottom level contributes no factor.
    //
    // Given
    // -----
    // - Parameters [0.2, -0.5, 1.1] and the ranking [3, 2, 1]
    //   (category 0 first, then 1, then 2).
    //
    // Expect
    // ------
    // - pmf == w0/(w0+w1+w2) · w1/(w1+w2) to within 1e-15.
    fn pmf_strict_chain_matches_sequential_logit_product() {
        // Arrange
        let params = [0.2_f64, -0.5, 1.1];
        let model = RankLogitModel::new(Array1::from(params.to_vec())).expect("valid parameters");
        let (w0, w1, w2) = (params[0].exp(), params[1].exp(), params[2].exp());
        let expected = w0 / (w0 + w1 + w2) * (w1 / (w1 + w2));

        // Act
        let actual = model.pmf(&[3, 2, 1]).unwrap();

        // Assert
        assert!((actual - expected).abs() < 1e-15, "expected {expected}, got {actual}");
    }

    #[test]
    // Purpose
    // -------
    // Verify the documented three-category tied scenario: categories 1
    // and 2 tied for first, category 0 last.
    //
    // Given
    // -----
    // - Parameters [0.0, 1.0, 2.0] and the ranking [1, 2, 2].
    //
    // Expect
    // ------
    // - pmf equals the two-ordering expansion
    //   w1/(w0+w1+w2)·w2/(w2+w0) + w2/(w0+w1+w2)·w1/(w1+w0)
    //   to within 1e-15.
    fn pmf_tied_top_pair_matches_two_ordering_expansion() {
        // Arrange
        let model = RankLogitModel::new(array![0.0, 1.0, 2.0]).expect("valid parameters");
        let (w0, w1, w2) = (1.0_f64, 1.0_f64.exp(), 2.0_f64.exp());
        let total = w0 + w1 + w2;
        let expected = w1 / total * (w2 / (w2 + w0)) + w2 / total * (w1 / (w1 + w0));

        // Act
        let actual = model.pmf(&[1, 2, 2]).unwrap();

        // Assert
        assert!((actual - expected).abs() < 1e-15, "expected {expected}, got {actual}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that the likelihood depends only on the ordered partition
    // induced by the ranking, not on the numeric codes: relabeling
    // levels monotonically (including sparse codes) changes nothing.
    //
    // Given
    // -----
    // - Parameters [0.4, -1.0, 0.9, 2.2] and three encodings of the same
    //   partition: [3, 3, 2, 1], [1000, 1000, 5, 0], [9, 9, 7, 2].
    //
    // Expect
    // ------
    // - All three encodings produce identical likelihoods.
    fn pmf_is_invariant_under_monotone_relabeling_of_levels() {
        // Arrange
        let model = RankLogitModel::new(array![0.4, -1.0, 0.9, 2.2]).expect("valid parameters");

        // Act
        let dense = model.pmf(&[3, 3, 2, 1]).unwrap();
        let sparse = model.pmf(&[1000, 1000, 5, 0]).unwrap();
        let shifted = model.pmf(&[9, 9, 7, 2]).unwrap();

        // Assert
        assert_eq!(dense, sparse, "sparse relabeling changed the likelihood");
        assert_eq!(dense, shifted, "monotone relabeling changed the likelihood");
    }

    #[test]
    // Purpose
    // -------
    // Verify shift invariance of the parameter vector: adding a common
    // constant to every weight leaves all likelihoods unchanged, and
    // weights far beyond naïve exp() range still evaluate finitely.
    //
    // Given
    // -----
    // - Base parameters [0.0, 1.5, -0.7] and the same vector shifted by
    //   +900 (naïve exp would overflow).
    // - The ranking [2, 3, 1].
    //
    // Expect
    // ------
    // - Both models produce the same finite likelihood to within 1e-15.
    fn pmf_is_invariant_under_common_parameter_shift() {
        // Arrange
        let base = RankLogitModel::new(array![0.0, 1.5, -0.7]).expect("valid parameters");
        let shifted = RankLogitModel::new(array![900.0, 901.5, 899.3]).expect("valid parameters");

        // Act
        let p_base = base.pmf(&[2, 3, 1]).unwrap();
        let p_shifted = shifted.pmf(&[2, 3, 1]).unwrap();

        // Assert
        assert!(p_base.is_finite() && p_base > 0.0);
        assert!(
            (p_base - p_shifted).abs() < 1e-12,
            "shift broke invariance: {p_base} vs {p_shifted}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify cache transparency: default, always-cache, and disabled
    // configurations produce identical likelihoods, and repeated
    // evaluation of a cached group registers hits.
    //
    // Given
    // -----
    // - Ten categories with nine tied for first and one last, so the tie
    //   group clears the default threshold.
    //
    // Expect
    // ------
    // - All three configurations agree exactly.
    // - The default model records zero hits on the first call and one
    //   per repeat thereafter; the disabled model never records hits.
    fn pmf_cache_configurations_agree_and_count_hits() {
        // Arrange
        let weights: Vec<f64> = (0..10).map(|j| 0.1 * j as f64).collect();
        let ranking: Vec<i64> = (0..10).map(|j| if j == 0 { 1 } else { 2 }).collect();
        let default = RankLogitModel::new(Array1::from(weights.clone())).expect("valid");
        let eager =
            RankLogitModel::with_cache_threshold(Array1::from(weights.clone()), 1).expect("valid");
        let disabled =
            RankLogitModel::with_cache_threshold(Array1::from(weights), usize::MAX).expect("valid");

        // Act
        let p_default = default.pmf(&ranking).unwrap();
        let p_eager = eager.pmf(&ranking).unwrap();
        let p_disabled = disabled.pmf(&ranking).unwrap();

        // Assert: identical results
        assert_eq!(p_default, p_eager);
        assert_eq!(p_default, p_disabled);

        // Assert: hit accounting
        assert_eq!(default.cache_hits(), 0, "first evaluation must miss");
        let _ = default.pmf(&ranking).unwrap();
        let _ = default.pmf(&ranking).unwrap();
        assert_eq!(default.cache_hits(), 2, "each repeat should hit the cached group");
        assert_eq!(default.cached_groups(), 1);
        let _ = disabled.pmf(&ranking).unwrap();
        assert_eq!(disabled.cache_hits(), 0, "disabled cache must never hit");
    }

    #[test]
    // Purpose
    // -------
    // Verify evaluation-time error surfacing: wrong-length rankings,
    // negative rank values, and denominator degeneration past f64
    // underflow.
    //
    // Given
    // -----
    // - A three-category model with weights [0.0, -800.0, -900.0].
    // - A length-2 ranking, a ranking containing -1, and the strict
    //   chain [3, 2, 1] whose middle tie group faces a fully
    //   underflowed denominator.
    //
    // Expect
    // ------
    // - `DimensionMismatch`, `InvalidObservation`, and `NumericOverflow`
    //   respectively.
    fn pmf_surfaces_dimension_observation_and_overflow_errors() {
        // Arrange
        let model = RankLogitModel::new(array![0.0, -800.0, -900.0]).expect("valid parameters");

        // Act & Assert: wrong length
        match model.pmf(&[2, 1]) {
            Err(RankError::DimensionMismatch { expected: 3, actual: 2 }) => (),
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }

        // Act & Assert: negative rank value
        match model.pmf(&[2, -1, 0]) {
            Err(RankError::InvalidObservation(-1)) => (),
            other => panic!("expected InvalidObservation, got {other:?}"),
        }

        // Act & Assert: degenerate denominator
        match model.pmf(&[3, 2, 1]) {
            Err(RankError::NumericOverflow) => (),
            other => panic!("expected NumericOverflow, got {other:?}"),
        }
    }
}
