//! ranking::kernel — exact sum-over-orderings factor for one tie group.
//!
//! Purpose
//! -------
//! Compute the marginal likelihood contribution of a set of mutually
//! tied alternatives under the rank-ordered (exploded) logit model: the
//! sum, over every possible internal ordering of the tied set, of the
//! product of sequential "pick the next-most-preferred item" terms, with
//! all strictly-lower-ranked items present in each denominator as
//! never-chosen competitors.
//!
//! Key behaviors
//! -------------
//! - Evaluate the recursion
//!   f(∅) = 1,
//!   f(S) = Σ_{j∈S} wⱼ / (Σ_{k∈S} wₖ + D) · f(S \ {j})
//!   exactly for the full tied set, where D is the aggregate
//!   exponentiated weight of everything ranked strictly below the group.
//! - Exploit the optimal substructure over subsets: one bottom-up pass
//!   over bitmask-encoded subsets computes f for all 2^m subsets in
//!   O(2^m · m) time and O(2^m) space, instead of enumerating all m!
//!   orderings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Weights are already exponentiated (and max-shift centered) upstream;
//!   all inputs are finite and non-negative.
//! - The result is a probability-scale value: for D > 0 it lies in
//!   (0, 1); for D = 0 the tied group faces no competitors and the
//!   orderings sum to exactly 1.
//! - Purity: no side effects, no hidden state, no allocation beyond the
//!   two DP tables.
//!
//! Conventions
//! -----------
//! - Subsets of the tied items are encoded as bitmasks over `usize`;
//!   bit j set means tied item j is still unplaced.
//! - Tie-group sizes are bounded by the number of categories J, which is
//!   small in every intended deployment; the DP tables grow as 2^m, so
//!   callers keep m well below the mask width.
//!
//! Downstream usage
//! ----------------
//! - `RankLogitModel::pmf` calls [`permutation_sum`] once per non-bottom
//!   tie group, routing through the tie-group cache for large groups.
//!
//! Testing notes
//! -------------
//! - Unit tests compare the DP against a brute-force enumeration of all
//!   m! orderings for m ≤ 6, and pin down the closed forms for m = 1
//!   and m = 2.

/// Exact tie-group likelihood factor via subset dynamic programming.
///
/// Parameters
/// ----------
/// - `tied_weights`: `&[f64]`
///   Exponentiated weights of the m mutually tied items. Finite and
///   non-negative; order within the slice is irrelevant to the result.
/// - `lower_sum`: `f64`
///   Aggregate exponentiated weight of every item ranked strictly below
///   the group. Finite and non-negative; these items appear in every
///   denominator but are never placed.
///
/// Returns
/// -------
/// `f64`
///   f(FullSet) for the recursion above: the exact probability of
///   observing these m items tied above all `lower_sum`-weighted items
///   with their internal order unobserved.
///
/// Panics
/// ------
/// - Panics if `tied_weights.len() >= usize::BITS`, since subsets are
///   bitmask-encoded. The O(2^m) tables make such sizes unreachable in
///   practice long before the mask width is.
///
/// Notes
/// -----
/// - m = 0 returns 1.0 (empty product); m = 1 degenerates to the
///   standard exploded-logit term `w / (w + lower_sum)`.
/// - Each f(S) is assembled in O(|S|) from already-computed smaller
///   subsets; subset weight sums are built incrementally from the
///   lowest set bit, so no per-subset summation loop is needed.
pub fn permutation_sum(tied_weights: &[f64], lower_sum: f64) -> f64 {
    let m = tied_weights.len();
    if m == 0 {
        return 1.0;
    }
    if m == 1 {
        return tied_weights[0] / (tied_weights[0] + lower_sum);
    }
    assert!(
        (m as u32) < usize::BITS,
        "tie group of {m} items exceeds the bitmask subset encoding"
    );

    let full: usize = (1 << m) - 1;
    // subset_sums[s] = Σ_{k ∈ s} w_k, built from the next-smaller subset.
    let mut subset_sums = vec![0.0_f64; full + 1];
    // f[s] = sum-over-orderings factor for subset s.
    let mut f = vec![0.0_f64; full + 1];
    f[0] = 1.0;

    for mask in 1..=full {
        let low = mask.trailing_zeros() as usize;
        subset_sums[mask] = subset_sums[mask & (mask - 1)] + tied_weights[low];

        let mut numer = 0.0_f64;
        let mut rest = mask;
        while rest != 0 {
            let j = rest.trailing_zeros() as usize;
            let bit = 1_usize << j;
            numer += tied_weights[j] * f[mask ^ bit];
            rest ^= bit;
        }
        f[mask] = numer / (subset_sums[mask] + lower_sum);
    }

    f[full]
}
