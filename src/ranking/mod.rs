//! ranking — exact tied-ranking likelihoods under the exploded logit.
//!
//! Purpose
//! -------
//! Collect the rank-ordered (exploded) multinomial logit likelihood
//! machinery: the model type that owns a fixed linear-index parameter
//! vector, the pure permutation-sum kernel that prices one tie group,
//! the threshold-gated result cache between them, and the shared input
//! guards and error types.
//!
//! Key behaviors
//! -------------
//! - Expose exact likelihood evaluation for possibly-tied rankings via
//!   [`RankLogitModel`] and its [`pmf`](model::RankLogitModel::pmf)
//!   method: higher rank value = more preferred, equal values = tied
//!   with internal order unobserved.
//! - Price each tie group exactly with
//!   [`permutation_sum`](kernel::permutation_sum), a subset dynamic
//!   program over bitmasks (O(2^m · m) for an m-item group) rather than
//!   an O(m!) enumeration of orderings.
//! - Memoize large-group results in [`TieGroupCache`](cache::TieGroupCache),
//!   keyed on index identity, with a hit counter for diagnostics.
//! - Centralize input guards in [`validation`] and error types in
//!   [`errors`], including Python bridges behind the `python-bindings`
//!   feature.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameter vectors are immutable after construction and are
//!   exponentiated once with a max shift, so evaluation is overflow-free
//!   and invariant under a common additive shift of all weights.
//! - Modules in this subtree report failures via [`RankResult`] and
//!   never panic on user-facing invalid input; panics indicate
//!   programming errors.
//! - Evaluation is safe to run concurrently across observations against
//!   one shared model: the cache is lock-guarded and everything else is
//!   read-only.
//!
//! Conventions
//! -----------
//! - The kernel is a pure function over plain `&[f64]` slices with no
//!   object identity or hidden state, so it can be unit-tested and
//!   reused independently of the model.
//! - Error messages are phrased in terms of domain constraints (e.g.
//!   "rank values must be non-negative") rather than low-level details.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use ndarray::array;
//!   use rust_ranklogit::ranking::RankLogitModel;
//!
//!   let model = RankLogitModel::new(array![0.0, 1.0, 2.0])?;
//!   let likelihood = model.pmf(&[1, 2, 2])?;
//!   # Ok::<(), rust_ranklogit::ranking::RankError>(())
//!   ```
//!
//! - The mixture layer wraps [`RankLogitModel`] as one per-feature model
//!   family and multiplies its `pmf` with other feature likelihoods.
//! - Python bindings expose the same surface as the `TiedRankLogit`
//!   class in `_rust_ranklogit.models`.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`kernel`] check the DP against brute-force ordering
//!   enumeration; tests in [`model`] pin closed forms, relabeling and
//!   shift invariance, cache transparency, and error surfacing; tests
//!   in [`validation`] and [`errors`] cover every guard branch and
//!   message payload.

pub mod cache;
pub mod errors;
pub mod kernel;
pub mod model;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::cache::{CACHE_TIED_THRESHOLD, TieGroupCache};
pub use self::errors::{RankError, RankResult};
pub use self::kernel::permutation_sum;
pub use self::model::RankLogitModel;
pub use self::validation::{validate_parameters, validate_ranking};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_ranklogit::ranking::prelude::*;
//
// to import the main ranking surface in a single line.

pub mod prelude {
    pub use super::errors::{RankError, RankResult};
    pub use super::model::RankLogitModel;
}
