//! ranking::cache — memoized kernel results for recurring tie groups.
//!
//! Purpose
//! -------
//! Avoid recomputing the permutation-sum kernel when the same tie-group
//! pattern recurs across observations. Datasets sharing one schema emit
//! the same index combinations over and over; the kernel cost is
//! exponential in group size, while a lookup is a hash probe.
//!
//! Key behaviors
//! -------------
//! - Key results on index identity — `(sorted tied indices, sorted lower
//!   indices)` — which is sound because the owning model's weights are
//!   immutable after construction.
//! - Gate insertion on a tie-group size threshold: small groups are
//!   cheaper to recompute than to hash, so only groups at or above
//!   [`CACHE_TIED_THRESHOLD`] (by default) are stored.
//! - Guard the map with a read/write lock and count hits atomically, so
//!   one model instance can serve concurrent `pmf` calls across a
//!   dataset without external synchronization.
//!
//! Invariants & assumptions
//! ------------------------
//! - Keys reference category indices meaningful only relative to one
//!   model's parameter vector; a cache is never shared across models.
//! - No eviction: the key space is bounded by combinations of up to J
//!   indices and reused heavily, so growth is bounded in practice. If a
//!   deployment ever carries very large J, an LRU bound belongs here.
//! - Weights never change after model construction; if a mutable-
//!   parameter API is ever added, insertion soundness breaks and the
//!   cache must be invalidated on update.
//!
//! Conventions
//! -----------
//! - The cache does not call the kernel itself; the model computes the
//!   value on a miss and offers it back. This keeps the kernel pure and
//!   the locking discipline in one place.
//!
//! Downstream usage
//! ----------------
//! - `RankLogitModel::pmf` consults [`TieGroupCache::lookup`] before each
//!   large-group kernel call and stores misses via
//!   [`TieGroupCache::insert`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover threshold gating, hit counting, and clone
//!   semantics (entries and diagnostics snapshot, no shared state).

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Smallest tie-group size worth caching.
///
/// For groups below this size the subset DP finishes faster than the key
/// allocation plus hash probe, so caching them is a net loss. Eight is a
/// practical crossover for typical schema sizes.
pub const CACHE_TIED_THRESHOLD: usize = 8;

/// Cache key: the tie group's identity within its model.
///
/// Both index sets are sorted ascending so that the key is canonical for
/// the set regardless of traversal order.
type TieGroupKey = (Vec<usize>, Vec<usize>);

/// TieGroupCache — threshold-gated memo of permutation-sum results.
///
/// Purpose
/// -------
/// Store kernel results for large tie groups, keyed by the group's index
/// identity, with a hit counter for diagnostics.
///
/// Key behaviors
/// -------------
/// - [`lookup`](Self::lookup) returns a stored result and bumps the hit
///   counter; [`insert`](Self::insert) stores a freshly computed one.
/// - [`should_cache`](Self::should_cache) centralizes the size gate so
///   the model never builds a key it will not use.
/// - Interior mutability (`RwLock` + `AtomicUsize`) keeps the owning
///   model's evaluation method `&self`, so independent observations can
///   be evaluated from multiple threads against one shared instance.
///
/// Fields
/// ------
/// - `threshold`: `usize`
///   Minimum tied-set size for caching; `usize::MAX` disables the cache
///   entirely (every lookup misses, nothing is stored).
/// - `entries`: `RwLock<HashMap<TieGroupKey, f64>>`
///   The memo itself.
/// - `hits`: `AtomicUsize`
///   Number of lookups served from the memo since construction.
///
/// Invariants
/// ----------
/// - A stored value is exactly the kernel result for its key's tie group
///   under the owning model's weights; immutability of those weights is
///   what keeps entries valid for the model's lifetime.
///
/// Performance
/// -----------
/// - Reads take the shared lock; the write lock is held only for the
///   duration of a single insert. Contention is limited to the first
///   evaluation of each distinct large group.
///
/// Notes
/// -----
/// - `Clone` snapshots the entries and the hit count; the clone shares
///   no state with the original. Used when a model is cloned into
///   another latent class or across a thread boundary.
#[derive(Debug)]
pub struct TieGroupCache {
    threshold: usize,
    entries: RwLock<HashMap<TieGroupKey, f64>>,
    hits: AtomicUsize,
}

impl TieGroupCache {
    /// Construct an empty cache with the given size threshold.
    ///
    /// # Arguments
    /// - `threshold`: minimum tied-set size for caching. Pass
    ///   [`CACHE_TIED_THRESHOLD`] for the default policy or `usize::MAX`
    ///   to disable caching without changing any evaluation result.
    pub fn new(threshold: usize) -> TieGroupCache {
        TieGroupCache {
            threshold,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicUsize::new(0),
        }
    }

    /// Whether a tie group of `tied_len` items is large enough to cache.
    #[inline]
    pub fn should_cache(&self, tied_len: usize) -> bool {
        tied_len >= self.threshold
    }

    /// Look up a stored result, bumping the hit counter on success.
    ///
    /// # Arguments
    /// - `key`: canonical `(sorted tied indices, sorted lower indices)`
    ///   pair for the group.
    ///
    /// # Returns
    /// - `Some(value)` if the group was computed before, else `None`.
    pub fn lookup(&self, key: &TieGroupKey) -> Option<f64> {
        let entries = self.entries.read().expect("tie-group cache lock poisoned");
        let found = entries.get(key).copied();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Store a freshly computed result for a group's key.
    ///
    /// Last write wins if two threads race on the same group; both will
    /// have computed the identical value, so the race is benign.
    pub fn insert(&self, key: TieGroupKey, value: f64) {
        let mut entries = self.entries.write().expect("tie-group cache lock poisoned");
        entries.insert(key, value);
    }

    /// Number of lookups served from the memo since construction.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of distinct tie groups currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("tie-group cache lock poisoned").len()
    }

    /// Whether the memo is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for TieGroupCache {
    fn clone(&self) -> TieGroupCache {
        let entries = self.entries.read().expect("tie-group cache lock poisoned").clone();
        TieGroupCache {
            threshold: self.threshold,
            entries: RwLock::new(entries),
            hits: AtomicUsize::new(self.hits.load(Ordering::Relaxed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Threshold gating via `should_cache`, including the disabled
    //   (`usize::MAX`) configuration.
    // - Miss-then-hit lookup behavior and hit counting.
    // - Independence of a cloned cache from its original.
    //
    // They intentionally DO NOT cover:
    // - Interaction with the kernel or the model's traversal, which is
    //   exercised in the model module and the integration tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `should_cache` admits groups at or above the threshold
    // and rejects smaller ones, and that `usize::MAX` rejects everything.
    //
    // Given
    // -----
    // - A cache with threshold 8 and a cache with threshold usize::MAX.
    //
    // Expect
    // ------
    // - Sizes 7 / 8 / 9 give false / true / true under threshold 8.
    // - Every size gives false under usize::MAX.
    fn should_cache_respects_threshold_and_disable_sentinel() {
        // Arrange
        let cache = TieGroupCache::new(8);
        let disabled = TieGroupCache::new(usize::MAX);

        // Act & Assert
        assert!(!cache.should_cache(7));
        assert!(cache.should_cache(8));
        assert!(cache.should_cache(9));
        for size in [0_usize, 1, 8, 1000] {
            assert!(!disabled.should_cache(size), "disabled cache admitted size {size}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the miss-then-hit lifecycle: the first lookup of a key
    // misses without counting, an insert makes the second lookup hit,
    // and the hit counter advances exactly on hits.
    //
    // Given
    // -----
    // - An empty cache with threshold 1 and one tie-group key.
    //
    // Expect
    // ------
    // - lookup → None with hits() == 0; after insert, lookup → the
    //   stored value with hits() == 1.
    fn lookup_counts_hits_only_after_insert() {
        // Arrange
        let cache = TieGroupCache::new(1);
        let key = (vec![1_usize, 4, 6], vec![0_usize, 2]);

        // Act & Assert: miss
        assert_eq!(cache.lookup(&key), None);
        assert_eq!(cache.hits(), 0);

        // Act & Assert: hit
        cache.insert(key.clone(), 0.125);
        assert_eq!(cache.lookup(&key), Some(0.125));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a cloned cache carries the entries and hit count at
    // clone time but shares no state with the original afterwards.
    //
    // Given
    // -----
    // - A cache with one stored entry and one recorded hit.
    //
    // Expect
    // ------
    // - The clone resolves the stored key and starts from the same hit
    //   count; inserts into the original do not appear in the clone.
    fn clone_snapshots_entries_and_hits_without_sharing() {
        // Arrange
        let original = TieGroupCache::new(1);
        let key_a = (vec![0_usize, 1], vec![2_usize]);
        let key_b = (vec![2_usize, 3], vec![0_usize, 1]);
        original.insert(key_a.clone(), 0.5);
        let _ = original.lookup(&key_a);

        // Act
        let cloned = original.clone();
        original.insert(key_b.clone(), 0.25);

        // Assert
        assert_eq!(cloned.lookup(&key_a), Some(0.5));
        assert_eq!(cloned.lookup(&key_b), None, "clone should not see later inserts");
        assert!(cloned.hits() >= 1, "clone should start from the original's hit count");
    }
}
