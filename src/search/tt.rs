//! Transposition cache for search results
//!
//! Memoizes `(signature, remaining depth, maximizing)` to the score and best
//! move found for that node, so a position reached by a different move order
//! is not searched twice.
//!
//! # Example
//!
//! ```
//! use gomoku::board::Pos;
//! use gomoku::search::{CacheEntry, CacheKey, TranspositionCache};
//!
//! let mut tt: TranspositionCache = TranspositionCache::new(1); // 1 MB
//!
//! let key = CacheKey::new(0x1234_5678_9ABC_DEF0, 3, true);
//! tt.save(key, CacheEntry::exact(100, Some(Pos::new(7, 7))));
//!
//! assert_eq!(tt.lookup(&key).map(|e| e.score), Some(100));
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::board::Pos;

/// How a cached score relates to the true minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The search completed inside the window
    Exact,
    /// Fail-high: true value >= score
    Lower,
    /// Fail-low: true value <= score
    Upper,
}

/// What to do when a save lands on an occupied slot holding another key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplacementPolicy {
    /// Unconditional overwrite
    #[default]
    Always,
    /// Keep the resident entry if it was searched deeper
    DepthPreferred,
}

/// Cache key. Two keys are equal only if all three fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey<S = u64> {
    pub signature: S,
    /// Remaining search depth at the node
    pub depth: u8,
    pub maximizing: bool,
}

impl<S> CacheKey<S> {
    #[inline]
    pub fn new(signature: S, depth: u8, maximizing: bool) -> Self {
        Self {
            signature,
            depth,
            maximizing,
        }
    }
}

/// Cached search result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    pub score: i32,
    pub best_move: Option<Pos>,
    pub bound: Bound,
}

impl CacheEntry {
    /// Entry for a score searched with a full window
    #[inline]
    pub fn exact(score: i32, best_move: Option<Pos>) -> Self {
        Self {
            score,
            best_move,
            bound: Bound::Exact,
        }
    }

    /// Can this score stand in for a search of the window `(alpha, beta)`?
    #[inline]
    pub fn usable(&self, alpha: i32, beta: i32) -> bool {
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        }
    }
}

/// Direct-mapped transposition cache.
///
/// Each key maps to exactly one slot. The slot stores the full key, so a
/// lookup never returns an entry saved under a different key.
pub struct TranspositionCache<S = u64> {
    slots: Vec<Option<(CacheKey<S>, CacheEntry)>>,
    policy: ReplacementPolicy,
    used: usize,
}

impl<S: Hash + Eq> TranspositionCache<S> {
    /// Create a cache occupying roughly `size_mb` megabytes.
    ///
    /// Never fewer than 1024 slots.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let slot_size = std::mem::size_of::<Option<(CacheKey<S>, CacheEntry)>>();
        let slots = (size_mb * 1024 * 1024) / slot_size;
        Self::with_slots(slots.max(1024))
    }

    /// Create a cache with exactly `slots` slots (at least one).
    #[must_use]
    pub fn with_slots(slots: usize) -> Self {
        let mut table = Vec::with_capacity(slots.max(1));
        table.resize_with(slots.max(1), || None);
        Self {
            slots: table,
            policy: ReplacementPolicy::default(),
            used: 0,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ReplacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    fn slot_of(&self, key: &CacheKey<S>) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.slots.len()
    }

    /// Exact-match retrieval.
    #[must_use]
    pub fn lookup(&self, key: &CacheKey<S>) -> Option<CacheEntry> {
        match &self.slots[self.slot_of(key)] {
            Some((k, entry)) if k == key => Some(*entry),
            _ => None,
        }
    }

    /// Store an entry, subject to the replacement policy.
    pub fn save(&mut self, key: CacheKey<S>, entry: CacheEntry) {
        let idx = self.slot_of(&key);

        let should_replace = match (&self.slots[idx], self.policy) {
            (None, _) => true,
            (Some(_), ReplacementPolicy::Always) => true,
            (Some((k, _)), ReplacementPolicy::DepthPreferred) => {
                (k.signature == key.signature && k.maximizing == key.maximizing)
                    || k.depth <= key.depth
            }
        };

        if should_replace {
            if self.slots[idx].is_none() {
                self.used += 1;
            }
            self.slots[idx] = Some((key, entry));
        }
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.used = 0;
    }

    /// Number of occupied slots
    #[inline]
    pub fn len(&self) -> usize {
        self.used
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            slots: self.slots.len(),
            used: self.used,
            usage_percent: (self.used as f64 / self.slots.len() as f64 * 100.0) as u8,
        }
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Total number of slots
    pub slots: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of slots in use (0-100)
    pub usage_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_lookup() {
        let mut tt: TranspositionCache = TranspositionCache::new(1);
        let key = CacheKey::new(0x1234_5678_9ABC_DEF0, 5, true);
        let entry = CacheEntry::exact(100, Some(Pos::new(9, 9)));

        tt.save(key, entry);
        assert_eq!(tt.lookup(&key), Some(entry));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_string_signature() {
        let mut tt = TranspositionCache::with_slots(64);
        tt.save(
            CacheKey::new("sig", 2, true),
            CacheEntry::exact(42, Some(Pos::new(3, 3))),
        );

        let hit = tt.lookup(&CacheKey::new("sig", 2, true)).unwrap();
        assert_eq!((hit.score, hit.best_move), (42, Some(Pos::new(3, 3))));
        assert_eq!(tt.lookup(&CacheKey::new("sig", 2, false)), None);
        assert_eq!(tt.lookup(&CacheKey::new("sig", 3, true)), None);
    }

    #[test]
    fn test_never_saved_key_absent() {
        let tt: TranspositionCache = TranspositionCache::with_slots(16);
        assert!(tt.lookup(&CacheKey::new(7, 1, false)).is_none());
        assert!(tt.is_empty());
    }

    #[test]
    fn test_save_overwrites_same_key() {
        let mut tt: TranspositionCache = TranspositionCache::with_slots(16);
        let key = CacheKey::new(99, 3, false);
        tt.save(key, CacheEntry::exact(1, None));
        let latest = CacheEntry::exact(2, Some(Pos::new(0, 0)));
        tt.save(key, latest);

        assert_eq!(tt.lookup(&key), Some(latest));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_always_policy_evicts_collision() {
        // One slot: every key collides
        let mut tt: TranspositionCache = TranspositionCache::with_slots(1);
        let deep = CacheKey::new(1, 4, true);
        let shallow = CacheKey::new(2, 1, true);

        tt.save(deep, CacheEntry::exact(10, None));
        tt.save(shallow, CacheEntry::exact(20, None));

        assert_eq!(tt.lookup(&deep), None);
        assert_eq!(tt.lookup(&shallow).map(|e| e.score), Some(20));
    }

    #[test]
    fn test_depth_preferred_keeps_deeper() {
        let mut tt: TranspositionCache =
            TranspositionCache::with_slots(1).with_policy(ReplacementPolicy::DepthPreferred);
        let deep = CacheKey::new(1, 4, true);
        let shallow = CacheKey::new(2, 1, true);

        tt.save(deep, CacheEntry::exact(10, None));
        tt.save(shallow, CacheEntry::exact(20, None));
        assert_eq!(tt.lookup(&deep).map(|e| e.score), Some(10));
        assert_eq!(tt.lookup(&shallow), None);

        // Same position always replaces, even when shallower
        let same_sig = CacheKey::new(1, 2, true);
        tt.save(same_sig, CacheEntry::exact(30, None));
        assert_eq!(tt.lookup(&same_sig).map(|e| e.score), Some(30));
    }

    #[test]
    fn test_bound_usability() {
        let exact = CacheEntry::exact(50, None);
        assert!(exact.usable(100, 200));

        let lower = CacheEntry {
            score: 200,
            best_move: None,
            bound: Bound::Lower,
        };
        assert!(lower.usable(-1000, 150));
        assert!(!lower.usable(-1000, 300));

        let upper = CacheEntry {
            score: 50,
            best_move: None,
            bound: Bound::Upper,
        };
        assert!(upper.usable(100, 1000));
        assert!(!upper.usable(30, 1000));
    }

    #[test]
    fn test_clear() {
        let mut tt: TranspositionCache = TranspositionCache::new(1);
        let key = CacheKey::new(0xABCD, 5, true);
        tt.save(key, CacheEntry::exact(100, None));
        tt.clear();

        assert!(tt.lookup(&key).is_none());
        assert_eq!(tt.len(), 0);
    }

    #[test]
    fn test_stats() {
        let mut tt: TranspositionCache = TranspositionCache::with_slots(1000);
        assert_eq!(tt.stats().used, 0);
        assert_eq!(tt.stats().usage_percent, 0);

        tt.save(CacheKey::new(0x111, 5, true), CacheEntry::exact(1, None));
        tt.save(CacheKey::new(0x222, 5, true), CacheEntry::exact(2, None));

        let stats = tt.stats();
        assert!(stats.used >= 1 && stats.used <= 2);
        assert_eq!(stats.slots, 1000);
    }

    #[test]
    fn test_minimum_size() {
        let tt: TranspositionCache = TranspositionCache::new(0);
        assert_eq!(tt.capacity(), 1024);
        let tiny: TranspositionCache = TranspositionCache::with_slots(0);
        assert_eq!(tiny.capacity(), 1);
    }
}
