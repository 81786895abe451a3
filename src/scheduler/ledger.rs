//! Per-run bookkeeping: pairing history and games played.
//!
//! Both structures are created empty at the start of a scheduler run and
//! dropped when it returns.

use std::collections::HashMap;
use std::hash::Hash;

/// Symmetric pair counter.
///
/// Records how often two players were teamed (doubles) or opposed
/// (singles). Each unordered pair is stored once under its ordered key, so
/// `get(a, b) == get(b, a)` holds by construction.
#[derive(Debug, Clone)]
pub struct PairLedger<K> {
    counts: HashMap<(K, K), u32>,
}

impl<K: Ord + Hash + Clone> PairLedger<K> {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    fn key(a: &K, b: &K) -> (K, K) {
        if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }

    /// Times `a` and `b` have been paired (0 if never).
    pub fn get(&self, a: &K, b: &K) -> u32 {
        self.counts.get(&Self::key(a, b)).copied().unwrap_or(0)
    }

    /// Records one more pairing of `a` and `b`.
    pub fn increment(&mut self, a: &K, b: &K) {
        *self.counts.entry(Self::key(a, b)).or_insert(0) += 1;
    }

    /// Sum of all recorded pairings.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Largest count of any single pair.
    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Number of distinct pairs with a non-zero count.
    pub fn distinct_pairs(&self) -> usize {
        self.counts.len()
    }

    /// Iterates over `(pair, count)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&(K, K), u32)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }
}

impl<K: Ord + Hash + Clone> Default for PairLedger<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Games assigned to each player in the current run, capped at `k`.
#[derive(Debug, Clone)]
pub struct GamesPlayed<'a> {
    counts: HashMap<&'a str, u32>,
    cap: u32,
}

impl<'a> GamesPlayed<'a> {
    /// Creates an empty counter with the given per-player cap.
    pub fn new(cap: u32) -> Self {
        Self {
            counts: HashMap::new(),
            cap,
        }
    }

    /// Games assigned to `name` so far.
    pub fn get(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Whether `name` may still be assigned a game.
    pub fn has_capacity(&self, name: &str) -> bool {
        self.get(name) < self.cap
    }

    /// Records one game for `name`.
    ///
    /// Callers only select players with capacity; the cap is checked in
    /// debug builds.
    pub fn record(&mut self, name: &'a str) {
        let count = self.counts.entry(name).or_insert(0);
        *count += 1;
        debug_assert!(*count <= self.cap, "{name} exceeded {} games", self.cap);
    }

    /// The per-player cap.
    pub fn cap(&self) -> u32 {
        self.cap
    }
}
