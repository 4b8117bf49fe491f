//! Transposition table.
//!
//! A fixed-size, direct-mapped cache from board hash to search result.
//! Slot index is `key % capacity`; there is no chaining, so two positions
//! mapping to the same slot compete for it under the depth-preferred rule.
//! The stored full key is the only collision guard: a probe whose key does
//! not match is a miss.

use crate::constants::Score;
use crate::error::EngineError;

/// How a stored score relates to the true value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score is the minimax value within the searched window.
    Exact,
    /// The search failed low; the score is an upper bound.
    FailLow,
    /// The search failed high; the score is a lower bound.
    FailHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub key: u64,
    pub score: Score,
    /// Remaining depth when the entry was stored.
    pub depth: u32,
    pub bound: Bound,
}

pub struct TranspositionTable {
    entries: Vec<Option<TtEntry>>,
}

impl TranspositionTable {
    /// Allocate a table with `capacity` slots, all empty.
    ///
    /// Allocation is fallible so that an oversized table is reported
    /// instead of aborting the process.
    pub fn new(capacity: usize) -> Result<Self, EngineError> {
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(|_| EngineError::TtAllocation { capacity })?;
        entries.resize(capacity, None);
        Ok(Self { entries })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Raw slot lookup, `None` unless the slot holds exactly this key.
    pub fn get(&self, key: u64) -> Option<&TtEntry> {
        self.entries[self.index(key)]
            .as_ref()
            .filter(|entry| entry.key == key)
    }

    /// Look up a usable score for a search at `depth` with window
    /// `[alpha, beta]`.
    ///
    /// Entries shallower than `depth` are ignored. An exact entry returns
    /// its score; a fail-low entry returns `alpha` when its score is already
    /// at or below `alpha`; a fail-high entry returns `beta` when its score
    /// is at or above `beta`.
    pub fn probe(&self, key: u64, depth: u32, alpha: Score, beta: Score) -> Option<Score> {
        let entry = self.get(key)?;
        if entry.depth < depth {
            return None;
        }
        match entry.bound {
            Bound::Exact => Some(entry.score),
            Bound::FailLow if entry.score <= alpha => Some(alpha),
            Bound::FailHigh if entry.score >= beta => Some(beta),
            _ => None,
        }
    }

    /// Store a result. An occupied slot is only overwritten when the new
    /// depth is at least the stored one. Returns whether the write happened.
    pub fn store(&mut self, key: u64, depth: u32, score: Score, bound: Bound) -> bool {
        let idx = self.index(key);
        let slot = &mut self.entries[idx];
        if slot.is_some_and(|old| old.depth > depth) {
            return false;
        }
        *slot = Some(TtEntry {
            key,
            score,
            depth,
            bound,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_empty() {
        let tt = TranspositionTable::new(64).unwrap();
        assert_eq!(tt.capacity(), 64);
        assert!(tt.get(0).is_none());
        assert!(tt.probe(12345, 0, -10, 10).is_none());
    }

    #[test]
    fn test_depth_preferred_replacement() {
        let mut tt = TranspositionTable::new(64).unwrap();
        assert!(tt.store(7, 5, 100, Bound::Exact));
        assert!(!tt.store(7, 3, -50, Bound::Exact));
        assert_eq!(tt.get(7).unwrap().score, 100);
        assert_eq!(tt.get(7).unwrap().depth, 5);

        assert!(tt.store(7, 5, 200, Bound::Exact));
        assert_eq!(tt.get(7).unwrap().score, 200);
        assert!(tt.store(7, 6, 300, Bound::FailHigh));
        assert_eq!(tt.get(7).unwrap().bound, Bound::FailHigh);
    }

    #[test]
    fn test_collision_overwrites_and_misses() {
        let mut tt = TranspositionTable::new(16).unwrap();
        tt.store(3, 2, 10, Bound::Exact);
        // 19 % 16 == 3: same slot, different key
        assert!(tt.probe(19, 0, -100, 100).is_none());
        tt.store(19, 2, 20, Bound::Exact);
        assert!(tt.get(3).is_none());
        assert_eq!(tt.probe(19, 2, -100, 100), Some(20));
    }

    #[test]
    fn test_probe_depth_requirement() {
        let mut tt = TranspositionTable::new(16).unwrap();
        tt.store(5, 3, 42, Bound::Exact);
        assert_eq!(tt.probe(5, 3, -100, 100), Some(42));
        assert_eq!(tt.probe(5, 1, -100, 100), Some(42));
        assert_eq!(tt.probe(5, 4, -100, 100), None);
    }

    #[test]
    fn test_probe_bounds() {
        let mut tt = TranspositionTable::new(16).unwrap();
        tt.store(1, 4, -30, Bound::FailLow);
        assert_eq!(tt.probe(1, 4, -20, 50), Some(-20));
        assert_eq!(tt.probe(1, 4, -40, 50), None);

        tt.store(2, 4, 80, Bound::FailHigh);
        assert_eq!(tt.probe(2, 4, -20, 50), Some(50));
        assert_eq!(tt.probe(2, 4, -20, 90), None);
    }

    #[test]
    fn test_clear() {
        let mut tt = TranspositionTable::new(16).unwrap();
        tt.store(9, 9, 9, Bound::Exact);
        tt.clear();
        assert!(tt.get(9).is_none());
        // after clearing even a shallow store is accepted
        assert!(tt.store(9, 0, 1, Bound::Exact));
    }

    #[test]
    fn test_huge_allocation_fails() {
        let result = TranspositionTable::new(usize::MAX / 2);
        assert!(matches!(result, Err(EngineError::TtAllocation { .. })));
    }
}
