//! Weakly-referencing value cache
//!
//! An `Interner<T>` hands out `Arc<T>` handles and remembers only `Weak<T>`
//! back-references, bucketed by a 32-bit value hash. Callers own the
//! instances; once the last handle is dropped the cache entry is dead. Dead
//! entries are pruned whenever their bucket is scanned, and the whole table is
//! swept once it has grown to twice the live entries seen at the previous
//! sweep, so the cache stays proportional to the points still in use.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::constants::HASH_MULTIPLIER;
use crate::errors::{CoordinateError, Result};

/// Entry count below which no full sweep is attempted
const SWEEP_FLOOR: usize = 64;

struct Table<T> {
    buckets: HashMap<i32, Vec<Weak<T>>>,
    /// Entries held across all buckets, dead ones included
    entries: usize,
    /// Entry count that triggers the next full sweep
    sweep_at: usize,
}

impl<T> Table<T> {
    /// Drops every dead entry and empty bucket, returning how many entries went
    fn sweep(&mut self) -> usize {
        let mut pruned = 0;
        self.buckets.retain(|_, bucket| {
            let before = bucket.len();
            bucket.retain(|entry| entry.strong_count() > 0);
            pruned += before - bucket.len();
            !bucket.is_empty()
        });
        self.entries -= pruned;
        self.sweep_at = SWEEP_FLOOR.max(2 * self.entries);
        pruned
    }
}

/// Folds the IEEE-754 bit pattern of a double into 32 bits
fn component_hash(value: f64) -> i32 {
    let bits = value.to_bits();
    (bits ^ (bits >> 32)) as i32
}

/// Multiplicative hash over three components, consistent with bitwise equality
pub(crate) fn hash3(a: f64, b: f64, c: f64) -> i32 {
    let mut acc = component_hash(a);
    acc = HASH_MULTIPLIER
        .wrapping_mul(acc)
        .wrapping_add(component_hash(b));
    HASH_MULTIPLIER
        .wrapping_mul(acc)
        .wrapping_add(component_hash(c))
}

/// Canonicalizing cache of weakly held values
pub(crate) struct Interner<T> {
    label: &'static str,
    table: Mutex<Table<T>>,
}

impl<T> Interner<T> {
    pub(crate) fn with_capacity(label: &'static str, capacity: usize) -> Self {
        Self {
            label,
            table: Mutex::new(Table {
                buckets: HashMap::with_capacity(capacity),
                entries: 0,
                sweep_at: SWEEP_FLOOR,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table<T>>> {
        self.table.lock().map_err(|_| {
            CoordinateError::InternalError(format!("{} cache lock is poisoned", self.label))
        })
    }

    /// Returns the live instance in bucket `hash` accepted by `matches`, or
    /// registers and returns the one built by `make`
    ///
    /// Lookup, pruning and insertion happen under a single lock, so concurrent
    /// callers asking for the same value always receive the same instance.
    pub(crate) fn intern<F, M>(&self, hash: i32, matches: F, make: M) -> Result<Arc<T>>
    where
        F: Fn(&T) -> bool,
        M: FnOnce() -> T,
    {
        let mut guard = self.lock()?;
        let table = &mut *guard;
        let bucket = table.buckets.entry(hash).or_default();

        let before = bucket.len();
        let mut found: Option<Arc<T>> = None;
        bucket.retain(|entry| match entry.upgrade() {
            Some(live) => {
                if found.is_none() && matches(&*live) {
                    found = Some(live);
                }
                true
            }
            None => false,
        });
        let pruned = before - bucket.len();
        table.entries -= pruned;
        if pruned > 0 {
            log::debug!(
                "{} cache: pruned {} stale entries from bucket {:#010x}",
                self.label,
                pruned,
                hash
            );
        }

        if let Some(existing) = found {
            log::trace!("{} cache: hit in bucket {:#010x}", self.label, hash);
            return Ok(existing);
        }

        let created = Arc::new(make());
        bucket.push(Arc::downgrade(&created));
        log::trace!(
            "{} cache: inserted into bucket {:#010x} ({} candidates)",
            self.label,
            hash,
            bucket.len()
        );
        table.entries += 1;

        if table.entries >= table.sweep_at {
            let swept = table.sweep();
            log::debug!(
                "{} cache: swept {} stale entries, {} remain",
                self.label,
                swept,
                table.entries
            );
        }
        Ok(created)
    }

    /// Drops every dead entry and empty bucket, returning how many entries went
    pub(crate) fn purge(&self) -> Result<usize> {
        let pruned = self.lock()?.sweep();
        if pruned > 0 {
            log::debug!("{} cache: purged {} stale entries", self.label, pruned);
        }
        Ok(pruned)
    }

    /// Number of entries whose instance is still referenced somewhere
    pub(crate) fn live_count(&self) -> Result<usize> {
        let table = self.lock()?;
        Ok(table
            .buckets
            .values()
            .flat_map(|bucket| bucket.iter())
            .filter(|entry| entry.strong_count() > 0)
            .count())
    }

    /// Number of entries held, dead ones included
    pub(crate) fn entry_count(&self) -> Result<usize> {
        Ok(self.lock()?.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Value(u32);

    #[test]
    fn test_hash3_matches_reference_values() {
        // All-zero bit patterns fold to zero
        assert_eq!(hash3(0.0, 0.0, 0.0), 0);

        // 1.0 = 0x3FF0_0000_0000_0000 folds to 0x3FF0_0000
        let one = 0x3FF0_0000_i32;
        assert_eq!(hash3(1.0, 0.0, 0.0), one.wrapping_mul(31 * 31));
        assert_eq!(hash3(0.0, 0.0, 1.0), one);
    }

    #[test]
    fn test_hash3_distinguishes_signed_zero() {
        assert_ne!(hash3(0.0, 0.0, 0.0), hash3(-0.0, 0.0, 0.0));
    }

    #[test]
    fn test_intern_returns_same_instance() {
        let interner: Interner<Value> = Interner::with_capacity("test", 4);
        let a = interner.intern(7, |v| v.0 == 1, || Value(1)).unwrap();
        let b = interner.intern(7, |v| v.0 == 1, || Value(1)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(interner.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_collisions_are_resolved_by_value() {
        let interner: Interner<Value> = Interner::with_capacity("test", 4);
        let a = interner.intern(7, |v| v.0 == 1, || Value(1)).unwrap();
        let b = interner.intern(7, |v| v.0 == 2, || Value(2)).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(*b, Value(2));
        assert_eq!(interner.live_count().unwrap(), 2);
    }

    #[test]
    fn test_dead_entries_are_pruned_on_scan() {
        let interner: Interner<Value> = Interner::with_capacity("test", 4);
        let first = interner.intern(3, |v| v.0 == 5, || Value(5)).unwrap();
        drop(first);
        assert_eq!(interner.live_count().unwrap(), 0);
        assert_eq!(interner.entry_count().unwrap(), 1);

        // Scanning the same bucket drops the stale entry and inserts afresh
        let second = interner.intern(3, |v| v.0 == 5, || Value(5)).unwrap();
        assert_eq!(*second, Value(5));
        assert_eq!(interner.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_purge_is_idempotent() {
        let interner: Interner<Value> = Interner::with_capacity("test", 4);
        let kept = interner.intern(1, |v| v.0 == 1, || Value(1)).unwrap();
        drop(interner.intern(2, |v| v.0 == 2, || Value(2)).unwrap());
        drop(interner.intern(3, |v| v.0 == 3, || Value(3)).unwrap());

        assert_eq!(interner.purge().unwrap(), 2);
        assert_eq!(interner.purge().unwrap(), 0);
        assert_eq!(interner.live_count().unwrap(), 1);
        assert_eq!(*kept, Value(1));
    }

    #[test]
    fn test_transient_values_are_swept_without_purge() {
        let interner: Interner<Value> = Interner::with_capacity("test", 4);
        for n in 0..10_000u32 {
            drop(interner.intern(n as i32, |v| v.0 == n, || Value(n)).unwrap());
        }
        assert!(interner.entry_count().unwrap() < SWEEP_FLOOR);
        assert_eq!(interner.live_count().unwrap(), 0);
    }

    #[test]
    fn test_sweep_threshold_follows_live_entries() {
        let interner: Interner<Value> = Interner::with_capacity("test", 4);
        let kept: Vec<_> = (0..200u32)
            .map(|n| interner.intern(n as i32, |v| v.0 == n, || Value(n)).unwrap())
            .collect();
        for n in 200..20_000u32 {
            drop(interner.intern(n as i32, |v| v.0 == n, || Value(n)).unwrap());
        }

        assert_eq!(interner.live_count().unwrap(), kept.len());
        assert!(interner.entry_count().unwrap() < 2 * (kept.len() + 1));

        // Survivors are still the canonical instances
        let again = interner.intern(7, |v| v.0 == 7, || Value(7)).unwrap();
        assert!(Arc::ptr_eq(&again, &kept[7]));
    }
}
