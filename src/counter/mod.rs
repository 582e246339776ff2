//! Thread-safe counter primitives
//!
//! The counter is the one piece of shared mutable state in the crate. It is
//! only ever mutated through [`SharedCounter::increment`], which serializes
//! concurrent callers, and read through [`SharedCounter::value`] once the
//! workers driving it have been joined.

use std::sync::Mutex;

pub mod pool;

pub use pool::{CounterReport, IncrementJob};

/// An integer counter safe to increment from multiple threads.
///
/// The entire read-modify-write of [`increment`](Self::increment) runs under
/// one lock, so no interleaving of concurrent callers can lose an update:
/// after W workers each issue K increments and are joined, the value is
/// exactly W * K.
pub struct SharedCounter {
    value: Mutex<u64>,
}

impl SharedCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self {
            value: Mutex::new(0),
        }
    }

    /// Add one to the counter.
    ///
    /// Never fails. A poisoned lock is recovered rather than propagated: a
    /// single `u64` store cannot be torn by a panicking holder, so the inner
    /// value is still consistent.
    pub fn increment(&self) {
        let mut value = self.value.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *value += 1;
    }

    /// Read the current value.
    ///
    /// Only meaningful once every worker that might increment has been
    /// joined; the caller provides that barrier.
    pub fn value(&self) -> u64 {
        *self.value.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SharedCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let counter = SharedCounter::new();
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_sequential_increments() {
        let counter = SharedCounter::new();
        for _ in 0..100 {
            counter.increment();
        }
        assert_eq!(counter.value(), 100);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let counter = SharedCounter::new();

        crossbeam::thread::scope(|s| {
            for _ in 0..5 {
                s.spawn(|_| {
                    for _ in 0..1000 {
                        counter.increment();
                    }
                });
            }
        })
        .unwrap();

        assert_eq!(counter.value(), 5000);
    }

    #[test]
    fn test_value_survives_poisoned_lock() {
        use std::sync::Arc;

        let counter = Arc::new(SharedCounter::new());
        counter.increment();

        let poisoner = Arc::clone(&counter);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.value.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        // The counter keeps working after a holder panicked.
        counter.increment();
        assert_eq!(counter.value(), 2);
    }
}
