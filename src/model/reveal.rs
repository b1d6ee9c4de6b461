//! One-shot visibility observers
//!
//! An observer watches a set of keys and fires for each key the first time
//! enough of it is visible. A key that fired is detached and never reported
//! again, which bounds the work done per frame to the keys still pending.

use std::collections::HashSet;
use std::hash::Hash;

/// Visibility watcher that triggers once per key then detaches it
#[derive(Debug, Clone)]
pub struct OneShotObserver<K> {
    pending: HashSet<K>,
    /// Fraction of an element that must be visible to fire
    threshold: f32,
}

impl<K: Eq + Hash + Clone> OneShotObserver<K> {
    pub fn new(threshold: f32) -> Self {
        Self {
            pending: HashSet::new(),
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Start watching a key
    pub fn observe(&mut self, key: K) {
        self.pending.insert(key);
    }

    /// Report how much of `key` is visible. Returns true if this call fired.
    ///
    /// `visible` and `total` are in the same unit (rows on screen).
    pub fn report(&mut self, key: &K, visible: usize, total: usize) -> bool {
        if !self.pending.contains(key) || total == 0 || visible == 0 {
            return false;
        }
        let ratio = visible as f32 / total as f32;
        if ratio >= self.threshold {
            self.pending.remove(key);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_then_detaches() {
        let mut observer = OneShotObserver::new(0.2);
        observer.observe("rust");

        assert!(observer.report(&"rust", 1, 1));
        assert!(!observer.report(&"rust", 1, 1));
        assert!(observer.pending.is_empty());
    }

    #[test]
    fn test_threshold_respected() {
        let mut observer = OneShotObserver::new(0.12);
        observer.observe(7usize);

        // 1 of 10 rows is below 12%
        assert!(!observer.report(&7, 1, 10));
        // 2 of 10 rows crosses it
        assert!(observer.report(&7, 2, 10));
    }

    #[test]
    fn test_unobserved_keys_never_fire() {
        let mut observer: OneShotObserver<u8> = OneShotObserver::new(0.0);
        assert!(!observer.report(&1, 5, 5));

        observer.observe(2);
        assert!(!observer.report(&1, 5, 5));
        assert!(observer.report(&2, 5, 5));
    }

    #[test]
    fn test_nothing_visible_never_fires() {
        let mut observer = OneShotObserver::new(0.0);
        observer.observe('a');
        assert!(!observer.report(&'a', 0, 4));
        assert!(observer.report(&'a', 1, 4));
    }
}
