//! One-shot deferred actions keyed by their target.
//!
//! Every `schedule` bumps the key's generation. An entry only fires if its
//! generation is still the latest one for that key when its timer runs out;
//! superseded entries are dropped silently.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use bevy::time::{Timer, TimerMode};

struct Pending<K> {
    key: K,
    generation: u64,
    timer: Timer,
}

/// Queue of delayed, non-cancellable actions with per-key generations.
pub struct Deferred<K> {
    generations: HashMap<K, u64>,
    pending: Vec<Pending<K>>,
}

impl<K> Default for Deferred<K> {
    fn default() -> Self {
        Self {
            generations: HashMap::new(),
            pending: Vec::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> Deferred<K> {
    /// Schedule `key` to fire after `delay`, superseding earlier entries for it.
    ///
    /// Returns the generation assigned to the new entry.
    pub fn schedule(&mut self, key: K, delay: Duration) -> u64 {
        let generation = self.bump(key);
        self.pending.push(Pending {
            key,
            generation,
            timer: Timer::new(delay, TimerMode::Once),
        });
        generation
    }

    /// Make every pending entry for `key` inert without scheduling a new one.
    pub fn invalidate(&mut self, key: K) {
        if self.generations.contains_key(&key) {
            self.bump(key);
        }
    }

    /// Whether `key` has a live (latest-generation) entry waiting to fire.
    pub fn is_pending(&self, key: K) -> bool {
        let Some(current) = self.generations.get(&key) else {
            return false;
        };
        self.pending
            .iter()
            .any(|p| p.key == key && p.generation == *current)
    }

    /// Advance all timers by `delta` and return the keys whose live entry fired.
    pub fn tick(&mut self, delta: Duration) -> Vec<K> {
        let mut fired = Vec::new();
        let generations = &self.generations;
        self.pending.retain_mut(|entry| {
            entry.timer.tick(delta);
            if !entry.timer.is_finished() {
                return true;
            }
            if generations.get(&entry.key) == Some(&entry.generation) {
                fired.push(entry.key);
            }
            false
        });

        // Forget keys with nothing left in flight so the map stays bounded.
        let pending = &self.pending;
        self.generations
            .retain(|key, _| pending.iter().any(|p| p.key == *key));

        fired
    }

    fn bump(&mut self, key: K) -> u64 {
        let generation = self.generations.entry(key).or_insert(0);
        *generation += 1;
        *generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn fires_once_after_delay() {
        let mut deferred = Deferred::default();
        deferred.schedule(7u32, SECOND);

        assert!(deferred.tick(Duration::from_millis(600)).is_empty());
        assert!(deferred.is_pending(7));
        assert_eq!(deferred.tick(Duration::from_millis(400)), vec![7]);
        assert!(!deferred.is_pending(7));
        assert!(deferred.tick(SECOND).is_empty());
    }

    #[test]
    fn rescheduling_supersedes_the_earlier_entry() {
        let mut deferred = Deferred::default();
        let first = deferred.schedule(1u32, SECOND);
        deferred.tick(Duration::from_millis(500));
        let second = deferred.schedule(1u32, SECOND);
        assert!(second > first);

        // The first entry expires here but is stale.
        assert!(deferred.tick(Duration::from_millis(600)).is_empty());
        assert!(deferred.is_pending(1));

        assert_eq!(deferred.tick(Duration::from_millis(400)), vec![1]);
    }

    #[test]
    fn invalidated_entries_never_fire() {
        let mut deferred = Deferred::default();
        deferred.schedule(3u32, SECOND);
        deferred.invalidate(3);

        assert!(!deferred.is_pending(3));
        assert!(deferred.tick(SECOND * 2).is_empty());
    }

    #[test]
    fn invalidating_unknown_key_is_a_no_op() {
        let mut deferred: Deferred<u32> = Deferred::default();
        deferred.invalidate(42);
        assert!(!deferred.is_pending(42));
        assert!(deferred.tick(SECOND).is_empty());
    }

    #[test]
    fn keys_are_independent() {
        let mut deferred = Deferred::default();
        deferred.schedule(1u32, SECOND);
        deferred.schedule(2u32, SECOND * 2);
        deferred.invalidate(1);

        assert!(deferred.tick(SECOND).is_empty());
        assert_eq!(deferred.tick(SECOND), vec![2]);
    }

    #[test]
    fn key_can_be_reused_after_firing() {
        let mut deferred = Deferred::default();
        deferred.schedule(5u32, SECOND);
        assert_eq!(deferred.tick(SECOND), vec![5]);

        deferred.schedule(5u32, SECOND);
        assert!(deferred.is_pending(5));
        assert_eq!(deferred.tick(SECOND), vec![5]);
    }
}
