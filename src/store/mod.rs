//! In-memory snack directory.
//!
//! The whole store is a single `String -> Snack` map behind a lock. Every
//! operation is one atomic step against the map; there are no cross-key
//! transactions and nothing survives process shutdown.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::models::Snack;

/// Cloneable handle to the shared directory. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct Directory {
    snacks: Arc<RwLock<HashMap<String, Snack>>>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the full directory.
    pub fn list(&self) -> HashMap<String, Snack> {
        let snacks = self.snacks.read().expect("directory lock poisoned");
        snacks.clone()
    }

    /// Look up the snack stored at `id`.
    pub fn get(&self, id: &str) -> Option<Snack> {
        let snacks = self.snacks.read().expect("directory lock poisoned");
        snacks.get(id).cloned()
    }

    /// Insert-if-absent. Returns `false` and leaves the directory unchanged
    /// when `id` is already taken.
    pub fn try_insert(&self, id: &str, snack: Snack) -> bool {
        let mut snacks = self.snacks.write().expect("directory lock poisoned");
        if snacks.contains_key(id) {
            return false;
        }
        snacks.insert(id.to_string(), snack);
        true
    }

    /// Unconditional overwrite-or-create at `id`.
    pub fn upsert(&self, id: &str, snack: Snack) {
        let mut snacks = self.snacks.write().expect("directory lock poisoned");
        snacks.insert(id.to_string(), snack);
    }

    /// Remove the entry at `id`, returning the prior value if there was one.
    pub fn remove(&self, id: &str) -> Option<Snack> {
        let mut snacks = self.snacks.write().expect("directory lock poisoned");
        snacks.remove(id)
    }

    pub fn len(&self) -> usize {
        let snacks = self.snacks.read().expect("directory lock poisoned");
        snacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Snack {
        Snack {
            name: "Apple".to_string(),
            rating: 5,
            taste: vec!["sweet".to_string()],
        }
    }

    fn pretzel() -> Snack {
        Snack {
            name: "Pretzel".to_string(),
            rating: 3,
            taste: vec!["salty".to_string(), "crunchy".to_string()],
        }
    }

    #[test]
    fn try_insert_then_get_returns_same_snack() {
        let dir = Directory::new();
        assert!(dir.try_insert("s1", apple()));

        let stored = dir.get("s1").expect("snack should be present");
        assert_eq!(stored.name, "Apple");
        assert_eq!(stored.rating, 5);
        assert_eq!(stored.taste, vec!["sweet"]);
    }

    #[test]
    fn try_insert_rejects_duplicate_and_keeps_first_value() {
        let dir = Directory::new();
        assert!(dir.try_insert("s1", apple()));
        assert!(!dir.try_insert("s1", pretzel()));

        let stored = dir.get("s1").expect("snack should be present");
        assert_eq!(stored.name, "Apple");
    }

    #[test]
    fn upsert_creates_when_absent_and_overwrites_when_present() {
        let dir = Directory::new();

        dir.upsert("s1", apple());
        assert_eq!(dir.get("s1").unwrap().name, "Apple");

        dir.upsert("s1", pretzel());
        assert_eq!(dir.get("s1").unwrap().name, "Pretzel");
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn remove_returns_prior_value_then_misses() {
        let dir = Directory::new();
        dir.upsert("s1", apple());

        let removed = dir.remove("s1").expect("first remove should hit");
        assert_eq!(removed.name, "Apple");
        assert!(dir.remove("s1").is_none());
        assert!(dir.get("s1").is_none());
    }

    #[test]
    fn list_reflects_live_key_set_after_interleaving() {
        let dir = Directory::new();
        dir.upsert("s1", apple());
        dir.upsert("s2", pretzel());
        dir.remove("s1");
        assert!(dir.try_insert("s3", apple()));
        dir.upsert("s2", apple());

        let all = dir.list();
        let mut keys: Vec<_> = all.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["s2", "s3"]);
        assert_eq!(all["s2"].name, "Apple");
    }

    #[test]
    fn clones_share_the_same_map() {
        let dir = Directory::new();
        let other = dir.clone();

        dir.upsert("s1", apple());
        assert_eq!(other.get("s1").unwrap().name, "Apple");
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn concurrent_inserts_on_distinct_keys_all_land() {
        let dir = Directory::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let dir = dir.clone();
                std::thread::spawn(move || {
                    assert!(dir.try_insert(&format!("s{i}"), apple()));
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("insert thread panicked");
        }
        assert_eq!(dir.len(), 8);
    }

    #[test]
    fn concurrent_inserts_on_one_key_admit_exactly_one() {
        let dir = Directory::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let dir = dir.clone();
                std::thread::spawn(move || dir.try_insert("s1", apple()))
            })
            .collect();
        let admitted = handles
            .into_iter()
            .map(|h| h.join().expect("insert thread panicked"))
            .filter(|won| *won)
            .count();
        assert_eq!(admitted, 1);
        assert_eq!(dir.len(), 1);
    }
}
