use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::database::seed::seed_activities;
use crate::models::ActivityRecord;

/// In-memory activity store shared by all request handlers.
///
/// Cloning is cheap and every clone sees the same data. Writers hold the
/// lock for their whole check-then-mutate step, so two concurrent signups
/// cannot both observe the last free spot.
#[derive(Clone, Debug)]
pub struct ActivityRegistry {
    inner: Arc<RwLock<IndexMap<String, ActivityRecord>>>,
}

impl ActivityRegistry {
    pub fn new(activities: IndexMap<String, ActivityRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Registry loaded with the startup catalog.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Copy of every activity, in catalog order.
    pub fn snapshot(&self) -> IndexMap<String, ActivityRecord> {
        self.inner.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<ActivityRecord> {
        self.inner.read().get(name).cloned()
    }

    pub fn activity_count(&self) -> usize {
        self.inner.read().len()
    }

    /// Runs `f` against one activity under the write lock.
    /// Returns `None` without calling `f` when the name is unknown.
    pub fn with_activity_mut<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut ActivityRecord) -> T,
    ) -> Option<T> {
        let mut guard = self.inner.write();
        guard.get_mut(name).map(f)
    }

    /// Drops all signups by restoring the startup catalog in place.
    pub fn reset(&self) {
        *self.inner.write() = seed_activities();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_registry_lists_catalog_in_order() {
        let registry = ActivityRegistry::seeded();
        let names: Vec<String> = registry.snapshot().keys().cloned().collect();
        assert_eq!(names.first().map(String::as_str), Some("Chess Club"));
        assert_eq!(names.last().map(String::as_str), Some("Science Club"));
        assert_eq!(registry.activity_count(), 9);
    }

    #[test]
    fn clones_share_state() {
        let registry = ActivityRegistry::seeded();
        let other = registry.clone();

        registry.with_activity_mut("Chess Club", |a| {
            a.participants.push("a@school.edu".to_string())
        });

        let chess = other.get("Chess Club").unwrap();
        assert_eq!(chess.participants, vec!["a@school.edu".to_string()]);
    }

    #[test]
    fn unknown_name_skips_closure() {
        let registry = ActivityRegistry::seeded();
        let mut called = false;
        let out = registry.with_activity_mut("chess club", |_| called = true);
        assert!(out.is_none());
        assert!(!called);
    }

    #[test]
    fn snapshot_is_detached() {
        let registry = ActivityRegistry::seeded();
        let mut snapshot = registry.snapshot();
        snapshot
            .get_mut("Art Studio")
            .unwrap()
            .participants
            .push("ghost@school.edu".to_string());

        assert!(registry.get("Art Studio").unwrap().participants.is_empty());
    }

    #[test]
    fn reset_restores_seed_state() {
        let registry = ActivityRegistry::seeded();
        registry.with_activity_mut("Music Band", |a| {
            a.participants.push("a@school.edu".to_string())
        });

        registry.reset();

        assert_eq!(registry.snapshot(), seed_activities());
    }
}
