//! Section configuration store
//!
//! Owns the in-memory layout, applies user mutations, and writes the full
//! layout back to its `Storage` after each one. The in-memory state is
//! authoritative for the session: a failed write is logged and forgotten.

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

use super::state::{self, SectionState};
use crate::registry::Registry;
use crate::storage::Storage;

pub struct SectionStore<S: Storage> {
    registry: Registry,
    storage: S,
    key: String,
    sections: Vec<SectionState>,
    /// False until persisted data has been reconciled at least once.
    /// Writes are suppressed before that so defaults never clobber stored state.
    hydrated: bool,
}

impl<S: Storage> SectionStore<S> {
    /// Create a store holding registry defaults; nothing is loaded yet
    pub fn new(registry: Registry, storage: S, key: impl Into<String>) -> Self {
        let sections = state::initialize(&registry);
        Self {
            registry,
            storage,
            key: key.into(),
            sections,
            hydrated: false,
        }
    }

    /// Create and hydrate in one step
    pub fn open(registry: Registry, storage: S, key: impl Into<String>) -> Self {
        let mut store = Self::new(registry, storage, key);
        store.hydrate();
        store
    }

    /// Load persisted layout and reconcile it against the registry
    ///
    /// Read errors count as "nothing stored".
    pub fn hydrate(&mut self) {
        let stored = match self.storage.load(&self.key) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(key = %self.key, error = ?e, "Failed to read persisted section layout");
                None
            }
        };

        self.sections = state::reconcile(&self.registry, stored.as_deref());
        self.hydrated = true;
        info!(key = %self.key, sections = self.sections.len(), "Section layout hydrated");
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All sections, enabled or not, in current order
    pub fn sections(&self) -> &[SectionState] {
        &self.sections
    }

    /// Flip `enabled` for one section; unknown ids are ignored
    pub fn toggle_section(&mut self, id: &str) {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == id) else {
            debug!(id = %id, "Toggle for unknown section ignored");
            return;
        };

        section.enabled = !section.enabled;
        info!(id = %id, enabled = section.enabled, "Toggled section");
        self.persist();
    }

    /// Move `moved_id` into the slot currently held by `target_id`
    ///
    /// Entries in between shift by one and every `order` is rewritten to its
    /// new index. Unknown ids and `moved_id == target_id` leave the layout
    /// untouched.
    pub fn reorder_sections(&mut self, moved_id: &str, target_id: &str) {
        if moved_id == target_id {
            return;
        }

        let old_index = self.sections.iter().position(|s| s.id == moved_id);
        let new_index = self.sections.iter().position(|s| s.id == target_id);
        let (Some(old_index), Some(new_index)) = (old_index, new_index) else {
            debug!(moved = %moved_id, target = %target_id, "Reorder with unknown section ignored");
            return;
        };

        let moved = self.sections.remove(old_index);
        self.sections.insert(new_index, moved);
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index as i64;
        }

        info!(moved = %moved_id, target = %target_id, from = old_index, to = new_index, "Reordered sections");
        self.persist();
    }

    /// Drop every user change and go back to registry defaults
    pub fn reset_to_defaults(&mut self) {
        self.sections = state::initialize(&self.registry);
        info!("Reset section layout to defaults");
        self.persist();
    }

    /// Delete the stored layout and go back to registry defaults
    ///
    /// Unlike `reset_to_defaults` nothing is written, so the next session
    /// starts as if the layout had never been saved.
    pub fn purge(&mut self) -> Result<()> {
        self.storage
            .remove(&self.key)
            .with_context(|| format!("Failed to remove stored layout '{}'", self.key))?;
        self.sections = state::initialize(&self.registry);
        info!(key = %self.key, "Purged stored section layout");
        Ok(())
    }

    /// Enabled sections in display order, as a fresh list
    pub fn enabled_sections(&self) -> Vec<SectionState> {
        let mut enabled: Vec<SectionState> =
            self.sections.iter().filter(|s| s.enabled).cloned().collect();
        state::sort_by_order(&mut enabled);
        enabled
    }

    fn persist(&mut self) {
        if !self.hydrated {
            debug!(key = %self.key, "Store not hydrated yet, skipping persist");
            return;
        }

        let json = match state::to_json(&self.sections) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to serialize section layout");
                return;
            }
        };

        if let Err(e) = self.storage.save(&self.key, &json) {
            error!(key = %self.key, error = ?e, "Failed to persist section layout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SectionDescriptor;
    use crate::storage::MemoryStorage;

    const KEY: &str = "test-layout";

    fn abcd_registry() -> Registry {
        Registry::new(vec![
            SectionDescriptor::new("A", "a", true, 0),
            SectionDescriptor::new("B", "b", true, 1),
            SectionDescriptor::new("C", "c", true, 2),
            SectionDescriptor::new("D", "d", true, 3),
        ])
        .unwrap()
    }

    fn open(registry: Registry) -> SectionStore<MemoryStorage> {
        SectionStore::open(registry, MemoryStorage::new(), KEY)
    }

    fn ids<S: Storage>(store: &SectionStore<S>) -> Vec<&str> {
        store.sections().iter().map(|s| s.id.as_str()).collect()
    }

    fn orders<S: Storage>(store: &SectionStore<S>) -> Vec<i64> {
        store.sections().iter().map(|s| s.order).collect()
    }

    #[test]
    fn test_reorder_moves_into_target_slot() {
        let mut store = open(abcd_registry());

        store.reorder_sections("D", "B");
        assert_eq!(ids(&store), vec!["A", "D", "B", "C"]);
        assert_eq!(orders(&store), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reorder_forward() {
        let mut store = open(abcd_registry());

        // Moving down: A takes C's slot, B and C shift up
        store.reorder_sections("A", "C");
        assert_eq!(ids(&store), vec!["B", "C", "A", "D"]);
        assert_eq!(orders(&store), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reorder_normalizes_sparse_orders() {
        let registry = Registry::new(vec![
            SectionDescriptor::new("x", "x", true, 10),
            SectionDescriptor::new("y", "y", true, 20),
            SectionDescriptor::new("z", "z", true, 40),
        ])
        .unwrap();
        let mut store = open(registry);

        store.reorder_sections("z", "x");
        assert_eq!(ids(&store), vec!["z", "x", "y"]);
        assert_eq!(orders(&store), vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_noops() {
        let mut store = open(abcd_registry());
        let before = store.sections().to_vec();

        store.reorder_sections("X", "B");
        assert_eq!(store.sections(), before.as_slice());

        store.reorder_sections("B", "X");
        assert_eq!(store.sections(), before.as_slice());

        store.reorder_sections("B", "B");
        assert_eq!(store.sections(), before.as_slice());

        // No-ops write nothing
        assert_eq!(store.storage().get(KEY), None);
    }

    #[test]
    fn test_toggle_flips_only_enabled() {
        let mut store = open(Registry::default());
        let before = store.sections().to_vec();

        store.toggle_section("menu");
        for (after, original) in store.sections().iter().zip(&before) {
            if after.id == "menu" {
                assert!(!after.enabled);
                assert_eq!(after.order, original.order);
            } else {
                assert_eq!(after, original);
            }
        }

        store.toggle_section("menu");
        assert_eq!(store.sections(), before.as_slice());
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut store = open(Registry::default());
        let before = store.sections().to_vec();

        store.toggle_section("gallery");
        assert_eq!(store.sections(), before.as_slice());
        assert_eq!(store.storage().get(KEY), None);
    }

    #[test]
    fn test_reset_restores_initialize() {
        let registry = Registry::default();
        let mut store = open(registry.clone());

        store.toggle_section("menu");
        store.reorder_sections("contact", "hero");
        store.toggle_section("hero");
        store.reorder_sections("about", "events");

        store.reset_to_defaults();
        assert_eq!(store.sections(), state::initialize(&registry).as_slice());

        // Reset overwrites what was stored
        let stored = store.storage().get(KEY).unwrap();
        assert_eq!(stored, state::to_json(&state::initialize(&registry)).unwrap());
    }

    #[test]
    fn test_enabled_sections_view() {
        let registry = Registry::new(vec![
            SectionDescriptor::new("hero", "hero", true, 0),
            SectionDescriptor::new("menu", "menu", true, 1),
            SectionDescriptor::new("about", "about", true, 2),
        ])
        .unwrap();
        let mut store = open(registry);
        store.toggle_section("menu");

        let enabled = store.enabled_sections();
        assert_eq!(
            enabled,
            vec![
                SectionState::new("hero", true, 0),
                SectionState::new("about", true, 2),
            ]
        );

        // Querying does not change the backing state
        assert_eq!(store.sections().len(), 3);
        assert_eq!(store.enabled_sections(), enabled);
    }

    #[test]
    fn test_every_mutation_persists_full_state() {
        let mut store = open(Registry::default());

        store.toggle_section("events");
        let stored = store.storage().get(KEY).unwrap().to_string();
        assert_eq!(stored, state::to_json(store.sections()).unwrap());

        store.reorder_sections("contact", "menu");
        let stored = store.storage().get(KEY).unwrap().to_string();
        assert_eq!(stored, state::to_json(store.sections()).unwrap());
    }

    #[test]
    fn test_state_survives_sessions() {
        let mut first = open(Registry::default());
        first.toggle_section("testimonials");
        first.reorder_sections("contact", "hero");
        let stored = first.storage().get(KEY).unwrap().to_string();

        let second = SectionStore::open(
            Registry::default(),
            MemoryStorage::with_value(KEY, &stored),
            KEY,
        );
        assert_eq!(second.sections(), first.sections());
        assert_eq!(second.enabled_sections(), first.enabled_sections());
    }

    #[test]
    fn test_hydrate_from_corrupt_storage_uses_defaults() {
        let registry = Registry::default();
        let store = SectionStore::open(
            registry.clone(),
            MemoryStorage::with_value(KEY, "{ definitely not a layout"),
            KEY,
        );

        assert!(store.is_hydrated());
        assert_eq!(store.sections(), state::initialize(&registry).as_slice());
        // Nothing was mutated, so the corrupt value is left for inspection
        assert_eq!(store.storage().get(KEY), Some("{ definitely not a layout"));
    }

    #[test]
    fn test_no_persist_before_hydration() {
        let stored = r#"[{"id":"menu","enabled":false,"order":0}]"#;
        let mut store = SectionStore::new(
            Registry::default(),
            MemoryStorage::with_value(KEY, stored),
            KEY,
        );
        assert!(!store.is_hydrated());

        // Mutating early changes memory only
        store.toggle_section("hero");
        assert!(!store.sections()[0].enabled);
        assert_eq!(store.storage().get(KEY), Some(stored));

        store.hydrate();
        assert!(store.is_hydrated());
        assert_eq!(store.sections()[0].id, "hero");
        assert!(store.sections().iter().any(|s| s.id == "menu" && !s.enabled));
    }

    #[test]
    fn test_hydrate_with_unreadable_storage_uses_defaults() {
        let mut storage = MemoryStorage::with_value(KEY, r#"[{"id":"A","enabled":false,"order":0}]"#);
        storage.set_fail_reads(true);
        let mut store = SectionStore::open(abcd_registry(), storage, KEY);

        assert!(store.is_hydrated());
        assert_eq!(store.sections(), state::initialize(&abcd_registry()).as_slice());

        // The first mutation replaces the unreadable value
        store.toggle_section("C");
        let stored = store.storage().get(KEY).unwrap().to_string();
        assert_eq!(stored, state::to_json(store.sections()).unwrap());
    }

    #[test]
    fn test_purge_removes_stored_layout() {
        let mut store = open(abcd_registry());
        store.toggle_section("A");
        store.reorder_sections("D", "A");
        assert!(store.storage().get(KEY).is_some());

        store.purge().unwrap();
        assert_eq!(store.storage().get(KEY), None);
        assert_eq!(store.sections(), state::initialize(&abcd_registry()).as_slice());

        // Next session starts from defaults too
        let reopened = SectionStore::open(abcd_registry(), store.storage().clone(), KEY);
        assert_eq!(reopened.sections(), store.sections());
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let mut store = SectionStore::open(abcd_registry(), storage, KEY);

        store.toggle_section("B");
        store.reorder_sections("D", "A");

        assert_eq!(ids(&store), vec!["D", "A", "B", "C"]);
        assert!(!store.sections()[2].enabled);
        assert_eq!(store.storage().get(KEY), None);
    }
}
