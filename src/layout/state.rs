//! Section state and registry reconciliation
//!
//! Persisted layout data is untrusted: it may be missing, malformed, or
//! written against an older registry. Everything here maps such input back
//! onto the current registry without ever failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::registry::{Registry, SectionDescriptor};

/// Runtime and persisted state of one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionState {
    pub id: String,
    pub enabled: bool,
    /// Only compared, never assumed contiguous
    pub order: i64,
}

impl SectionState {
    #[cfg(test)]
    pub fn new(id: &str, enabled: bool, order: i64) -> Self {
        Self {
            id: id.to_string(),
            enabled,
            order,
        }
    }

    fn from_descriptor(descriptor: &SectionDescriptor) -> Self {
        Self {
            id: descriptor.id.clone(),
            enabled: descriptor.default_enabled,
            order: i64::from(descriptor.default_order),
        }
    }
}

/// Default state, 1:1 with the registry and in registry order
pub fn initialize(registry: &Registry) -> Vec<SectionState> {
    registry
        .descriptors()
        .iter()
        .map(SectionState::from_descriptor)
        .collect()
}

/// Reconcile stored JSON text against the registry
///
/// `None` (nothing stored) and unparsable text both yield the defaults.
pub fn reconcile(registry: &Registry, persisted: Option<&str>) -> Vec<SectionState> {
    let Some(text) = persisted else {
        debug!("No persisted section layout, using registry defaults");
        return initialize(registry);
    };

    match serde_json::from_str::<Value>(text) {
        Ok(value) => reconcile_value(registry, &value),
        Err(e) => {
            warn!(error = %e, "Persisted section layout is not valid JSON, using registry defaults");
            initialize(registry)
        }
    }
}

/// Reconcile an already-parsed JSON value against the registry
pub fn reconcile_value(registry: &Registry, persisted: &Value) -> Vec<SectionState> {
    let stored = match Vec::<SectionState>::deserialize(persisted) {
        Ok(stored) => stored,
        Err(e) => {
            warn!(error = %e, "Persisted section layout has an unexpected shape, using registry defaults");
            return initialize(registry);
        }
    };

    let mut merged: Vec<SectionState> = registry
        .descriptors()
        .iter()
        .map(|descriptor| {
            // First stored entry wins when an id was written twice
            match stored.iter().find(|s| s.id == descriptor.id) {
                Some(found) => found.clone(),
                None => {
                    debug!(id = %descriptor.id, "Section missing from persisted layout, using defaults");
                    SectionState::from_descriptor(descriptor)
                }
            }
        })
        .collect();

    let stale = stored.iter().filter(|s| !registry.contains(&s.id)).count();
    if stale > 0 {
        debug!(count = stale, "Dropped persisted sections no longer in the registry");
    }

    sort_by_order(&mut merged);
    merged
}

/// Stable sort on `order`; equal orders keep their relative position
pub(crate) fn sort_by_order(sections: &mut [SectionState]) {
    sections.sort_by_key(|s| s.order);
}

/// Serialize state in the persisted format
pub fn to_json(sections: &[SectionState]) -> serde_json::Result<String> {
    serde_json::to_string(sections)
}
