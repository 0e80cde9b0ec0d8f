//! Section registry
//!
//! The canonical, ordered catalogue of sections the page can show. Built once
//! at start-up (from the built-in list or the site config) and never mutated.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Registry entry for one page section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub id: String,
    /// Opaque key the presentation layer resolves to a label
    pub display_key: String,
    #[serde(default = "default_enabled")]
    pub default_enabled: bool,
    pub default_order: u32,
}

fn default_enabled() -> bool {
    true
}

impl SectionDescriptor {
    pub fn new(id: &str, display_key: &str, default_enabled: bool, default_order: u32) -> Self {
        Self {
            id: id.to_string(),
            display_key: display_key.to_string(),
            default_enabled,
            default_order,
        }
    }
}

/// Immutable list of section descriptors in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    descriptors: Vec<SectionDescriptor>,
}

impl Registry {
    /// Build a registry, rejecting empty catalogues, duplicate or blank ids,
    /// and default orders that run backwards against declaration order
    pub fn new(descriptors: Vec<SectionDescriptor>) -> Result<Self> {
        if descriptors.is_empty() {
            bail!("Section registry must declare at least one section");
        }

        let mut seen = HashSet::new();
        for descriptor in &descriptors {
            if descriptor.id.trim().is_empty() {
                bail!("Section registry contains an entry with an empty id");
            }
            if !seen.insert(descriptor.id.as_str()) {
                bail!("Section id '{}' is declared more than once", descriptor.id);
            }
        }

        // Declaration order is the tie-breaker, so defaults must already be sorted
        if let Some(pair) = descriptors
            .windows(2)
            .find(|pair| pair[1].default_order < pair[0].default_order)
        {
            bail!(
                "Section '{}' has default_order {} but follows '{}' with default_order {}",
                pair[1].id,
                pair[1].default_order,
                pair[0].id,
                pair[0].default_order
            );
        }

        Ok(Self { descriptors })
    }

    pub fn descriptors(&self) -> &[SectionDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Display key for a section, or the id itself when it is not registered
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|d| d.display_key.as_str()).unwrap_or(id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }
}

impl Default for Registry {
    /// The Forge Burger page sections
    fn default() -> Self {
        Self {
            descriptors: default_descriptors(),
        }
    }
}

pub fn default_descriptors() -> Vec<SectionDescriptor> {
    vec![
        SectionDescriptor::new("hero", "hero", true, 0),
        SectionDescriptor::new("menu", "menu", true, 1),
        SectionDescriptor::new("about", "about", true, 2),
        SectionDescriptor::new("events", "events", true, 3),
        SectionDescriptor::new("testimonials", "testimonials", true, 4),
        SectionDescriptor::new("reservations", "reservations", true, 5),
        SectionDescriptor::new("contact", "contact", true, 6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let registry = Registry::default();
        let ids: Vec<&str> = registry.descriptors().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["hero", "menu", "about", "events", "testimonials", "reservations", "contact"]
        );
        assert!(registry.descriptors().iter().all(|d| d.default_enabled));
    }

    #[test]
    fn test_lookup_and_display_name() {
        let registry = Registry::default();
        assert!(registry.contains("menu"));
        assert!(!registry.contains("gallery"));
        assert_eq!(registry.get("events").map(|d| d.default_order), Some(3));

        // Unknown ids fall back to themselves
        assert_eq!(registry.display_name("about"), "about");
        assert_eq!(registry.display_name("gallery"), "gallery");
    }

    #[test]
    fn test_rejects_default_order_out_of_declaration_order() {
        let result = Registry::new(vec![
            SectionDescriptor::new("A", "a", true, 2),
            SectionDescriptor::new("B", "b", true, 0),
        ]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("'B'"), "unexpected error: {err}");

        // Equal and sparse orders are fine
        let registry = Registry::new(vec![
            SectionDescriptor::new("A", "a", true, 0),
            SectionDescriptor::new("B", "b", true, 0),
            SectionDescriptor::new("C", "c", true, 7),
        ])
        .unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Registry::new(vec![
            SectionDescriptor::new("hero", "hero", true, 0),
            SectionDescriptor::new("hero", "hero2", false, 1),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert!(Registry::new(Vec::new()).is_err());
        assert!(Registry::new(vec![SectionDescriptor::new("  ", "x", true, 0)]).is_err());
    }

    #[test]
    fn test_descriptor_enabled_defaults_to_true() {
        let descriptor: SectionDescriptor = toml::from_str(
            "id = \"menu\"\ndisplay_key = \"menu\"\ndefault_order = 4\n",
        )
        .unwrap();
        assert_eq!(descriptor, SectionDescriptor::new("menu", "menu", true, 4));
    }
}
