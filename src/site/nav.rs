//! Navigation and footer links derived from the enabled section view

use crate::constants::{page::ANCHOR_PREFIX, sections::HERO_ID};
use crate::layout::SectionState;
use crate::registry::Registry;

use super::content::section_label;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    /// In-page anchor, e.g. `#menu`
    pub href: String,
}

/// Header links: every enabled section except the hero, in display order
pub fn nav_links(registry: &Registry, enabled: &[SectionState]) -> Vec<NavLink> {
    enabled
        .iter()
        .filter(|s| s.id != HERO_ID)
        .map(|s| NavLink {
            id: s.id.clone(),
            label: section_label(registry.display_name(&s.id)).to_string(),
            href: format!("{ANCHOR_PREFIX}{}", s.id),
        })
        .collect()
}

/// Footer links; same set as the header
pub fn footer_links(registry: &Registry, enabled: &[SectionState]) -> Vec<NavLink> {
    nav_links(registry, enabled)
}
