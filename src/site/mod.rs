//! Consumers of the enabled section view
//!
//! - **nav**: header and footer link builders
//! - **render**: static HTML page renderer with the section component table
//! - **content**: menu, events, reviews, and section labels

pub mod content;
mod html;
pub mod nav;
pub mod render;

pub use nav::{footer_links, nav_links};
pub use render::PageRenderer;
