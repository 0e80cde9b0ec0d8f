//! Configuration management for Forge Layout
//!
//! - **site**: `SiteConfig`, deploy-time brand/contact details and the
//!   section registry override (TOML)
//!
//! The user's section layout is not configuration; it lives in
//! `crate::layout` and is persisted through `crate::storage`.

pub mod site;

// Re-export commonly used types
pub use site::SiteConfig;
