//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Config and data file locations
pub mod config {
    /// Directory name under the platform config/data dirs
    pub const APP_DIR: &str = "forge-layout";

    /// Site configuration file name
    pub const FILENAME: &str = "site.toml";

    /// Extension used by `FileStorage` for each storage key
    pub const STORAGE_EXTENSION: &str = "json";
}

/// Section layout persistence
pub mod storage {
    /// Well-known key the section layout is stored under
    pub const SECTION_CONFIG_KEY: &str = "forge-burger-section-config";
}

/// Section identifiers with special handling in consumers
pub mod sections {
    /// Landing section; excluded from navigation and footer links
    pub const HERO_ID: &str = "hero";

    /// Section the hero call to action points at
    pub const RESERVATIONS_ID: &str = "reservations";
}

/// Page rendering constants
pub mod page {
    /// Prefix for in-page anchors (`#menu`, `#about`, ...)
    pub const ANCHOR_PREFIX: &str = "#";

    /// Document language attribute
    pub const LANG: &str = "en";
}
