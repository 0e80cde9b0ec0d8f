//! Site configuration (`site.toml`)
//!
//! Brand details, contact info, and the section registry a deployment runs
//! with. Every field has a default so partial or older files keep loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants;
use crate::registry::{Registry, SectionDescriptor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_url")]
    pub url: String,
    /// Key the section layout is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub hours: OpeningHours,
    #[serde(default)]
    pub social: SocialLinks,
    /// Registry override; the built-in sections are used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SectionDescriptor>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default)]
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Opening window for one day, `HH:MM` strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayHours {
    pub open: String,
    pub close: String,
}

/// `None` means closed that day. A written `[hours]` table lists every open day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<DayHours>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
}

// Default value functions
fn default_name() -> String {
    "Forge Burger".to_string()
}

fn default_description() -> String {
    "Artisan burgers forged with passion".to_string()
}

fn default_url() -> String {
    "https://forgeburger.pt".to_string()
}

fn default_storage_key() -> String {
    constants::storage::SECTION_CONFIG_KEY.to_string()
}

fn default_phone() -> String {
    "+351 222 333 444".to_string()
}

fn default_email() -> String {
    "info@forgeburger.pt".to_string()
}

fn default_day() -> Option<DayHours> {
    Some(DayHours::default())
}

impl Default for DayHours {
    fn default() -> Self {
        Self {
            open: "12:00".to_string(),
            close: "23:00".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
            url: default_url(),
            storage_key: default_storage_key(),
            contact: ContactInfo::default(),
            hours: OpeningHours::default(),
            social: SocialLinks::default(),
            sections: None,
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            phone: default_phone(),
            email: default_email(),
            address: Address::default(),
        }
    }
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street: "Rua da Forja Industrial, 42".to_string(),
            city: "Porto".to_string(),
            postal_code: "4000-123".to_string(),
            country: "Portugal".to_string(),
        }
    }
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            monday: None,
            tuesday: default_day(),
            wednesday: default_day(),
            thursday: default_day(),
            friday: default_day(),
            saturday: default_day(),
            sunday: default_day(),
        }
    }
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            instagram: Some("https://instagram.com/forgeburger".to_string()),
            facebook: Some("https://facebook.com/forgeburger".to_string()),
            twitter: Some("https://twitter.com/forgeburger".to_string()),
            tiktok: Some("https://tiktok.com/@forgeburger".to_string()),
        }
    }
}

impl OpeningHours {
    /// Weekday name paired with its hours, Monday first
    pub fn days(&self) -> [(&'static str, Option<&DayHours>); 7] {
        [
            ("Monday", self.monday.as_ref()),
            ("Tuesday", self.tuesday.as_ref()),
            ("Wednesday", self.wednesday.as_ref()),
            ("Thursday", self.thursday.as_ref()),
            ("Friday", self.friday.as_ref()),
            ("Saturday", self.saturday.as_ref()),
            ("Sunday", self.sunday.as_ref()),
        ]
    }
}

impl SocialLinks {
    /// Configured networks as `(name, url)` pairs
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Instagram", self.instagram.as_deref()),
            ("Facebook", self.facebook.as_deref()),
            ("Twitter", self.twitter.as_deref()),
            ("TikTok", self.tiktok.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.map(|url| (name, url)))
        .collect()
    }
}

impl SiteConfig {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(constants::config::APP_DIR);
        path.push(constants::config::FILENAME);
        path
    }

    /// Load from the default location, writing defaults there on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, creating default config at {:?}", config_path);
            let config = SiteConfig::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {:?}", config_path))?;

        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse TOML from {:?}", config_path))?;

        info!(name = %config.name, "Loaded site config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(contents)?;
        // Surface registry mistakes at load time rather than first use
        config.registry()?;
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        fs::write(config_path, toml_string)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        info!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// Registry for this deployment
    pub fn registry(&self) -> Result<Registry> {
        match &self.sections {
            Some(descriptors) => Registry::new(descriptors.clone())
                .context("Invalid [[sections]] in site config"),
            None => Ok(Registry::default()),
        }
    }
}
