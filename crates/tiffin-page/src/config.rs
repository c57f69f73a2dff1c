//! Site configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tiffin_commerce::money::Currency;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level site configuration, loaded from TOML.
///
/// Every field has a default so a missing file or empty table yields a
/// working site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Brand name shown in the header and page title.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Tagline shown under the brand.
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Currency code for menu prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Carousel geometry.
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Notification behavior.
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Form submission behavior.
    #[serde(default)]
    pub submission: SubmissionConfig,
}

fn default_brand() -> String {
    "TiffinTales".to_string()
}

fn default_tagline() -> String {
    "Authentic home food delivery".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            tagline: default_tagline(),
            currency: default_currency(),
            carousel: CarouselConfig::default(),
            notifications: NotificationConfig::default(),
            submission: SubmissionConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolve the configured currency, falling back to INR for an
    /// unrecognized code.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.currency).unwrap_or_default()
    }
}

/// Carousel geometry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Gap between cards, in pixels.
    #[serde(default = "default_gap")]
    pub gap: f64,

    /// Page distance used before any card has been measured.
    #[serde(default = "default_fallback_distance")]
    pub fallback_distance: f64,
}

fn default_gap() -> f64 {
    20.0
}

fn default_fallback_distance() -> f64 {
    320.0
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gap: default_gap(),
            fallback_distance: default_fallback_distance(),
        }
    }
}

/// Notification behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a notification stays visible, in milliseconds.
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
}

fn default_dismiss_after_ms() -> u64 {
    3000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after_ms(),
        }
    }
}

/// Form submission configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Simulated backend delay, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Timeout applied to submissions, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_delay_ms() -> u64 {
    1500
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
