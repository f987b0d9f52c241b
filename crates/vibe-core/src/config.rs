//! Site configuration.
//!
//! The storefront embeds a `vibe.toml` file at build time and applies
//! `VIBE_*` environment variable overrides at request time (Spin forwards
//! the component's `environment` table).

use serde::{Deserialize, Serialize};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "VIBE_";

/// Largest related-products count; matches the upstream page limit.
pub const MAX_RELATED_COUNT: u32 = 100;

/// Error loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site section.
    #[serde(default)]
    pub site: SiteSection,

    /// Upstream product API section.
    #[serde(default)]
    pub api: ApiSection,

    /// Catalog display section.
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Logging section.
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
    /// Display name used in titles and the navbar.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Contact e-mail shown on the about page.
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
}

fn default_site_name() -> String {
    "Vibe Check".to_string()
}

fn default_contact_email() -> String {
    "hello@vibecheck.com".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            contact_email: default_contact_email(),
        }
    }
}

/// Upstream product API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Base URL, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Retries for read-only procedures.
    #[serde(default = "default_query_retries")]
    pub query_retries: u32,
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_query_retries() -> u32 {
    1
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            query_retries: default_query_retries(),
        }
    }
}

/// Catalog display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Products per page on the list page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Page size choices offered in the list filters.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<u32>,

    /// Number of related products on the detail page.
    #[serde(default = "default_related_count")]
    pub related_count: u32,
}

fn default_page_size() -> u32 {
    9
}

fn default_page_size_options() -> Vec<u32> {
    vec![9, 12, 24, 30]
}

fn default_related_count() -> u32 {
    4
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            related_count: default_related_count(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Minimum level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json or human.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteSection::default(),
            api: ApiSection::default(),
            catalog: CatalogSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl SiteConfig {
    /// Parse config from TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = toml::from_str(content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Parse config from TOML text, then apply process environment overrides.
    pub fn load(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::from_toml_str(content)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `VIBE_*` overrides from a lookup function.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(name) = var("SITE_NAME") {
            self.site.name = name;
        }
        if let Some(url) = var("API_BASE_URL") {
            self.api.base_url = url;
        }
        if let Some(value) = var("QUERY_RETRIES") {
            self.api.query_retries = parse_number("VIBE_QUERY_RETRIES", &value)?;
        }
        if let Some(value) = var("DEFAULT_PAGE_SIZE") {
            self.catalog.page_size = parse_number("VIBE_DEFAULT_PAGE_SIZE", &value)?;
        }
        if let Some(value) = var("RELATED_COUNT") {
            self.catalog.related_count = parse_number("VIBE_RELATED_COUNT", &value)?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("LOG_FORMAT") {
            self.logging.format = format;
        }

        self.normalize();
        self.validate()
    }

    fn normalize(&mut self) {
        let trimmed = self.api.base_url.trim_end_matches('/').len();
        self.api.base_url.truncate(trimmed);
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                key: "api.base_url".to_string(),
                value: self.api.base_url.clone(),
            });
        }
        if self.catalog.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "catalog.page_size".to_string(),
                value: "0".to_string(),
            });
        }
        let options = &self.catalog.page_size_options;
        if options.is_empty() || options.contains(&0) {
            return Err(ConfigError::InvalidValue {
                key: "catalog.page_size_options".to_string(),
                value: format!("{:?}", options),
            });
        }
        if self.catalog.related_count > MAX_RELATED_COUNT {
            return Err(ConfigError::InvalidValue {
                key: "catalog.related_count".to_string(),
                value: self.catalog.related_count.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
