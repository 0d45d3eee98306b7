//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (HIRESCAN_*)
//! 2. TOML config file (if HIRESCAN_CONFIG_FILE set)
//! 3. Built-in defaults
//!
//! The defaults carry the scan parameters that used to be scattered
//! compile-time constants: site lists, the ordered dubious-term list, and
//! the politeness delays.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Craigslist subdomains for California, from geo.craigslist.org/iso/us/ca.
pub const CALIFORNIA_CL_SITES: &[&str] = &[
    "bakersfield", "chico", "fresno", "goldcountry", "hanford", "humboldt", "imperial",
    "inlandempire", "losangeles", "mendocino", "merced", "modesto", "monterey", "orangecounty",
    "palmsprings", "redding", "reno", "sacramento", "sandiego", "slo", "santabarbara",
    "santamaria", "sfbay", "siskiyou", "stockton", "susanville", "ventura", "visalia",
    "yubasutter",
];

/// Craigslist subdomains for Illinois.
pub const ILLINOIS_CL_SITES: &[&str] = &[
    "bn", "chambana", "chicago", "decatur", "lasalle", "mattoon", "peoria", "quadcities",
    "rockford", "carbondale", "springfieldil", "stlouis", "quincy",
];

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (HIRESCAN_*)
/// 2. TOML config file (if HIRESCAN_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory for the content-addressed page cache.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Directory where CSV reports are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// User-Agent string for HTTP requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum bytes to fetch per request.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// HTTP request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Fixed politeness delay between Craigslist sites, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub site_delay_ms: u64,

    /// Fixed politeness delay between ZipRecruiter result pages, in
    /// milliseconds.
    #[serde(default = "default_delay_ms")]
    pub page_delay_ms: u64,

    /// Maximum postings processed per Craigslist site.
    #[serde(default = "default_max_posts")]
    pub max_posts_per_site: usize,

    /// Skip cache reads and always re-fetch (cache writes still happen).
    #[serde(default)]
    pub ignore_cache: bool,

    /// Craigslist subdomains to scan.
    #[serde(default = "default_craigslist_sites")]
    pub craigslist_sites: Vec<String>,

    /// Location terms for ZipRecruiter searches.
    #[serde(default = "default_ziprecruiter_locations")]
    pub ziprecruiter_locations: Vec<String>,

    /// Terms associated with criminal-history screening. Ordered: match
    /// output and the combined search query follow this order exactly.
    #[serde(default = "default_dubious_terms")]
    pub dubious_terms: Vec<String>,
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("./page-cache")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_user_agent() -> String {
    "hirescan/0.1".into()
}

fn default_max_bytes() -> usize {
    5_242_880 // 5MB
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_delay_ms() -> u64 {
    10_000
}

fn default_max_posts() -> usize {
    2000
}

fn default_craigslist_sites() -> Vec<String> {
    ILLINOIS_CL_SITES.iter().map(|s| s.to_string()).collect()
}

fn default_ziprecruiter_locations() -> Vec<String> {
    vec!["california".into()]
}

fn default_dubious_terms() -> Vec<String> {
    [
        "arrest",
        "conviction",
        "criminal",
        "crime",
        "felony",
        "felonies",
        "misdemeanor",
        "jail",
        "prison",
        "parole",
        "pass drug and background check",
        "clean background",
        "clean record",
        "pass a background check",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            output_dir: default_output_dir(),
            user_agent: default_user_agent(),
            max_bytes: default_max_bytes(),
            timeout_ms: default_timeout_ms(),
            site_delay_ms: default_delay_ms(),
            page_delay_ms: default_delay_ms(),
            max_posts_per_site: default_max_posts(),
            ignore_cache: false,
            craigslist_sites: default_craigslist_sites(),
            ziprecruiter_locations: default_ziprecruiter_locations(),
            dubious_terms: default_dubious_terms(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Delay between Craigslist sites.
    pub fn site_delay(&self) -> Duration {
        Duration::from_millis(self.site_delay_ms)
    }

    /// Delay between ZipRecruiter result pages.
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `HIRESCAN_`
    /// 2. TOML file from `HIRESCAN_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("HIRESCAN_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("HIRESCAN_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.cache_dir, PathBuf::from("./page-cache"));
        assert_eq!(config.user_agent, "hirescan/0.1");
        assert_eq!(config.max_bytes, 5_242_880);
        assert_eq!(config.timeout_ms, 20_000);
        assert_eq!(config.site_delay_ms, 10_000);
        assert_eq!(config.max_posts_per_site, 2000);
        assert!(!config.ignore_cache);
        assert_eq!(config.craigslist_sites.len(), ILLINOIS_CL_SITES.len());
        assert_eq!(config.ziprecruiter_locations, vec!["california".to_string()]);
    }

    #[test]
    fn test_term_order_is_stable() {
        let config = AppConfig::default();
        assert_eq!(config.dubious_terms.first().map(String::as_str), Some("arrest"));
        assert_eq!(
            config.dubious_terms.last().map(String::as_str),
            Some("pass a background check")
        );
    }

    #[test]
    fn test_timeout_duration() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(20_000));
        assert_eq!(config.site_delay(), Duration::from_millis(10_000));
        assert_eq!(config.page_delay(), Duration::from_millis(10_000));
    }
}
