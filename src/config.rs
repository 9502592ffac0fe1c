use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid path pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// How two metadata records are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Ignore scheme and trailing slashes when comparing values
    #[serde(default = "default_normalize")]
    pub normalize: bool,

    /// Only narrate canonical differences
    #[serde(default)]
    pub canonical_only: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            normalize: default_normalize(),
            canonical_only: false,
        }
    }
}

/// Settings for a comparison run between an original and a target site.
///
/// Owned by the caller and passed into each engine call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareSettings {
    /// Base URL of the original site
    pub original: String,

    /// Base URL of the target site
    pub target: String,

    #[serde(flatten)]
    pub comparison: ComparisonConfig,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Regex patterns for page paths to include
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for page paths to exclude (these take precedence)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Default value for normalize
fn default_normalize() -> bool {
    true
}

/// Default request timeout
fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("seo-meta-compare/{}", env!("CARGO_PKG_VERSION"))
}

impl CompareSettings {
    /// Create settings with default values for the two sites
    pub fn new(original: &str, target: &str) -> Self {
        Self {
            original: original.to_string(),
            target: target.to_string(),
            comparison: ComparisonConfig::default(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }

    /// Load settings from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
