//! Configuration file parsing for the Router.
//!
//! Loads the classifier keyword tables and the compliance rule tables from a
//! single TOML file. Both sections are optional and fall back to the estate
//! defaults.

use docket_classifier::ClassifierConfig;
use docket_compliance::ComplianceConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A section parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Pipeline configuration loaded from TOML
///
/// ```toml
/// [classifier.keywords]
/// "Tax Document" = ["form 1040", "irs"]
///
/// [compliance.rules."Death Certificate"]
/// kind = "all-of"
/// phrases = ["Certificate of Death", "Date of Death"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Keyword tables
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Compliance rules
    #[serde(default)]
    pub compliance: ComplianceConfig,
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate both sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.classifier
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("classifier: {}", e)))?;
        self.compliance
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("compliance: {}", e)))?;
        Ok(())
    }
}
