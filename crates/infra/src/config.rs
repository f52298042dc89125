//! Seeding configuration.
//!
//! Read once at process start and passed explicitly to the activation guard,
//! the resolver and the seeder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::DuplicatePolicy;

pub const BUILD_ALL_VAR: &str = "APP_BUILD_ALL_FIXTURES";
pub const DOMAIN_VAR: &str = "APP_DOMAIN";
pub const DUPLICATE_POLICY_VAR: &str = "APP_DUPLICATE_POLICY";
const COMPONENT_PREFIX: &str = "APP_COMPONENT_";
const COMPONENT_SUFFIX: &str = "_LOCATION";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {var}: expected {expected}")]
    InvalidValue {
        var: String,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Load every dataset regardless of domain.
    #[serde(default)]
    pub build_all_fixtures: bool,
    /// Deployment domain, e.g. `zuid-drecht.nl`.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// Base URL per Common Ground component code (`wrc` → `https://wrc.example.org`).
    #[serde(default)]
    pub components: BTreeMap<String, String>,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Builds the configuration from `(name, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = SeedConfig::default();

        for (name, value) in vars {
            match name.as_str() {
                BUILD_ALL_VAR => config.build_all_fixtures = parse_flag(&value),
                DOMAIN_VAR => {
                    let domain = value.trim();
                    config.domain = (!domain.is_empty()).then(|| domain.to_string());
                }
                DUPLICATE_POLICY_VAR => config.duplicate_policy = parse_policy(&value)?,
                _ => {
                    if let Some(code) = name
                        .strip_prefix(COMPONENT_PREFIX)
                        .and_then(|rest| rest.strip_suffix(COMPONENT_SUFFIX))
                        .filter(|code| !code.is_empty())
                    {
                        config.components.insert(code.to_ascii_lowercase(), value.trim().to_string());
                    }
                }
            }
        }

        Ok(config)
    }

    /// Configured domain, or `""` when absent.
    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or("")
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn parse_policy(value: &str) -> Result<DuplicatePolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "reject" => Ok(DuplicatePolicy::Reject),
        "upsert" => Ok(DuplicatePolicy::Upsert),
        _ => Err(ConfigError::InvalidValue {
            var: DUPLICATE_POLICY_VAR.to_string(),
            value: value.to_string(),
            expected: "`reject` or `upsert`",
        }),
    }
}
