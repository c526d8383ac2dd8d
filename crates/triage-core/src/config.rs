// Rust guideline compliant 2026-02-06

//! Configuration management for bug triage.

use crate::links::Links;
use crate::models::Team;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a triage deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Bugzilla instance.
    pub tracker_url: String,

    /// Product whose bugs are reported.
    pub product: String,

    /// Component whose bugs are reported.
    pub component: String,

    /// Release currently under development.
    pub current_release: String,

    /// Release after the current one.
    pub next_release: String,

    /// Logins of internal team members.
    pub team: Vec<String>,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,

    /// HTTP timeout for tracker requests, in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracker_url: "https://bugzilla.redhat.com".to_string(),
            product: "OpenShift Container Platform".to_string(),
            component: "Storage".to_string(),
            current_release: "4.6.0".to_string(),
            next_release: "4.7.0".to_string(),
            team: ["chuffman", "fbertina", "hekumar", "jsafrane", "tsmetana"]
                .into_iter()
                .map(String::from)
                .collect(),
            api_key_env: "BUGZILLA_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if one is given
    /// 3. Environment variables with `TRIAGE_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read
    /// - The configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides looked up by variable name.
    ///
    /// Supported variables:
    /// - `TRIAGE_TRACKER_URL`
    /// - `TRIAGE_PRODUCT`
    /// - `TRIAGE_COMPONENT`
    /// - `TRIAGE_CURRENT_RELEASE`
    /// - `TRIAGE_NEXT_RELEASE`
    /// - `TRIAGE_TEAM` - comma separated logins
    /// - `TRIAGE_TIMEOUT_SECS`
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("TRIAGE_TRACKER_URL") {
            self.tracker_url = val;
        }
        if let Some(val) = lookup("TRIAGE_PRODUCT") {
            self.product = val;
        }
        if let Some(val) = lookup("TRIAGE_COMPONENT") {
            self.component = val;
        }
        if let Some(val) = lookup("TRIAGE_CURRENT_RELEASE") {
            self.current_release = val;
        }
        if let Some(val) = lookup("TRIAGE_NEXT_RELEASE") {
            self.next_release = val;
        }
        if let Some(val) = lookup("TRIAGE_TEAM") {
            self.team = val
                .split(',')
                .map(str::trim)
                .filter(|member| !member.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(val) = lookup("TRIAGE_TIMEOUT_SECS") {
            self.timeout_secs = val.parse().map_err(|_| {
                Error::Config("TRIAGE_TIMEOUT_SECS must be a positive number".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if a required string is empty or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("tracker_url", &self.tracker_url),
            ("product", &self.product),
            ("component", &self.component),
            ("current_release", &self.current_release),
            ("next_release", &self.next_release),
            ("api_key_env", &self.api_key_env),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{} cannot be empty", name)));
            }
        }

        if !self.tracker_url.starts_with("http://") && !self.tracker_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "tracker_url must be an http(s) URL, got {}",
                self.tracker_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(Error::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Reads the API key from the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingCredential` if the variable is unset or empty.
    pub fn api_key(&self) -> Result<String> {
        self.api_key_from(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::api_key`] with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingCredential` if the variable is unset or empty.
    pub fn api_key_from<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(&self.api_key_env) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(Error::MissingCredential {
                var: self.api_key_env.clone(),
                help_url: self.links().api_key_url(),
            }),
        }
    }

    /// Returns the team as a lookup set.
    #[must_use]
    pub fn team(&self) -> Team {
        Team::new(self.team.iter().cloned())
    }

    /// Returns the link builder for the configured tracker.
    #[must_use]
    pub fn links(&self) -> Links {
        Links::new(self.tracker_url.clone())
    }
}
