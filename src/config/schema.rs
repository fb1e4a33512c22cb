//! Configuration schema types
//!
//! Maps the TOML settings file. The `custom` table is free-form user settings
//! and is only inspected by the destination guard.

use crate::domain::DeploymentContext;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Maximum CloudFormation stack name length
const MAX_STACK_NAME_LEN: usize = 128;

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwaggerConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Deployed service
    pub service: ServiceConfig,

    /// Provider target (stage, region, credentials profile)
    #[serde(default)]
    pub provider: ProviderConfig,

    /// User settings; `custom.swaggerDestinations` lives here
    #[serde(default)]
    pub custom: toml::Table,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SwaggerConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.service.validate()?;
        self.provider.validate()?;
        self.logging.validate()?;

        let stack_len = self.service.name.len() + 1 + self.provider.stage.len();
        if stack_len > MAX_STACK_NAME_LEN {
            return Err(format!(
                "Stack name '{}-{}' exceeds {} characters",
                self.service.name, self.provider.stage, MAX_STACK_NAME_LEN
            ));
        }
        Ok(())
    }

    /// Builds the context of the deployment described by this configuration
    pub fn deployment_context(&self) -> DeploymentContext {
        DeploymentContext::new(
            &self.service.name,
            &self.provider.stage,
            &self.provider.region,
        )
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (don't write to S3)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Deployed service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name, the first half of the stack name
    pub name: String,
}

impl ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("service.name cannot be empty".to_string());
        }
        if !service_name_pattern().is_match(&self.name) {
            return Err(format!(
                "Invalid service.name '{}'. Must start with a letter and contain only letters, digits and hyphens",
                self.name
            ));
        }
        Ok(())
    }
}

/// Provider target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Deployment stage
    #[serde(default = "default_stage")]
    pub stage: String,

    /// AWS region
    #[serde(default = "default_region")]
    pub region: String,

    /// Optional AWS shared-config profile
    #[serde(default)]
    pub profile: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            stage: default_stage(),
            region: default_region(),
            profile: None,
        }
    }
}

impl ProviderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.stage.trim().is_empty() {
            return Err("provider.stage cannot be empty".to_string());
        }
        if !stage_pattern().is_match(&self.stage) {
            return Err(format!(
                "Invalid provider.stage '{}'. Must contain only letters, digits and hyphens",
                self.stage
            ));
        }
        if self.region.trim().is_empty() {
            return Err("provider.region cannot be empty".to_string());
        }
        if let Some(profile) = &self.profile {
            if profile.trim().is_empty() {
                return Err("provider.profile cannot be empty when set".to_string());
            }
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }
        Ok(())
    }
}

fn service_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").expect("valid regex"))
}

fn stage_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("valid regex"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_stage() -> String {
    "dev".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
