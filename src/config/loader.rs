//! Reads `export-swagger.toml`
//!
//! Order of operations: `${VAR}` substitution on the raw text, TOML parse,
//! `EXPORT_SWAGGER_<SECTION>_<KEY>` overrides, then validation.

use super::schema::SwaggerConfig;
use crate::domain::errors::SwaggerError;
use crate::domain::result::Result;
use regex::{Captures, Regex};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "EXPORT_SWAGGER_";

/// Load and validate the configuration file at `path`
///
/// # Errors
///
/// [`SwaggerError::Configuration`] when the file is missing or unreadable, is
/// not valid TOML, references unset variables, or fails validation.
///
/// ```no_run
/// use export_swagger::config::loader::load_config;
///
/// let config = load_config("export-swagger.toml").expect("config");
/// println!("{}", config.deployment_context().stack_name());
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SwaggerConfig> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|e| {
        SwaggerError::Configuration(match e.kind() {
            ErrorKind::NotFound => format!("Configuration file not found: {}", path.display()),
            _ => format!("Cannot read {}: {e}", path.display()),
        })
    })?;

    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), service = %config.service.name, "Configuration loaded");
    Ok(config)
}

/// [`load_config`] without the file access
///
/// # Errors
///
/// Same as [`load_config`].
pub fn parse_config(contents: &str) -> Result<SwaggerConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: SwaggerConfig = toml::from_str(&contents)
        .map_err(|e| SwaggerError::Configuration(format!("Invalid TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config
        .validate()
        .map_err(|e| SwaggerError::Configuration(format!("Invalid configuration: {e}")))?;
    Ok(config)
}

fn placeholder() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid regex"))
}

/// Replace `${NAME}` with the value of `NAME`
///
/// Comment lines pass through untouched. All unset names are collected into one error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut missing: Vec<String> = Vec::new();

    let output = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return format!("{line}\n");
            }
            let replaced = placeholder().replace_all(line, |caps: &Captures| {
                let name = &caps[1];
                std::env::var(name).unwrap_or_else(|_| {
                    if !missing.iter().any(|m| m == name) {
                        missing.push(name.to_string());
                    }
                    caps[0].to_string()
                })
            });
            format!("{replaced}\n")
        })
        .collect::<String>();

    if missing.is_empty() {
        Ok(output)
    } else {
        Err(SwaggerError::Configuration(format!(
            "Unset environment variables: {}",
            missing.join(", ")
        )))
    }
}

fn env_override(name: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{name}")).ok()
}

/// Applies environment variable overrides using the EXPORT_SWAGGER_* prefix
///
/// Variables follow the pattern EXPORT_SWAGGER_<SECTION>_<KEY>, for example
/// EXPORT_SWAGGER_PROVIDER_STAGE.
fn apply_env_overrides(config: &mut SwaggerConfig) {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = env_override("APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    if let Some(val) = env_override("SERVICE_NAME") {
        config.service.name = val;
    }

    if let Some(val) = env_override("PROVIDER_STAGE") {
        config.provider.stage = val;
    }
    if let Some(val) = env_override("PROVIDER_REGION") {
        config.provider.region = val;
    }
    if let Some(val) = env_override("PROVIDER_PROFILE") {
        config.provider.profile = Some(val);
    }

    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_variable_is_substituted() {
        std::env::set_var("EXPORT_SWAGGER_TEST_BUCKET", "docs-bucket");
        let input = "s3BucketName = \"${EXPORT_SWAGGER_TEST_BUCKET}\"";
        let out = substitute_env_vars(input).unwrap();
        assert_eq!(out, "s3BucketName = \"docs-bucket\"\n");
        std::env::remove_var("EXPORT_SWAGGER_TEST_BUCKET");
    }

    #[test]
    fn test_unset_variable_is_reported() {
        std::env::remove_var("EXPORT_SWAGGER_TEST_MISSING");
        let input = "s3KeyName = \"${EXPORT_SWAGGER_TEST_MISSING}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("EXPORT_SWAGGER_TEST_MISSING"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("EXPORT_SWAGGER_TEST_COMMENTED");
        let input = "# key = \"${EXPORT_SWAGGER_TEST_COMMENTED}\"";
        let out = substitute_env_vars(input).unwrap();
        assert!(out.contains("${EXPORT_SWAGGER_TEST_COMMENTED}"));
    }

    #[test]
    fn test_missing_file_is_a_configuration_error() {
        let err = load_config("does-not-exist.toml").unwrap_err();
        assert!(matches!(err, SwaggerError::Configuration(ref m) if m.contains("not found")));
    }

    #[test]
    fn test_load_config_from_file() {
        let toml_content = r#"
[service]
name = "users-api"

[provider]
stage = "prod"
region = "us-west-2"

[custom.swaggerDestinations]
s3BucketName = "my-bucket"
s3KeyName = "api.json"
"#;

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{toml_content}").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.service.name, "users-api");
        assert_eq!(config.provider.stage, "prod");
        assert_eq!(config.provider.region, "us-west-2");
    }

    #[test]
    fn test_parse_config_invalid_toml() {
        let result = parse_config("[service\nname = ");
        assert!(matches!(result, Err(SwaggerError::Configuration(_))));
    }
}
