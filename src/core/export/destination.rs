//! Archive destination guard
//!
//! The destination is read from `custom.swaggerDestinations`. Both the bucket
//! and key fields must be present; the group on its own is not enough.

use serde::Serialize;

/// Settings group naming the archive destination
pub const DESTINATIONS_KEY: &str = "swaggerDestinations";

/// Bucket field within the destination group
pub const BUCKET_NAME_KEY: &str = "s3BucketName";

/// Object key field within the destination group
pub const KEY_NAME_KEY: &str = "s3KeyName";

/// Where the exported description is archived, if anywhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DestinationConfig {
    /// Both fields present
    Complete { bucket: String, key: String },
    /// Group missing, a field missing, or a field that is not a string
    Incomplete,
}

impl DestinationConfig {
    /// Evaluates the destination guard against the custom settings table
    ///
    /// ```
    /// use export_swagger::core::export::DestinationConfig;
    ///
    /// let custom: toml::Table = toml::from_str(r#"
    /// [swaggerDestinations]
    /// s3BucketName = "my-bucket"
    /// s3KeyName = "api.json"
    /// "#).unwrap();
    ///
    /// assert_eq!(
    ///     DestinationConfig::from_custom(&custom),
    ///     DestinationConfig::Complete { bucket: "my-bucket".into(), key: "api.json".into() },
    /// );
    /// ```
    pub fn from_custom(custom: &toml::Table) -> Self {
        let Some(group) = custom.get(DESTINATIONS_KEY) else {
            tracing::debug!("No {DESTINATIONS_KEY} settings");
            return Self::Incomplete;
        };
        let Some(group) = group.as_table() else {
            tracing::debug!("{DESTINATIONS_KEY} is not a table");
            return Self::Incomplete;
        };

        let bucket = group.get(BUCKET_NAME_KEY).and_then(toml::Value::as_str);
        let key = group.get(KEY_NAME_KEY).and_then(toml::Value::as_str);

        match (bucket, key) {
            (Some(bucket), Some(key)) => Self::Complete {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            _ => {
                tracing::debug!(
                    has_bucket = bucket.is_some(),
                    has_key = key.is_some(),
                    "{DESTINATIONS_KEY} is incomplete"
                );
                Self::Incomplete
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}
