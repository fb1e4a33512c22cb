//! Terminal states of a workflow run

use serde::Serialize;
use std::fmt;

/// Why a run stopped before uploading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The stack could not be described
    StackUnavailable,
    /// The export returned no response or no body
    DescriptionUnavailable,
    /// `custom.swaggerDestinations` is missing or incomplete
    DestinationIncomplete,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::StackUnavailable => "stack unavailable",
            SkipReason::DescriptionUnavailable => "description unavailable",
            SkipReason::DestinationIncomplete => "destination incomplete",
        };
        f.write_str(text)
    }
}

/// How a workflow run ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ExportOutcome {
    Uploaded {
        bucket: String,
        key: String,
        bytes: usize,
    },
    UploadFailed {
        bucket: String,
        key: String,
    },
    /// Destination was complete but dry-run suppressed the upload
    DryRun {
        bucket: String,
        key: String,
        bytes: usize,
    },
    Skipped {
        reason: SkipReason,
    },
}

impl ExportOutcome {
    pub fn skipped(reason: SkipReason) -> Self {
        Self::Skipped { reason }
    }

    /// Whether the description reached the object store
    pub fn is_uploaded(&self) -> bool {
        matches!(self, Self::Uploaded { .. })
    }
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uploaded { bucket, key, bytes } => {
                write!(f, "uploaded {bytes} bytes to s3://{bucket}/{key}")
            }
            Self::UploadFailed { bucket, key } => write!(f, "upload to s3://{bucket}/{key} failed"),
            Self::DryRun { bucket, key, bytes } => {
                write!(f, "dry run, would upload {bytes} bytes to s3://{bucket}/{key}")
            }
            Self::Skipped { reason } => write!(f, "skipped ({reason})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let outcome = ExportOutcome::Uploaded {
            bucket: "my-bucket".to_string(),
            key: "api.json".to_string(),
            bytes: 17,
        };
        assert_eq!(outcome.to_string(), "uploaded 17 bytes to s3://my-bucket/api.json");
        assert_eq!(
            ExportOutcome::skipped(SkipReason::DestinationIncomplete).to_string(),
            "skipped (destination incomplete)"
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(ExportOutcome::skipped(SkipReason::StackUnavailable)).unwrap();
        assert_eq!(json["outcome"], "skipped");
        assert_eq!(json["reason"], "stack_unavailable");
    }
}
