//! Transient values passed between workflow stages
//!
//! Neither type outlives a single workflow run.

/// Output key carrying the deployed API's endpoint URL
pub const SERVICE_ENDPOINT_KEY: &str = "ServiceEndpoint";

/// A single stack output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutput {
    pub key: String,
    pub value: String,
}

impl StackOutput {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered outputs of a described stack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackOutputs(Vec<StackOutput>);

impl StackOutputs {
    pub fn new(outputs: Vec<StackOutput>) -> Self {
        Self(outputs)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StackOutput> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<StackOutput> for StackOutputs {
    fn from_iter<I: IntoIterator<Item = StackOutput>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of an API description export
///
/// The body is opaque: it is forwarded as the upload payload and never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportedDescription {
    pub body: Option<Vec<u8>>,
    pub content_type: Option<String>,
}

impl ExportedDescription {
    /// A response carrying a body
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: Some(body.into()),
            content_type: None,
        }
    }

    /// Takes the body, if the response had one
    pub fn into_body(self) -> Option<Vec<u8>> {
        self.body
    }
}
