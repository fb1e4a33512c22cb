//! Identifier newtypes
//!
//! [`StackName`] is derived deterministically from the deployment; [`GatewayId`]
//! is recovered from the stack's endpoint output and may legitimately be empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CloudFormation stack name, always `{service}-{stage}`
///
/// # Examples
///
/// ```
/// use export_swagger::domain::ids::StackName;
///
/// let name = StackName::for_deployment("users-api", "prod");
/// assert_eq!(name.as_str(), "users-api-prod");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackName(String);

impl StackName {
    /// Builds the stack name the deploy tool uses for a service and stage
    pub fn for_deployment(service: &str, stage: &str) -> Self {
        Self(format!("{service}-{stage}"))
    }

    /// Returns the stack name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for StackName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// API Gateway REST API identifier
///
/// Unlike most identifiers this one may be empty: a stack without a usable
/// `ServiceEndpoint` output resolves to an empty id, and the empty id is still
/// handed to the export call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GatewayId(String);

impl GatewayId {
    /// Wraps a raw identifier without validation
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The empty identifier
    pub fn empty() -> Self {
        Self::default()
    }

    /// Extracts the id from an endpoint URL such as
    /// `https://abc123.execute-api.us-east-1.amazonaws.com/prod`.
    ///
    /// Takes everything before the first `.`, then the token after the first
    /// `//` within it. A value without `//` yields the empty id.
    ///
    /// ```
    /// use export_swagger::domain::ids::GatewayId;
    ///
    /// let id = GatewayId::from_service_endpoint(
    ///     "https://abc123.execute-api.us-east-1.amazonaws.com/prod",
    /// );
    /// assert_eq!(id.as_str(), "abc123");
    /// ```
    pub fn from_service_endpoint(endpoint: &str) -> Self {
        let host_label = endpoint.split('.').next().unwrap_or_default();
        let id = host_label.split("//").nth(1).unwrap_or_default();
        Self(id.to_string())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether resolution produced no identifier
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GatewayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for GatewayId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_stack_name_for_deployment() {
        let name = StackName::for_deployment("orders", "dev");
        assert_eq!(name.as_str(), "orders-dev");
        assert_eq!(name.to_string(), "orders-dev");
    }

    #[test_case("https://abc123.execute-api.us-east-1.amazonaws.com/prod", "abc123" ; "standard endpoint")]
    #[test_case("http://x9y8z7.execute-api.eu-west-1.amazonaws.com/dev", "x9y8z7" ; "plain http")]
    #[test_case("https://abc123", "abc123" ; "no dots")]
    #[test_case("abc123.execute-api.us-east-1.amazonaws.com", "" ; "no scheme")]
    #[test_case("", "" ; "empty value")]
    #[test_case("https://a//b.example.com", "a" ; "second token only")]
    fn test_gateway_id_from_service_endpoint(endpoint: &str, expected: &str) {
        assert_eq!(GatewayId::from_service_endpoint(endpoint).as_str(), expected);
    }

    #[test]
    fn test_gateway_id_empty() {
        let id = GatewayId::empty();
        assert!(id.is_empty());
        assert_eq!(id, GatewayId::new(""));
    }
}
