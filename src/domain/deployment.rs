//! Deployment context
//!
//! Identifies the deployment the hook is running for. Built once from the
//! loaded configuration and never mutated afterwards.

use super::ids::StackName;
use serde::{Deserialize, Serialize};

/// Service name, stage and region of the running deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentContext {
    service_name: String,
    stage: String,
    region: String,
}

impl DeploymentContext {
    /// Creates a new deployment context
    pub fn new(
        service_name: impl Into<String>,
        stage: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            stage: stage.into(),
            region: region.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Name of the stack the deploy tool created for this deployment
    pub fn stack_name(&self) -> StackName {
        StackName::for_deployment(&self.service_name, &self.stage)
    }
}
