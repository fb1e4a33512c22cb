//! Core business logic.
//!
//! - [`export`] - The three-stage export workflow and its outcomes
//! - [`hooks`] - Lifecycle hook registry and the plugin binding the workflow to it
//!
//! # Workflow
//!
//! 1. **Resolve**: describe the `{service}-{stage}` stack and read `ServiceEndpoint`
//! 2. **Export**: fetch the swagger JSON description of the gateway stage
//! 3. **Archive**: store the body at `custom.swaggerDestinations` when it is complete
//!
//! Each step runs only if the previous one produced a result.

pub mod export;
pub mod hooks;
