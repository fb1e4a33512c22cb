//! Lifecycle hooks
//!
//! ```rust,no_run
//! use export_swagger::core::hooks::{ExportSwaggerPlugin, HookRegistry, AFTER_DEPLOY};
//! # use export_swagger::core::export::ExportWorkflow;
//!
//! # async fn example(workflow: ExportWorkflow) {
//! let plugin = ExportSwaggerPlugin::new(workflow);
//! let mut registry = HookRegistry::new();
//! plugin.register(&mut registry);
//! registry.trigger(AFTER_DEPLOY).await;
//! # }
//! ```

pub mod plugin;
pub mod registry;

pub use plugin::ExportSwaggerPlugin;
pub use registry::{Hook, HookFuture, HookRegistry, AFTER_DEPLOY};
