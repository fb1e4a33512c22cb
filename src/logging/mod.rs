//! Logging and observability
//!
//! Structured logging via `tracing`, with a console layer and an optional
//! rolling JSON file layer.
//!
//! ```no_run
//! use export_swagger::logging::init_logging;
//! use export_swagger::config::LoggingConfig;
//!
//! let _guard = init_logging("info", &LoggingConfig::default()).expect("Failed to initialize logging");
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
