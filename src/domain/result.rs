//! Result type alias
//!
//! ```
//! use export_swagger::domain::result::Result;
//! use export_swagger::domain::errors::SwaggerError;
//!
//! fn failing_function() -> Result<()> {
//!     Err(SwaggerError::Validation("Invalid input".to_string()))
//! }
//! ```

use super::errors::SwaggerError;

/// Result type alias using [`SwaggerError`]
pub type Result<T> = std::result::Result<T, SwaggerError>;
