//! Error extension utilities
//!
//! Context extension methods for converting external errors into the
//! domain error type while attaching a human-readable description.
//!
//! # Example
//!
//! ```ignore
//! use ctb_infrastructure::error_ext::ErrorContext;
//!
//! let config: AppConfig = figment
//!     .extract()
//!     .config_context("Failed to extract configuration")?;
//! ```

use std::fmt;

use ctb_domain::error::{Error, Result};

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add configuration context, converting the error to the domain type
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::configuration_with_source(context.to_string(), e))
    }
}
