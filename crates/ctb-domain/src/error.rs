//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the CLI Type Bridge
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Constructor-injection could not produce a service instance
    #[error("Construction of '{service}' failed: {message}")]
    Construction {
        /// The service type being constructed
        service: String,
        /// Description of the construction failure
        message: String,
    },

    /// A concretely-typed sequence could not be synthesized or populated
    #[error("Sequence synthesis for '{element}' failed: {message}")]
    Synthesis {
        /// The element type of the requested sequence
        element: String,
        /// Description of the synthesis failure
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a construction error for the given service type
    pub fn construction<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::Construction {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Create a synthesis error for the given element type
    pub fn synthesis<S: Into<String>, M: Into<String>>(element: S, message: M) -> Self {
        Self::Synthesis {
            element: element.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error (simple)
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
