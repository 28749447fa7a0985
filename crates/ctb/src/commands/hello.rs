//! Hello command
//!
//! The sample command resolved through the bridge. `HelloService` is a
//! host-container service; `HelloCommand` is registered against the
//! bridge by type and gets the service injected during construction.

use std::sync::Arc;

use ctb_domain::error::Result;
use ctb_domain::ports::{Injectable, TypeResolver};
use ctb_infrastructure::bridge::ResolverExt;

/// Greeting service living in the host container
pub struct HelloService {
    app_name: String,
}

impl HelloService {
    /// Create a service reporting greetings for the given application
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Build the greeting for a name
    pub fn greet(&self, name: &str) -> String {
        format!("[{}] Hello, {}!", self.app_name, name)
    }
}

/// Command constructed through the bridge's injection path
pub struct HelloCommand {
    service: Arc<HelloService>,
}

impl Injectable for HelloCommand {
    fn inject(resolver: &dyn TypeResolver) -> Result<Self> {
        Ok(Self {
            service: resolver.resolve_required::<HelloService>()?,
        })
    }
}

impl HelloCommand {
    /// Execute the command, returning a process exit code
    pub fn execute(&self, name: &str) -> i32 {
        println!("{}", self.service.greet(name));
        0
    }
}
