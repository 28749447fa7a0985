//! CLI Type Bridge - Sample Command App
//!
//! Binary entry point demonstrating the bridge end to end: configuration
//! is loaded with figment, logging initialized from it, the greeting
//! service placed in the host container, and the command registered
//! against the bridge and constructed through injection.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use ctb::commands::{HelloCommand, HelloService};
use ctb::infrastructure::bridge::{ContainerBridge, RegistrarExt, ResolverExt};
use ctb::infrastructure::config::ConfigLoader;
use ctb::infrastructure::host::MemoryHostContainer;
use ctb::infrastructure::logging::init_logging;

/// Command line interface for the sample command app
#[derive(Parser, Debug)]
#[command(name = "ctb")]
#[command(about = "CLI Type Bridge - Sample command app")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Name to greet
    #[arg(default_value = "world")]
    name: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;

    // The host container owns the application services.
    let host = MemoryHostContainer::new();
    host.add(HelloService::new(config.app_name.clone()));

    // The framework-facing bridge: commands register against it and are
    // constructed via injection, with the host as fallback.
    let bridge = Arc::new(ContainerBridge::new(Arc::new(host)));
    bridge.register_type::<HelloCommand, HelloCommand>()?;

    tracing::debug!(name = %cli.name, "resolving hello command");
    let command = bridge.resolve_required::<HelloCommand>()?;

    Ok(command.execute(&cli.name))
}
