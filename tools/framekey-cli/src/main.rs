//! Framekey CLI - developer tool for the framekey input core
//!
//! # Commands
//!
//! - `framekey replay` - Step a scripted frame sequence and print button states
//! - `framekey bindings` - Print or save the default key map for a target version
//! - `framekey pad` - Show live gamepad input as logical buttons
//!
//! # Usage
//!
//! ```bash
//! # Check repeat timing for a held key
//! framekey replay tools/framekey-cli/scenarios/hold_down.toml
//!
//! # Write the version 2 default key map to the user config
//! framekey bindings --target 2 --save
//! ```

mod bindings;
#[cfg(feature = "gamepad")]
mod pad;
mod replay;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Framekey CLI - developer tool for the framekey input core
#[derive(Parser)]
#[command(name = "framekey")]
#[command(about = "Developer tool for the framekey input core")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a scripted frame sequence through the input core
    Replay(replay::ReplayArgs),

    /// Print or save the default key map
    Bindings(bindings::BindingsArgs),

    /// Show live gamepad input as logical buttons
    #[cfg(feature = "gamepad")]
    Pad(pad::PadArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay(args) => replay::execute(args),
        Commands::Bindings(args) => bindings::execute(args),
        #[cfg(feature = "gamepad")]
        Commands::Pad(args) => pad::execute(args),
    }
}
