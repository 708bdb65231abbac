//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --project-dir, -D) are inherited by all subcommands
//! - Lock flags override `deplock.toml` and `DEPLOCK_*` variables

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// deplock - lock and verify resolved dependencies
#[derive(Parser, Debug)]
#[command(name = "deplock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project directory holding deplock.toml and the descriptor
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Override an environment property (e.g. -D os.name=linux)
    #[arg(short = 'D', long = "define", global = true, value_name = "KEY=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve dependencies and write the lock file
    Lock {
        /// Lock file path (relative to the project directory)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Also lock parents, plugins and extensions
        #[arg(long)]
        lock_build: bool,

        /// Record ignored versions and integrities as `ignored`
        #[arg(long)]
        mark_ignored: bool,
    },

    /// Check resolved dependencies against the lock file
    Verify {
        /// Lock file path (relative to the project directory)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List profiles and whether they are active here
    Profiles,
}

fn parse_property(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, val)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), val.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", value)),
    }
}
