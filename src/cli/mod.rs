//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod normalize;
mod paths;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Platform;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// navopts - Normalize navigation options for native renderers
#[derive(Parser)]
#[command(name = "navopts")]
#[command(about = "navopts - Normalize navigation options (.json, .json5) for native renderers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize an options file and print the result
    Normalize {
        /// Options file (.json or .json5)
        input: PathBuf,

        /// Command name handed to processors and the deprecation hook
        #[arg(long, default_value = "setRoot")]
        command: String,

        /// Treat the input as default options
        #[arg(long)]
        defaults: bool,

        /// Path to navopts.toml (otherwise discovered)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Target platform for native colors (ios, android)
        #[arg(long)]
        platform: Option<Platform>,

        /// Key whose contents are never normalized
        #[arg(long)]
        pass_through_key: Option<String>,

        /// JSON array of bundled assets; numeric image handles index it from 1
        #[arg(long)]
        assets: Option<PathBuf>,

        /// Accept component names that were never registered
        #[arg(long)]
        lazy_components: bool,

        /// Strict mode: fail when deprecated options are found
        #[arg(long)]
        strict: bool,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the props moved out of the options
        #[arg(long)]
        show_props: bool,
    },

    /// List every option path with the kind of field it names
    Paths {
        /// Options file (.json or .json5)
        input: PathBuf,

        /// Path to navopts.toml (otherwise discovered)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Read an options file. JSON5 is a superset of JSON, so one parser covers both.
pub(crate) fn read_options(path: &Path) -> Result<Map<String, Value>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;
    match json5::from_str::<Value>(&text) {
        Ok(Value::Object(options)) => Ok(options),
        Ok(_) => Err(format!("'{}' must contain an options object", path.display())),
        Err(e) => Err(format!("Cannot parse '{}': {}", path.display(), e)),
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            input,
            command,
            defaults,
            config,
            platform,
            pass_through_key,
            assets,
            lazy_components,
            strict,
            output,
            show_props,
        } => normalize::run_normalize(normalize::NormalizeArgs {
            input: &input,
            command: &command,
            defaults,
            config: config.as_deref(),
            platform,
            pass_through_key,
            assets: assets.as_deref(),
            lazy_components,
            strict,
            output: output.as_deref(),
            show_props,
        }),
        Commands::Paths { input, config } => paths::run_paths(&input, config.as_deref()),
    }
}
