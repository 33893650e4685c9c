//! Command-line interface of the protoc plugin.
//!
//! protoc runs the plugin without arguments, piping a `CodeGeneratorRequest`
//! into stdin. The flags exist for running it by hand:
//! - Capturing a request (`--save-request`) and replaying it (`--request`)
//! - Inspecting the schema files in a request (`--describe`)
//! - Overriding configuration

pub mod handlers;

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigArgs;

pub use handlers::{handle_request, run};

/// Command-line arguments
#[derive(Debug, Default, Parser)]
#[command(name = "protoc-gen-omgpp", author, version, about, long_about = None)]
pub struct Args {
    /// Read the CodeGeneratorRequest from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Save the raw CodeGeneratorRequest bytes before decoding them
    #[arg(long, value_name = "FILE")]
    pub save_request: Option<PathBuf>,

    /// Log a summary of every schema file in the request
    #[arg(long)]
    pub describe: bool,

    /// Log level; RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl Args {
    /// Level used when neither `--log-level` nor RUST_LOG is given.
    pub fn effective_log_level(&self) -> &str {
        match &self.log_level {
            Some(level) => level,
            None if self.describe => "info",
            None => "warn",
        }
    }
}
