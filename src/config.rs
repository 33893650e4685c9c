//! Configuration management for the omgpp generator.
//!
//! Options are loaded from several sources, later ones overriding earlier ones:
//! 1. Default configuration (embedded in binary)
//! 2. User-specified configuration file (`--config` or `OMGPP_CONFIG`)
//! 3. Environment variables (prefixed with `OMGPP_`)
//! 4. The protoc plugin parameter (`--omgpp_opt=types_path=crate::pb,extension=rs`)
//! 5. Command-line arguments
//!
//! # Environment Variables
//!
//! - `OMGPP_EXTENSION` - Output file extension
//! - `OMGPP_TYPES_PATH` - Rust path of the module holding the prost message types
//! - `OMGPP_RUNTIME_PATH` - Rust path of the omgpp runtime module
//! - `OMGPP_EMPTY_TYPE` - Fully-qualified name of the "no payload" type
//! - `OMGPP_RESPONSE_TIMEOUT_MS` - Client response timeout baked into generated code
//! - `OMGPP_HEADER` - Whether to prefix artifacts with an auto-generated banner

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::codegen::RenderContext;
use crate::error::{GenerateError, Result};

/// Keys accepted in the plugin parameter.
pub const PARAMETER_KEYS: &[&str] = &[
    "extension",
    "types_path",
    "runtime_path",
    "empty_type",
    "response_timeout_ms",
    "header",
];

/// Command-line overrides for the generator configuration.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "OMGPP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Rust path of the module holding the prost message types
    #[arg(long)]
    pub types_path: Option<String>,

    /// Rust path of the omgpp runtime module
    #[arg(long)]
    pub runtime_path: Option<String>,

    /// Output file extension
    #[arg(long)]
    pub extension: Option<String>,
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Extension appended to every output file name
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Module path the prost message types live under
    #[serde(default = "default_types_path")]
    pub types_path: String,
    /// Path generated code uses to reach the runtime support module
    #[serde(default = "default_runtime_path")]
    pub runtime_path: String,
    /// Sentinel type meaning "no payload"
    #[serde(default = "default_empty_type")]
    pub empty_type: String,
    /// Response timeout for generated client handlers
    #[serde(default = "default_response_timeout_ms")]
    pub response_timeout_ms: u64,
    /// Prefix artifacts with an auto-generated banner
    #[serde(default = "default_header")]
    pub header: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            types_path: default_types_path(),
            runtime_path: default_runtime_path(),
            empty_type: default_empty_type(),
            response_timeout_ms: default_response_timeout_ms(),
            header: default_header(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from all sources
    pub fn load(args: &ConfigArgs, parameter: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder().add_source(config::File::from_str(
            include_str!("../config/default.toml"),
            config::FileFormat::Toml,
        ));

        // Load user config if specified
        if let Some(path) = &args.config {
            builder = builder.add_source(config::File::from(path.as_path()));
        }

        builder = builder.add_source(config::Environment::with_prefix("OMGPP"));

        // Plugin parameter beats files and environment
        if let Some(parameter) = parameter {
            for (key, value) in parse_parameter(parameter)? {
                builder = builder.set_override(key, value)?;
            }
        }

        let mut config: GeneratorConfig = builder.build()?.try_deserialize()?;

        // Override with command line args
        if let Some(types_path) = &args.types_path {
            config.types_path = types_path.clone();
        }
        if let Some(runtime_path) = &args.runtime_path {
            config.runtime_path = runtime_path.clone();
        }
        if let Some(extension) = &args.extension {
            config.extension = extension.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check values no source can be trusted to get right.
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(GenerateError::Config("extension must not be empty".into()));
        }
        if self.empty_type.is_empty() {
            return Err(GenerateError::Config("empty_type must not be empty".into()));
        }
        if self.response_timeout_ms == 0 {
            return Err(GenerateError::Config(
                "response_timeout_ms must be greater than zero".into(),
            ));
        }
        self.render_context().map(|_| ())
    }

    /// Parsed paths and settings for codegen.
    pub fn render_context(&self) -> Result<RenderContext> {
        Ok(RenderContext {
            types_path: parse_path("types_path", &self.types_path)?,
            runtime_path: parse_path("runtime_path", &self.runtime_path)?,
            response_timeout_ms: self.response_timeout_ms,
        })
    }
}

/// Split a plugin parameter into `(key, value)` pairs.
///
/// Pairs are comma-separated `key=value`; blank entries are skipped. Keys
/// outside `PARAMETER_KEYS` are rejected.
pub fn parse_parameter(parameter: &str) -> Result<Vec<(String, String)>> {
    parameter
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                GenerateError::Config(format!("plugin option `{}` is not of the form key=value", pair))
            })?;
            let key = key.trim();
            if !PARAMETER_KEYS.contains(&key) {
                return Err(GenerateError::Config(format!(
                    "unknown plugin option `{}` (expected one of {})",
                    key,
                    PARAMETER_KEYS.join(", ")
                )));
            }
            Ok((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

fn parse_path(key: &str, value: &str) -> Result<syn::Path> {
    syn::parse_str::<syn::Path>(value).map_err(|e| {
        GenerateError::Config(format!("{} `{}` is not a valid Rust path: {}", key, value, e))
    })
}

fn default_extension() -> String {
    "omgpp.rs".to_string()
}

fn default_types_path() -> String {
    "crate".to_string()
}

fn default_runtime_path() -> String {
    "::omgpp_gen::runtime".to_string()
}

fn default_empty_type() -> String {
    crate::ident::EMPTY_TYPE.to_string()
}

fn default_response_timeout_ms() -> u64 {
    crate::runtime::RESPONSE_TIMEOUT.as_millis() as u64
}

fn default_header() -> bool {
    true
}
