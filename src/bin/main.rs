//! protoc-gen-omgpp binary.
//!
//! protoc plugin generating omgpp RPC stubs. Logs go to stderr, stdout is
//! reserved for the CodeGeneratorResponse.

use anyhow::Result;
use clap::Parser;
use omgpp_gen::cli::{run, Args};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.effective_log_level().parse().unwrap_or(Level::WARN).into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    run(&args, std::io::stdin().lock(), std::io::stdout().lock())
}
