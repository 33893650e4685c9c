use std::fs;
use std::io::{Read, Write};

use anyhow::{Context, Result};
use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use tracing::{error, info};

use super::Args;
use crate::config::GeneratorConfig;
use crate::output::{generate, into_response};
use crate::schema::GenerationRequest;

/// Read a request, generate, write the response.
///
/// Only I/O and decode failures are returned as errors. Generation failures
/// travel back to protoc inside the response.
pub fn run(args: &Args, mut input: impl Read, mut output: impl Write) -> Result<()> {
    let bytes = match &args.request {
        Some(path) => fs::read(path)
            .with_context(|| format!("Failed to read request from {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            input
                .read_to_end(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    if let Some(path) = &args.save_request {
        fs::write(path, &bytes)
            .with_context(|| format!("Failed to save request to {}", path.display()))?;
        info!("Saved {} request bytes to {}", bytes.len(), path.display());
    }

    let request = CodeGeneratorRequest::decode(bytes.as_slice())
        .context("Failed to decode CodeGeneratorRequest")?;
    let response = handle_request(args, &request);

    output
        .write_all(&response.encode_to_vec())
        .context("Failed to write CodeGeneratorResponse")?;
    output.flush().context("Failed to flush output")?;
    Ok(())
}

/// Turn a decoded request into a response.
pub fn handle_request(args: &Args, request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let request = GenerationRequest::from(request);

    if args.describe {
        for file in &request.files {
            info!("{}", file.summary());
        }
    }

    let result = GeneratorConfig::load(&args.config, request.parameter.as_deref())
        .and_then(|config| generate(&request, &config));
    if let Err(e) = &result {
        error!("Generation failed: {}", e);
    }

    into_response(result)
}
