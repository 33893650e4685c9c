//! Output assembly.
//!
//! Drives resolution, normalization and synthesis for every requested file and
//! collects the finished artifacts. Generation is all-or-nothing: every
//! service is normalized before any text is rendered, and any failure discards
//! the whole run.

use prost_types::compiler::{code_generator_response, CodeGeneratorResponse};
use proc_macro2::TokenStream;
use tracing::{debug, info};

use crate::codegen::{self, client, messages, server, RenderContext};
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::method::{normalize_service, NormalizedMethod};
use crate::namespace::group_by_namespace;
use crate::resolve::SymbolTable;
use crate::schema::{GenerationRequest, SchemaFile, ServiceDef};
use crate::util::output_stem;

/// The three artifact flavors emitted per schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Message identifier attachments. Always emitted.
    Messages,
    /// Server traits and dispatch handlers. Only for files with services.
    ServerService,
    /// Client traits and correlating handlers. Only for files with services.
    ClientService,
}

impl ArtifactKind {
    /// Output file name for a given stem and extension.
    pub fn file_name(self, stem: &str, extension: &str) -> String {
        match self {
            ArtifactKind::Messages => format!("{}.{}", stem, extension),
            ArtifactKind::ServerService => format!("{}.Service.Server.{}", stem, extension),
            ArtifactKind::ClientService => format!("{}.Service.Client.{}", stem, extension),
        }
    }
}

/// One named output text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub name: String,
    pub kind: ArtifactKind,
    /// Schema file the artifact was generated from.
    pub source: String,
    pub content: String,
}

/// A requested file with its services already normalized.
struct FilePlan<'a> {
    file: &'a SchemaFile,
    namespace: Option<String>,
    services: Vec<(&'a ServiceDef, Vec<NormalizedMethod>)>,
}

/// Generate all artifacts for `request`.
pub fn generate(request: &GenerationRequest, config: &GeneratorConfig) -> Result<Vec<GeneratedArtifact>> {
    let ctx = config.render_context()?;
    let table = SymbolTable::build(&request.files);
    debug!(
        "indexed {} messages from {} files",
        table.len(),
        request.files.len()
    );

    let requested = request
        .files_to_generate
        .iter()
        .map(|name| {
            request
                .file(name)
                .ok_or_else(|| GenerateError::MissingFile(name.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut plans = Vec::with_capacity(requested.len());
    for group in group_by_namespace(requested) {
        for file in group.files {
            let services = file
                .services
                .iter()
                .map(|service| {
                    normalize_service(service, file, &table, &config.empty_type)
                        .map(|methods| (service, methods))
                })
                .collect::<Result<Vec<_>>>()?;
            plans.push(FilePlan {
                file,
                namespace: group.namespace.clone(),
                services,
            });
        }
    }

    let mut artifacts = Vec::new();
    for plan in &plans {
        let stem = output_stem(&plan.file.name);

        artifacts.push(render_artifact(
            plan,
            ArtifactKind::Messages,
            &stem,
            config,
            messages::generate_messages(plan.file, &ctx),
        )?);

        if plan.file.has_services() {
            for kind in [ArtifactKind::ServerService, ArtifactKind::ClientService] {
                let tokens = service_tokens(plan, kind, &ctx);
                artifacts.push(render_artifact(plan, kind, &stem, config, tokens)?);
            }
        }
    }

    info!(
        "generated {} artifacts for {} files",
        artifacts.len(),
        plans.len()
    );
    Ok(artifacts)
}

/// All services of a file, side by side, inside the file's namespace.
fn service_tokens(plan: &FilePlan<'_>, kind: ArtifactKind, ctx: &RenderContext) -> syn::Result<TokenStream> {
    let bodies = plan
        .services
        .iter()
        .map(|(service, methods)| match kind {
            ArtifactKind::ClientService => client::generate_client(service, methods, ctx),
            _ => server::generate_server(service, methods, ctx),
        })
        .collect::<syn::Result<Vec<_>>>()?;

    codegen::with_namespace(plan.namespace.as_deref(), quote::quote! { #(#bodies)* })
}

fn render_artifact(
    plan: &FilePlan<'_>,
    kind: ArtifactKind,
    stem: &str,
    config: &GeneratorConfig,
    tokens: syn::Result<TokenStream>,
) -> Result<GeneratedArtifact> {
    let name = kind.file_name(stem, &config.extension);
    let render_error = |e: syn::Error| GenerateError::Render {
        file: name.clone(),
        message: e.to_string(),
    };

    let body = codegen::render(tokens.map_err(render_error)?).map_err(render_error)?;
    let content = if config.header {
        format!("{}\n{}", header(&plan.file.name), body)
    } else {
        body
    };

    debug!("rendered {} ({} bytes)", name, content.len());
    Ok(GeneratedArtifact {
        name,
        kind,
        source: plan.file.name.clone(),
        content,
    })
}

/// Banner marking a file as generated.
pub fn header(source: &str) -> String {
    format!(
        "// <auto-generated>\n//     Generated by protoc-gen-omgpp {} from {}. Do not edit.\n// </auto-generated>\n",
        env!("CARGO_PKG_VERSION"),
        source
    )
}

/// Convert a generation result into the protoc plugin response.
///
/// Failures are reported through the response's `error` field and carry no
/// files, which makes protoc print the message and fail.
pub fn into_response(result: Result<Vec<GeneratedArtifact>>) -> CodeGeneratorResponse {
    let supported_features = Some(code_generator_response::Feature::Proto3Optional as u64);

    match result {
        Ok(artifacts) => CodeGeneratorResponse {
            supported_features,
            file: artifacts
                .into_iter()
                .map(|artifact| code_generator_response::File {
                    name: Some(artifact.name),
                    content: Some(artifact.content),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        },
        Err(e) => CodeGeneratorResponse {
            error: Some(e.to_string()),
            supported_features,
            ..Default::default()
        },
    }
}
