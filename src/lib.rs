//! protoc plugin generating typed RPC stubs for the omgpp transport.
//!
//! For every requested `.proto` file the generator emits three Rust files:
//! message identifier attachments, server traits with method-id dispatch, and
//! async clients with request/response correlation. Generated code links
//! against [`runtime`].

pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod ident;
pub mod method;
pub mod namespace;
pub mod output;
pub mod resolve;
pub mod runtime;
pub mod schema;
pub mod util;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use ident::{derive_id, EMPTY_PAYLOAD_TYPE_ID, EMPTY_TYPE};
pub use output::{generate, into_response, ArtifactKind, GeneratedArtifact};
pub use schema::{GenerationRequest, MessageDef, MethodDef, SchemaFile, ServiceDef};
