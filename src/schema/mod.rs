//! Schema model consumed by the generator.
//!
//! Descriptors arrive pre-parsed from protoc; this module only narrows them to
//! the parts stub synthesis needs.

pub mod request;
pub mod types;

pub use request::GenerationRequest;
pub use types::{MessageDef, MethodDef, SchemaFile, ServiceDef};
