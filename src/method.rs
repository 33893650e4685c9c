//! Normalized method descriptors.
//!
//! Each service method is resolved against the `SymbolTable` into a
//! `NormalizedMethod` that codegen can render without looking anything up.

use crate::error::{GenerateError, Result};
use crate::ident::{message_id, method_id};
use crate::namespace::resolve_namespace;
use crate::resolve::SymbolTable;
use crate::schema::{MethodDef, SchemaFile, ServiceDef};
use crate::util::display_name;

/// Name of the single request argument in generated signatures.
pub const MESSAGE_ARG: &str = "message";

/// A message type resolved to its declaring file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Namespace of the declaring file.
    pub namespace: Option<String>,
    /// Display name (`HelloRequest`).
    pub name: String,
    /// Wire type tag.
    pub message_id: i64,
}

impl ResolvedType {
    /// Namespace-qualified display name (`Demo.HelloRequest`).
    pub fn qualified(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }
}

/// Return type of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Message(ResolvedType),
    /// The method produces no value.
    Unit,
}

impl TypeRef {
    pub fn message(&self) -> Option<&ResolvedType> {
        match self {
            TypeRef::Message(t) => Some(t),
            TypeRef::Unit => None,
        }
    }
}

/// Synthesis-ready view of one service method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMethod {
    /// Dispatch tag.
    pub id: i64,
    pub name: String,
    pub return_type: TypeRef,
    /// `(type, argument name)` pairs; at most one request payload.
    pub input_args: Vec<(ResolvedType, String)>,
    pub has_output: bool,
    pub has_input_message: bool,
}

impl NormalizedMethod {
    /// The request payload type, if the method takes one.
    pub fn input(&self) -> Option<&ResolvedType> {
        self.input_args.first().map(|(t, _)| t)
    }

    /// The response payload type, if the method returns one.
    pub fn output(&self) -> Option<&ResolvedType> {
        self.return_type.message()
    }
}

/// Normalize every method of `service`, in declaration order.
///
/// Fails on the first method whose non-sentinel input or output type does not
/// resolve in `table`.
pub fn normalize_service(
    service: &ServiceDef,
    file: &SchemaFile,
    table: &SymbolTable<'_>,
    empty_type: &str,
) -> Result<Vec<NormalizedMethod>> {
    service
        .methods
        .iter()
        .map(|method| normalize_method(service, method, file, table, empty_type))
        .collect()
}

fn normalize_method(
    service: &ServiceDef,
    method: &MethodDef,
    file: &SchemaFile,
    table: &SymbolTable<'_>,
    empty_type: &str,
) -> Result<NormalizedMethod> {
    let is_input_empty = method.input_type == empty_type;
    let is_output_empty = method.output_type == empty_type;

    let input = if is_input_empty {
        None
    } else {
        Some(resolve_type(service, method, &method.input_type, table)?)
    };
    let output = if is_output_empty {
        None
    } else {
        Some(resolve_type(service, method, &method.output_type, table)?)
    };

    let input_args = input
        .map(|t| vec![(t, MESSAGE_ARG.to_string())])
        .unwrap_or_default();

    Ok(NormalizedMethod {
        id: method_id(service, method, file),
        name: method.name.clone(),
        return_type: output.map(TypeRef::Message).unwrap_or(TypeRef::Unit),
        has_input_message: !input_args.is_empty(),
        input_args,
        has_output: !is_output_empty,
    })
}

fn resolve_type(
    service: &ServiceDef,
    method: &MethodDef,
    type_name: &str,
    table: &SymbolTable<'_>,
) -> Result<ResolvedType> {
    let (message, owner) = table
        .lookup(type_name)
        .ok_or_else(|| GenerateError::UnresolvedType {
            service: service.name.clone(),
            method: method.name.clone(),
            type_name: type_name.to_string(),
        })?;

    Ok(ResolvedType {
        namespace: resolve_namespace(owner),
        name: display_name(&message.name),
        message_id: message_id(message, owner),
    })
}
