//! Stable wire identifiers for messages and methods.
//!
//! Identifiers are a wire contract: client and server binaries generated in
//! separate runs must agree on them, so derivation depends on nothing but the
//! qualified name string.

use crate::schema::{MessageDef, MethodDef, SchemaFile, ServiceDef};
use crate::util::display_name;

/// Fully-qualified name of the sentinel "no payload" type.
pub const EMPTY_TYPE: &str = ".google.protobuf.Empty";

/// Type tag sent when a call carries no payload.
pub const EMPTY_PAYLOAD_TYPE_ID: i64 = 0;

/// Package placeholder used for message ids of files without a package.
const EMPTY_PACKAGE: &str = "EMPTY";

/// Position-weighted character sum: `Σ code_point(cᵢ) · i`.
///
/// The first character contributes nothing. Arithmetic wraps, so the function
/// is total for arbitrarily long names.
pub fn derive_id(qualified_name: &str) -> i64 {
    qualified_name
        .chars()
        .enumerate()
        .fold(0i64, |id, (position, c)| {
            id.wrapping_add((c as i64).wrapping_mul(position as i64))
        })
}

/// Identifier of a message: `derive_id("<package or EMPTY>.<DisplayName>")`.
pub fn message_id(message: &MessageDef, file: &SchemaFile) -> i64 {
    let package = if file.has_package() {
        file.package.as_str()
    } else {
        EMPTY_PACKAGE
    };
    derive_id(&format!("{}.{}", package, display_name(&message.name)))
}

/// Identifier of a method.
///
/// Package, service, method, input type and output type all feed the name, so
/// changing any of them changes the dispatch tag.
pub fn method_id(service: &ServiceDef, method: &MethodDef, file: &SchemaFile) -> i64 {
    let full_name = [
        file.package.as_str(),
        service.name.as_str(),
        method.name.as_str(),
        method.input_type.as_str(),
        method.output_type.as_str(),
    ]
    .join(".");
    derive_id(&full_name)
}
