//! Type definitions for schema files handed to the generator.

use prost_types::{DescriptorProto, FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto};

use crate::namespace::resolve_namespace;
use crate::util::display_name;

/// One `.proto` file: the generator's input unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFile {
    /// Path of the file as protoc reports it (e.g. `protos/greeter.proto`).
    pub name: String,
    /// Declared package, empty when the file has none.
    pub package: String,
    /// Explicit namespace override from the file options.
    pub namespace_override: Option<String>,
    pub messages: Vec<MessageDef>,
    pub services: Vec<ServiceDef>,
    /// Imported file names.
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDef {
    pub name: String,
    /// Field names in declaration order. Synthesis treats messages opaquely.
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDef {
    pub name: String,
    pub methods: Vec<MethodDef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    pub name: String,
    /// Fully-qualified input type (`.demo.HelloRequest`).
    pub input_type: String,
    /// Fully-qualified output type.
    pub output_type: String,
}

impl SchemaFile {
    /// Narrow a protoc file descriptor to the generator's model.
    ///
    /// Only top-level messages are kept; nested types never enter the symbol table.
    pub fn from_descriptor(descriptor: &FileDescriptorProto) -> Self {
        let namespace_override = descriptor
            .options
            .as_ref()
            .map(|opts| opts.csharp_namespace().to_string())
            .filter(|ns| !ns.is_empty());

        Self {
            name: descriptor.name().to_string(),
            package: descriptor.package().to_string(),
            namespace_override,
            messages: descriptor.message_type.iter().map(MessageDef::from).collect(),
            services: descriptor.service.iter().map(ServiceDef::from).collect(),
            dependencies: descriptor.dependency.clone(),
        }
    }

    /// Whether the file declares a package.
    pub fn has_package(&self) -> bool {
        !self.package.is_empty()
    }

    /// Whether service artifacts should be generated for this file.
    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }

    /// Human-readable description of the file, one attribute per line.
    pub fn summary(&self) -> String {
        let messages: Vec<String> = self.messages.iter().map(|m| display_name(&m.name)).collect();
        let services: Vec<&str> = self.services.iter().map(|s| s.name.as_str()).collect();

        format!(
            "{}\n  package: {}\n  namespace override: {}\n  dependencies ({}): {:?}\n  messages ({}): {:?}\n  services ({}): {:?}\n  namespace: {}",
            self.name,
            self.package,
            self.namespace_override.as_deref().unwrap_or("-"),
            self.dependencies.len(),
            self.dependencies,
            messages.len(),
            messages,
            services.len(),
            services,
            resolve_namespace(self).as_deref().unwrap_or("-"),
        )
    }
}

impl From<&DescriptorProto> for MessageDef {
    fn from(message: &DescriptorProto) -> Self {
        Self {
            name: message.name().to_string(),
            fields: message.field.iter().map(|f| f.name().to_string()).collect(),
        }
    }
}

impl From<&ServiceDescriptorProto> for ServiceDef {
    fn from(service: &ServiceDescriptorProto) -> Self {
        Self {
            name: service.name().to_string(),
            methods: service.method.iter().map(MethodDef::from).collect(),
        }
    }
}

impl From<&MethodDescriptorProto> for MethodDef {
    fn from(method: &MethodDescriptorProto) -> Self {
        Self {
            name: method.name().to_string(),
            input_type: method.input_type().to_string(),
            output_type: method.output_type().to_string(),
        }
    }
}
