//! Common test utilities: protoc descriptor builders.

#![allow(dead_code)]

use prost_types::compiler::CodeGeneratorRequest;
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileOptions, MethodDescriptorProto,
    ServiceDescriptorProto,
};

pub const EMPTY: &str = ".google.protobuf.Empty";

pub fn message(name: &str, fields: &[&str]) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields
            .iter()
            .enumerate()
            .map(|(i, f)| FieldDescriptorProto {
                name: Some(f.to_string()),
                number: Some(i as i32 + 1),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub fn method(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(input.to_string()),
        output_type: Some(output.to_string()),
        ..Default::default()
    }
}

pub fn service(name: &str, methods: Vec<MethodDescriptorProto>) -> ServiceDescriptorProto {
    ServiceDescriptorProto {
        name: Some(name.to_string()),
        method: methods,
        ..Default::default()
    }
}

pub fn file(
    name: &str,
    package: Option<&str>,
    messages: Vec<DescriptorProto>,
    services: Vec<ServiceDescriptorProto>,
) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.to_string()),
        package: package.map(str::to_string),
        message_type: messages,
        service: services,
        ..Default::default()
    }
}

pub fn with_namespace(mut file: FileDescriptorProto, namespace: &str) -> FileDescriptorProto {
    file.options = Some(FileOptions {
        csharp_namespace: Some(namespace.to_string()),
        ..Default::default()
    });
    file
}

pub fn with_dependency(mut file: FileDescriptorProto, dependency: &str) -> FileDescriptorProto {
    file.dependency.push(dependency.to_string());
    file
}

/// google/protobuf/empty.proto as protoc hands it over.
pub fn empty_proto() -> FileDescriptorProto {
    file(
        "google/protobuf/empty.proto",
        Some("google.protobuf"),
        vec![message("Empty", &[])],
        vec![],
    )
}

/// `demo` package with a Greeter service: one request/response method and one
/// fire-and-forget method.
pub fn greeter_proto() -> FileDescriptorProto {
    with_dependency(
        file(
            "protos/greeter.proto",
            Some("demo"),
            vec![
                message("HelloRequest", &["name"]),
                message("hello_reply", &["text"]),
            ],
            vec![service(
                "Greeter",
                vec![
                    method("SayHello", ".demo.HelloRequest", ".demo.hello_reply"),
                    method("Ping", EMPTY, EMPTY),
                ],
            )],
        ),
        "google/protobuf/empty.proto",
    )
}

pub fn request(
    files: Vec<FileDescriptorProto>,
    to_generate: &[&str],
    parameter: Option<&str>,
) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: to_generate.iter().map(|s| s.to_string()).collect(),
        parameter: parameter.map(str::to_string),
        proto_file: files,
        ..Default::default()
    }
}

pub fn greeter_request() -> CodeGeneratorRequest {
    request(
        vec![empty_proto(), greeter_proto()],
        &["protos/greeter.proto"],
        None,
    )
}
