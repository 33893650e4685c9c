//! The generation request handed over by the protoc driver.

use prost_types::compiler::CodeGeneratorRequest;

use super::types::SchemaFile;

/// All schema files visible to one run plus the subset requested for output.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// Every file protoc parsed, dependencies included, in topological order.
    pub files: Vec<SchemaFile>,
    /// Names of the files output should be generated for.
    pub files_to_generate: Vec<String>,
    /// Raw plugin parameter (`--omgpp_opt=...`).
    pub parameter: Option<String>,
}

impl GenerationRequest {
    pub fn new(files: Vec<SchemaFile>, files_to_generate: Vec<String>) -> Self {
        Self {
            files,
            files_to_generate,
            parameter: None,
        }
    }

    /// Look up a file by the name protoc reported for it.
    pub fn file(&self, name: &str) -> Option<&SchemaFile> {
        self.files.iter().find(|f| f.name == name)
    }
}

impl From<&CodeGeneratorRequest> for GenerationRequest {
    fn from(request: &CodeGeneratorRequest) -> Self {
        Self {
            files: request.proto_file.iter().map(SchemaFile::from_descriptor).collect(),
            files_to_generate: request.file_to_generate.clone(),
            parameter: request.parameter.clone().filter(|p| !p.is_empty()),
        }
    }
}
