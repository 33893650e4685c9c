//! Cross-file symbol resolution.
//!
//! `SymbolTable` is built once from every file in the request (dependencies
//! included) and maps fully-qualified message names to their definition and
//! declaring file. Methods may reference messages from any of those files.

use std::collections::HashMap;

use tracing::trace;

use crate::schema::{MessageDef, SchemaFile};

/// Fully-qualified name of a message: `.<package>.<name>`, or `.<name>` without a package.
pub fn qualified_name(message: &MessageDef, file: &SchemaFile) -> String {
    if file.has_package() {
        format!(".{}.{}", file.package, message.name)
    } else {
        format!(".{}", message.name)
    }
}

/// Indexed view of all messages visible to one generation run.
///
/// Read-only after `build`.
#[derive(Debug, Default)]
pub struct SymbolTable<'a> {
    messages: HashMap<String, (&'a MessageDef, &'a SchemaFile)>,
}

impl<'a> SymbolTable<'a> {
    /// Index every top-level message of every file.
    ///
    /// When two files declare the same qualified name the later file wins.
    pub fn build(files: &'a [SchemaFile]) -> Self {
        let mut messages = HashMap::new();

        for file in files {
            for message in &file.messages {
                let name = qualified_name(message, file);
                if let Some((_, previous)) = messages.insert(name.clone(), (message, file)) {
                    trace!(
                        "{} declared by {} replaces the declaration in {}",
                        name,
                        file.name,
                        previous.name
                    );
                }
            }
        }

        Self { messages }
    }

    /// O(1) lookup by fully-qualified name (leading dot included).
    pub fn lookup(&self, qualified_name: &str) -> Option<(&'a MessageDef, &'a SchemaFile)> {
        self.messages.get(qualified_name).copied()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, package: &str, messages: &[&str]) -> SchemaFile {
        SchemaFile {
            name: name.into(),
            package: package.into(),
            namespace_override: None,
            messages: messages
                .iter()
                .map(|m| MessageDef {
                    name: (*m).into(),
                    fields: vec![],
                })
                .collect(),
            services: vec![],
            dependencies: vec![],
        }
    }

    #[test]
    fn qualified_names_with_and_without_package() {
        let with = file("a.proto", "demo.api", &["Ping"]);
        let without = file("b.proto", "", &["Pong"]);
        assert_eq!(qualified_name(&with.messages[0], &with), ".demo.api.Ping");
        assert_eq!(qualified_name(&without.messages[0], &without), ".Pong");
    }

    #[test]
    fn resolves_across_files() {
        let files = vec![
            file("common.proto", "", &["Empty2", "Shared"]),
            file("game.proto", "game", &["Move"]),
        ];
        let table = SymbolTable::build(&files);

        assert_eq!(table.len(), 3);
        let (message, owner) = table.lookup(".Shared").expect("Shared resolves");
        assert_eq!(message.name, "Shared");
        assert_eq!(owner.name, "common.proto");
        let (_, owner) = table.lookup(".game.Move").expect("Move resolves");
        assert_eq!(owner.name, "game.proto");
        assert!(table.lookup(".Move").is_none());
        assert!(table.lookup("game.Move").is_none());
    }

    #[test]
    fn last_declaration_wins() {
        let files = vec![
            file("first.proto", "dup", &["Thing"]),
            file("second.proto", "dup", &["Thing"]),
        ];
        let table = SymbolTable::build(&files);
        assert_eq!(table.len(), 1);
        let (_, owner) = table.lookup(".dup.Thing").expect("Thing resolves");
        assert_eq!(owner.name, "second.proto");
    }

    #[test]
    fn empty_input_builds_empty_table() {
        let table = SymbolTable::build(&[]);
        assert!(table.is_empty());
        assert!(table.lookup(".anything").is_none());
    }
}
