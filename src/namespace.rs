//! Output namespaces for schema files.

use crate::schema::SchemaFile;
use crate::util::package_namespace;

/// Files sharing one output namespace, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceGroup<'a> {
    /// `None` means declarations are emitted without a namespace block.
    pub namespace: Option<String>,
    pub files: Vec<&'a SchemaFile>,
}

/// Resolve the namespace generated declarations of `file` live in.
///
/// Priority: the explicit override verbatim, then the package with each
/// dot-separated segment capitalized, then no namespace at all. Never fails.
pub fn resolve_namespace(file: &SchemaFile) -> Option<String> {
    if let Some(ns) = file.namespace_override.as_ref().filter(|ns| !ns.is_empty()) {
        return Some(ns.clone());
    }
    if file.has_package() {
        return Some(package_namespace(&file.package));
    }
    None
}

/// Partition files by resolved namespace.
///
/// Groups appear in order of first occurrence and keep input order inside.
/// Grouping only batches output; declarations are never merged across files.
pub fn group_by_namespace<'a, I>(files: I) -> Vec<NamespaceGroup<'a>>
where
    I: IntoIterator<Item = &'a SchemaFile>,
{
    let mut groups: Vec<NamespaceGroup<'a>> = Vec::new();

    for file in files {
        let namespace = resolve_namespace(file);
        match groups.iter_mut().find(|g| g.namespace == namespace) {
            Some(group) => group.files.push(file),
            None => groups.push(NamespaceGroup {
                namespace,
                files: vec![file],
            }),
        }
    }

    groups
}
