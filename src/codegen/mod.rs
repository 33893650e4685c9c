//! Rust stub synthesis using quote!.
//!
//! Every generator returns a `TokenStream`; `render` turns it into formatted
//! source text. Generated code only uses absolute paths, so it can be wrapped
//! in namespace modules or `include!`d anywhere in the consuming crate.

pub mod client;
pub mod messages;
pub mod server;

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::Ident;

use crate::method::ResolvedType;
use crate::runtime::RESPONSE_TIMEOUT;
use crate::util::{namespace_modules, to_snake_case};

/// Paths and settings shared by all generators of one run.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Module under which the prost message types live (`crate`, `crate::pb`).
    pub types_path: syn::Path,
    /// Path of this crate's runtime module as seen by the consumer.
    pub runtime_path: syn::Path,
    /// Default response timeout baked into generated client handlers.
    pub response_timeout_ms: u64,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            types_path: syn::parse_quote!(crate),
            runtime_path: syn::parse_quote!(::omgpp_gen::runtime),
            response_timeout_ms: RESPONSE_TIMEOUT.as_millis() as u64,
        }
    }
}

impl RenderContext {
    /// Path of a resolved message type: `<types_path>::<namespace modules>::<Name>`.
    pub fn message_type(&self, ty: &ResolvedType) -> syn::Result<TokenStream> {
        let base = &self.types_path;
        let modules = ty
            .namespace
            .as_deref()
            .map(namespace_modules)
            .unwrap_or_default()
            .iter()
            .map(|m| ident(m))
            .collect::<syn::Result<Vec<_>>>()?;
        let name = ident(&ty.name)?;

        Ok(quote! { #base #(:: #modules)* :: #name })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Wrap `inner` in one `pub mod` per namespace segment.
///
/// `None` returns `inner` unchanged, so declarations land at file scope.
pub fn with_namespace(namespace: Option<&str>, inner: TokenStream) -> syn::Result<TokenStream> {
    let Some(namespace) = namespace else {
        return Ok(inner);
    };

    namespace_modules(namespace)
        .iter()
        .rev()
        .try_fold(inner, |body, module| {
            let module = ident(module)?;
            Ok(quote! {
                pub mod #module {
                    #body
                }
            })
        })
}

/// Parse and pretty-print a generated file.
pub fn render(tokens: TokenStream) -> syn::Result<String> {
    let file = syn::parse2::<syn::File>(tokens)?;
    Ok(prettyplease::unparse(&file))
}

/// Identifier for `name`, escaped as a raw identifier when it is a keyword.
pub(crate) fn ident(name: &str) -> syn::Result<Ident> {
    syn::parse_str::<Ident>(name).or_else(|_| syn::parse_str::<Ident>(&format!("r#{}", name)))
}

/// snake_case method identifier for a schema method name.
pub(crate) fn method_ident(name: &str) -> syn::Result<Ident> {
    ident(&to_snake_case(name))
}

/// SCREAMING_CASE constant holding a method's dispatch id (`SAY_HELLO_ID`).
pub(crate) fn method_id_const(name: &str) -> syn::Result<Ident> {
    ident(&format!("{}_ID", to_snake_case(name).to_ascii_uppercase()))
}

/// Unsuffixed `i64` literal, negated when needed.
pub(crate) fn id_literal(id: i64) -> TokenStream {
    let magnitude = Literal::u64_unsuffixed(id.unsigned_abs());
    if id < 0 {
        quote! { -#magnitude }
    } else {
        quote! { #magnitude }
    }
}
