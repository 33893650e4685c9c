//! Message identifier attachments.

use proc_macro2::TokenStream;
use quote::quote;

use super::{id_literal, with_namespace, RenderContext};
use crate::ident::message_id;
use crate::method::ResolvedType;
use crate::namespace::resolve_namespace;
use crate::schema::SchemaFile;
use crate::util::display_name;

/// Generate one `OmgppMessage` impl per top-level message of `file`.
///
/// A file without messages yields an empty (possibly namespace-wrapped) body.
pub fn generate_messages(file: &SchemaFile, ctx: &RenderContext) -> syn::Result<TokenStream> {
    let rt = &ctx.runtime_path;
    let namespace = resolve_namespace(file);

    let impls = file
        .messages
        .iter()
        .map(|message| {
            let ty = ResolvedType {
                namespace: namespace.clone(),
                name: display_name(&message.name),
                message_id: message_id(message, file),
            };
            let path = ctx.message_type(&ty)?;
            let id = id_literal(ty.message_id);
            let doc = format!(" Wire type tag of `{}`.", ty.qualified());

            Ok(quote! {
                #[doc = #doc]
                impl #rt::OmgppMessage for #path {
                    const MESSAGE_ID: i64 = #id;
                }
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    with_namespace(namespace.as_deref(), quote! { #(#impls)* })
}
