//! Client trait and correlating client handler generation.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{id_literal, method_id_const, method_ident, RenderContext};
use crate::method::NormalizedMethod;
use crate::schema::ServiceDef;

/// Generate `<Service>Client` and `<Service>ClientHandler<T>` for one service.
pub fn generate_client(
    service: &ServiceDef,
    methods: &[NormalizedMethod],
    ctx: &RenderContext,
) -> syn::Result<TokenStream> {
    let rt = &ctx.runtime_path;
    let trait_name = format_ident!("{}Client", service.name);
    let handler_name = format_ident!("{}ClientHandler", service.name);
    let trait_doc = format!(" Client side of the `{}` service.", service.name);
    let handler_doc = format!(
        " Sends `{}` calls over a client transport and correlates the responses.",
        service.name
    );
    let timeout_ms = ctx.response_timeout_ms;

    let mut signatures = Vec::with_capacity(methods.len());
    let mut bodies = Vec::with_capacity(methods.len());
    let mut id_consts = Vec::with_capacity(methods.len());

    for m in methods {
        let signature = client_signature(m, ctx)?;
        let body = client_body(m, ctx)?;
        let id_const = method_id_const(&m.name)?;
        let id = id_literal(m.id);
        let doc = format!(" Call `{}` on the server.", m.name);
        let id_doc = format!(" Dispatch id of `{}`.", m.name);

        signatures.push(quote! {
            #[doc = #doc]
            #signature;
        });
        bodies.push(quote! {
            #signature {
                #body
            }
        });
        id_consts.push(quote! {
            #[doc = #id_doc]
            pub const #id_const: i64 = #id;
        });
    }

    Ok(quote! {
        #[doc = #trait_doc]
        #[#rt::async_trait]
        pub trait #trait_name: Send + Sync {
            #(#signatures)*
        }

        #[doc = #handler_doc]
        pub struct #handler_name<T: #rt::ClientTransport> {
            transport: ::std::sync::Arc<T>,
            registry: #rt::CallRegistry,
        }

        impl<T: #rt::ClientTransport> #handler_name<T> {
            #(#id_consts)*

            pub fn new(transport: ::std::sync::Arc<T>) -> Self {
                Self::with_registry(
                    transport,
                    #rt::CallRegistry::with_timeout(::std::time::Duration::from_millis(#timeout_ms)),
                )
            }

            pub fn with_registry(transport: ::std::sync::Arc<T>, registry: #rt::CallRegistry) -> Self {
                Self { transport, registry }
            }

            pub fn transport(&self) -> &::std::sync::Arc<T> {
                &self.transport
            }

            pub fn registry(&self) -> &#rt::CallRegistry {
                &self.registry
            }
        }

        #[#rt::async_trait]
        impl<T: #rt::ClientTransport> #trait_name for #handler_name<T> {
            #(#bodies)*
        }

        impl<T: #rt::ClientTransport> #rt::ClientRpcHandler for #handler_name<T> {
            fn on_rpc_call(&self, call: #rt::RpcCall) {
                self.registry.complete(call);
            }
        }
    })
}

/// Method signature shared by the trait declaration and the handler impl.
fn client_signature(m: &NormalizedMethod, ctx: &RenderContext) -> syn::Result<TokenStream> {
    let rt = &ctx.runtime_path;
    let name = method_ident(&m.name)?;
    let message = match m.input() {
        Some(input) => {
            let ty = ctx.message_type(input)?;
            quote! { message: &#ty, }
        }
        None => TokenStream::new(),
    };

    Ok(match m.output() {
        Some(output) => {
            let out = ctx.message_type(output)?;
            quote! {
                async fn #name(&self, #message is_reliable: bool)
                    -> Result<Option<#out>, #rt::RpcError>
            }
        }
        None => quote! {
            fn #name(&self, #message is_reliable: bool) -> Result<(), #rt::RpcError>
        },
    })
}

/// Call body: tag the request, then either await the correlated response or
/// return right after sending.
fn client_body(m: &NormalizedMethod, ctx: &RenderContext) -> syn::Result<TokenStream> {
    let rt = &ctx.runtime_path;
    let id_const = method_id_const(&m.name)?;

    let (arg_type, payload) = match m.input() {
        Some(input) => {
            let ty = ctx.message_type(input)?;
            (
                quote! { <#ty as #rt::OmgppMessage>::MESSAGE_ID },
                quote! { Some(#rt::OmgppMessage::to_payload(message)) },
            )
        }
        None => (
            quote! { #rt::EMPTY_PAYLOAD_TYPE_ID },
            quote! { None },
        ),
    };

    Ok(match m.output() {
        Some(output) => {
            let out = ctx.message_type(output)?;
            quote! {
                let request_id = self.registry.next_id();
                let pending = self.registry.register(request_id)?;
                self.transport.call_rpc(#rt::RpcCall::new(
                    Self::#id_const,
                    request_id,
                    #arg_type,
                    #payload,
                    is_reliable,
                ))?;
                Ok(pending.response::<#out>().await)
            }
        }
        None => quote! {
            self.transport.call_rpc(#rt::RpcCall::new(
                Self::#id_const,
                #rt::NO_CORRELATION,
                #arg_type,
                #payload,
                is_reliable,
            ))?;
            Ok(())
        },
    })
}
