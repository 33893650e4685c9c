//! Server trait and dispatch handler generation.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{id_literal, method_id_const, method_ident, RenderContext};
use crate::method::NormalizedMethod;
use crate::schema::ServiceDef;
use crate::util::to_snake_case;

/// Generate `<Service>Server` and `<Service>ServerHandler<S>` for one service.
///
/// `methods` must be the normalized methods of `service`, in declaration order.
pub fn generate_server(
    service: &ServiceDef,
    methods: &[NormalizedMethod],
    ctx: &RenderContext,
) -> syn::Result<TokenStream> {
    let server_trait = generate_server_trait(service, methods, ctx)?;
    let handler = generate_server_handler(service, methods, ctx)?;

    Ok(quote! {
        #server_trait
        #handler
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Server Trait
// ─────────────────────────────────────────────────────────────────────────────

fn generate_server_trait(
    service: &ServiceDef,
    methods: &[NormalizedMethod],
    ctx: &RenderContext,
) -> syn::Result<TokenStream> {
    let rt = &ctx.runtime_path;
    let trait_name = format_ident!("{}Server", service.name);
    let doc = format!(" Implemented by the server side of the `{}` service.", service.name);

    let signatures = methods
        .iter()
        .map(|m| {
            let name = method_ident(&m.name)?;
            let doc = format!(" Handle a `{}` call from a client.", m.name);
            let message = match m.input() {
                Some(input) => {
                    let ty = ctx.message_type(input)?;
                    quote! { , message: #ty }
                }
                None => TokenStream::new(),
            };
            let ret = match m.output() {
                Some(output) => {
                    let ty = ctx.message_type(output)?;
                    quote! { -> #ty }
                }
                None => TokenStream::new(),
            };

            Ok(quote! {
                #[doc = #doc]
                fn #name(
                    &self,
                    client_guid: #rt::Uuid,
                    ip: ::std::net::IpAddr,
                    port: u16
                    #message
                ) #ret;
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        #[doc = #doc]
        pub trait #trait_name: Send + Sync {
            #(#signatures)*
        }
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatch Handler
// ─────────────────────────────────────────────────────────────────────────────

fn generate_server_handler(
    service: &ServiceDef,
    methods: &[NormalizedMethod],
    ctx: &RenderContext,
) -> syn::Result<TokenStream> {
    let rt = &ctx.runtime_path;
    let trait_name = format_ident!("{}Server", service.name);
    let handler_name = format_ident!("{}ServerHandler", service.name);
    let doc = format!(
        " Routes inbound `{}` calls to a [`{}`] implementation.",
        service.name, trait_name
    );

    let mut id_consts = Vec::with_capacity(methods.len());
    let mut registrations = Vec::with_capacity(methods.len());
    let mut handlers = Vec::with_capacity(methods.len());

    for m in methods {
        let id_const = method_id_const(&m.name)?;
        let id = id_literal(m.id);
        let handle_fn = format_ident!("handle_{}", to_snake_case(&m.name));
        let id_doc = format!(" Dispatch id of `{}`.", m.name);

        id_consts.push(quote! {
            #[doc = #id_doc]
            pub const #id_const: i64 = #id;
        });
        registrations.push(quote! { .with(Self::#id_const, Self::#handle_fn) });
        handlers.push(generate_handle_fn(m, &handle_fn, ctx)?);
    }

    Ok(quote! {
        #[doc = #doc]
        pub struct #handler_name<S: #trait_name> {
            service: S,
            table: #rt::DispatchTable<S>,
        }

        impl<S: #trait_name> #handler_name<S> {
            #(#id_consts)*

            pub fn new(service: S) -> Self {
                let table = #rt::DispatchTable::<S>::new()
                    #(#registrations)*;
                Self { service, table }
            }

            pub fn service(&self) -> &S {
                &self.service
            }

            #(#handlers)*
        }

        impl<S: #trait_name> #rt::ServerRpcHandler for #handler_name<S> {
            fn handle_rpc(
                &self,
                server: &dyn #rt::ServerTransport,
                caller: &#rt::CallerContext,
                call: #rt::RpcCall,
            ) {
                self.table.dispatch(&self.service, server, caller, call);
            }
        }
    })
}

/// One dispatch entry: decode the request, invoke the service, reply.
///
/// A request whose type tag does not match the declared input is dropped.
/// Methods without an input accept any payload.
fn generate_handle_fn(
    m: &NormalizedMethod,
    handle_fn: &syn::Ident,
    ctx: &RenderContext,
) -> syn::Result<TokenStream> {
    let rt = &ctx.runtime_path;
    let name = method_ident(&m.name)?;

    let (decode, message) = match m.input() {
        Some(input) => {
            let ty = ctx.message_type(input)?;
            (
                quote! {
                    let Some(message) = call.decode_payload::<#ty>() else {
                        return;
                    };
                },
                quote! { , message },
            )
        }
        None => (TokenStream::new(), TokenStream::new()),
    };
    let invoke = quote! { service.#name(caller.client_guid, caller.ip, caller.port #message) };

    let body = if m.has_output {
        quote! {
            #decode
            let result = #invoke;
            #rt::reply(server, caller, &call, &result);
        }
    } else {
        quote! {
            #decode
            #invoke;
        }
    };

    Ok(quote! {
        #[allow(unused_variables)]
        fn #handle_fn(
            service: &S,
            server: &dyn #rt::ServerTransport,
            caller: &#rt::CallerContext,
            call: #rt::RpcCall,
        ) {
            #body
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::render;
    use crate::method::{ResolvedType, TypeRef, MESSAGE_ARG};

    fn ty(name: &str, message_id: i64) -> ResolvedType {
        ResolvedType {
            namespace: Some("Demo".into()),
            name: name.into(),
            message_id,
        }
    }

    fn greeter() -> (ServiceDef, Vec<NormalizedMethod>) {
        let service = ServiceDef {
            name: "Greeter".into(),
            methods: vec![],
        };
        let methods = vec![
            NormalizedMethod {
                id: 4242,
                name: "SayHello".into(),
                return_type: TypeRef::Message(ty("HelloReply", 2)),
                input_args: vec![(ty("HelloRequest", 1), MESSAGE_ARG.into())],
                has_output: true,
                has_input_message: true,
            },
            NormalizedMethod {
                id: 77,
                name: "Ping".into(),
                return_type: TypeRef::Unit,
                input_args: vec![],
                has_output: false,
                has_input_message: false,
            },
        ];
        (service, methods)
    }

    fn rendered() -> String {
        let (service, methods) = greeter();
        render(generate_server(&service, &methods, &RenderContext::default()).unwrap()).unwrap()
    }

    #[test]
    fn trait_has_caller_identity_parameters() {
        let code = rendered();
        assert!(code.contains("pub trait GreeterServer"));
        assert!(code.contains("fn say_hello("));
        assert!(code.contains("client_guid: ::omgpp_gen::runtime::Uuid"));
        assert!(code.contains("ip: ::std::net::IpAddr"));
        assert!(code.contains("port: u16"));
        assert!(code.contains("message: crate::demo::HelloRequest"));
        assert!(code.contains(") -> crate::demo::HelloReply;"));
        assert!(code.contains("fn ping("));
    }

    #[test]
    fn doc_comments_are_spaced() {
        let code = rendered();
        assert!(code.contains("/// Implemented by the server side of the `Greeter` service."));
        assert!(code.contains("/// Dispatch id of `SayHello`."));
        assert!(!code.contains("///I"));
        assert!(!code.contains("///D"));
    }

    #[test]
    fn handler_registers_methods_in_order() {
        let code = rendered();
        assert!(code.contains("pub struct GreeterServerHandler<S: GreeterServer>"));
        assert!(code.contains("pub const SAY_HELLO_ID: i64 = 4242;"));
        assert!(code.contains("pub const PING_ID: i64 = 77;"));

        let first = code.find(".with(Self::SAY_HELLO_ID, Self::handle_say_hello)").unwrap();
        let second = code.find(".with(Self::PING_ID, Self::handle_ping)").unwrap();
        assert!(first < second);
    }

    #[test]
    fn handler_decodes_input_and_replies_with_output() {
        let code = rendered();
        assert!(code.contains("decode_payload::<crate::demo::HelloRequest>()"));
        assert!(code.contains("::omgpp_gen::runtime::reply(server, caller, &call, &result);"));
        assert!(code.contains("::omgpp_gen::runtime::ServerRpcHandler"));
        assert!(code.contains("for GreeterServerHandler<S>"));
    }

    #[test]
    fn no_output_method_sends_nothing() {
        let code = rendered();
        let ping = code.find("fn handle_ping(").unwrap();
        let body = &code[ping..];
        let end = body.find("\n    }\n").unwrap();
        assert!(!body[..end].contains("reply("));
        assert!(!body[..end].contains("decode_payload"));
    }
}
