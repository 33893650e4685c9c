// <auto-generated>
//     Generated by protoc-gen-omgpp 0.1.0 from protos/greeter.proto. Do not edit.
// </auto-generated>

pub mod demo {
    /// Client side of the `Greeter` service.
    #[::omgpp_gen::runtime::async_trait]
    pub trait GreeterClient: Send + Sync {
        /// Call `SayHello` on the server.
        async fn say_hello(
            &self,
            message: &crate::demo::HelloRequest,
            is_reliable: bool,
        ) -> Result<Option<crate::demo::HelloReply>, ::omgpp_gen::runtime::RpcError>;
        /// Call `Ping` on the server.
        fn ping(&self, is_reliable: bool) -> Result<(), ::omgpp_gen::runtime::RpcError>;
    }
    /// Sends `Greeter` calls over a client transport and correlates the responses.
    pub struct GreeterClientHandler<T: ::omgpp_gen::runtime::ClientTransport> {
        transport: ::std::sync::Arc<T>,
        registry: ::omgpp_gen::runtime::CallRegistry,
    }
    impl<T: ::omgpp_gen::runtime::ClientTransport> GreeterClientHandler<T> {
        /// Dispatch id of `SayHello`.
        pub const SAY_HELLO_ID: i64 = 161971;
        /// Dispatch id of `Ping`.
        pub const PING_ID: i64 = 191437;
        pub fn new(transport: ::std::sync::Arc<T>) -> Self {
            Self::with_registry(
                transport,
                ::omgpp_gen::runtime::CallRegistry::with_timeout(
                    ::std::time::Duration::from_millis(1000u64),
                ),
            )
        }
        pub fn with_registry(
            transport: ::std::sync::Arc<T>,
            registry: ::omgpp_gen::runtime::CallRegistry,
        ) -> Self {
            Self { transport, registry }
        }
        pub fn transport(&self) -> &::std::sync::Arc<T> {
            &self.transport
        }
        pub fn registry(&self) -> &::omgpp_gen::runtime::CallRegistry {
            &self.registry
        }
    }
    #[::omgpp_gen::runtime::async_trait]
    impl<T: ::omgpp_gen::runtime::ClientTransport> GreeterClient
    for GreeterClientHandler<T> {
        async fn say_hello(
            &self,
            message: &crate::demo::HelloRequest,
            is_reliable: bool,
        ) -> Result<Option<crate::demo::HelloReply>, ::omgpp_gen::runtime::RpcError> {
            let request_id = self.registry.next_id();
            let pending = self.registry.register(request_id)?;
            self.transport
                .call_rpc(
                    ::omgpp_gen::runtime::RpcCall::new(
                        Self::SAY_HELLO_ID,
                        request_id,
                        <crate::demo::HelloRequest as ::omgpp_gen::runtime::OmgppMessage>::MESSAGE_ID,
                        Some(::omgpp_gen::runtime::OmgppMessage::to_payload(message)),
                        is_reliable,
                    ),
                )?;
            Ok(pending.response::<crate::demo::HelloReply>().await)
        }
        fn ping(&self, is_reliable: bool) -> Result<(), ::omgpp_gen::runtime::RpcError> {
            self.transport
                .call_rpc(
                    ::omgpp_gen::runtime::RpcCall::new(
                        Self::PING_ID,
                        ::omgpp_gen::runtime::NO_CORRELATION,
                        ::omgpp_gen::runtime::EMPTY_PAYLOAD_TYPE_ID,
                        None,
                        is_reliable,
                    ),
                )?;
            Ok(())
        }
    }
    impl<T: ::omgpp_gen::runtime::ClientTransport> ::omgpp_gen::runtime::ClientRpcHandler
    for GreeterClientHandler<T> {
        fn on_rpc_call(&self, call: ::omgpp_gen::runtime::RpcCall) {
            self.registry.complete(call);
        }
    }
}
