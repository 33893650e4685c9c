// <auto-generated>
//     Generated by protoc-gen-omgpp 0.1.0 from protos/greeter.proto. Do not edit.
// </auto-generated>

pub mod demo {
    /// Implemented by the server side of the `Greeter` service.
    pub trait GreeterServer: Send + Sync {
        /// Handle a `SayHello` call from a client.
        fn say_hello(
            &self,
            client_guid: ::omgpp_gen::runtime::Uuid,
            ip: ::std::net::IpAddr,
            port: u16,
            message: crate::demo::HelloRequest,
        ) -> crate::demo::HelloReply;
        /// Handle a `Ping` call from a client.
        fn ping(
            &self,
            client_guid: ::omgpp_gen::runtime::Uuid,
            ip: ::std::net::IpAddr,
            port: u16,
        );
    }
    /// Routes inbound `Greeter` calls to a [`GreeterServer`] implementation.
    pub struct GreeterServerHandler<S: GreeterServer> {
        service: S,
        table: ::omgpp_gen::runtime::DispatchTable<S>,
    }
    impl<S: GreeterServer> GreeterServerHandler<S> {
        /// Dispatch id of `SayHello`.
        pub const SAY_HELLO_ID: i64 = 161971;
        /// Dispatch id of `Ping`.
        pub const PING_ID: i64 = 191437;
        pub fn new(service: S) -> Self {
            let table = ::omgpp_gen::runtime::DispatchTable::<S>::new()
                .with(Self::SAY_HELLO_ID, Self::handle_say_hello)
                .with(Self::PING_ID, Self::handle_ping);
            Self { service, table }
        }
        pub fn service(&self) -> &S {
            &self.service
        }
        #[allow(unused_variables)]
        fn handle_say_hello(
            service: &S,
            server: &dyn ::omgpp_gen::runtime::ServerTransport,
            caller: &::omgpp_gen::runtime::CallerContext,
            call: ::omgpp_gen::runtime::RpcCall,
        ) {
            let Some(message) = call.decode_payload::<crate::demo::HelloRequest>() else {
                return;
            };
            let result = service
                .say_hello(caller.client_guid, caller.ip, caller.port, message);
            ::omgpp_gen::runtime::reply(server, caller, &call, &result);
        }
        #[allow(unused_variables)]
        fn handle_ping(
            service: &S,
            server: &dyn ::omgpp_gen::runtime::ServerTransport,
            caller: &::omgpp_gen::runtime::CallerContext,
            call: ::omgpp_gen::runtime::RpcCall,
        ) {
            service.ping(caller.client_guid, caller.ip, caller.port);
        }
    }
    impl<S: GreeterServer> ::omgpp_gen::runtime::ServerRpcHandler
    for GreeterServerHandler<S> {
        fn handle_rpc(
            &self,
            server: &dyn ::omgpp_gen::runtime::ServerTransport,
            caller: &::omgpp_gen::runtime::CallerContext,
            call: ::omgpp_gen::runtime::RpcCall,
        ) {
            self.table.dispatch(&self.service, server, caller, call);
        }
    }
}
