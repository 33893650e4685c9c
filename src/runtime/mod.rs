//! Runtime support linked by generated stubs.
//!
//! Generated code refers to everything here through the configured runtime
//! path (`::omgpp_gen::runtime` by default).

pub mod correlation;
pub mod dispatch;
pub mod message;
pub mod transport;

pub use correlation::{CallOutcome, CallRegistry, PendingCall, RESPONSE_TIMEOUT};
pub use dispatch::{reply, DispatchTable, MethodHandler};
pub use message::OmgppMessage;
pub use transport::{
    CallerContext, ClientRpcHandler, ClientTransport, RpcCall, RpcError, ServerRpcHandler,
    ServerTransport, TransportError, NO_CORRELATION,
};

pub use crate::ident::EMPTY_PAYLOAD_TYPE_ID;
pub use async_trait::async_trait;
pub use uuid::Uuid;
