//! Transport handle interfaces consumed by generated stubs.
//!
//! The transport itself lives outside this crate. Generated code only needs
//! "send a tagged payload" and a place to deliver inbound tagged payloads.

use std::net::IpAddr;

use bytes::Bytes;
use thiserror::Error;
use uuid::Uuid;

use super::message::OmgppMessage;

/// Request id used by calls that expect no response.
pub const NO_CORRELATION: u64 = 0;

/// One tagged RPC frame, in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcCall {
    /// Dispatch tag of the method.
    pub method_id: i64,
    /// Correlation id; `NO_CORRELATION` for send-and-forget calls.
    pub request_id: u64,
    /// Type tag of the payload, `0` when there is none.
    pub arg_type: i64,
    pub payload: Option<Bytes>,
    pub is_reliable: bool,
}

impl RpcCall {
    pub fn new(
        method_id: i64,
        request_id: u64,
        arg_type: i64,
        payload: Option<Bytes>,
        is_reliable: bool,
    ) -> Self {
        Self {
            method_id,
            request_id,
            arg_type,
            payload,
            is_reliable,
        }
    }

    /// Decode the payload as `T` when the type tag matches.
    ///
    /// A missing payload decodes as an empty message. Returns `None` on a tag
    /// mismatch or a malformed payload.
    pub fn decode_payload<T: OmgppMessage>(&self) -> Option<T> {
        if self.arg_type != T::MESSAGE_ID {
            return None;
        }
        let bytes = self.payload.as_deref().unwrap_or_default();
        T::parse(bytes).ok()
    }
}

/// Identity and address of the peer that issued an inbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerContext {
    pub client_guid: Uuid,
    pub ip: IpAddr,
    pub port: u16,
}

/// Errors raised by a transport handle.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The connection is gone.
    #[error("transport disconnected")]
    Disconnected,

    /// The peer addressed by a server-side send is unknown.
    #[error("unknown client {0}")]
    UnknownClient(Uuid),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Errors surfaced by generated client stubs.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A freshly allocated request id was already pending. Internal invariant violation.
    #[error("internal error: request id {0} already registered")]
    DuplicateRequestId(u64),
}

/// Client side of the transport: sends calls to the server.
pub trait ClientTransport: Send + Sync {
    fn call_rpc(&self, call: RpcCall) -> Result<(), TransportError>;
}

/// Server side of the transport: sends frames back to a given client.
pub trait ServerTransport: Send + Sync {
    fn call_rpc(&self, client_guid: Uuid, call: RpcCall) -> Result<(), TransportError>;
}

/// Receiver of inbound frames on the client side.
pub trait ClientRpcHandler: Send + Sync {
    fn on_rpc_call(&self, call: RpcCall);
}

/// Receiver of inbound frames on the server side.
pub trait ServerRpcHandler: Send + Sync {
    fn handle_rpc(&self, server: &dyn ServerTransport, caller: &CallerContext, call: RpcCall);
}
