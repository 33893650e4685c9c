//! Method-id dispatch for generated server handlers.

use std::collections::HashMap;

use tracing::{trace, warn};

use super::message::OmgppMessage;
use super::transport::{CallerContext, RpcCall, ServerTransport};

/// Handler invoked for one method id. `S` is the user's service implementation.
pub type MethodHandler<S> = fn(&S, &dyn ServerTransport, &CallerContext, RpcCall);

/// Method id → handler lookup, populated once at construction.
pub struct DispatchTable<S> {
    handlers: HashMap<i64, MethodHandler<S>>,
}

impl<S> Default for DispatchTable<S> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<S> std::fmt::Debug for DispatchTable<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&i64> = self.handlers.keys().collect();
        ids.sort();
        f.debug_struct("DispatchTable").field("methods", &ids).finish()
    }
}

impl<S> DispatchTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `method_id`, replacing any previous entry.
    pub fn with(mut self, method_id: i64, handler: MethodHandler<S>) -> Self {
        self.handlers.insert(method_id, handler);
        self
    }

    pub fn contains(&self, method_id: i64) -> bool {
        self.handlers.contains_key(&method_id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route `call` to its handler. Unknown method ids are ignored.
    ///
    /// Returns whether a handler ran.
    pub fn dispatch(
        &self,
        service: &S,
        server: &dyn ServerTransport,
        caller: &CallerContext,
        call: RpcCall,
    ) -> bool {
        match self.handlers.get(&call.method_id) {
            Some(handler) => {
                handler(service, server, caller, call);
                true
            }
            None => {
                trace!(
                    "no handler for method {} from {}",
                    call.method_id,
                    caller.client_guid
                );
                false
            }
        }
    }
}

/// Send `result` back to the caller of `request`.
///
/// The response keeps the method and request ids of the request and is tagged
/// with the result's message id. Transport failures are logged, not returned.
pub fn reply<M: OmgppMessage>(
    server: &dyn ServerTransport,
    caller: &CallerContext,
    request: &RpcCall,
    result: &M,
) {
    let response = RpcCall::new(
        request.method_id,
        request.request_id,
        M::MESSAGE_ID,
        Some(result.to_payload()),
        request.is_reliable,
    );

    if let Err(e) = server.call_rpc(caller.client_guid, response) {
        warn!(
            "failed to reply to request {} from {}: {}",
            request.request_id, caller.client_guid, e
        );
    }
}
