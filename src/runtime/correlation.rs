//! Request/response correlation for generated client stubs.
//!
//! Every call that expects a response allocates a request id, registers a
//! one-shot slot for it and sends the request. The client handler routes each
//! inbound frame to the slot with the matching id. A slot is resolved at most
//! once; the first matching frame wins and later ones are dropped.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::{debug, trace};

use super::message::OmgppMessage;
use super::transport::{RpcCall, RpcError, NO_CORRELATION};

/// How long a client waits for a response by default.
pub const RESPONSE_TIMEOUT: Duration = Duration::from_millis(1000);

type PendingMap = Arc<Mutex<HashMap<u64, oneshot::Sender<RpcCall>>>>;

/// Table of in-flight requests keyed by request id.
///
/// Shared between the tasks awaiting responses and the inbound delivery path,
/// all operations take `&self`.
#[derive(Debug)]
pub struct CallRegistry {
    request_id: AtomicU64,
    pending: PendingMap,
    timeout: Duration,
}

impl Default for CallRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CallRegistry {
    pub fn new() -> Self {
        Self::with_timeout(RESPONSE_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            request_id: AtomicU64::new(1),
            pending: Arc::new(Mutex::new(HashMap::new())),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Allocate the next request id. Never returns `NO_CORRELATION`.
    pub fn next_id(&self) -> u64 {
        loop {
            let id = self.request_id.fetch_add(1, Ordering::Relaxed);
            if id != NO_CORRELATION {
                return id;
            }
        }
    }

    /// Register a slot for `request_id`.
    ///
    /// Fails if the id is already pending. The slot is removed when the
    /// returned `PendingCall` resolves, times out or is dropped.
    pub fn register(&self, request_id: u64) -> Result<PendingCall, RpcError> {
        let (tx, rx) = oneshot::channel();
        {
            let mut pending = self.pending.lock();
            if pending.contains_key(&request_id) {
                return Err(RpcError::DuplicateRequestId(request_id));
            }
            pending.insert(request_id, tx);
        }

        trace!("registered request {}", request_id);
        Ok(PendingCall {
            request_id,
            rx,
            pending: Arc::clone(&self.pending),
            timeout: self.timeout,
        })
    }

    /// Deliver an inbound frame to the slot with the same request id.
    ///
    /// Returns `false` when nothing is waiting for it: unknown id, already
    /// resolved, or timed out.
    pub fn complete(&self, call: RpcCall) -> bool {
        let request_id = call.request_id;
        let slot = self.pending.lock().remove(&request_id);

        match slot {
            Some(tx) => {
                let delivered = tx.send(call).is_ok();
                trace!("completed request {} (delivered: {})", request_id, delivered);
                delivered
            }
            None => {
                debug!("dropping response for unknown request {}", request_id);
                false
            }
        }
    }

    /// Drop the slot for `request_id` without resolving it.
    pub fn cancel(&self, request_id: u64) -> bool {
        self.pending.lock().remove(&request_id).is_some()
    }

    /// Number of requests still awaiting a response.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }
}

/// How a pending call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    Completed(RpcCall),
    TimedOut,
    /// The slot was cancelled before a response arrived.
    Cancelled,
}

/// One registered request awaiting its response.
#[derive(Debug)]
pub struct PendingCall {
    request_id: u64,
    rx: oneshot::Receiver<RpcCall>,
    pending: PendingMap,
    timeout: Duration,
}

impl PendingCall {
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Wait for the response frame or the timeout, whichever comes first.
    pub async fn outcome(mut self) -> CallOutcome {
        match tokio::time::timeout(self.timeout, &mut self.rx).await {
            Ok(Ok(call)) => CallOutcome::Completed(call),
            Ok(Err(_)) => CallOutcome::Cancelled,
            Err(_) => {
                debug!(
                    "request {} timed out after {}ms",
                    self.request_id,
                    self.timeout.as_millis()
                );
                CallOutcome::TimedOut
            }
        }
    }

    /// Wait for the response and decode it as `T`.
    ///
    /// Returns `None` on timeout, on a type tag other than `T::MESSAGE_ID`,
    /// on a missing payload and on a payload that fails to decode.
    pub async fn response<T: OmgppMessage>(self) -> Option<T> {
        let request_id = self.request_id;
        let call = match self.outcome().await {
            CallOutcome::Completed(call) => call,
            CallOutcome::TimedOut | CallOutcome::Cancelled => return None,
        };

        if call.arg_type != T::MESSAGE_ID || call.payload.is_none() {
            trace!(
                "response to request {} has type {}, expected {}",
                request_id,
                call.arg_type,
                T::MESSAGE_ID
            );
            return None;
        }
        call.decode_payload()
    }
}

impl Drop for PendingCall {
    fn drop(&mut self) {
        // Only our own slot reports closed once the receiver is closed.
        self.rx.close();
        let mut pending = self.pending.lock();
        if pending
            .get(&self.request_id)
            .is_some_and(oneshot::Sender::is_closed)
        {
            pending.remove(&self.request_id);
        }
    }
}
