//! Identifier attachment for prost messages.

use bytes::Bytes;
use prost::Message;

/// A protobuf message carrying its omgpp wire type tag.
///
/// Generated message files implement this for every prost type:
///
/// ```ignore
/// impl ::omgpp_gen::runtime::OmgppMessage for crate::demo::HelloRequest {
///     const MESSAGE_ID: i64 = 14224;
/// }
/// ```
pub trait OmgppMessage: Message + Default + Sized {
    /// Stable type tag derived from the message's qualified name.
    const MESSAGE_ID: i64;

    /// Parse a payload with the message's prost decoder.
    fn parse(bytes: &[u8]) -> Result<Self, prost::DecodeError> {
        Self::decode(bytes)
    }

    /// Serialize into an exactly-sized buffer.
    fn to_payload(&self) -> Bytes {
        Bytes::from(self.encode_to_vec())
    }
}
