//! Text encoding of index buffers.
//!
//! Standard base64 (RFC 4648 alphabet, padded), one input byte per pixel.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode an index buffer as padded standard base64.
pub fn encode_indices(indices: &[u8]) -> String {
    STANDARD.encode(indices)
}

/// Decode text produced by [`encode_indices`] back into indices.
pub fn decode_indices(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(text.trim_end())
}
