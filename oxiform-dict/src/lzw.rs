//! Adaptive-dictionary (LZW) coding.
//!
//! The dictionary is seeded with the 256 single bytes and grows by one
//! entry per emitted code until it holds 65536 entries. Codes are written
//! as fixed 16-bit little-endian values with no header and no end marker.

use crate::decoder::LzwDecoder;
use crate::encoder::LzwEncoder;
use oxiform_core::Result;

/// Encode `data` as a stream of 16-bit codes.
pub fn encode(data: &[u8]) -> Vec<u8> {
    LzwEncoder::new().encode(data)
}

/// Decode a stream of 16-bit codes.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    LzwDecoder::new().decode(data)
}

/// Alias for [`encode`].
pub fn compress(data: &[u8]) -> Vec<u8> {
    encode(data)
}

/// Alias for [`decode`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decode(data)
}
