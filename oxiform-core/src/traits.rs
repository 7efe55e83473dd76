//! Core traits for reversible transforms and coders.
//!
//! Every algorithm in the workspace is a pure function pair over whole
//! in-memory buffers. Nothing persists between calls: dictionaries, tables
//! and bitmasks are built at entry and dropped on return.

use crate::error::Result;

/// A reversible whole-buffer transform.
///
/// Implementors guarantee `decode(&encode(b)?)? == b` for every buffer `b`.
pub trait Transform {
    /// Short lowercase identifier (e.g. `"bwt"`).
    fn name(&self) -> &'static str;

    /// Transform one complete buffer.
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Invert [`Transform::encode`].
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Encode then decode, returning whether the buffer survived unchanged.
    fn round_trips(&self, input: &[u8]) -> Result<bool> {
        let encoded = self.encode(input)?;
        Ok(self.decode(&encoded)? == input)
    }
}
