//! # OxiForm-Dict: Dictionary Coders
//!
//! Three classic dictionary compressors, each a pure function pair over a
//! whole in-memory buffer:
//!
//! - [`lz77`]: sliding-window match + literal tokens (4 bytes each)
//! - [`lz78`]: incremental phrase records (3 bytes each)
//! - [`lzw`]: adaptive dictionary codes (2 bytes each)
//!
//! All multi-byte fields are little-endian. Every dictionary is built at
//! call entry and dropped on return, so nothing is shared between calls.
//!
//! ## Example
//!
//! ```rust
//! use oxiform_dict::lzw;
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = lzw::compress(original);
//! let decompressed = lzw::decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! The [`Lz77`], [`Lz78`] and [`Lzw`] unit structs expose the same coders
//! through [`oxiform_core::Transform`]:
//!
//! ```rust
//! use oxiform_core::Transform;
//! use oxiform_dict::Lz78;
//!
//! let data = b"AAAA";
//! assert!(Lz78.round_trips(data).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
pub mod lz77;
pub mod lz78;
pub mod lzw;

pub use config::{Lz77Config, MAX_LOOKAHEAD, MAX_WINDOW};
pub use decoder::LzwDecoder;
pub use dictionary::LzwDictionary;
pub use encoder::LzwEncoder;
pub use lz77::{Lz77Encoder, Lz77Token};

use oxiform_core::{Result, Transform};

/// Sliding-window coder with a configurable window and lookahead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lz77 {
    config: Lz77Config,
}

impl Lz77 {
    /// Create a coder with a custom search configuration.
    pub fn with_config(config: Lz77Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz77Config {
        &self.config
    }
}

impl Transform for Lz77 {
    fn name(&self) -> &'static str {
        "lz77"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(Lz77Encoder::new(self.config)?.encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(lz77::decode(input))
    }
}

/// Incremental-phrase coder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lz78;

impl Transform for Lz78 {
    fn name(&self) -> &'static str {
        "lz78"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(lz78::encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        lz78::decode(input)
    }
}

/// Adaptive-dictionary coder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lzw;

impl Transform for Lzw {
    fn name(&self) -> &'static str {
        "lzw"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(lzw::encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        lzw::decode(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all_coders() {
        let original = b"This is a test of compression! ".repeat(100);
        let coders: [&dyn Transform; 3] = [&Lz77::default(), &Lz78, &Lzw];
        for coder in coders {
            let encoded = coder.encode(&original).unwrap();
            assert!(encoded.len() < original.len(), "{} did not shrink", coder.name());
            assert_eq!(coder.decode(&encoded).unwrap(), original);
        }
    }

    #[test]
    fn test_lz77_custom_config() {
        let coder = Lz77::with_config(Lz77Config::new(256, 255).unwrap()).unwrap();
        assert_eq!(coder.config().lookahead, 255);
        let data = vec![b'z'; 2000];
        let encoded = coder.encode(&data).unwrap();
        assert!(encoded.len() < 64);
        assert_eq!(coder.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_single_byte() {
        let coders: [&dyn Transform; 3] = [&Lz77::default(), &Lz78, &Lzw];
        for coder in coders {
            assert!(coder.round_trips(b"A").unwrap(), "{} failed", coder.name());
        }
    }
}
