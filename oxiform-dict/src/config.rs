//! Sliding-window coder configuration.

use oxiform_core::{OxiFormError, Result};

/// Largest window a token's `u16` offset can address.
pub const MAX_WINDOW: usize = u16::MAX as usize;

/// Longest match a token's `u8` length can carry.
pub const MAX_LOOKAHEAD: usize = u8::MAX as usize;

/// LZ77 search parameters.
///
/// Both sides of a stream must agree only on the wire format; the decoder
/// never needs to know which configuration produced a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Config {
    /// How far back the encoder searches for a match.
    pub window_size: usize,
    /// Upper bound on a single match length.
    pub lookahead: usize,
}

impl Lz77Config {
    /// Standard configuration: 4096-byte window, 18-byte lookahead.
    pub const DEFAULT: Self = Self {
        window_size: 4096,
        lookahead: 18,
    };

    /// Create a configuration, rejecting values the token format cannot hold.
    pub fn new(window_size: usize, lookahead: usize) -> Result<Self> {
        let config = Self {
            window_size,
            lookahead,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that offsets fit a `u16` and lengths fit a `u8`.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 || self.window_size > MAX_WINDOW {
            return Err(OxiFormError::invalid_config(format!(
                "window size {} outside 1..={}",
                self.window_size, MAX_WINDOW
            )));
        }
        if self.lookahead == 0 || self.lookahead > MAX_LOOKAHEAD {
            return Err(OxiFormError::invalid_config(format!(
                "lookahead {} outside 1..={}",
                self.lookahead, MAX_LOOKAHEAD
            )));
        }
        Ok(())
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
