//! LZW decoder (decompression).

use crate::dictionary::LzwDictionary;
use log::warn;
use oxiform_core::{OxiFormError, Result};

/// LZW decoder for decompression.
#[derive(Debug, Default)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: LzwDictionary,
}

impl LzwDecoder {
    /// Create a new LZW decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stream of 16-bit little-endian codes.
    ///
    /// The decoder adds each entry one code later than the encoder did, so
    /// a code equal to the next unassigned one can only mean the entry the
    /// encoder just made: the previous string plus its own first byte.
    ///
    /// A code that is neither assigned nor next stops decoding with
    /// [`OxiFormError::InvalidCode`], which carries the output so far. An
    /// odd trailing byte is ignored.
    ///
    /// Like the encoder, each call starts from a freshly seeded dictionary.
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.dict.reset();
        let codes = input.chunks_exact(2);
        if !codes.remainder().is_empty() {
            warn!("lzw: ignoring odd trailing byte at offset {}", input.len() - 1);
        }

        let mut output = Vec::with_capacity(input.len() * 2);
        let mut prev_code: Option<u16> = None;

        for (i, pair) in codes.enumerate() {
            let code = u16::from_le_bytes([pair[0], pair[1]]);
            let next_code = self.dict.next_code();

            let string = if let Some(known) = self.dict.get(code) {
                known.to_vec()
            } else if let (Some(prev), true) = (prev_code, code as usize == next_code) {
                // KwKwK: the entry being defined by this very code
                let mut string = self.dict.get(prev).map(<[u8]>::to_vec).unwrap_or_default();
                if let Some(&head) = string.first() {
                    string.push(head);
                }
                string
            } else {
                warn!(
                    "lzw: invalid code {} at offset {} (next {})",
                    code,
                    i * 2,
                    next_code
                );
                return Err(OxiFormError::invalid_code(code, next_code, i * 2, output));
            };

            output.extend_from_slice(&string);

            if let Some(prev) = prev_code {
                if let Some(&head) = string.first() {
                    self.dict.add(prev, head);
                }
            }

            prev_code = Some(code);
        }

        Ok(output)
    }
}
