//! LZW encoder (compression).

use crate::dictionary::LzwDictionary;

/// LZW encoder for compression.
///
/// Codes are written as fixed 16-bit little-endian values.
#[derive(Debug, Default)]
pub struct LzwEncoder {
    /// Dictionary for string lookup.
    dict: LzwDictionary,
}

impl LzwEncoder {
    /// Create a new LZW encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode data with LZW compression.
    ///
    /// Greedy longest match: extend the current string while
    /// `current + byte` is known, otherwise emit the code for `current`,
    /// register `current + byte` while there is room, and restart from
    /// `byte`.
    ///
    /// Each call starts from a freshly seeded dictionary, so every stream
    /// decodes on its own.
    pub fn encode(&mut self, input: &[u8]) -> Vec<u8> {
        self.dict.reset();
        let Some((&first, rest)) = input.split_first() else {
            return Vec::new();
        };

        let mut output = Vec::with_capacity(input.len());
        let mut current = first as u16;

        for &byte in rest {
            if let Some(code) = self.dict.find(current, byte) {
                current = code;
            } else {
                output.extend_from_slice(&current.to_le_bytes());
                self.dict.add(current, byte);
                current = byte as u16;
            }
        }

        output.extend_from_slice(&current.to_le_bytes());
        output
    }
}
