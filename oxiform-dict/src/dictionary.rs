//! LZW dictionary (code table) management.

use std::collections::HashMap;

/// Number of codes a 16-bit stream can address.
pub const MAX_ENTRIES: usize = 1 << 16;

/// Number of pre-seeded single-byte codes.
pub const SEED_ENTRIES: usize = 256;

/// LZW dictionary for encoding and decoding.
///
/// Codes `0..=255` are the single bytes. Every later code is an earlier
/// code extended by one byte, so the encoder looks strings up by
/// `(prefix code, byte)` rather than by their full contents.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code table: code -> byte sequence.
    table: Vec<Vec<u8>>,
    /// Reverse lookup: (prefix code, byte) -> code.
    reverse: HashMap<(u16, u8), u16>,
}

impl LzwDictionary {
    /// Create a dictionary holding the 256 single-byte codes.
    pub fn new() -> Self {
        let mut dict = Self {
            table: Vec::with_capacity(4096),
            reverse: HashMap::new(),
        };
        dict.reset();
        dict
    }

    /// Drop every learned code, keeping only the single-byte seeds.
    pub fn reset(&mut self) {
        self.table.clear();
        self.reverse.clear();
        self.table.extend((0..SEED_ENTRIES).map(|b| vec![b as u8]));
    }

    /// Add `prefix + byte` as the next code.
    ///
    /// Returns `None` once the table is full or if `prefix` is unassigned.
    pub fn add(&mut self, prefix: u16, byte: u8) -> Option<u16> {
        if self.is_full() {
            return None;
        }

        let mut string = self.table.get(prefix as usize)?.clone();
        string.push(byte);

        let code = self.table.len() as u16;
        self.table.push(string);
        self.reverse.insert((prefix, byte), code);
        Some(code)
    }

    /// Get the byte sequence for a code.
    pub fn get(&self, code: u16) -> Option<&[u8]> {
        self.table.get(code as usize).map(Vec::as_slice)
    }

    /// Find the code for `prefix + byte`.
    pub fn find(&self, prefix: u16, byte: u8) -> Option<u16> {
        self.reverse.get(&(prefix, byte)).copied()
    }

    /// Check if the dictionary is full.
    pub fn is_full(&self) -> bool {
        self.table.len() >= MAX_ENTRIES
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> usize {
        self.table.len()
    }
}

impl Default for LzwDictionary {
    fn default() -> Self {
        Self::new()
    }
}
