//! Incremental-phrase (LZ78) coding.
//!
//! The dictionary starts with only the empty phrase at index 0. Each record
//! names the longest known phrase and the byte that extends it, and the
//! extended phrase becomes the next dictionary entry:
//!
//! ```text
//! [index: u16 LE][byte: u8]
//! ```
//!
//! A non-empty encoding always ends with one flush record whose index names
//! the phrase still pending at end of input (0 if none) and whose byte is
//! `0x00`. The decoder expands that last record to its phrase alone, so a
//! literal zero byte anywhere else in the input survives the round trip.
//!
//! Codes are 16-bit: once index 65535 is assigned the dictionary stops
//! growing on both sides.

use log::{trace, warn};
use oxiform_core::{OxiFormError, Result};
use std::collections::HashMap;

/// Size of one encoded record.
pub const RECORD_SIZE: usize = 3;

/// Highest phrase index a record can name.
pub const MAX_CODE: u32 = u16::MAX as u32;

/// Encode `data` into phrase records.
pub fn encode(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    // (prefix index, extension byte) -> phrase index
    let mut trie: HashMap<(u16, u8), u16> = HashMap::new();
    let mut next_code: u32 = 1;
    let mut pending: u16 = 0;
    let mut output = Vec::with_capacity(data.len());

    for &byte in data {
        if let Some(&code) = trie.get(&(pending, byte)) {
            pending = code;
            continue;
        }

        push_record(&mut output, pending, byte);
        if next_code <= MAX_CODE {
            trie.insert((pending, byte), next_code as u16);
            next_code += 1;
        }
        pending = 0;
    }

    push_record(&mut output, pending, 0);
    trace!("lz78: {} phrases assigned", next_code - 1);
    output
}

fn push_record(output: &mut Vec<u8>, index: u16, byte: u8) {
    output.extend_from_slice(&index.to_le_bytes());
    output.push(byte);
}

/// Rebuild the input from phrase records.
///
/// An index beyond the dictionary stops decoding; the error carries the
/// bytes decoded before the bad record.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let records = data.chunks_exact(RECORD_SIZE);
    if !records.remainder().is_empty() {
        warn!(
            "lz78: ignoring {} trailing bytes of a partial record",
            records.remainder().len()
        );
    }

    let count = records.len();
    let mut phrases: Vec<Vec<u8>> = vec![Vec::new()];
    let mut output = Vec::with_capacity(data.len() * 2);

    for (i, record) in records.enumerate() {
        let index = u16::from_le_bytes([record[0], record[1]]);
        let byte = record[2];

        let Some(prefix) = phrases.get(index as usize) else {
            warn!(
                "lz78: record {} names phrase {} of {}",
                i,
                index,
                phrases.len()
            );
            return Err(OxiFormError::invalid_code(
                index,
                phrases.len(),
                i * RECORD_SIZE,
                output,
            ));
        };

        if i + 1 == count {
            if byte != 0 {
                warn!("lz78: flush record carries byte {:#04x}", byte);
            }
            output.extend_from_slice(prefix);
            break;
        }

        let mut phrase = prefix.clone();
        phrase.push(byte);
        output.extend_from_slice(&phrase);
        if phrases.len() <= MAX_CODE as usize {
            phrases.push(phrase);
        }
    }

    Ok(output)
}

/// Alias for [`encode`].
pub fn compress(data: &[u8]) -> Vec<u8> {
    encode(data)
}

/// Alias for [`decode`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decode(data)
}
