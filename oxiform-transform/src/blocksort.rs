//! Bitmask block-sort.
//!
//! Each full 256-byte block is emitted in ascending order, followed by a
//! 256-bit mask of the positions where the sorted byte differs from the
//! original and then the original bytes at those positions:
//!
//! ```text
//! [sorted: 256 bytes][mask: 32 bytes][changes: popcount(mask) bytes]
//! ```
//!
//! Bit `i` of the mask lives in byte `i / 8` at bit `i % 8`. A trailing
//! partial block is copied verbatim with no header.

use log::warn;
use oxiform_core::{OxiFormError, Result};

/// Bytes per sorted block.
pub const BLOCK_SIZE: usize = 256;

/// Bytes in the changed-position mask.
pub const MASK_SIZE: usize = BLOCK_SIZE / 8;

/// Fixed part of one encoded unit.
pub const UNIT_HEADER: usize = BLOCK_SIZE + MASK_SIZE;

/// Sort each full block and record how to undo it.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() + data.len() / 4);
    let blocks = data.chunks_exact(BLOCK_SIZE);
    let remainder = blocks.remainder();

    for block in blocks {
        let mut sorted = block.to_vec();
        sorted.sort_unstable();

        let mut mask = [0u8; MASK_SIZE];
        let mut changes = Vec::new();
        for (i, (&orig, &after)) in block.iter().zip(sorted.iter()).enumerate() {
            if orig != after {
                mask[i / 8] |= 1 << (i % 8);
                changes.push(orig);
            }
        }

        result.extend_from_slice(&sorted);
        result.extend_from_slice(&mask);
        result.extend_from_slice(&changes);
    }

    result.extend_from_slice(remainder);
    result
}

/// Rebuild the original blocks from their sorted form and change logs.
///
/// If a unit's change log runs past the end of the buffer, decoding stops
/// and the error carries every block restored before it.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(data.len());
    let mut pos = 0;
    let mut block = 0;

    while pos + UNIT_HEADER <= data.len() {
        let sorted = &data[pos..pos + BLOCK_SIZE];
        let mask = &data[pos + BLOCK_SIZE..pos + UNIT_HEADER];
        let changed: usize = mask.iter().map(|b| b.count_ones() as usize).sum();

        let needed = UNIT_HEADER + changed;
        let available = data.len() - pos;
        if needed > available {
            warn!(
                "blocksort: block {} needs {} bytes, {} remain",
                block, needed, available
            );
            return Err(OxiFormError::truncated_block(
                block, needed, available, result,
            ));
        }

        let mut changes = data[pos + UNIT_HEADER..pos + needed].iter();
        for (i, &byte) in sorted.iter().enumerate() {
            if mask[i / 8] & (1 << (i % 8)) != 0 {
                result.push(changes.next().copied().unwrap_or(byte));
            } else {
                result.push(byte);
            }
        }

        pos += needed;
        block += 1;
    }

    result.extend_from_slice(&data[pos..]);
    Ok(result)
}
