//! Pairwise byte substitution.
//!
//! The input is read as non-overlapping two-byte pairs. The most frequent
//! pairs whose bytes differ are swapped with the equal-byte pairs
//! `{0,0}`, `{1,1}`, ... in rank order, at most 256 of them. The swap is
//! an involution: applying the same table again restores the input, so an
//! equal-byte pair that already occurs in the input is carried across as
//! the pair it was swapped with.
//!
//! ```text
//! [substituted payload: n bytes][table: 256 x 2 bytes]
//! ```
//!
//! Table slot `k` holds the pair swapped with `{k,k}`, or `{0,0}` if the
//! slot is unused. An odd trailing byte is never substituted.

use log::{trace, warn};
use oxiform_core::{OxiFormError, Result};

/// Number of substitution slots.
pub const TABLE_ENTRIES: usize = 256;

/// Size of the appended table.
pub const TABLE_SIZE: usize = TABLE_ENTRIES * 2;

/// A pair packed big-end first, so `{a,b}` orders like the tuple `(a,b)`.
#[inline]
fn pack(a: u8, b: u8) -> u16 {
    u16::from_be_bytes([a, b])
}

/// The equal-byte pair `{code, code}`.
#[inline]
fn code_pair(code: u8) -> u16 {
    pack(code, code)
}

/// Swap mapping over all 65536 pairs; unmapped pairs map to themselves.
struct SwapTable {
    map: Vec<u16>,
}

impl SwapTable {
    fn identity() -> Self {
        Self {
            map: (0..=u16::MAX).collect(),
        }
    }

    fn swap(&mut self, original: u16, code: u16) {
        self.map[original as usize] = code;
        self.map[code as usize] = original;
    }

    fn apply(&self, payload: &mut [u8]) {
        for pair in payload.chunks_exact_mut(2) {
            let [a, b] = self.map[pack(pair[0], pair[1]) as usize].to_be_bytes();
            pair[0] = a;
            pair[1] = b;
        }
    }
}

/// Rank the differing-byte pairs of `data` for substitution.
///
/// Ordered by descending count, ties by ascending pair value; at most
/// [`TABLE_ENTRIES`] pairs are returned.
pub fn rank_pairs(data: &[u8]) -> Vec<(u8, u8)> {
    let mut counts = vec![0u32; 1 << 16];
    for pair in data.chunks_exact(2) {
        counts[pack(pair[0], pair[1]) as usize] += 1;
    }

    let mut ranked: Vec<(u16, u32)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(pair, &count)| (pair as u16, count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    ranked
        .into_iter()
        .map(|(pair, _)| {
            let [a, b] = pair.to_be_bytes();
            (a, b)
        })
        .filter(|&(a, b)| a != b)
        .take(TABLE_ENTRIES)
        .collect()
}

/// Substitute frequent pairs and append the table.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let ranked = rank_pairs(data);
    trace!("pb: {} substitution pairs", ranked.len());

    let mut swaps = SwapTable::identity();
    let mut table = [0u8; TABLE_SIZE];
    for (code, &(a, b)) in ranked.iter().enumerate() {
        swaps.swap(pack(a, b), code_pair(code as u8));
        table[code * 2] = a;
        table[code * 2 + 1] = b;
    }

    let mut result = Vec::with_capacity(data.len() + TABLE_SIZE);
    result.extend_from_slice(data);
    swaps.apply(&mut result);
    result.extend_from_slice(&table);
    result
}

/// Strip the table and swap every substituted pair back.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < TABLE_SIZE {
        warn!(
            "pb: table needs {} bytes, buffer has {}",
            TABLE_SIZE,
            data.len()
        );
        return Err(OxiFormError::truncated_trailer("pb", TABLE_SIZE, data.len()));
    }

    let (payload, table) = data.split_at(data.len() - TABLE_SIZE);

    let mut swaps = SwapTable::identity();
    for (code, entry) in table.chunks_exact(2).enumerate() {
        if entry != [0, 0] {
            swaps.swap(pack(entry[0], entry[1]), code_pair(code as u8));
        }
    }

    let mut result = payload.to_vec();
    swaps.apply(&mut result);
    Ok(result)
}
