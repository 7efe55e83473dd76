//! Move-to-Front recoding.
//!
//! MTF replaces each byte with its position in a dynamic list of all 256
//! byte values, then moves that byte to the front of the list. Runs of the
//! same byte (as produced by the BWT) become runs of zeros.
//!
//! Both directions start from the identity order `[0, 1, ..., 255]`, so the
//! list is always a permutation of the byte alphabet.

/// Initial symbol list shared by encoder and decoder.
fn identity_order() -> [u8; 256] {
    std::array::from_fn(|i| i as u8)
}

/// Move the symbol at `pos` to the front, shifting the prefix down by one.
#[inline]
fn promote(list: &mut [u8; 256], pos: usize) {
    if pos > 0 {
        let byte = list[pos];
        list.copy_within(..pos, 1);
        list[0] = byte;
    }
}

/// Perform the Move-to-Front transform.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut list = identity_order();
    let mut result = Vec::with_capacity(data.len());

    for &byte in data {
        // The list is a permutation of 0..=255, so every byte is present.
        let pos = list.iter().position(|&b| b == byte).unwrap_or_default();
        result.push(pos as u8);
        promote(&mut list, pos);
    }

    result
}

/// Perform the inverse Move-to-Front transform.
pub fn decode(data: &[u8]) -> Vec<u8> {
    let mut list = identity_order();
    let mut result = Vec::with_capacity(data.len());

    for &rank in data {
        let pos = rank as usize;
        result.push(list[pos]);
        promote(&mut list, pos);
    }

    result
}
