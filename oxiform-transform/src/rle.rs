//! Run-length coding.
//!
//! Runs of identical bytes are emitted as `(count, symbol)` pairs with
//! `count` in `1..=255`; longer runs are split. Every input byte costs at
//! most two output bytes.

use log::warn;

/// Longest run a single pair can describe.
pub const MAX_RUN: usize = 255;

/// Encode data as `(count, symbol)` pairs.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];
        let mut run_len = 1;

        while i + run_len < data.len() && data[i + run_len] == byte && run_len < MAX_RUN {
            run_len += 1;
        }

        result.push(run_len as u8);
        result.push(byte);
        i += run_len;
    }

    result
}

/// Expand `(count, symbol)` pairs.
///
/// A dangling odd byte at the end is ignored and a zero count expands to
/// nothing.
pub fn decode(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() * 2);

    let pairs = data.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        warn!("rle: ignoring dangling byte at offset {}", data.len() - 1);
    }

    for pair in pairs {
        let (count, byte) = (pair[0] as usize, pair[1]);
        result.resize(result.len() + count, byte);
    }

    result
}
