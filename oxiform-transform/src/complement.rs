//! Frequency-keyed XOR masking.
//!
//! A 1024-byte key is derived from the input: slot `k` holds the most
//! frequent byte among the input bytes at positions `i` with
//! `i mod 1024 == k`. Every byte is XORed with its slot, which turns the
//! dominant byte at each offset into zero, and the key is appended.
//!
//! ```text
//! [masked payload: n bytes][key: 1024 bytes]
//! ```

use log::warn;
use oxiform_core::{OxiFormError, Result};

/// Key length and stride of the frequency count.
pub const KEY_SIZE: usize = 1024;

/// Derive the per-offset key.
///
/// Ties go to the lowest byte value. Slots no input position reaches stay 0.
pub fn derive_key(data: &[u8]) -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];
    let mut counts = [0u32; 256];

    for (offset, slot) in key.iter_mut().enumerate().take(data.len()) {
        counts.fill(0);
        for &byte in data.iter().skip(offset).step_by(KEY_SIZE) {
            counts[byte as usize] += 1;
        }

        let mut best = 0;
        for (byte, &count) in counts.iter().enumerate() {
            if count > counts[best] {
                best = byte;
            }
        }
        *slot = best as u8;
    }

    key
}

fn apply_key(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(key.iter().cycle())
        .map(|(&byte, &mask)| byte ^ mask)
        .collect()
}

/// Mask the input and append its key.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let key = derive_key(data);
    let mut result = apply_key(data, &key);
    result.extend_from_slice(&key);
    result
}

/// Strip the trailing key and unmask the payload.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < KEY_SIZE {
        warn!(
            "complement: key needs {} bytes, buffer has {}",
            KEY_SIZE,
            data.len()
        );
        return Err(OxiFormError::truncated_trailer(
            "complement",
            KEY_SIZE,
            data.len(),
        ));
    }

    let (payload, key) = data.split_at(data.len() - KEY_SIZE);
    Ok(apply_key(payload, key))
}
