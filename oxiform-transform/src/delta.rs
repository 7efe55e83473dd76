//! Delta coding.
//!
//! Each byte is replaced by its wrapping difference from the previous byte,
//! with the byte before the start taken as zero. Decoding is the wrapping
//! running sum.

/// Replace every byte with its difference from its predecessor.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut prev = 0u8;
    data.iter()
        .map(|&byte| {
            let diff = byte.wrapping_sub(prev);
            prev = byte;
            diff
        })
        .collect()
}

/// Undo [`encode`] with a wrapping running sum.
pub fn decode(data: &[u8]) -> Vec<u8> {
    let mut acc = 0u8;
    data.iter()
        .map(|&diff| {
            acc = acc.wrapping_add(diff);
            acc
        })
        .collect()
}
