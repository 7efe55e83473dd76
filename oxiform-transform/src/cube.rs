//! Cyclic block rotation.
//!
//! The input is cut into disjoint 64-byte blocks and each full block is
//! rotated right by one, so the byte at position `j` moves to
//! `(j + 1) mod 64`. A trailing partial block is copied unchanged.

/// Size of one rotation block.
pub const BLOCK_SIZE: usize = 64;

/// Rotate every full block right by one.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut result = data.to_vec();
    for block in result.chunks_exact_mut(BLOCK_SIZE) {
        block.rotate_right(1);
    }
    result
}

/// Rotate every full block left by one.
pub fn decode(data: &[u8]) -> Vec<u8> {
    let mut result = data.to_vec();
    for block in result.chunks_exact_mut(BLOCK_SIZE) {
        block.rotate_left(1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_rotation() {
        let data: Vec<u8> = (0..64).collect();
        let encoded = encode(&data);
        assert_eq!(encoded[0], 63);
        assert_eq!(encoded[1], 0);
        assert_eq!(encoded[63], 62);
        assert_eq!(decode(&encoded), data);
    }

    #[test]
    fn test_cube_short_passthrough() {
        let data = b"shorter than one block";
        assert_eq!(encode(data), data);
        assert_eq!(decode(data), data);
    }

    #[test]
    fn test_cube_remainder_untouched() {
        let data: Vec<u8> = (0..100).collect();
        let encoded = encode(&data);
        assert_eq!(&encoded[64..], &data[64..]);
        assert_eq!(decode(&encoded), data);
    }
}
