//! Sliding-window (LZ77) coding.
//!
//! At each position the encoder scans the window behind the cursor for the
//! longest match with the bytes ahead of it and emits one fixed 4-byte
//! token:
//!
//! ```text
//! [offset: u16 LE][length: u8][literal: u8]
//! ```
//!
//! `offset` is the backward distance of the match (0 when there is none),
//! `length` the number of bytes to copy, and `literal` the byte that
//! follows the match. The cursor then advances by `length + 1`.

use crate::config::Lz77Config;
use log::warn;
use oxiform_core::Result;

/// Size of one encoded token.
pub const TOKEN_SIZE: usize = 4;

/// A back-reference followed by one literal byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Token {
    /// Distance back from the cursor to the start of the match.
    pub offset: u16,
    /// Number of bytes to copy.
    pub length: u8,
    /// Byte emitted after the copy.
    pub literal: u8,
}

impl Lz77Token {
    /// Serialize to the 4-byte wire form.
    pub fn to_bytes(self) -> [u8; TOKEN_SIZE] {
        let [lo, hi] = self.offset.to_le_bytes();
        [lo, hi, self.length, self.literal]
    }

    /// Parse the 4-byte wire form.
    pub fn from_bytes(bytes: [u8; TOKEN_SIZE]) -> Self {
        Self {
            offset: u16::from_le_bytes([bytes[0], bytes[1]]),
            length: bytes[2],
            literal: bytes[3],
        }
    }
}

/// LZ77 encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz77Encoder {
    config: Lz77Config,
}

impl Lz77Encoder {
    /// Create an encoder, rejecting configurations the token format cannot hold.
    pub fn new(config: Lz77Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz77Config {
        &self.config
    }

    /// Find the longest match for `data[pos..]` within the window.
    ///
    /// Candidates are scanned oldest first and only a strictly longer match
    /// replaces the current best, so equal lengths keep the farthest one.
    /// The length never reaches the last byte of the input, which is always
    /// left for the literal.
    fn longest_match(&self, data: &[u8], pos: usize) -> (usize, usize) {
        let max_len = self.config.lookahead.min(data.len() - pos - 1);
        let start = pos.saturating_sub(self.config.window_size);

        let mut best_len = 0;
        let mut best_offset = 0;

        for candidate in start..pos {
            let mut len = 0;
            while len < max_len && data[candidate + len] == data[pos + len] {
                len += 1;
            }
            if len > best_len {
                best_len = len;
                best_offset = pos - candidate;
                if best_len == max_len {
                    break;
                }
            }
        }

        (best_offset, best_len)
    }

    /// Tokenize `data`.
    pub fn tokenize(&self, data: &[u8]) -> Vec<Lz77Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < data.len() {
            let (offset, length) = self.longest_match(data, pos);
            tokens.push(Lz77Token {
                offset: offset as u16,
                length: length as u8,
                literal: data[pos + length],
            });
            pos += length + 1;
        }

        tokens
    }

    /// Encode `data` into a token stream.
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        self.tokenize(data)
            .into_iter()
            .flat_map(Lz77Token::to_bytes)
            .collect()
    }
}

/// Replay a token stream.
///
/// A trailing partial token is ignored. An offset larger than the output
/// so far is clamped to the start of the output.
pub fn decode(data: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(data.len() * 2);

    let chunks = data.chunks_exact(TOKEN_SIZE);
    if !chunks.remainder().is_empty() {
        warn!(
            "lz77: ignoring {} trailing bytes of a partial token",
            chunks.remainder().len()
        );
    }

    for (index, chunk) in chunks.enumerate() {
        let token = Lz77Token::from_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);

        let mut distance = token.offset as usize;
        if distance > output.len() {
            warn!(
                "lz77: token {} offset {} exceeds {} decoded bytes",
                index,
                distance,
                output.len()
            );
            distance = output.len();
        }

        if token.length > 0 {
            if distance == 0 {
                warn!("lz77: token {} copies with zero distance", index);
            } else {
                // Byte-by-byte so overlapping copies repeat the pattern.
                let start = output.len() - distance;
                for i in 0..token.length as usize {
                    let byte = output[start + i];
                    output.push(byte);
                }
            }
        }

        output.push(token.literal);
    }

    output
}

/// Encode with the default 4096-byte window and 18-byte lookahead.
pub fn encode(data: &[u8]) -> Vec<u8> {
    Lz77Encoder::default().encode(data)
}

/// Alias for [`encode`].
pub fn compress(data: &[u8]) -> Vec<u8> {
    encode(data)
}

/// Alias for [`decode`].
pub fn decompress(data: &[u8]) -> Vec<u8> {
    decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_wire_format() {
        let token = Lz77Token {
            offset: 0x0102,
            length: 7,
            literal: b'z',
        };
        assert_eq!(token.to_bytes(), [0x02, 0x01, 7, b'z']);
        assert_eq!(Lz77Token::from_bytes(token.to_bytes()), token);
    }

    #[test]
    fn test_literals_only() {
        let encoded = encode(b"abc");
        assert_eq!(encoded, vec![0, 0, 0, b'a', 0, 0, 0, b'b', 0, 0, 0, b'c']);
        assert_eq!(decode(&encoded), b"abc");
    }

    #[test]
    fn test_overlapping_match() {
        // 'a' then a self-overlapping copy of 8, then the final literal
        let tokens = Lz77Encoder::default().tokenize(b"aaaaaaaaaa");
        assert_eq!(
            tokens,
            vec![
                Lz77Token {
                    offset: 0,
                    length: 0,
                    literal: b'a'
                },
                Lz77Token {
                    offset: 1,
                    length: 8,
                    literal: b'a'
                },
            ]
        );
        assert_eq!(decode(&encode(b"aaaaaaaaaa")), b"aaaaaaaaaa");
    }

    #[test]
    fn test_length_capped_by_lookahead() {
        let data = vec![b'x'; 100];
        for token in Lz77Encoder::default().tokenize(&data) {
            assert!(token.length as usize <= 18);
        }
        assert_eq!(decode(&encode(&data)), data);
    }

    #[test]
    fn test_ties_keep_farthest() {
        // "ab" occurs at distance 6 and 3; both give length 2.
        let tokens = Lz77Encoder::default().tokenize(b"abXabYabZ");
        let last = tokens[tokens.len() - 1];
        assert_eq!(last.offset, 6);
        assert_eq!(last.length, 2);
        assert_eq!(last.literal, b'Z');
    }

    #[test]
    fn test_no_phantom_trailing_byte() {
        for data in [b"abcabc".as_slice(), b"aaaa", b"xyxyxyxy"] {
            assert_eq!(decode(&encode(data)), data);
        }
    }

    #[test]
    fn test_small_window() {
        let encoder = Lz77Encoder::new(Lz77Config::new(2, 4).unwrap()).unwrap();
        let data = b"abcdabcd";
        let tokens = encoder.tokenize(data);
        assert!(tokens.iter().all(|t| t.offset <= 2));
        assert_eq!(decode(&encoder.encode(data)), data);
    }

    #[test]
    fn test_encoder_rejects_invalid_config() {
        let config = Lz77Config {
            window_size: 4096,
            lookahead: 300,
        };
        assert!(Lz77Encoder::new(config).is_err());
    }

    #[test]
    fn test_decode_clamps_offset() {
        // Second token claims offset 9 with only one byte decoded.
        let stream = [0, 0, 0, b'q', 9, 0, 2, b'r'];
        assert_eq!(decode(&stream), b"qqqr");
    }

    #[test]
    fn test_decode_partial_token() {
        assert_eq!(decode(&[0, 0, 0, b'k', 1, 0]), b"k");
    }

    #[test]
    fn test_empty() {
        assert!(encode(b"").is_empty());
        assert!(decode(b"").is_empty());
    }
}
