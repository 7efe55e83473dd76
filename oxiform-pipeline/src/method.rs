//! Named transform and coder selection.

use crate::backend::{self, BackendConfig};
use oxiform_core::{OxiFormError, Result, Transform};
use oxiform_dict::{Lz77, Lz78, Lzw};
use oxiform_transform::{BlockSort, Bwt, Complement, Cube, Delta, Mtf, PairSubstitution, Rle};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Every algorithm a pipeline stage can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Wrapping delta coding.
    Delta,
    /// `(count, symbol)` run-length coding.
    Rle,
    /// Move-to-Front rank recoding.
    Mtf,
    /// Rotate-by-one within 64-byte blocks.
    Cube,
    /// Per-offset dominant-byte XOR with a 1024-byte key.
    Complement,
    /// Per-256-byte-block sort with a changed-position bitmask.
    BlockSort,
    /// Burrows-Wheeler Transform.
    Bwt,
    /// Frequency-ranked byte-pair substitution.
    Pb,
    /// Sliding-window dictionary coder.
    Lz77,
    /// Incremental-phrase dictionary coder.
    Lz78,
    /// Adaptive-dictionary coder.
    Lzw,
    /// Zstandard entropy backend.
    Zstd,
}

/// Broad role of a method in a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    /// Reshapes bytes without compressing them.
    Transform,
    /// Replaces repeated strings with references.
    Dictionary,
    /// General-purpose entropy compressor.
    Backend,
}

impl Method {
    /// All methods, in listing order.
    pub const ALL: [Method; 12] = [
        Method::Delta,
        Method::Rle,
        Method::Mtf,
        Method::Cube,
        Method::Complement,
        Method::BlockSort,
        Method::Bwt,
        Method::Pb,
        Method::Lz77,
        Method::Lz78,
        Method::Lzw,
        Method::Zstd,
    ];

    /// Lowercase name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Delta => "delta",
            Self::Rle => "rle",
            Self::Mtf => "mtf",
            Self::Cube => "cube",
            Self::Complement => "complement",
            Self::BlockSort => "blocksort",
            Self::Bwt => "bwt",
            Self::Pb => "pb",
            Self::Lz77 => "lz77",
            Self::Lz78 => "lz78",
            Self::Lzw => "lzw",
            Self::Zstd => "zstd",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Delta => "Wrapping difference from the previous byte",
            Self::Rle => "Run-length (count, symbol) pairs",
            Self::Mtf => "Move-to-Front rank recoding",
            Self::Cube => "Rotate each 64-byte block by one",
            Self::Complement => "XOR with the dominant byte per 1024-byte offset",
            Self::BlockSort => "Sort 256-byte blocks, keep a bitmask of changes",
            Self::Bwt => "Burrows-Wheeler block-sorting transform",
            Self::Pb => "Swap frequent byte pairs for equal-byte codes",
            Self::Lz77 => "Sliding-window match and literal tokens",
            Self::Lz78 => "Incremental phrase dictionary",
            Self::Lzw => "Adaptive dictionary with 16-bit codes",
            Self::Zstd => "Zstandard entropy backend",
        }
    }

    /// Role of this method.
    pub fn kind(&self) -> MethodKind {
        match self {
            Self::Lz77 | Self::Lz78 | Self::Lzw => MethodKind::Dictionary,
            Self::Zstd => MethodKind::Backend,
            _ => MethodKind::Transform,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = OxiFormError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| OxiFormError::unsupported_method(s))
    }
}

impl Transform for Method {
    fn name(&self) -> &'static str {
        Method::name(self)
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Delta => Delta.encode(input),
            Self::Rle => Rle.encode(input),
            Self::Mtf => Mtf.encode(input),
            Self::Cube => Cube.encode(input),
            Self::Complement => Complement.encode(input),
            Self::BlockSort => BlockSort.encode(input),
            Self::Bwt => Bwt.encode(input),
            Self::Pb => PairSubstitution.encode(input),
            Self::Lz77 => Lz77::default().encode(input),
            Self::Lz78 => Lz78.encode(input),
            Self::Lzw => Lzw.encode(input),
            Self::Zstd => backend::compress(input, &BackendConfig::DEFAULT),
        }
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Delta => Delta.decode(input),
            Self::Rle => Rle.decode(input),
            Self::Mtf => Mtf.decode(input),
            Self::Cube => Cube.decode(input),
            Self::Complement => Complement.decode(input),
            Self::BlockSort => BlockSort.decode(input),
            Self::Bwt => Bwt.decode(input),
            Self::Pb => PairSubstitution.decode(input),
            Self::Lz77 => Lz77::default().decode(input),
            Self::Lz78 => Lz78.decode(input),
            Self::Lzw => Lzw.decode(input),
            Self::Zstd => backend::decompress(input),
        }
    }
}
