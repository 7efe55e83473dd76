//! Reversible byte transforms for OxiForm.
//!
//! None of these transforms compress on their own. Each one reshapes a
//! buffer so that a later stage (a dictionary coder or an entropy backend)
//! finds more redundancy:
//!
//! - [`bwt`]: Burrows-Wheeler block sorting with an LF-mapping inverse
//! - [`mtf`]: Move-to-Front rank recoding
//! - [`rle`]: `(count, symbol)` run-length coding
//! - [`delta`]: wrapping differential coding
//! - [`cube`]: rotate-by-one within 64-byte blocks
//! - [`complement`]: per-offset dominant-byte XOR with a 1024-byte key
//! - [`blocksort`]: per-block sort with a changed-position bitmask
//! - [`pairs`]: frequency-ranked byte-pair substitution
//!
//! Every module exposes free `encode` / `decode` functions. The unit
//! structs re-exported here wrap them behind [`oxiform_core::Transform`].
//!
//! ```rust
//! use oxiform_core::Transform;
//! use oxiform_transform::{Bwt, Mtf};
//!
//! let data = b"banana bandana";
//! let sorted = Bwt.encode(data).unwrap();
//! let ranks = Mtf.encode(&sorted).unwrap();
//! assert_eq!(Bwt.decode(&Mtf.decode(&ranks).unwrap()).unwrap(), data);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blocksort;
pub mod bwt;
pub mod complement;
pub mod cube;
pub mod delta;
pub mod mtf;
pub mod pairs;
pub mod rle;

use oxiform_core::{Result, Transform};

/// Wrapping delta coder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delta;

impl Transform for Delta {
    fn name(&self) -> &'static str {
        "delta"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(delta::encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(delta::decode(input))
    }
}

/// Run-length coder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rle;

impl Transform for Rle {
    fn name(&self) -> &'static str {
        "rle"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(rle::encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(rle::decode(input))
    }
}

/// Move-to-Front coder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mtf;

impl Transform for Mtf {
    fn name(&self) -> &'static str {
        "mtf"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(mtf::encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(mtf::decode(input))
    }
}

/// 64-byte cyclic block rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cube;

impl Transform for Cube {
    fn name(&self) -> &'static str {
        "cube"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(cube::encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(cube::decode(input))
    }
}

/// Frequency-keyed XOR mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Complement;

impl Transform for Complement {
    fn name(&self) -> &'static str {
        "complement"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(complement::encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        complement::decode(input)
    }
}

/// Bitmask block-sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockSort;

impl Transform for BlockSort {
    fn name(&self) -> &'static str {
        "blocksort"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(blocksort::encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        blocksort::decode(input)
    }
}

/// Burrows-Wheeler Transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bwt;

impl Transform for Bwt {
    fn name(&self) -> &'static str {
        "bwt"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        bwt::encode(input)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        bwt::decode(input)
    }
}

/// Pairwise byte substitution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairSubstitution;

impl Transform for PairSubstitution {
    fn name(&self) -> &'static str {
        "pb"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(pairs::encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        pairs::decode(input)
    }
}
