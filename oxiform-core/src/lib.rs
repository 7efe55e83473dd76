//! # OxiForm Core
//!
//! Core components for the OxiForm transform library.
//!
//! - [`error`]: Error types shared by every codec crate
//! - [`traits`]: The [`Transform`] capability pair (`encode` / `decode`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Driver                                              │
//! │     Method selection, stage chaining, file I/O, CLI     │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codecs                                              │
//! │     BWT, MTF, RLE, Delta, Cube, Complement, BlockSort,  │
//! │     Pairwise substitution, LZ77, LZ78, LZW              │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     OxiFormError, Transform                             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiform_core::{OxiFormError, Result, Transform};
//!
//! struct Identity;
//!
//! impl Transform for Identity {
//!     fn name(&self) -> &'static str {
//!         "identity"
//!     }
//!     fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
//!         Ok(input.to_vec())
//!     }
//!     fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
//!         Ok(input.to_vec())
//!     }
//! }
//!
//! assert!(Identity.round_trips(b"abc").unwrap());
//! let err = OxiFormError::unsupported_method("nope");
//! assert!(err.to_string().contains("nope"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod traits;

// Re-exports for convenience
pub use error::{OxiFormError, Result};
pub use traits::Transform;
