//! # OxiForm Pipeline
//!
//! Glue between the codec crates and the command line:
//!
//! - [`Method`]: closed set of named transforms, coders and the backend
//! - [`Pipeline`]: ordered chain of methods, decoded in reverse
//! - [`backend`]: Zstandard entropy stage
//! - [`file`]: whole-file read, convert and atomic write
//!
//! ## Example
//!
//! ```rust
//! use oxiform_core::Transform;
//! use oxiform_pipeline::Pipeline;
//!
//! let pipeline: Pipeline = "bwt,mtf,rle,zstd".parse().unwrap();
//! let data = b"how much wood would a woodchuck chuck".repeat(20);
//!
//! let packed = pipeline.encode(&data).unwrap();
//! assert!(packed.len() < data.len());
//! assert_eq!(pipeline.decode(&packed).unwrap(), data);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod file;
mod method;
mod pipeline;

pub use backend::BackendConfig;
pub use file::{
    FileStats, decode_file, decode_file_with, encode_file, encode_file_with, read_whole_file,
    write_whole_file,
};
pub use method::{Method, MethodKind};
pub use pipeline::{Pipeline, StageReport};
