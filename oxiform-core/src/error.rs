//! Error types for OxiForm operations.
//!
//! Every decoder in the workspace reports structural problems through
//! [`OxiFormError`]. Variants that describe a failure part-way through a
//! buffer carry the output decoded up to that point, so callers that can
//! live with a truncated result may still recover it via
//! [`OxiFormError::recovered`].

use std::io;
use thiserror::Error;

/// The main error type for OxiForm operations.
#[derive(Debug, Error)]
pub enum OxiFormError {
    /// I/O error from the whole-file driver.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stored rotation index does not address a row of the block.
    #[error("Invalid rotation index {index} for block of {len} bytes")]
    InvalidIndex {
        /// Index read from the record header.
        index: u32,
        /// Length of the payload the index refers to.
        len: usize,
    },

    /// A fixed-size trailer (key, table) is missing or cut short.
    #[error("{transform}: trailer needs {needed} bytes, have {available}")]
    TruncatedTrailer {
        /// Name of the transform whose trailer is short.
        transform: &'static str,
        /// Size of the trailer.
        needed: usize,
        /// Bytes actually present.
        available: usize,
    },

    /// A block's change log runs past the end of the buffer.
    #[error("Block {block} truncated: need {needed} bytes, have {available}")]
    TruncatedBlock {
        /// Zero-based index of the failing block.
        block: usize,
        /// Bytes the block still needed.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
        /// Output decoded before the failing block.
        recovered: Vec<u8>,
    },

    /// A dictionary code that is neither assigned nor next-to-assign.
    #[error("Invalid dictionary code {code} at offset {offset} (next code {next_code})")]
    InvalidCode {
        /// The offending code.
        code: u16,
        /// The code the dictionary would have assigned next.
        next_code: usize,
        /// Byte offset of the record in the encoded stream.
        offset: usize,
        /// Output decoded before the offending code.
        recovered: Vec<u8>,
    },

    /// Input is longer than a record header can describe.
    #[error("{transform}: input of {len} bytes exceeds the {max}-byte limit")]
    InputTooLarge {
        /// Name of the transform that rejected the input.
        transform: &'static str,
        /// Length of the input.
        len: usize,
        /// Largest accepted length.
        max: usize,
    },

    /// Rejected coder configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// Unknown transform or coder name.
    #[error("Unsupported method: {method}")]
    UnsupportedMethod {
        /// The name that could not be resolved.
        method: String,
    },

    /// The entropy backend could not be initialized.
    #[error("Backend could not start: {message}")]
    BackendInit {
        /// Backend-provided reason.
        message: String,
    },

    /// The entropy backend started but did not complete.
    #[error("Backend operation failed: {message}")]
    BackendFailed {
        /// Backend-provided reason.
        message: String,
    },
}

/// Result type alias for OxiForm operations.
pub type Result<T> = std::result::Result<T, OxiFormError>;

impl OxiFormError {
    /// Create an invalid index error.
    pub fn invalid_index(index: u32, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }

    /// Create a truncated trailer error.
    pub fn truncated_trailer(transform: &'static str, needed: usize, available: usize) -> Self {
        Self::TruncatedTrailer {
            transform,
            needed,
            available,
        }
    }

    /// Create a truncated block error.
    pub fn truncated_block(
        block: usize,
        needed: usize,
        available: usize,
        recovered: Vec<u8>,
    ) -> Self {
        Self::TruncatedBlock {
            block,
            needed,
            available,
            recovered,
        }
    }

    /// Create an invalid code error.
    pub fn invalid_code(code: u16, next_code: usize, offset: usize, recovered: Vec<u8>) -> Self {
        Self::InvalidCode {
            code,
            next_code,
            offset,
            recovered,
        }
    }

    /// Create an input too large error.
    pub fn input_too_large(transform: &'static str, len: usize, max: usize) -> Self {
        Self::InputTooLarge {
            transform,
            len,
            max,
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unsupported method error.
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Create a backend initialization error.
    pub fn backend_init(message: impl Into<String>) -> Self {
        Self::BackendInit {
            message: message.into(),
        }
    }

    /// Create a backend failure error.
    pub fn backend_failed(message: impl Into<String>) -> Self {
        Self::BackendFailed {
            message: message.into(),
        }
    }

    /// Partial output decoded before the failure, if this error carries one.
    pub fn recovered(&self) -> Option<&[u8]> {
        match self {
            Self::TruncatedBlock { recovered, .. } | Self::InvalidCode { recovered, .. } => {
                Some(recovered)
            }
            _ => None,
        }
    }

    /// Consume the error and take its partial output, if any.
    pub fn into_recovered(self) -> Option<Vec<u8>> {
        match self {
            Self::TruncatedBlock { recovered, .. } | Self::InvalidCode { recovered, .. } => {
                Some(recovered)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiFormError::invalid_index(9, 4);
        assert!(err.to_string().contains("rotation index 9"));

        let err = OxiFormError::truncated_trailer("complement", 1024, 10);
        assert_eq!(
            err.to_string(),
            "complement: trailer needs 1024 bytes, have 10"
        );

        let err = OxiFormError::input_too_large("bwt", 10, 4);
        assert_eq!(
            err.to_string(),
            "bwt: input of 10 bytes exceeds the 4-byte limit"
        );

        let err = OxiFormError::unsupported_method("lzma9");
        assert!(err.to_string().contains("lzma9"));
    }

    #[test]
    fn test_recovered_output() {
        let err = OxiFormError::invalid_code(700, 300, 12, vec![1, 2, 3]);
        assert_eq!(err.recovered(), Some(&[1u8, 2, 3][..]));
        assert_eq!(err.into_recovered(), Some(vec![1, 2, 3]));

        let err = OxiFormError::backend_failed("stream end not reached");
        assert!(err.recovered().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiFormError = io_err.into();
        assert!(matches!(err, OxiFormError::Io(_)));
    }
}
