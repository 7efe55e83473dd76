//! Zstandard entropy backend.
//!
//! The last stage of most pipelines: after the reversible transforms have
//! reshaped the data, a general-purpose compressor removes what redundancy
//! is left. Failures are split into "could not start" and "did not finish".

use log::{debug, warn};
use oxiform_core::{OxiFormError, Result};
use std::io::{Read, Write};

/// Backend parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendConfig {
    /// Zstandard compression level.
    pub level: i32,
}

impl BackendConfig {
    /// Default configuration (level 6).
    pub const DEFAULT: Self = Self { level: 6 };

    /// Create a configuration with a validated level.
    pub fn new(level: i32) -> Result<Self> {
        let config = Self { level };
        config.validate()?;
        Ok(config)
    }

    /// Check the level against the range the linked zstd supports.
    pub fn validate(&self) -> Result<()> {
        let range = zstd::compression_level_range();
        if !range.contains(&self.level) {
            return Err(OxiFormError::invalid_config(format!(
                "zstd level {} outside {}..={}",
                self.level,
                range.start(),
                range.end()
            )));
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Compress a whole buffer into one zstd frame.
pub fn compress(data: &[u8], config: &BackendConfig) -> Result<Vec<u8>> {
    config.validate()?;

    let mut encoder = zstd::stream::Encoder::new(Vec::new(), config.level).map_err(|e| {
        warn!("zstd: encoder could not start: {}", e);
        OxiFormError::backend_init(e.to_string())
    })?;

    encoder
        .write_all(data)
        .map_err(|e| OxiFormError::backend_failed(e.to_string()))?;
    let output = encoder
        .finish()
        .map_err(|e| OxiFormError::backend_failed(e.to_string()))?;

    debug!(
        "zstd: {} -> {} bytes at level {}",
        data.len(),
        output.len(),
        config.level
    );
    Ok(output)
}

/// Decompress every zstd frame in `data`.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = zstd::stream::Decoder::new(data).map_err(|e| {
        warn!("zstd: decoder could not start: {}", e);
        OxiFormError::backend_init(e.to_string())
    })?;

    let mut output = Vec::new();
    decoder.read_to_end(&mut output).map_err(|e| {
        warn!("zstd: decoding stopped after {} bytes: {}", output.len(), e);
        OxiFormError::backend_failed(e.to_string())
    })?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let data = b"The quick brown fox jumps over the lazy dog. ".repeat(50);
        let compressed = compress(&data, &BackendConfig::DEFAULT).unwrap();
        assert!(compressed.len() < data.len() / 4);
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_empty_roundtrip() {
        let compressed = compress(b"", &BackendConfig::default()).unwrap();
        assert!(!compressed.is_empty());
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_level_validation() {
        assert!(BackendConfig::new(1).is_ok());
        assert!(BackendConfig::new(19).is_ok());
        assert!(BackendConfig::new(1000).is_err());

        let bad = BackendConfig { level: 1000 };
        assert!(matches!(
            compress(b"x", &bad),
            Err(OxiFormError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_garbage_fails() {
        let err = decompress(b"definitely not a zstd frame").unwrap_err();
        assert!(matches!(err, OxiFormError::BackendFailed { .. }));
    }
}
