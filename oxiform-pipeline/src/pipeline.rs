//! Ordered chains of methods.
//!
//! A pipeline encodes by running its stages first to last and decodes by
//! running their inverses last to first. A typical chain is
//! `bwt, mtf, rle, zstd`.

use crate::backend::{self, BackendConfig};
use crate::method::Method;
use log::debug;
use oxiform_core::{OxiFormError, Result, Transform};
use oxiform_dict::{Lz77, Lz77Config};

/// Sizes seen by one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    /// Zero-based position of the stage in execution order.
    pub index: usize,
    /// Method the stage ran.
    pub method: Method,
    /// Bytes handed to the stage.
    pub input_len: usize,
    /// Bytes the stage produced.
    pub output_len: usize,
}

/// An ordered list of methods plus the settings of the configurable ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    methods: Vec<Method>,
    backend: BackendConfig,
    lz77: Lz77Config,
}

impl Pipeline {
    /// Create a pipeline with default stage settings.
    pub fn new(methods: Vec<Method>) -> Self {
        Self {
            methods,
            backend: BackendConfig::DEFAULT,
            lz77: Lz77Config::DEFAULT,
        }
    }

    /// Build a pipeline from method names.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let methods = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Method>>>()?;
        Ok(Self::new(methods))
    }

    /// Replace the backend settings.
    pub fn with_backend(mut self, backend: BackendConfig) -> Result<Self> {
        backend.validate()?;
        self.backend = backend;
        Ok(self)
    }

    /// Replace the sliding-window settings.
    pub fn with_lz77(mut self, lz77: Lz77Config) -> Result<Self> {
        lz77.validate()?;
        self.lz77 = lz77;
        Ok(self)
    }

    /// Stages in encode order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Backend settings.
    pub fn backend(&self) -> &BackendConfig {
        &self.backend
    }

    /// Check whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    fn encode_stage(&self, method: Method, input: &[u8]) -> Result<Vec<u8>> {
        match method {
            Method::Zstd => backend::compress(input, &self.backend),
            Method::Lz77 => Lz77::with_config(self.lz77)?.encode(input),
            other => other.encode(input),
        }
    }

    /// Encode through every stage, reporting each one as it finishes.
    pub fn encode_with<F>(&self, input: &[u8], mut on_stage: F) -> Result<Vec<u8>>
    where
        F: FnMut(StageReport),
    {
        let mut data = input.to_vec();
        for (index, &method) in self.methods.iter().enumerate() {
            let output = self.encode_stage(method, &data)?;
            debug!("encode {}: {} -> {} bytes", method, data.len(), output.len());
            on_stage(StageReport {
                index,
                method,
                input_len: data.len(),
                output_len: output.len(),
            });
            data = output;
        }
        Ok(data)
    }

    /// Decode through every stage in reverse, reporting each one.
    ///
    /// A stage failure is returned as-is, so any partial output it carries
    /// belongs to that stage, not to the whole pipeline.
    pub fn decode_with<F>(&self, input: &[u8], mut on_stage: F) -> Result<Vec<u8>>
    where
        F: FnMut(StageReport),
    {
        let mut data = input.to_vec();
        for (index, &method) in self.methods.iter().rev().enumerate() {
            let output = method
                .decode(&data)
                .inspect_err(|e| debug!("decode {} failed: {}", method, e))?;
            debug!("decode {}: {} -> {} bytes", method, data.len(), output.len());
            on_stage(StageReport {
                index,
                method,
                input_len: data.len(),
                output_len: output.len(),
            });
            data = output;
        }
        Ok(data)
    }

    /// Run the pipeline forward and back, returning whether `input` survived.
    pub fn verify(&self, input: &[u8]) -> Result<bool> {
        let encoded = self.encode(input)?;
        Ok(self.decode(&encoded)? == input)
    }
}

impl Transform for Pipeline {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.encode_with(input, |_| {})
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decode_with(input, |_| {})
    }
}

impl std::str::FromStr for Pipeline {
    type Err = OxiFormError;

    /// Parse a comma-separated chain such as `"bwt,mtf,rle"`.
    fn from_str(s: &str) -> Result<Self> {
        let names: Vec<&str> = s.split(',').filter(|n| !n.trim().is_empty()).collect();
        Self::parse(&names)
    }
}
