//! Whole-file driver.
//!
//! Files are read into memory in one piece, run through a [`Pipeline`] and
//! written back in one piece. Output goes to a hidden sibling first and is
//! renamed into place only after the write succeeded, so a failed run never
//! leaves a partial output file behind.

use crate::pipeline::{Pipeline, StageReport};
use log::{debug, warn};
use oxiform_core::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Sizes of one file conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileStats {
    /// Bytes read from the input file.
    pub input_len: usize,
    /// Bytes written to the output file.
    pub output_len: usize,
}

impl FileStats {
    /// Output size as a percentage of the input size.
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            0.0
        } else {
            (self.output_len as f64 / self.input_len as f64) * 100.0
        }
    }
}

/// Read a whole file into memory.
pub fn read_whole_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = fs::read(path).inspect_err(|e| warn!("cannot read {}: {}", path.display(), e))?;
    debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.oxiform-tmp", name))
}

/// Write a whole buffer to `path`, replacing any existing file.
pub fn write_whole_file(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp = temp_sibling(path);

    let written = fs::write(&temp, data).and_then(|()| fs::rename(&temp, path));
    if let Err(e) = written {
        warn!("cannot write {}: {}", path.display(), e);
        let _ = fs::remove_file(&temp);
        return Err(e.into());
    }

    debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

fn convert_file(
    input: &Path,
    output: &Path,
    run: impl FnOnce(&[u8]) -> Result<Vec<u8>>,
) -> Result<FileStats> {
    let data = read_whole_file(input)?;
    let result = run(&data)?;
    write_whole_file(output, &result)?;
    Ok(FileStats {
        input_len: data.len(),
        output_len: result.len(),
    })
}

/// Encode `input` through `pipeline` into `output`.
pub fn encode_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    pipeline: &Pipeline,
) -> Result<FileStats> {
    encode_file_with(input, output, pipeline, |_| {})
}

/// Decode `input` through `pipeline` into `output`.
pub fn decode_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    pipeline: &Pipeline,
) -> Result<FileStats> {
    decode_file_with(input, output, pipeline, |_| {})
}

/// Like [`encode_file`], calling `on_stage` after every completed stage.
pub fn encode_file_with<F>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    pipeline: &Pipeline,
    on_stage: F,
) -> Result<FileStats>
where
    F: FnMut(StageReport),
{
    convert_file(input.as_ref(), output.as_ref(), |data| {
        pipeline.encode_with(data, on_stage)
    })
}

/// Like [`decode_file`], calling `on_stage` after every completed stage.
pub fn decode_file_with<F>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    pipeline: &Pipeline,
    on_stage: F,
) -> Result<FileStats>
where
    F: FnMut(StageReport),
{
    convert_file(input.as_ref(), output.as_ref(), |data| {
        pipeline.decode_with(data, on_stage)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;
    use oxiform_core::OxiFormError;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");

        write_whole_file(&path, b"payload").unwrap();
        assert_eq!(read_whole_file(&path).unwrap(), b"payload");
        assert!(!temp_sibling(&path).exists());

        write_whole_file(&path, b"new").unwrap();
        assert_eq!(read_whole_file(&path).unwrap(), b"new");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_whole_file(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, OxiFormError::Io(_)));
    }

    #[test]
    fn test_failed_decode_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.bin");
        fs::write(&input, b"too short for a key").unwrap();

        let pipeline = Pipeline::new(vec![Method::Complement]);
        assert!(decode_file(&input, &output, &pipeline).is_err());
        assert!(!output.exists());
        assert!(!temp_sibling(&output).exists());
    }

    #[test]
    fn test_file_stage_reports() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let packed = dir.path().join("in.oxf");
        let restored = dir.path().join("out.bin");
        let data = b"stage by stage ".repeat(40);
        fs::write(&input, &data).unwrap();

        let pipeline = Pipeline::new(vec![Method::Bwt, Method::Mtf, Method::Rle]);
        let mut encoded_stages = Vec::new();
        let stats = encode_file_with(&input, &packed, &pipeline, |r| encoded_stages.push(r.method))
            .unwrap();
        assert_eq!(encoded_stages, vec![Method::Bwt, Method::Mtf, Method::Rle]);
        assert_eq!(stats.input_len, data.len());

        let mut decoded_stages = Vec::new();
        decode_file_with(&packed, &restored, &pipeline, |r| decoded_stages.push(r.method))
            .unwrap();
        assert_eq!(decoded_stages, vec![Method::Rle, Method::Mtf, Method::Bwt]);
        assert_eq!(fs::read(&restored).unwrap(), data);
    }

    #[test]
    fn test_stats_ratio() {
        let stats = FileStats {
            input_len: 200,
            output_len: 50,
        };
        assert!((stats.ratio() - 25.0).abs() < f64::EPSILON);
        assert_eq!(
            FileStats {
                input_len: 0,
                output_len: 0
            }
            .ratio(),
            0.0
        );
    }
}
