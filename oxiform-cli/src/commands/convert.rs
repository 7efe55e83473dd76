//! Encode and decode command implementation.

use crate::utils::{create_progress_bar, print_stats, report_stage};
use oxiform_pipeline::{FileStats, Pipeline, decode_file_with, encode_file_with};
use std::path::Path;

/// Which way to run the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Apply the stages in order.
    Encode,
    /// Apply the inverse stages in reverse order.
    Decode,
}

pub fn cmd_convert(
    input: &Path,
    output: &Path,
    pipeline: &Pipeline,
    direction: Direction,
    verbose: bool,
    progress: bool,
) -> Result<FileStats, Box<dyn std::error::Error>> {
    let pb = create_progress_bar(pipeline.methods().len() as u64, progress);
    let on_stage = |report| report_stage(&pb, &report, verbose);
    let result = match direction {
        Direction::Encode => encode_file_with(input, output, pipeline, on_stage),
        Direction::Decode => decode_file_with(input, output, pipeline, on_stage),
    };
    pb.finish_and_clear();

    let stats = result.inspect_err(|e| {
        if let Some(partial) = e.recovered() {
            log::warn!("{} bytes were recovered before the failure", partial.len());
        }
    })?;

    let action = match direction {
        Direction::Encode => "Encoded",
        Direction::Decode => "Decoded",
    };
    print_stats(action, &stats);

    Ok(stats)
}
