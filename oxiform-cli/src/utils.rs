//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxiform_pipeline::{FileStats, StageReport};

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}

/// Format a byte count for humans.
pub fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Advance the stage bar and optionally print the stage sizes.
pub fn report_stage(pb: &ProgressBar, report: &StageReport, verbose: bool) {
    pb.set_message(report.method.to_string());
    pb.inc(1);
    if verbose {
        pb.println(format!(
            "  {:>2}. {:<10} {:>10} -> {:>10}",
            report.index + 1,
            report.method.to_string(),
            format_size(report.input_len),
            format_size(report.output_len),
        ));
    }
}

/// Print the summary line for a converted file.
pub fn print_stats(action: &str, stats: &FileStats) {
    println!(
        "{}: {} -> {} ({:.1}%)",
        action,
        format_size(stats.input_len),
        format_size(stats.output_len),
        stats.ratio()
    );
}
