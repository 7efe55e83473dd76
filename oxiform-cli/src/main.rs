//! OxiForm CLI - The Oxidized Transformer
//!
//! Runs files through chains of reversible transforms, dictionary coders
//! and the Zstandard backend.

mod commands;
mod utils;

use clap::{Args, Parser, Subcommand};
use commands::{Direction, cmd_convert, cmd_list, cmd_test};
use oxiform_dict::Lz77Config;
use oxiform_pipeline::{BackendConfig, Method, Pipeline};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxiform")]
#[command(
    author,
    version,
    about = "The Oxidized Transformer - reversible byte transforms and dictionary coders"
)]
#[command(long_about = "
OxiForm runs a file through an ordered chain of methods. Encoding applies
them first to last; decoding must be given the same chain and applies the
inverses last to first.

Examples:
  oxiform list
  oxiform encode -m bwt -m mtf -m rle -m zstd input.txt input.oxf
  oxiform decode -m bwt,mtf,rle,zstd input.oxf restored.txt
  oxiform test -m pb,lzw input.txt
")]
struct Cli {
    /// Log stage details (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Method chain and stage settings shared by encode, decode and test.
#[derive(Args)]
struct PipelineArgs {
    /// Methods in encode order (repeatable or comma-separated)
    #[arg(short, long = "method", required = true, value_delimiter = ',')]
    methods: Vec<Method>,

    /// Zstandard level for the zstd stage
    #[arg(short, long)]
    level: Option<i32>,

    /// Search window of the lz77 stage
    #[arg(long)]
    window: Option<usize>,

    /// Maximum match length of the lz77 stage
    #[arg(long)]
    lookahead: Option<usize>,
}

impl PipelineArgs {
    fn build(&self) -> Result<Pipeline, Box<dyn std::error::Error>> {
        let mut pipeline = Pipeline::new(self.methods.clone());
        if let Some(level) = self.level {
            pipeline = pipeline.with_backend(BackendConfig::new(level)?)?;
        }
        if self.window.is_some() || self.lookahead.is_some() {
            let config = Lz77Config::new(
                self.window.unwrap_or(Lz77Config::DEFAULT.window_size),
                self.lookahead.unwrap_or(Lz77Config::DEFAULT.lookahead),
            )?;
            pipeline = pipeline.with_lz77(config)?;
        }
        Ok(pipeline)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file through a method chain
    #[command(alias = "e")]
    Encode {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Input file
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Show a per-stage progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Decode a file produced with the same method chain
    #[command(alias = "d")]
    Decode {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Input file
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Show a per-stage progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Check that a file survives a round trip in memory
    #[command(alias = "t")]
    Test {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// File to test
        input: PathBuf,
    },

    /// List available methods
    #[command(alias = "l")]
    List {
        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let verbose = cli.verbose;
    match cli.command {
        Commands::Encode {
            pipeline,
            input,
            output,
            progress,
        } => {
            let pipeline = pipeline.build()?;
            cmd_convert(&input, &output, &pipeline, Direction::Encode, verbose, progress)?;
        }
        Commands::Decode {
            pipeline,
            input,
            output,
            progress,
        } => {
            let pipeline = pipeline.build()?;
            cmd_convert(&input, &output, &pipeline, Direction::Decode, verbose, progress)?;
        }
        Commands::Test { pipeline, input } => {
            cmd_test(&input, &pipeline.build()?, verbose)?;
        }
        Commands::List { json } => cmd_list(json)?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_repeated_and_comma_methods() {
        let cli = Cli::parse_from([
            "oxiform", "encode", "-m", "bwt,mtf", "-m", "RLE", "in.txt", "out.oxf",
        ]);
        match cli.command {
            Commands::Encode { pipeline, .. } => {
                assert_eq!(pipeline.methods, vec![Method::Bwt, Method::Mtf, Method::Rle]);
            }
            _ => panic!("expected encode"),
        }
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert!(Cli::try_parse_from(["oxiform", "test", "-m", "lzma", "in.txt"]).is_err());
    }

    #[test]
    fn test_pipeline_settings() {
        let cli = Cli::parse_from([
            "oxiform", "test", "-m", "lz77,zstd", "--level", "3", "--window", "1024", "in.txt",
        ]);
        let Commands::Test { pipeline, .. } = cli.command else {
            panic!("expected test");
        };
        let built = pipeline.build().unwrap();
        assert_eq!(built.backend().level, 3);
        assert_eq!(built.methods(), &[Method::Lz77, Method::Zstd]);
    }

    #[test]
    fn test_invalid_lookahead_rejected() {
        let cli = Cli::parse_from(["oxiform", "test", "-m", "lz77", "--lookahead", "999", "x"]);
        let Commands::Test { pipeline, .. } = cli.command else {
            panic!("expected test");
        };
        assert!(pipeline.build().is_err());
    }
}
