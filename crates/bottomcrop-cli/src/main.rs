//! `bottomcrop` - shave the bottom 12% off an image.
//!
//! ```text
//! bottomcrop scan.png scan_cropped.png
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use bottomcrop_core::{crop_bottom, CropSummary};
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "bottomcrop",
    version,
    about = "Keep the top 88% of an image and write it to a new file"
)]
struct Cli {
    /// Image to read; the format is detected from its content
    input: PathBuf,

    /// Where to write the cropped image; the extension selects the format
    output: PathBuf,

    /// Log more detail (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy("");

    // a subscriber may already be installed when run from tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Process exit status for a finished run: 0 on success, 1 on any failure.
fn exit_status<T>(result: &anyhow::Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn run(cli: &Cli) -> anyhow::Result<CropSummary> {
    crop_bottom(&cli.input, &cli.output).with_context(|| {
        format!(
            "could not crop {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let result = run(&cli);
    match &result {
        Ok(summary) => tracing::debug!(?summary, "done"),
        Err(err) => eprintln!("error: {err:#}"),
    }
    ExitCode::from(exit_status(&result))
}
