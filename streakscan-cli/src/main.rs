//!
//! This binary batch-inspects streak-camera detector logs: per `.h5`
//! file it reports the capture time, writes the hierarchy summary CSV,
//! and renders the median-filtered streak image to PNG.

use clap::Parser;
use env_logger::{Builder, Env};
use log::warn;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use streakscan_core::{median_filter, CaptureTime};
use streakscan_io::{render_png, write_summary, DetectorLog, StreakPaths, IMAGE_TITLE};

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Batch inspector for streak-camera detector logs.
#[derive(Parser)]
#[command(name = "streakscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing .h5 detector logs
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Hierarchy summary output path; overwritten per processed file
    /// unless --per-file is given
    #[arg(long, default_value = "data_hierarchy.csv")]
    summary_out: PathBuf,

    /// Rendered image output path; overwritten per processed file
    /// unless --per-file is given
    #[arg(long, default_value = "streak_image.png")]
    image_out: PathBuf,

    /// Prefix artifact names with each source file's stem instead of
    /// overwriting the shared outputs
    #[arg(long)]
    per_file: bool,
}

fn main() -> Result<()> {
    // caught per-file failures are reported at warn level
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let logs = list_logs(&cli.directory)?;
    if logs.is_empty() {
        println!("No .h5 files found in {}", cli.directory.display());
        return Ok(());
    }

    for path in &logs {
        process_log(&cli, path);
    }
    Ok(())
}

/// Candidate logs: regular files in `dir` with an `.h5` suffix, sorted
/// by name for a deterministic batch order.
fn list_logs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut logs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(OsStr::to_str) == Some("h5") {
            logs.push(path);
        }
    }
    logs.sort();
    Ok(logs)
}

/// Runs the three inspection steps on one log. Each step's failure is
/// reported and the remaining steps still run; the batch never stops
/// on a single file.
fn process_log(cli: &Cli, path: &Path) {
    step_banner("STEP 1");
    let filename = path
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    match CaptureTime::from_filename(filename) {
        Ok(time) => {
            println!("The UTC time is {}", time.utc);
            println!("Time in Europe/Zurich is {}", time.local);
        }
        Err(e) => warn!("{}: {e}", path.display()),
    }

    let log = match DetectorLog::open(path) {
        Ok(log) => log,
        Err(e) => {
            warn!("cannot open {}: {e}", path.display());
            return;
        }
    };

    step_banner("STEP 2");
    match log.hierarchy() {
        Ok(rows) => {
            let out = artifact_path(&cli.summary_out, path, cli.per_file);
            match write_summary(&out, &rows) {
                Ok(()) => println!("Data hierarchy is stored in {}", out.display()),
                Err(e) => warn!("summary for {}: {e}", path.display()),
            }
        }
        Err(e) => warn!("hierarchy walk failed for {}: {e}", path.display()),
    }

    step_banner("STEP 3");
    match log.streak(&StreakPaths::default()) {
        Ok(grid) => {
            let filtered = median_filter(&grid);
            let out = artifact_path(&cli.image_out, path, cli.per_file);
            match render_png(&filtered, &out) {
                Ok(()) => println!("{IMAGE_TITLE} is saved as {}", out.display()),
                Err(e) => warn!("render failed for {}: {e}", path.display()),
            }
        }
        // an unusable streak image skips filtering and rendering
        Err(e) => warn!("streak extraction failed for {}: {e}", path.display()),
    }

    step_banner("FINISHED");
}

/// Output location for one artifact. With `per_file` the name gains the
/// source file's stem so sibling logs do not overwrite each other.
fn artifact_path(base: &Path, source: &Path, per_file: bool) -> PathBuf {
    if !per_file {
        return base.to_path_buf();
    }
    let stem = source
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("log");
    let name = base
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    base.with_file_name(format!("{stem}_{name}"))
}

fn step_banner(label: &str) {
    let stars = "*".repeat(46);
    println!("{stars} |{label}| {stars}");
}
