/*!
 * Command-line interface for dumpmd
 */

use std::fs::{self, File};
use std::io::BufWriter;
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use dumpmd::config::{Args, Config};
use dumpmd::report::{Reporter, ScanReport};
use dumpmd::scanner::Scanner;
use dumpmd::settings::Settings;
use dumpmd::writer::MarkdownWriter;
use dumpmd::Result;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    setup_logging();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    // Create and validate configuration
    let config = Config::from_args(args)?;
    config.validate()?;

    let settings = Settings::load()?;

    let progress = ProgressBar::new_spinner();
    match ProgressStyle::default_spinner()
        .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos} files")
    {
        Ok(style) => progress.set_style(style),
        Err(e) => tracing::warn!("Invalid progress template: {}", e),
    }
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("Processing");
    progress.set_message(format!("Scanning directory: {}", config.target_dir.display()));

    let output_file = std::path::absolute(&config.output_file)?;
    let file = File::create(&output_file)?;
    let mut writer = MarkdownWriter::new(BufWriter::new(file));

    let start_time = Instant::now();

    let mut scanner = Scanner::new(config, settings, Arc::new(progress.clone()));
    scanner.scan(&mut writer)?;
    writer.finish()?;

    let duration = start_time.elapsed();
    progress.finish_and_clear();

    let report = ScanReport {
        output_file: output_file.display().to_string(),
        output_size: fs::metadata(&output_file).map(|m| m.len()).unwrap_or(0),
        duration,
        statistics: scanner.statistics().clone(),
    };
    Reporter::new().print_report(&report);

    Ok(())
}
