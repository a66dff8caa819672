//! Batch command - process many report PDFs of one type.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use audex_core::{OutputWorkspace, ReportType};

use super::ReportKind;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Report type for every matched file
    #[arg(short, long, value_enum)]
    report: ReportKind,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;
    let report: ReportType = args.report.into();

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let workspace = OutputWorkspace::new(super::resolve_output_dir(args.output_dir, &config));
    workspace.ensure()?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut failed: Vec<(PathBuf, String)> = Vec::new();

    for path in &files {
        match super::process_report(path, report, &workspace, &config) {
            Ok(_) => {}
            Err(e) => {
                if args.continue_on_error {
                    warn!("failed to process {}: {}", path.display(), e);
                    failed.push((path.clone(), e.to_string()));
                } else {
                    anyhow::bail!("Processing failed for {}: {}", path.display(), e);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        files.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(files.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for (path, error) in &failed {
            println!("  - {}: {}", path.display(), error);
        }
    }

    Ok(())
}
