//! Run command - interactive session over all three report types.

use std::path::PathBuf;

use clap::Args;
use console::{style, Term};

use audex_core::{OutputWorkspace, ReportType};

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Output directory (default: "Audit Data Processing" on the desktop)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

pub fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let workspace = OutputWorkspace::new(super::resolve_output_dir(args.output_dir, &config));

    // Previous output is never merged with.
    if config.output.clean_on_start {
        workspace.reset()?;
    } else {
        workspace.ensure()?;
    }

    let term = Term::stdout();

    for report in ReportType::ALL {
        term.write_str(&format!(
            "Enter the file location for {} PDF: ",
            report.label()
        ))?;
        let input = term.read_line()?;
        let input = input.trim();

        if input.is_empty() {
            println!(
                "{} No path given, skipping {}.",
                style("ℹ").blue(),
                report.label()
            );
            continue;
        }

        let output_path =
            super::process_report(&PathBuf::from(input), report, &workspace, &config)?;
        println!(
            "{} {} data has been extracted and saved to {}",
            style("✓").green(),
            report.label(),
            output_path.display()
        );
    }

    Ok(())
}
