//! Process command - extract one report PDF non-interactively.

use std::path::PathBuf;

use clap::Args;
use console::style;

use audex_core::report::{manager_flash, tax_exempt, trial_balance};
use audex_core::{read_first_page, OutputWorkspace, ReportType};

use super::ReportKind;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Report type
    #[arg(short, long, value_enum)]
    report: ReportKind,

    /// Output directory for the token file
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "lines")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Token-per-line text file in the output directory
    Lines,
    /// Typed records as JSON on stdout
    Json,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let report: ReportType = args.report.into();

    match args.format {
        OutputFormat::Lines => {
            let workspace =
                OutputWorkspace::new(super::resolve_output_dir(args.output_dir, &config));
            workspace.ensure()?;

            let path = super::process_report(&args.input, report, &workspace, &config)?;
            println!(
                "{} Data has been extracted and saved to {}",
                style("✓").green(),
                path.display()
            );
        }
        OutputFormat::Json => {
            let text = read_first_page(&args.input);
            let json = match report {
                ReportType::TrialBalance => {
                    serde_json::to_string_pretty(&trial_balance::line_items(&text))?
                }
                ReportType::ManagerFlash => serde_json::to_string_pretty(&manager_flash::blocks(
                    &text,
                    &config.manager_flash,
                ))?,
                ReportType::TaxExempt => {
                    serde_json::to_string_pretty(&tax_exempt::records(&text, &config.tax_exempt))?
                }
            };
            println!("{}", json);
        }
    }

    Ok(())
}
