//! CLI subcommands and shared plumbing.

pub mod batch;
pub mod config;
pub mod process;
pub mod run;

use std::path::{Path, PathBuf};

use tracing::debug;

use audex_core::{extract_report, read_first_page, AudexConfig, OutputWorkspace, ReportType};

/// Report type as a CLI argument.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ReportKind {
    /// Trial Balance report
    TrialBalance,
    /// Manager Flash report
    ManagerFlash,
    /// Tax Exempt report
    TaxExempt,
}

impl From<ReportKind> for ReportType {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::TrialBalance => ReportType::TrialBalance,
            ReportKind::ManagerFlash => ReportType::ManagerFlash,
            ReportKind::TaxExempt => ReportType::TaxExempt,
        }
    }
}

/// Default config file location: `{config_dir}/audex/config.json`.
pub(crate) fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("audex")
        .join("config.json")
}

/// Load configuration from an explicit path, the default location, or
/// fall back to defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<AudexConfig> {
    if let Some(path) = config_path {
        return Ok(AudexConfig::from_file(Path::new(path))?);
    }

    let default = default_config_path();
    if default.exists() {
        Ok(AudexConfig::from_file(&default)?)
    } else {
        Ok(AudexConfig::default())
    }
}

/// Resolve the output directory: CLI flag wins, then an absolute config
/// path, then the configured directory name on the desktop.
pub(crate) fn resolve_output_dir(cli_dir: Option<PathBuf>, config: &AudexConfig) -> PathBuf {
    if let Some(dir) = cli_dir {
        return dir;
    }
    if config.output.dir.is_absolute() {
        return config.output.dir.clone();
    }
    desktop_dir().join(&config.output.dir)
}

fn desktop_dir() -> PathBuf {
    dirs::desktop_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Desktop")
    })
}

/// Extract one report and write its token file.
///
/// A missing or unreadable input yields an empty text blob, so an empty
/// output file is written and the run continues.
pub(crate) fn process_report(
    input: &Path,
    report: ReportType,
    workspace: &OutputWorkspace,
    config: &AudexConfig,
) -> anyhow::Result<PathBuf> {
    let text = read_first_page(input);
    let lines = extract_report(report, &text, config);

    let path = workspace.output_path(input, report);
    workspace.write_lines(&path, &lines)?;

    debug!("wrote {} tokens to {}", lines.len(), path.display());
    Ok(path)
}
