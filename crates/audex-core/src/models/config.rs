//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the audex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudexConfig {
    /// Output workspace configuration.
    pub output: OutputConfig,

    /// Manager Flash classifier configuration.
    pub manager_flash: ManagerFlashConfig,

    /// Tax Exempt classifier configuration.
    pub tax_exempt: TaxExemptConfig,
}

impl Default for AudexConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            manager_flash: ManagerFlashConfig::default(),
            tax_exempt: TaxExemptConfig::default(),
        }
    }
}

/// Output workspace configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the extracted text files are written to.
    ///
    /// Relative paths are resolved by the caller; the CLI defaults this
    /// to `Audit Data Processing` on the desktop.
    pub dir: PathBuf,

    /// Destroy and recreate the output directory at the start of a full
    /// run instead of merging with previous output.
    pub clean_on_start: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("Audit Data Processing"),
            clean_on_start: true,
        }
    }
}

/// Manager Flash classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerFlashConfig {
    /// First report line carrying figures (1-indexed, inclusive).
    pub first_line: usize,

    /// Last report line carrying figures (1-indexed, inclusive).
    pub last_line: usize,

    /// Maximum characters kept per line before re-segmentation.
    pub max_width: usize,
}

impl Default for ManagerFlashConfig {
    fn default() -> Self {
        Self {
            first_line: 15,
            last_line: 42,
            max_width: 43,
        }
    }
}

/// Tax Exempt classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxExemptConfig {
    /// Number of header lines skipped before scanning begins.
    pub header_lines: usize,

    /// Which fixed-width column layout the report uses.
    pub layout: TaxExemptLayout,
}

impl Default for TaxExemptConfig {
    fn default() -> Self {
        Self {
            header_lines: 7,
            layout: TaxExemptLayout::Standard,
        }
    }
}

/// Fixed-width column layout variants seen across Tax Exempt reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxExemptLayout {
    /// Guest name in columns 0-40, price in 133-139.
    Standard,
    /// Guest name in columns 0-45, price in 129-136.
    Wide,
}

impl AudexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
