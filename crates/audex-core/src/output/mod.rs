//! Output workspace management.
//!
//! Extracted tokens land in one directory, one text file per report,
//! named `{input_stem}_{report_suffix}.txt`. A full run destroys and
//! recreates the directory; nothing merges with previous output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::report::ReportType;

/// The directory extracted report files are written to.
pub struct OutputWorkspace {
    dir: PathBuf,
}

impl OutputWorkspace {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Delete the directory and its contents if it exists, then recreate
    /// it empty. Filesystem failures here are fatal to the run.
    pub fn reset(&self) -> Result<()> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)?;
            info!("removed '{}' and its contents", self.dir.display());
        } else {
            info!("'{}' does not exist, nothing to remove", self.dir.display());
        }
        self.ensure()
    }

    /// Create the directory (and parents) if it is missing.
    pub fn ensure(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
            info!("created '{}'", self.dir.display());
        }
        Ok(())
    }

    /// Output path for a given input file and report type:
    /// `{dir}/{input_stem}_{suffix}.txt`.
    pub fn output_path(&self, input: &Path, report: ReportType) -> PathBuf {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("report");
        self.dir.join(format!("{}_{}.txt", stem, report.suffix()))
    }

    /// Write tokens one per line, replacing any previous file.
    pub fn write_lines(&self, path: &Path, lines: &[String]) -> Result<()> {
        self.ensure()?;
        let mut out = BufWriter::new(File::create(path)?);
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}
