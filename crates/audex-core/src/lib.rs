//! Core library for night-audit report data extraction.
//!
//! This crate provides:
//! - PDF first-page text recovery (layout-flattened plain text)
//! - Line classifiers for the three fixed-layout reports
//!   (Trial Balance, Manager Flash, Tax Exempt)
//! - Output workspace management (token-per-line text files)

pub mod error;
pub mod models;
pub mod output;
pub mod pdf;
pub mod report;

pub use error::{AudexError, Result};
pub use models::config::AudexConfig;
pub use models::record::{FlashBlock, LineItem, TaxExemptRecord};
pub use output::OutputWorkspace;
pub use pdf::{read_first_page, ReportPdf};
pub use report::{extract_report, ReportType};
