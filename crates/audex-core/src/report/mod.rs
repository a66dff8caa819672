//! Line classifiers for the three fixed-layout reports.
//!
//! Each classifier is a pure function from the flattened first-page text
//! to an ordered sequence of output tokens; input line order is always
//! preserved. Malformed lines are skipped, never fatal.

mod lines;
pub mod manager_flash;
pub mod patterns;
pub mod tax_exempt;
pub mod trial_balance;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::config::AudexConfig;

/// The supported report types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    TrialBalance,
    ManagerFlash,
    TaxExempt,
}

impl ReportType {
    /// All report types, in the order a full run processes them.
    pub const ALL: [ReportType; 3] = [
        ReportType::TrialBalance,
        ReportType::ManagerFlash,
        ReportType::TaxExempt,
    ];

    /// Suffix used in output file names.
    pub fn suffix(&self) -> &'static str {
        match self {
            ReportType::TrialBalance => "Trial_Balance",
            ReportType::ManagerFlash => "Manager_Flash",
            ReportType::TaxExempt => "Tax_Exempt",
        }
    }

    /// Human-readable name for prompts and notices.
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::TrialBalance => "Trial Balance",
            ReportType::ManagerFlash => "Manager Flash",
            ReportType::TaxExempt => "Tax Exempt",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify report text into output tokens, one per line.
///
/// Dispatching here keeps the shared plumbing (extraction, writing)
/// unaware of individual report layouts; a new report type only needs a
/// classifier module and an enum variant.
pub fn extract_report(report: ReportType, text: &str, config: &AudexConfig) -> Vec<String> {
    match report {
        ReportType::TrialBalance => trial_balance::extract(text),
        ReportType::ManagerFlash => manager_flash::extract(text, &config.manager_flash),
        ReportType::TaxExempt => tax_exempt::extract(text, &config.tax_exempt),
    }
}
