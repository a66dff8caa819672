//! PDF processing module.

mod extractor;

pub use extractor::{read_first_page, ReportPdf};
