//! PDF text extraction using lopdf and pdf-extract.

use std::fs;
use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use crate::error::{PdfError, Result};

/// A loaded report PDF.
///
/// lopdf handles document structure (page count, encryption); the raw
/// bytes are kept for pdf-extract, which produces the flattened plain
/// text the classifiers consume.
pub struct ReportPdf {
    document: Document,
    raw_data: Vec<u8>,
}

impl ReportPdf {
    /// Open a report PDF from a file path.
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        Self::load(data)
    }

    /// Load a report PDF from bytes.
    pub fn load(data: Vec<u8>) -> Result<Self> {
        let mut doc = Document::load_mem(&data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let raw_data = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted.into());
            }
            debug!("decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages.into());
        }

        debug!("loaded PDF with {} pages", page_count);
        Ok(Self {
            document: doc,
            raw_data,
        })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    /// Extract text from the entire document.
    pub fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    /// Extract the first page's text.
    ///
    /// pdf-extract renders the whole document; the first page's portion
    /// is approximated as the leading share of lines.
    pub fn first_page_text(&self) -> Result<String> {
        let full_text = self.extract_text()?;
        let page_count = self.page_count() as usize;

        if page_count <= 1 {
            return Ok(full_text);
        }

        let lines: Vec<&str> = full_text.lines().collect();
        let lines_per_page = lines.len() / page_count;
        Ok(lines[..lines_per_page.min(lines.len())].join("\n"))
    }
}

/// Read the first page of a report PDF as plain text.
///
/// Total function: a missing or unreadable file is reported and yields an
/// empty string, so downstream classifiers produce zero records instead
/// of failing the run.
pub fn read_first_page(path: &Path) -> String {
    if !path.exists() {
        warn!("file '{}' does not exist", path.display());
        return String::new();
    }

    match ReportPdf::open(path).and_then(|pdf| pdf.first_page_text()) {
        Ok(text) => text,
        Err(e) => {
            warn!("could not extract text from '{}': {}", path.display(), e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_first_page_missing_file() {
        let text = read_first_page(Path::new("/nonexistent/report.pdf"));
        assert_eq!(text, "");
    }

    #[test]
    fn test_load_rejects_garbage() {
        assert!(ReportPdf::load(b"not a pdf".to_vec()).is_err());
    }
}
