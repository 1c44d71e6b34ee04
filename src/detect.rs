//! Document format detection from magic bytes.
//!
//! Detection is total: anything that is neither a ZIP container nor a PDF is
//! treated as plain UTF-8 text, so the loader decides how hard to try, not
//! the detector.

use serde::{Deserialize, Serialize};

/// ZIP local-file-header magic, shared by DOCX and every other OOXML container.
const ZIP_MAGIC: &[u8] = b"PK";

/// PDF header magic.
const PDF_MAGIC: &[u8] = b"%PDF";

/// Detected source format of a document byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocFormat {
    /// PDF document, extracted with a layout-approximate strategy.
    Pdf,
    /// OOXML word-processing container.
    Docx,
    /// Anything else, decoded as UTF-8 text.
    Plain,
}

impl std::fmt::Display for DocFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocFormat::Pdf => write!(f, "pdf"),
            DocFormat::Docx => write!(f, "docx"),
            DocFormat::Plain => write!(f, "plain"),
        }
    }
}

/// Detect the document format from the leading magic bytes.
///
/// # Example
/// ```
/// use scoresheet::detect::{detect_format, DocFormat};
///
/// assert_eq!(detect_format(b"%PDF-1.7\n"), DocFormat::Pdf);
/// assert_eq!(detect_format(b"PK\x03\x04"), DocFormat::Docx);
/// assert_eq!(detect_format(b"CLUB OLYMPIQUE"), DocFormat::Plain);
/// ```
pub fn detect_format(data: &[u8]) -> DocFormat {
    if data.starts_with(ZIP_MAGIC) {
        DocFormat::Docx
    } else if data.starts_with(PDF_MAGIC) {
        DocFormat::Pdf
    } else {
        DocFormat::Plain
    }
}

/// Check whether the bytes look like a PDF document.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_format(data) == DocFormat::Pdf
}

/// Check whether the bytes look like a DOCX container.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format(data) == DocFormat::Docx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf() {
        assert_eq!(detect_format(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3"), DocFormat::Pdf);
        assert!(is_pdf_bytes(b"%PDF-2.0\n"));
    }

    #[test]
    fn test_detect_docx() {
        assert_eq!(detect_format(b"PK\x03\x04rest"), DocFormat::Docx);
        assert!(is_docx_bytes(b"PK\x03\x04"));
    }

    #[test]
    fn test_detect_plain_fallback() {
        assert_eq!(detect_format(b"just some text"), DocFormat::Plain);
        assert_eq!(detect_format(b""), DocFormat::Plain);
        // A truncated magic is not a match
        assert_eq!(detect_format(b"%PD"), DocFormat::Plain);
        assert_eq!(detect_format(b"P"), DocFormat::Plain);
    }

    #[test]
    fn test_display() {
        assert_eq!(DocFormat::Pdf.to_string(), "pdf");
        assert_eq!(DocFormat::Docx.to_string(), "docx");
        assert_eq!(DocFormat::Plain.to_string(), "plain");
    }
}
