//! Error types for the scoresheet library.
//!
//! The loader is the only stage allowed to fail hard: a byte stream that no
//! decoder path can read produces an [`Error`]. Every later stage signals
//! "nothing found" through empty values and the [`crate::model::Outcome`]
//! tag instead of an error.

use std::io;
use thiserror::Error;

/// Result type alias for scoresheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a document into line text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The PDF byte stream could not be decoded into text.
    #[error("PDF text extraction error: {0}")]
    PdfExtract(String),

    /// The DOCX container is not a readable ZIP archive.
    #[error("DOCX archive error: {0}")]
    DocxArchive(String),

    /// The DOCX document XML is malformed.
    #[error("DOCX document error: {0}")]
    DocxXml(String),

    /// The plain-text path received bytes that are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::PdfExtract(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::DocxArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::DocxXml(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DocxArchive("bad central directory".into());
        assert_eq!(err.to_string(), "DOCX archive error: bad central directory");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let bad = String::from_utf8(vec![0xFF, 0xFE, 0x00]);
        let err: Error = bad.unwrap_err().into();
        assert!(matches!(err, Error::Encoding(_)));
    }
}
