//! PDF text extraction.

use crate::error::Result;

/// Extract text from PDF bytes.
///
/// `pdf-extract` walks the content streams and emits tokens sorted by page
/// position, separated by single spaces within a line and newlines between
/// lines. The result is only layout-approximate, which is exactly what the
/// downstream heuristics are built for.
pub fn extract_text(data: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(data)?;
    log::trace!("pdf extraction produced {} chars", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_pdf_is_error() {
        // Valid magic, no body worth parsing
        let result = extract_text(b"%PDF-1.4\nnot really a pdf");
        assert!(result.is_err());
    }
}
