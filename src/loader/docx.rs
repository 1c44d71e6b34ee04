//! DOCX text extraction.
//!
//! A DOCX file is a ZIP container with the body text in
//! `word/document.xml`. We stream that XML and keep only what matters for
//! table recovery: text runs, paragraph breaks, and enough spacing between
//! table cells that columns stay visually separated.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};

const DOCUMENT_ENTRY: &str = "word/document.xml";

/// Extract plain text from DOCX bytes.
pub fn extract_text(data: &[u8]) -> Result<String> {
    let xml = read_document_xml(data)?;
    flatten_document_xml(&xml)
}

fn read_document_xml(data: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut entry = archive
        .by_name(DOCUMENT_ENTRY)
        .map_err(|e| Error::DocxArchive(format!("{DOCUMENT_ENTRY}: {e}")))?;
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| Error::DocxXml(e.to_string()))?;
    Ok(xml)
}

/// Flatten WordprocessingML into line text.
///
/// Paragraphs end lines, except inside table cells where they become a
/// space; cell boundaries become a double space so fixed-width column
/// heuristics still see a gap; tabs widen to double spaces for the same
/// reason.
fn flatten_document_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut out = String::new();
    let mut in_text_run = false;
    let mut cell_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = true,
                b"w:tc" => cell_depth += 1,
                b"w:br" => out.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:br" | b"w:cr" => out.push('\n'),
                b"w:tab" => out.push_str("  "),
                _ => {}
            },
            Event::Text(t) => {
                if in_text_run {
                    out.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:tc" => {
                    cell_depth = cell_depth.saturating_sub(1);
                    out.push_str("  ");
                }
                b"w:tr" => out.push('\n'),
                b"w:p" => {
                    if cell_depth == 0 {
                        out.push('\n');
                    } else {
                        out.push(' ');
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    log::trace!("docx extraction produced {} chars", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_paragraphs() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>CLUB OLYMPIQUE</w:t></w:r></w:p>
            <w:p><w:r><w:t>7 A DUPONT</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let text = flatten_document_xml(xml).unwrap();
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines, vec!["CLUB OLYMPIQUE", "7 A DUPONT"]);
    }

    #[test]
    fn test_flatten_table_cells_keep_gap() {
        let xml = r#"<w:tbl><w:tr>
            <w:tc><w:p><w:r><w:t>POINTS</w:t></w:r></w:p></w:tc>
            <w:tc><w:p><w:r><w:t>SERVICE</w:t></w:r></w:p></w:tc>
        </w:tr></w:tbl>"#;
        let text = flatten_document_xml(xml).unwrap();
        let line = text.lines().next().unwrap();
        assert!(line.contains("POINTS"));
        assert!(line.contains("SERVICE"));
        // Cells separated by at least two spaces
        assert!(line.contains("POINTS  "), "got: {line:?}");
    }

    #[test]
    fn test_flatten_unescapes_entities() {
        let xml = "<w:p><w:r><w:t>A &amp; B</w:t></w:r></w:p>";
        let text = flatten_document_xml(xml).unwrap();
        assert!(text.contains("A & B"));
    }

    #[test]
    fn test_not_a_zip_is_error() {
        let result = extract_text(b"PK\x03\x04 truncated");
        assert!(result.is_err());
    }
}
