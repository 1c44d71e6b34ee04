//! Text loader: document bytes to a layout-preserving line corpus.
//!
//! This is the only stage of the pipeline that can fail hard. A buffer that
//! no decoder path can read (corrupt archive, broken PDF stream, invalid
//! UTF-8 on the plain path) produces an [`Error`]; everything downstream
//! degrades instead of erroring.

mod docx;
mod pdf;

use crate::detect::{detect_format, DocFormat};
use crate::error::Result;
use crate::model::LineCorpus;

/// Decode raw document bytes into a [`LineCorpus`].
///
/// The format is picked from the magic bytes: `PK` routes to DOCX text
/// extraction, `%PDF` to layout-approximate PDF extraction, everything else
/// is read as UTF-8 plain text.
pub fn load_bytes(data: &[u8]) -> Result<LineCorpus> {
    let format = detect_format(data);
    let text = match format {
        DocFormat::Docx => docx::extract_text(data)?,
        DocFormat::Pdf => pdf::extract_text(data)?,
        DocFormat::Plain => String::from_utf8(data.to_vec())?,
    };
    let corpus = LineCorpus::from_text(format, &text);
    log::debug!(
        "loaded {} document: {} bytes -> {} lines",
        format,
        data.len(),
        corpus.len()
    );
    Ok(corpus)
}
