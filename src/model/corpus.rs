//! Line corpus produced by the text loader.

use serde::{Deserialize, Serialize};

use crate::detect::DocFormat;

/// Ordered sequence of text lines extracted from a document.
///
/// Immutable once produced; every later stage works on index ranges into
/// this corpus rather than copying line text around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineCorpus {
    /// Format the source bytes were decoded as.
    pub format: DocFormat,
    lines: Vec<String>,
}

impl LineCorpus {
    /// Build a corpus from already-extracted text.
    pub fn from_text(format: DocFormat, text: &str) -> Self {
        Self {
            format,
            lines: text.lines().map(|l| l.to_string()).collect(),
        }
    }

    /// All lines in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at `index`, or `None` past the end.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|s| s.as_str())
    }

    /// Number of lines in the corpus.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the corpus holds no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let corpus = LineCorpus::from_text(DocFormat::Plain, "a\nb\n\nc");
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.line(0), Some("a"));
        assert_eq!(corpus.line(2), Some(""));
        assert_eq!(corpus.line(4), None);
    }

    #[test]
    fn test_empty() {
        let corpus = LineCorpus::from_text(DocFormat::Plain, "");
        assert!(corpus.is_empty());
        assert_eq!(corpus.line(0), None);
    }
}
