//! Team block: a contiguous line range belonging to one team's table.

use serde::{Deserialize, Serialize};

use super::LineCorpus;

/// Contiguous sub-range `[start, end)` of a [`LineCorpus`] holding one
/// team's statistics table.
///
/// An empty block (team header never found) is a valid, non-error value.
/// For a non-empty block, the line at `start` satisfies the team-header
/// predicate that located it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBlock {
    /// First line of the block (the team header line).
    pub start: usize,
    /// One past the last line of the block.
    pub end: usize,
}

impl TeamBlock {
    /// Block covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The empty block, used when no team header matched.
    pub fn empty() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Whether the block covers no lines.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// The block's lines within `corpus`, in order.
    pub fn lines<'a>(&self, corpus: &'a LineCorpus) -> &'a [String] {
        let end = self.end.min(corpus.len());
        let start = self.start.min(end);
        &corpus.lines()[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::DocFormat;

    #[test]
    fn test_empty_block() {
        let block = TeamBlock::empty();
        assert!(block.is_empty());
        assert_eq!(block.len(), 0);
    }

    #[test]
    fn test_lines_clamped_to_corpus() {
        let corpus = LineCorpus::from_text(DocFormat::Plain, "a\nb\nc");
        let block = TeamBlock::new(1, 10);
        assert_eq!(block.lines(&corpus), &["b".to_string(), "c".to_string()]);
    }
}
