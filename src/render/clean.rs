//! Cleaned plain-text rendering of a team block.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{LineCorpus, TeamBlock};

/// Runs of three or more spaces collapse to two, which keeps column gaps
/// visible without the extraction's arbitrary padding.
static WIDE_GAP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {3,}").unwrap());

/// Clean one chunk of extracted text: non-breaking spaces become plain
/// spaces, 3+ space runs collapse to two, lines are trimmed, and blank
/// lines are dropped.
///
/// The transform is idempotent: cleaning already-cleaned text returns it
/// unchanged.
pub fn clean_text(text: &str) -> String {
    text.lines()
        .map(|line| {
            let line = line.replace('\u{a0}', " ");
            WIDE_GAP_RE.replace_all(&line, "  ").trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cleaned text of a team block's lines.
pub fn clean_block(corpus: &LineCorpus, block: TeamBlock) -> String {
    clean_text(&block.lines(corpus).join("\n"))
}
