//! Header column locator.
//!
//! Within a team block, finds the statistics header line and measures
//! where each of the five column groups starts on it. Works on folded
//! text so `RECEPTION` and `RÉCEPTION` land on the same offsets.

use crate::model::{HeaderLayout, LineCorpus, Outcome, TeamBlock};

use super::config::EngineConfig;
use super::locate::{
    ATTACK_LABELS, BLOCK_LABELS, POINTS_LABELS, RECEPTION_LABELS, SERVICE_LABELS,
};
use super::normalize::fold_line;

/// Result of the header scan: the layout, the line it was measured on,
/// and whether the scan had to fall back to defaults.
#[derive(Debug, Clone)]
pub struct HeaderScan {
    pub layout: HeaderLayout,
    /// Corpus index of the line the offsets were measured on.
    pub line_index: usize,
    /// `Found` when a qualifying header line existed, `Degraded` when the
    /// block's first line had to stand in for it.
    pub outcome: Outcome,
}

/// Earliest character index of any label alternative on a folded line.
fn find_label(folded: &str, labels: &[&str]) -> Option<usize> {
    labels
        .iter()
        .filter_map(|l| folded.find(l))
        .min()
        .map(|byte_idx| folded[..byte_idx].chars().count())
}

/// A line qualifies as the header when it carries at least the points,
/// service, and reception labels.
fn qualifies(folded: &str) -> bool {
    find_label(folded, POINTS_LABELS).is_some()
        && find_label(folded, SERVICE_LABELS).is_some()
        && find_label(folded, RECEPTION_LABELS).is_some()
}

/// Locate the statistics header inside a non-empty block and derive the
/// five column-start offsets.
///
/// A label missing from the header line gets `previous + stride`, which
/// keeps the offsets strictly increasing. When no line qualifies at all,
/// the block's first line is used and the scan is tagged [`Outcome::Degraded`].
pub fn locate_header(corpus: &LineCorpus, block: TeamBlock, config: &EngineConfig) -> HeaderScan {
    let (line_index, outcome) = block
        .lines(corpus)
        .iter()
        .position(|l| qualifies(&fold_line(l)))
        .map(|i| (block.start + i, Outcome::Found))
        .unwrap_or_else(|| {
            log::debug!("no statistics header in block, falling back to first line");
            (block.start, Outcome::Degraded)
        });

    let header_line = corpus.line(line_index).unwrap_or("").to_string();
    let folded = fold_line(&header_line);

    let groups = [
        POINTS_LABELS,
        SERVICE_LABELS,
        RECEPTION_LABELS,
        ATTACK_LABELS,
        BLOCK_LABELS,
    ];
    let mut offsets = [0usize; 5];
    let mut prev: Option<usize> = None;
    for (slot, labels) in offsets.iter_mut().zip(groups) {
        let found = find_label(&folded, labels);
        *slot = match (found, prev) {
            (Some(idx), None) => idx,
            // Out-of-order finds fall back to the stride default so the
            // strictly-increasing invariant always holds.
            (Some(idx), Some(p)) if idx > p => idx,
            (_, Some(p)) => p + config.offset_stride,
            (None, None) => 0,
        };
        prev = Some(*slot);
    }

    let layout = HeaderLayout {
        header_line,
        points: offsets[0],
        service: offsets[1],
        reception: offsets[2],
        attack: offsets[3],
        block: offsets[4],
    };
    debug_assert!(layout.is_ordered());
    HeaderScan {
        layout,
        line_index,
        outcome,
    }
}
