//! Header layout: column-start offsets inferred from the statistics header.

use serde::{Deserialize, Serialize};

/// The statistics header line plus the character offsets where each of the
/// five column groups begins.
///
/// Invariant: `points < service < reception < attack < block`. When a label
/// is missing from the header line, its offset defaults to the previous
/// offset plus the configured stride, which preserves the ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLayout {
    /// The raw text of the header line the offsets were measured on.
    pub header_line: String,
    /// Start of the points column group.
    pub points: usize,
    /// Start of the service column group.
    pub service: usize,
    /// Start of the reception column group.
    pub reception: usize,
    /// Start of the attack column group.
    pub attack: usize,
    /// Start of the block column group.
    pub block: usize,
}

impl HeaderLayout {
    /// Offsets in column order, handy for slicing loops.
    pub fn offsets(&self) -> [usize; 5] {
        [self.points, self.service, self.reception, self.attack, self.block]
    }

    /// Whether the strictly-increasing invariant holds.
    pub fn is_ordered(&self) -> bool {
        let o = self.offsets();
        o.windows(2).all(|w| w[0] < w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ordered() {
        let layout = HeaderLayout {
            header_line: String::new(),
            points: 0,
            service: 8,
            reception: 16,
            attack: 26,
            block: 34,
        };
        assert!(layout.is_ordered());

        let bad = HeaderLayout { service: 0, ..layout };
        assert!(!bad.is_ordered());
    }
}
