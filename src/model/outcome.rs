//! Extraction outcome tag.

use serde::{Deserialize, Serialize};

/// How confident the engine is in what it returned.
///
/// Distinguishes "no team block at all" from "team found" from "team found
/// but the statistics header was missing, so column offsets fell back to
/// defaults". Callers that only care about data can ignore the tag; the
/// projected values are always present and default-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Team block and statistics header both located.
    Found,
    /// No line satisfied the team-header predicate; all output is empty.
    NotFound,
    /// Team block located but the header line was missing; column offsets
    /// use the configured defaults.
    Degraded,
}

impl Outcome {
    /// Whether any team block was located at all.
    pub fn has_block(&self) -> bool {
        !matches!(self, Outcome::NotFound)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Found => write!(f, "found"),
            Outcome::NotFound => write!(f, "not found"),
            Outcome::Degraded => write!(f, "degraded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_block() {
        assert!(Outcome::Found.has_block());
        assert!(Outcome::Degraded.has_block());
        assert!(!Outcome::NotFound.has_block());
    }
}
