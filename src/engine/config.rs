//! Engine tunables.

use serde::{Deserialize, Serialize};

/// Team header literal used when no filter is supplied.
pub const DEFAULT_TEAM_LITERAL: &str = "CLUB OLYMPIQUE";

/// Hard cap on how many lines one team block may span.
pub const DEFAULT_BLOCK_LINE_CAP: usize = 120;

/// Consecutive blank lines that end a block once the stats header was seen.
pub const DEFAULT_BLANK_RUN_LIMIT: usize = 3;

/// Column stride assumed for header labels missing from the header line.
pub const DEFAULT_OFFSET_STRIDE: usize = 20;

/// Named, tunable configuration for the recovery heuristics.
///
/// Exists so template-specific adjustments do not require touching the
/// scanning code itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Line prefix that identifies the target team's header when no
    /// free-text filter is given.
    pub team_literal: String,

    /// Maximum number of lines scanned from the team header down.
    pub block_line_cap: usize,

    /// How many consecutive blank lines terminate the block after the
    /// statistics header has been seen.
    pub blank_run_limit: usize,

    /// Default column width used when a header label is missing and the
    /// offset falls back to `previous + stride`.
    pub offset_stride: usize,
}

impl EngineConfig {
    /// Create a config with the default tunables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canonical team literal matched when no filter is supplied.
    pub fn with_team_literal(mut self, literal: impl Into<String>) -> Self {
        self.team_literal = literal.into();
        self
    }

    /// Set the block scan cap.
    pub fn with_block_line_cap(mut self, cap: usize) -> Self {
        self.block_line_cap = cap;
        self
    }

    /// Set the blank-run termination threshold.
    pub fn with_blank_run_limit(mut self, limit: usize) -> Self {
        self.blank_run_limit = limit;
        self
    }

    /// Set the default column stride for missing header labels.
    pub fn with_offset_stride(mut self, stride: usize) -> Self {
        self.offset_stride = stride;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            team_literal: DEFAULT_TEAM_LITERAL.to_string(),
            block_line_cap: DEFAULT_BLOCK_LINE_CAP,
            blank_run_limit: DEFAULT_BLANK_RUN_LIMIT,
            offset_stride: DEFAULT_OFFSET_STRIDE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = EngineConfig::new()
            .with_team_literal("AS CANNES")
            .with_block_line_cap(60)
            .with_blank_run_limit(2)
            .with_offset_stride(15);
        assert_eq!(config.team_literal, "AS CANNES");
        assert_eq!(config.block_line_cap, 60);
        assert_eq!(config.blank_run_limit, 2);
        assert_eq!(config.offset_stride, 15);
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.team_literal, DEFAULT_TEAM_LITERAL);
        assert_eq!(config.block_line_cap, 120);
        assert_eq!(config.blank_run_limit, 3);
        assert_eq!(config.offset_stride, 20);
    }
}
