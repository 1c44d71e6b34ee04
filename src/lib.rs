//! # scoresheet
//!
//! Heuristic recovery of per-player volleyball statistics tables from
//! loosely formatted exported match reports (PDF, DOCX, plain text).
//!
//! Exported reports are not grids: text extraction yields layout-approximate
//! lines with no reliable delimiters, one team's table buried among other
//! teams' tables and arbitrary prose. This crate locates the target team's
//! line range, infers column boundaries from the statistics header line,
//! and maps the noisy position-dependent text into typed per-player fields,
//! degrading gracefully instead of failing.
//!
//! ## Quick start
//!
//! ```
//! use scoresheet::extract;
//!
//! let report = b"CLUB OLYMPIQUE\n\
//!                POINTS SERVICE RECEPTION ATTAQUE BK\n\
//!                7 A DUPONT 3 10 85% 2 0 4 1 75% 1\n";
//!
//! let extraction = extract(report, None)?;
//! assert_eq!(extraction.player_names(), &["DUPONT".to_string()]);
//! println!("{}", extraction.ascii_table());
//! # Ok::<(), scoresheet::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! One linear pass, no backtracking: load bytes into a line corpus, locate
//! the team block, locate the header columns, parse rows, render. Only the
//! loader can fail hard; every later stage signals a miss through empty
//! values and the [`Outcome`] tag.

pub mod detect;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod render;

pub use detect::{detect_format, DocFormat};
pub use engine::EngineConfig;
pub use error::{Error, Result};
pub use model::{
    AttackLine, BlockLine, HeaderLayout, LineCorpus, Outcome, PlayerRow, PlayerStats, PointsLine,
    ReceptionLine, ServeLine, Stat, TeamBlock,
};
pub use render::{BlockReport, DebugRow};

use engine::normalize;

/// Run the full pipeline over document bytes with an optional team filter.
///
/// This is the main entry point; the other free functions are projections
/// of its result.
pub fn extract(data: &[u8], team_filter: Option<&str>) -> Result<Extraction> {
    Scoresheet::new().with_filter_opt(team_filter).extract(data)
}

/// Cleaned plain text of the located team block.
pub fn clean_text(data: &[u8], team_filter: Option<&str>) -> Result<String> {
    Ok(extract(data, team_filter)?.clean_text())
}

/// Ordered, deduplicated player names of the located team block.
pub fn player_names(data: &[u8], team_filter: Option<&str>) -> Result<Vec<String>> {
    Ok(extract(data, team_filter)?.names)
}

/// Fixed-width ASCII table of all parsed player rows.
pub fn stats_table(data: &[u8], team_filter: Option<&str>) -> Result<String> {
    Ok(extract(data, team_filter)?.ascii_table())
}

/// Typed statistics for one named player.
///
/// A player that cannot be found yields a sentinel-valued [`PlayerStats`]
/// carrying the queried name, never an error.
pub fn player_stats(data: &[u8], team_filter: Option<&str>, player: &str) -> Result<PlayerStats> {
    Ok(extract(data, team_filter)?.stats_for(player))
}

/// Debug report: block raw lines plus detected names.
pub fn debug_report(data: &[u8], team_filter: Option<&str>) -> Result<BlockReport> {
    Ok(extract(data, team_filter)?.block_report())
}

/// Builder over the engine configuration, in the spirit of the pipeline
/// options types elsewhere in this crate.
///
/// ```
/// use scoresheet::Scoresheet;
///
/// let extraction = Scoresheet::new()
///     .with_filter("AS CANNES VOLLEY BALL")
///     .with_block_line_cap(80)
///     .extract(b"AS CANNES VOLLEY BALL\n7 A DUPONT 3\n")?;
/// # Ok::<(), scoresheet::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scoresheet {
    config: EngineConfig,
    filter: Option<String>,
}

impl Scoresheet {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text team filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set or clear the team filter.
    pub fn with_filter_opt(mut self, filter: Option<&str>) -> Self {
        self.filter = filter.map(|f| f.to_string());
        self
    }

    /// Replace the whole engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the canonical team literal used when no filter is given.
    pub fn with_team_literal(mut self, literal: impl Into<String>) -> Self {
        self.config = self.config.with_team_literal(literal);
        self
    }

    /// Set the block scan cap.
    pub fn with_block_line_cap(mut self, cap: usize) -> Self {
        self.config = self.config.with_block_line_cap(cap);
        self
    }

    /// Run the pipeline over document bytes.
    pub fn extract(self, data: &[u8]) -> Result<Extraction> {
        let corpus = loader::load_bytes(data)?;
        Ok(self.extract_corpus(corpus))
    }

    /// Run the heuristics over an already-loaded corpus. Total: never
    /// errors, a miss yields an extraction tagged [`Outcome::NotFound`].
    pub fn extract_corpus(self, corpus: LineCorpus) -> Extraction {
        let filter = self.filter.as_deref();
        let block = engine::locate_block(&corpus, filter, &self.config);
        if block.is_empty() {
            return Extraction {
                corpus,
                block,
                layout: None,
                rows: Vec::new(),
                names: Vec::new(),
                outcome: Outcome::NotFound,
            };
        }

        let scan = engine::locate_header(&corpus, block, &self.config);
        let rows = engine::parse_rows(&corpus, block, &scan, filter, &self.config);
        let names = engine::extract_names(&corpus, block, filter, &self.config);
        Extraction {
            corpus,
            block,
            layout: Some(scan.layout),
            rows,
            names,
            outcome: scan.outcome,
        }
    }
}

/// Result of one pipeline run: the located block, the parsed rows, and the
/// projections the engine exposes.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The full line corpus the block was located in.
    pub corpus: LineCorpus,
    /// The located team block; empty when the team was not found.
    pub block: TeamBlock,
    /// Inferred column layout, absent when no block was located.
    pub layout: Option<HeaderLayout>,
    /// Parsed player rows in document order.
    pub rows: Vec<PlayerRow>,
    /// Ordered, deduplicated player names.
    pub names: Vec<String>,
    /// How confident the extraction is.
    pub outcome: Outcome,
}

impl Extraction {
    /// Cleaned plain text of the team block. Empty when no block was found.
    pub fn clean_text(&self) -> String {
        render::clean_block(&self.corpus, self.block)
    }

    /// Fixed-width ASCII table of the parsed rows. Empty when no block was
    /// found.
    pub fn ascii_table(&self) -> String {
        if !self.outcome.has_block() {
            return String::new();
        }
        let title = self
            .corpus
            .line(self.block.start)
            .map(str::trim)
            .unwrap_or("")
            .to_string();
        render::ascii_table(&title, &self.rows)
    }

    /// Player names in first-appearance order.
    pub fn player_names(&self) -> &[String] {
        &self.names
    }

    /// Typed statistics for one named player, matched case- and
    /// diacritic-insensitively. Absent players yield a sentinel-valued
    /// object carrying the queried name.
    pub fn stats_for(&self, player: &str) -> PlayerStats {
        let query = normalize(player);
        self.rows
            .iter()
            .find(|r| {
                let name = normalize(&r.name);
                !query.is_empty() && (name == query || name.contains(&query))
            })
            .map(|r| r.stats.clone())
            .unwrap_or_else(|| PlayerStats {
                name: player.to_string(),
                ..Default::default()
            })
    }

    /// Debug snapshot: block raw lines plus detected names.
    pub fn block_report(&self) -> BlockReport {
        BlockReport::new(&self.corpus, self.block, self.names.clone(), self.outcome)
    }

    /// Debug token matrix for offset tuning.
    pub fn token_matrix(&self) -> Vec<DebugRow> {
        render::token_matrix(&self.rows)
    }
}
