//! Debug projections for tuning column offsets against new templates.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{LineCorpus, Outcome, PlayerRow, TeamBlock};

/// Numeric tokens, percentages, and sentinel dots, in line order.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-+]?\d+%?|\.").unwrap());

/// One row of the debug token matrix: the raw line, the parsed prefix, and
/// every numeric/dot token the scanners saw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugRow {
    pub raw: String,
    pub number: Option<u8>,
    pub role: Option<char>,
    pub name: String,
    pub tokens: Vec<String>,
}

impl std::fmt::Display for DebugRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let number = self
            .number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".into());
        let role = self.role.unwrap_or('-');
        write!(
            f,
            "#{number} {role} {name} [{tokens}]  <- {raw}",
            name = self.name,
            tokens = self.tokens.join(" "),
            raw = self.raw,
        )
    }
}

/// Build the token matrix for a set of parsed rows.
pub fn token_matrix(rows: &[PlayerRow]) -> Vec<DebugRow> {
    rows.iter()
        .map(|row| {
            // The section slices together cover the whole post-name
            // remainder, so scanning their concatenation sees exactly the
            // tokens the row parser saw.
            let remainder = row.sections.concat();
            DebugRow {
                raw: row.raw.clone(),
                number: row.number,
                role: row.role,
                name: row.name.clone(),
                tokens: TOKEN_RE
                    .find_iter(&remainder)
                    .map(|m| m.as_str().to_string())
                    .collect(),
            }
        })
        .collect()
}

/// Debug snapshot of a located block: its raw lines, the names detected in
/// it, and the extraction outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockReport {
    pub outcome: Outcome,
    pub lines: Vec<String>,
    pub names: Vec<String>,
}

impl BlockReport {
    /// Assemble a report from the located block and detected names.
    pub fn new(corpus: &LineCorpus, block: TeamBlock, names: Vec<String>, outcome: Outcome) -> Self {
        Self {
            outcome,
            lines: block.lines(corpus).to_vec(),
            names,
        }
    }
}

impl std::fmt::Display for BlockReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "outcome: {}", self.outcome)?;
        writeln!(f, "names: {}", self.names.join(", "))?;
        for line in &self.lines {
            writeln!(f, "| {line}")?;
        }
        Ok(())
    }
}
