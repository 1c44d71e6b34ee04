//! Typed per-player rows and statistics.

use serde::{Deserialize, Serialize};

/// Single-letter role marker denoting the libero position.
pub const LIBERO_MARKER: char = 'L';

/// One statistic cell: either a scanned integer or the sentinel.
///
/// The sentinel stands in for "not found / not applicable". It displays as
/// `"."` and aggregates as `0`, so arithmetic over rows never has to thread
/// `Option` through every sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stat(pub Option<i32>);

impl Stat {
    /// The sentinel value.
    pub const NONE: Stat = Stat(None);

    /// A present value.
    pub fn some(value: i32) -> Self {
        Stat(Some(value))
    }

    /// Whether this cell holds the sentinel.
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Numeric value for aggregation; the sentinel counts as zero.
    pub fn value(&self) -> i32 {
        self.0.unwrap_or(0)
    }
}

impl std::fmt::Display for Stat {
    // `f.pad` so the table renderer's width specs apply to cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(v) => f.pad(&v.to_string()),
            None => f.pad("."),
        }
    }
}

impl From<Option<i32>> for Stat {
    fn from(value: Option<i32>) -> Self {
        Stat(value)
    }
}

/// Points section: rating vote, total points, win-loss balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsLine {
    pub vote: Stat,
    pub total: Stat,
    pub win_loss: Stat,
}

/// Service section: attempts, errors, aces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeLine {
    pub total: Stat,
    pub err: Stat,
    pub points: Stat,
}

/// Reception section: attempts, errors, positive and excellent percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceptionLine {
    pub total: Stat,
    pub err: Stat,
    pub pos_pct: Stat,
    pub exc_pct: Stat,
}

/// Attack section: attempts, errors, blocked balls, kills, efficiency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackLine {
    pub total: Stat,
    pub err: Stat,
    pub blocked: Stat,
    pub points: Stat,
    pub eff_pct: Stat,
}

/// Block section: stuff blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLine {
    pub stuffs: Stat,
}

/// Typed statistics for one player, one field group per header column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub name: String,
    pub number: Option<u8>,
    /// Single-letter role marker from the sheet, `L` for libero.
    pub role: Option<char>,
    pub points: PointsLine,
    pub serve: ServeLine,
    pub reception: ReceptionLine,
    pub attack: AttackLine,
    pub block: BlockLine,
}

impl PlayerStats {
    /// Whether the row belongs to a libero.
    ///
    /// Liberos cannot serve, attack, or block under game rules, so those
    /// sections are forced to the sentinel no matter what digits the raw
    /// line carried.
    pub fn is_libero(&self) -> bool {
        self.role == Some(LIBERO_MARKER)
    }

    /// Clear the sections a libero cannot record.
    pub fn apply_libero_rule(&mut self) {
        if self.is_libero() {
            self.serve = ServeLine::default();
            self.attack = AttackLine::default();
            self.block = BlockLine::default();
        }
    }
}

/// One player's raw line plus the parsed prefix and section slices.
///
/// The five section substrings are cut from the remainder of the line using
/// the header offsets, each shifted left by the rendered width of the
/// number/role/name prefix so the slices line up with the header's absolute
/// column positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRow {
    /// The raw line as extracted from the document.
    pub raw: String,
    pub number: Option<u8>,
    pub role: Option<char>,
    pub name: String,
    /// Section substrings in header order: points, service, reception,
    /// attack, block.
    pub sections: [String; 5],
    /// Typed values scanned out of the section slices.
    pub stats: PlayerStats,
}
