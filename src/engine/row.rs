//! Row parser: one noisy player line into typed statistics.
//!
//! A row is a jersey number, an optional single-letter role marker, a name,
//! and then free text that only approximately lines up with the header's
//! columns. The remainder is padded and sliced at the header offsets, each
//! offset shifted left by the rendered width the prefix consumed, and every
//! slice is scanned for integer and percentage tokens that map positionally
//! onto the section's named sub-fields.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    AttackLine, BlockLine, HeaderLayout, LineCorpus, PlayerRow, PlayerStats, PointsLine,
    ReceptionLine, ServeLine, Stat, TeamBlock, LIBERO_MARKER,
};

use super::config::EngineConfig;
use super::header::HeaderScan;
use super::locate::{is_stats_header, looks_like_team_header, matches_team};

/// Jersey number plus optional role letter. The role letter must be
/// followed by whitespace, which keeps it from eating the first letter of
/// an unmarked name.
static PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<lead>[ \t]*)(?P<num>\d{1,2})(?:[ \t]*(?P<role>[A-Z])[ \t])?[ \t]*").unwrap()
});

static PCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)%").unwrap());
static INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-+]?\d+").unwrap());

/// Parsed number/role/name prefix of a player line.
#[derive(Debug, Clone)]
pub(crate) struct RowPrefix {
    pub number: u8,
    pub role: Option<char>,
    pub name: String,
    /// Characters consumed from the start of the line through the name.
    pub consumed: usize,
    /// Everything after the name, exactly as it appeared.
    pub rest: String,
}

/// Split the number/role/name prefix off a player line.
///
/// The name is taken greedily from uppercase letters, spaces, periods,
/// apostrophes, and hyphens, and stops before two consecutive spaces or
/// the start of a numeric or sentinel-dot token. With `anchored` the line
/// must begin with the jersey digits themselves (no leading whitespace),
/// which is the stricter form the name extractor uses.
pub(crate) fn split_prefix(line: &str, anchored: bool) -> Option<RowPrefix> {
    let caps = PREFIX_RE.captures(line)?;
    if anchored && !caps.name("lead").is_some_and(|m| m.is_empty()) {
        return None;
    }
    let number: u8 = caps.name("num")?.as_str().parse().ok()?;
    let role = caps.name("role").and_then(|m| m.as_str().chars().next());
    let prefix_len = caps.get(0).map_or(0, |m| m.as_str().chars().count());

    let tail: Vec<char> = line[caps.get(0)?.end()..].chars().collect();
    let mut stop = 0;
    while stop < tail.len() {
        let c = tail[stop];
        let next = tail.get(stop + 1).copied();
        match c {
            'A'..='Z' => {}
            c if c.is_alphabetic() && c.is_uppercase() => {}
            ' ' => {
                // Two-space gap, a numeric token, or an isolated sentinel
                // dot all end the name.
                match next {
                    Some(' ') | Some('.') | None => break,
                    Some(d) if d.is_ascii_digit() => break,
                    Some('-') | Some('+')
                        if tail.get(stop + 2).is_some_and(|d| d.is_ascii_digit()) =>
                    {
                        break
                    }
                    _ => {}
                }
            }
            '-' | '\'' | '\u{2019}' => {
                if next.is_some_and(|d| d.is_ascii_digit()) {
                    break;
                }
            }
            // Initials: a period only belongs to the name right after a letter.
            '.' if stop > 0 && tail[stop - 1].is_alphabetic() => {}
            _ => break,
        }
        stop += 1;
    }

    let name: String = tail[..stop].iter().collect::<String>().trim().to_string();
    if name.is_empty() || !name.chars().next().is_some_and(|c| c.is_alphabetic()) {
        return None;
    }

    Some(RowPrefix {
        number,
        role,
        name,
        consumed: prefix_len + stop,
        rest: tail[stop..].iter().collect(),
    })
}

/// Integer and percentage tokens of one section slice, in encounter order.
/// Digit runs that belong to a percentage are not double-counted as
/// integers.
pub(crate) fn scan_section(text: &str) -> (Vec<i32>, Vec<i32>) {
    let pct_spans: Vec<(usize, usize)> = PCT_RE
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();
    let pcts: Vec<i32> = PCT_RE
        .captures_iter(text)
        .filter_map(|c| c[1].parse().ok())
        .collect();
    let ints: Vec<i32> = INT_RE
        .find_iter(text)
        .filter(|m| {
            !pct_spans
                .iter()
                .any(|&(s, e)| m.start() < e && s < m.end())
        })
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    (ints, pcts)
}

fn nth(values: &[i32], index: usize) -> Stat {
    values.get(index).copied().map(Stat::some).unwrap_or(Stat::NONE)
}

/// One numeric token in line order.
#[derive(Debug, Clone, Copy)]
enum Tok {
    Int(i32),
    Pct(i32),
}

/// All numeric tokens of a remainder, integers and percentages interleaved
/// in the order they appear.
fn scan_tokens_ordered(text: &str) -> Vec<Tok> {
    let mut toks: Vec<(usize, Tok)> = PCT_RE
        .captures_iter(text)
        .filter_map(|c| {
            let m = c.get(1)?;
            Some((m.start(), Tok::Pct(m.as_str().parse().ok()?)))
        })
        .collect();
    let pct_spans: Vec<(usize, usize)> = PCT_RE
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();
    toks.extend(INT_RE.find_iter(text).filter_map(|m| {
        if pct_spans.iter().any(|&(s, e)| m.start() < e && s < m.end()) {
            return None;
        }
        Some((m.start(), Tok::Int(m.as_str().parse().ok()?)))
    }));
    toks.sort_by_key(|&(start, _)| start);
    toks.into_iter().map(|(_, t)| t).collect()
}

/// Whether a compact row should bypass offset slicing.
///
/// Single-spaced exports collapse the column grid entirely: the name runs
/// over the points column, the remainder opens directly with a bare
/// integer, and no wide gap survives anywhere on the line. A leading
/// sentinel dot, or any 2+-space run between tokens, witnesses an aligned
/// grid whose points cells merely happen to be blank, and keeps the
/// offset path.
fn is_compact(rest: &str) -> bool {
    let lead = rest.trim();
    let opens_numeric = lead.starts_with(|c: char| c.is_ascii_digit())
        || (lead.starts_with(['-', '+'])
            && lead.chars().nth(1).is_some_and(|c| c.is_ascii_digit()));
    opens_numeric && !lead.contains("  ")
}

/// Spread a compact row's tokens across the five sections by order,
/// proportionally to their count. This is the position-in-sequence
/// strategy: the grid is gone, so encounter order is the only signal left.
fn distribute_tokens(rest: &str) -> [(Vec<i32>, Vec<i32>); 5] {
    let toks = scan_tokens_ordered(rest);
    let mut out: [(Vec<i32>, Vec<i32>); 5] = Default::default();
    let n = toks.len();
    if n == 0 {
        return out;
    }
    for (i, tok) in toks.into_iter().enumerate() {
        let section = i * out.len() / n;
        match tok {
            Tok::Int(v) => out[section].0.push(v),
            Tok::Pct(v) => out[section].1.push(v),
        }
    }
    out
}

/// Slice the post-name remainder into the five sections.
///
/// The remainder is padded with trailing spaces so slicing never runs out
/// of bounds, and each header offset is shifted left by the prefix width so
/// the slices align with the header's absolute column positions.
fn slice_sections(
    rest: &str,
    consumed: usize,
    layout: &HeaderLayout,
    config: &EngineConfig,
) -> [String; 5] {
    let mut chars: Vec<char> = rest.chars().collect();
    let target = (layout.block + config.offset_stride).saturating_sub(consumed);
    while chars.len() < target {
        chars.push(' ');
    }

    let offsets = layout.offsets();
    let mut sections: [String; 5] = Default::default();
    for (k, section) in sections.iter_mut().enumerate() {
        let start = offsets[k].saturating_sub(consumed).min(chars.len());
        let end = offsets
            .get(k + 1)
            .map(|o| o.saturating_sub(consumed))
            .unwrap_or(chars.len())
            .clamp(start, chars.len());
        *section = chars[start..end].iter().collect();
    }
    sections
}

/// Parse one player line against a header layout.
///
/// Returns `None` when the line does not look like a player row at all.
pub(crate) fn parse_row(
    line: &str,
    layout: &HeaderLayout,
    config: &EngineConfig,
) -> Option<PlayerRow> {
    let prefix = split_prefix(line, false)?;
    let sections = slice_sections(&prefix.rest, prefix.consumed, layout, config);

    let mut groups: [(Vec<i32>, Vec<i32>); 5] = Default::default();
    for (group, section) in groups.iter_mut().zip(&sections) {
        *group = scan_section(section);
    }
    // The name ran over the points column and no wide gap survived in the
    // remainder: the row is compact, fall back to sequence distribution.
    if groups[0].0.is_empty() && groups[0].1.is_empty() && is_compact(&prefix.rest) {
        groups = distribute_tokens(&prefix.rest);
    }
    let [(points_ints, _), (serve_ints, _), (recep_ints, recep_pcts), (attack_ints, attack_pcts), (block_ints, _)] =
        groups;

    let mut stats = PlayerStats {
        name: prefix.name.clone(),
        number: Some(prefix.number),
        role: prefix.role,
        points: PointsLine {
            vote: nth(&points_ints, 0),
            total: nth(&points_ints, 1),
            win_loss: nth(&points_ints, 2),
        },
        serve: ServeLine {
            total: nth(&serve_ints, 0),
            err: nth(&serve_ints, 1),
            points: nth(&serve_ints, 2),
        },
        reception: ReceptionLine {
            total: nth(&recep_ints, 0),
            err: nth(&recep_ints, 1),
            pos_pct: nth(&recep_pcts, 0),
            exc_pct: nth(&recep_pcts, 1),
        },
        attack: AttackLine {
            total: nth(&attack_ints, 0),
            err: nth(&attack_ints, 1),
            blocked: nth(&attack_ints, 2),
            points: nth(&attack_ints, 3),
            eff_pct: nth(&attack_pcts, 0),
        },
        block: BlockLine {
            stuffs: nth(&block_ints, 0),
        },
    };
    // Liberos cannot serve, attack, or block; whatever digits ended up in
    // those slices belong to neighbouring columns.
    stats.apply_libero_rule();

    Some(PlayerRow {
        raw: line.to_string(),
        number: Some(prefix.number),
        role: prefix.role,
        name: prefix.name,
        sections,
        stats,
    })
}

/// Parse every player row of a team block.
///
/// Scanning starts below the header line and stops at the same next-table
/// signals the block locator uses: the statistics header reappearing,
/// another team's header, or a run of blank lines.
pub fn parse_rows(
    corpus: &LineCorpus,
    block: TeamBlock,
    scan: &HeaderScan,
    filter: Option<&str>,
    config: &EngineConfig,
) -> Vec<PlayerRow> {
    let mut rows = Vec::new();
    if block.is_empty() {
        return rows;
    }

    let mut blank_run = 0usize;
    for index in (scan.line_index + 1)..block.end.min(corpus.len()) {
        let line = match corpus.line(index) {
            Some(l) => l,
            None => break,
        };

        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run >= config.blank_run_limit {
                break;
            }
            continue;
        }
        blank_run = 0;

        if is_stats_header(line) {
            break;
        }
        if looks_like_team_header(line) && !matches_team(line, filter, config) {
            break;
        }

        if let Some(row) = parse_row(line, &scan.layout, config) {
            rows.push(row);
        }
    }

    log::debug!("parsed {} player rows", rows.len());
    rows
}
