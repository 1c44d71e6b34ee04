//! Team block locator.
//!
//! Finds the contiguous line range belonging to one team's table inside
//! the full corpus. A miss is a normal outcome: the empty block, never an
//! error.

use crate::model::{LineCorpus, TeamBlock};

use super::config::EngineConfig;
use super::normalize::normalize;

/// Label alternatives for each statistics column group, in header order.
/// Matched against folded (uppercase, diacritic-stripped) text.
pub(crate) const POINTS_LABELS: &[&str] = &["POINTS", "PTS"];
pub(crate) const SERVICE_LABELS: &[&str] = &["SERVICE", "SERV"];
pub(crate) const RECEPTION_LABELS: &[&str] = &["RECEPTION", "RECEP", "REC"];
pub(crate) const ATTACK_LABELS: &[&str] = &["ATTAQUE", "ATTACK", "ATT"];
pub(crate) const BLOCK_LABELS: &[&str] = &["BLOCK", "BLOC", "MUR", "BK"];

/// Words that make a long uppercase line look like a team header.
const TEAM_KEYWORDS: &[&str] = &[
    "CLUB", "VOLLEY", "OLYMPIQUE", "STADE", "ENTENTE", "UNION", "SPORTIF", "SPORTIVE", "ASPTT",
    "VB",
];

fn contains_any(haystack: &str, labels: &[&str]) -> bool {
    labels.iter().any(|l| haystack.contains(l))
}

/// Whether a line is a statistics header: it carries all of the
/// points/service/reception/attack keyword groups.
pub(crate) fn is_stats_header(line: &str) -> bool {
    let n = normalize(line);
    contains_any(&n, POINTS_LABELS)
        && contains_any(&n, SERVICE_LABELS)
        && contains_any(&n, RECEPTION_LABELS)
        && contains_any(&n, ATTACK_LABELS)
}

/// Whether a line looks like the header of some team's table: long, mostly
/// uppercase, carrying a team-like keyword, and not a statistics header.
pub(crate) fn looks_like_team_header(line: &str) -> bool {
    let n = normalize(line);
    if n.chars().count() < 12 || is_stats_header(line) {
        return false;
    }
    let alpha = line.chars().filter(|c| c.is_alphabetic()).count();
    if alpha < 8 {
        return false;
    }
    let upper = line.chars().filter(|c| c.is_uppercase()).count();
    if (upper as f32) < (alpha as f32) * 0.8 {
        return false;
    }
    n.split_whitespace().any(|w| TEAM_KEYWORDS.contains(&w))
}

/// Team-header predicate for the target team.
///
/// With no filter the normalized line must start with the canonical team
/// literal. With a filter, the normalized line matches when it contains the
/// normalized filter as a substring, or contains the filter's first two
/// whitespace-separated tokens joined by a single space; the latter rescues
/// headers that truncate or abbreviate the club's full name.
pub(crate) fn matches_team(line: &str, filter: Option<&str>, config: &EngineConfig) -> bool {
    let n = normalize(line);
    if n.is_empty() {
        return false;
    }
    match filter {
        None => n.starts_with(&normalize(&config.team_literal)),
        Some(f) => {
            let nf = normalize(f);
            if nf.is_empty() {
                return false;
            }
            if n.contains(&nf) {
                return true;
            }
            let mut tokens = nf.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(a), Some(b)) => n.contains(&format!("{a} {b}")),
                _ => false,
            }
        }
    }
}

/// Locate the target team's block of lines.
///
/// Scans top to bottom for the first line matching the team predicate,
/// then extends down to the configured line cap, terminating early when
/// another table shows up: the statistics header reappearing after it was
/// already seen, a foreign team header, or a run of blank lines after the
/// statistics header. Returns the empty block when no line matches.
pub fn locate_block(corpus: &LineCorpus, filter: Option<&str>, config: &EngineConfig) -> TeamBlock {
    let Some(start) = corpus
        .lines()
        .iter()
        .position(|l| matches_team(l, filter, config))
    else {
        log::debug!("no team header matched (filter: {:?})", filter);
        return TeamBlock::empty();
    };

    let cap = corpus.len().min(start + config.block_line_cap);
    let mut header_seen = false;
    let mut blank_run = 0usize;
    let mut end = cap;

    for i in (start + 1)..cap {
        let line = &corpus.lines()[i];

        if line.trim().is_empty() {
            blank_run += 1;
            if header_seen && blank_run >= config.blank_run_limit {
                end = i + 1 - blank_run;
                break;
            }
            continue;
        }
        blank_run = 0;

        if is_stats_header(line) {
            if header_seen {
                // A second statistics header means the next team's table.
                end = i;
                break;
            }
            header_seen = true;
            continue;
        }

        if looks_like_team_header(line) && !matches_team(line, filter, config) {
            end = i;
            break;
        }
    }

    let block = TeamBlock::new(start, end);
    log::debug!(
        "team block located at lines {}..{} ({} lines)",
        block.start,
        block.end,
        block.len()
    );
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::DocFormat;

    fn corpus(text: &str) -> LineCorpus {
        LineCorpus::from_text(DocFormat::Plain, text)
    }

    #[test]
    fn test_stats_header_detection() {
        assert!(is_stats_header("POINTS SERVICE RECEPTION ATTAQUE BK"));
        assert!(is_stats_header("  Pts   Serv   Réception   Att   Mur"));
        assert!(!is_stats_header("POINTS SERVICE"));
        assert!(!is_stats_header("7 A DUPONT 3 10"));
    }

    #[test]
    fn test_team_header_heuristic() {
        assert!(looks_like_team_header("ENTENTE SPORTIVE DU LITTORAL"));
        assert!(looks_like_team_header("AS CANNES VOLLEY BALL"));
        assert!(!looks_like_team_header("some lowercase prose here"));
        assert!(!looks_like_team_header("POINTS SERVICE RECEPTION ATTAQUE"));
        assert!(!looks_like_team_header("SHORT VB"));
    }

    #[test]
    fn test_matches_team_without_filter() {
        let config = EngineConfig::default();
        assert!(matches_team("Club Olympique  Seniors", None, &config));
        assert!(!matches_team("AS CANNES VOLLEY", None, &config));
    }

    #[test]
    fn test_matches_team_with_filter_substring() {
        let config = EngineConfig::default();
        assert!(matches_team(
            "AS CANNES VOLLEY BALL",
            Some("as cannes volley ball"),
            &config
        ));
    }

    #[test]
    fn test_matches_team_with_truncated_header() {
        let config = EngineConfig::default();
        // Header keeps only the first two tokens of the club name
        assert!(matches_team(
            "AS CANNES",
            Some("AS CANNES VOLLEY BALL"),
            &config
        ));
        assert!(!matches_team("US METZ", Some("AS CANNES VOLLEY"), &config));
    }

    #[test]
    fn test_locate_block_not_found_is_empty() {
        let c = corpus("random prose\nmore prose\n");
        let block = locate_block(&c, None, &EngineConfig::default());
        assert!(block.is_empty());
    }

    #[test]
    fn test_locate_block_stops_at_second_stats_header() {
        let c = corpus(
            "CLUB OLYMPIQUE\n\
             POINTS SERVICE RECEPTION ATTAQUE BK\n\
             7 A DUPONT 3 10 85% 2 0 4 1 75% 1\n\
             POINTS SERVICE RECEPTION ATTAQUE BK\n\
             9 B AUTRE 1 2 3\n",
        );
        let block = locate_block(&c, None, &EngineConfig::default());
        assert_eq!(block.start, 0);
        assert_eq!(block.end, 3);
    }

    #[test]
    fn test_locate_block_stops_at_foreign_team_header() {
        let c = corpus(
            "CLUB OLYMPIQUE\n\
             POINTS SERVICE RECEPTION ATTAQUE BK\n\
             7 A DUPONT 3 10 85% 2 0 4 1 75% 1\n\
             AS CANNES VOLLEY BALL\n\
             9 B AUTRE 1 2 3\n",
        );
        let block = locate_block(&c, None, &EngineConfig::default());
        assert_eq!(block.end, 3);
    }

    #[test]
    fn test_locate_block_stops_after_blank_run() {
        let c = corpus(
            "CLUB OLYMPIQUE\n\
             POINTS SERVICE RECEPTION ATTAQUE BK\n\
             7 A DUPONT 3 10 85% 2 0 4 1 75% 1\n\
             \n\
             \n\
             \n\
             unrelated prose far below\n",
        );
        let block = locate_block(&c, None, &EngineConfig::default());
        assert_eq!(block.end, 3);
    }

    #[test]
    fn test_locate_block_respects_line_cap() {
        let mut text = String::from("CLUB OLYMPIQUE\n");
        for i in 0..300 {
            text.push_str(&format!("filler line {i}\n"));
        }
        let c = corpus(&text);
        let config = EngineConfig::default();
        let block = locate_block(&c, None, &config);
        assert_eq!(block.len(), config.block_line_cap);
    }
}
