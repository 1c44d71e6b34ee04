//! Player name extractor.
//!
//! Lighter-weight re-scan of a team block that only collects the ordered,
//! deduplicated list of player names. Uses a stricter anchored form of the
//! row prefix (the line must begin with the jersey digits) and the same
//! termination rules as the row parser. Never errors: an empty block or a
//! block without rows yields an empty list.

use crate::model::{LineCorpus, TeamBlock};

use super::config::EngineConfig;
use super::locate::{is_stats_header, looks_like_team_header, matches_team};
use super::row::split_prefix;

/// Collect the player names of a team block, in first-appearance order,
/// without duplicates.
pub fn extract_names(
    corpus: &LineCorpus,
    block: TeamBlock,
    filter: Option<&str>,
    config: &EngineConfig,
) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    if block.is_empty() {
        return names;
    }

    let mut header_seen = false;
    let mut blank_run = 0usize;
    for index in block.start..block.end.min(corpus.len()) {
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
            if header_seen {
                break;
            }
            header_seen = true;
            continue;
        }
        if index != block.start && looks_like_team_header(line) && !matches_team(line, filter, config)
        {
            break;
        }

        if let Some(prefix) = split_prefix(line, true) {
            if !names.contains(&prefix.name) {
                names.push(prefix.name);
            }
        }
    }

    log::debug!("extracted {} player names", names.len());
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::DocFormat;
    use crate::engine::locate_block;

    fn names_of(text: &str) -> Vec<String> {
        let corpus = LineCorpus::from_text(DocFormat::Plain, text);
        let config = EngineConfig::default();
        let block = locate_block(&corpus, None, &config);
        extract_names(&corpus, block, None, &config)
    }

    #[test]
    fn test_names_in_order_deduplicated() {
        let names = names_of(
            "CLUB OLYMPIQUE\n\
             POINTS SERVICE RECEPTION ATTAQUE BK\n\
             7 A DUPONT 3 10 85%\n\
             12 L MARTIN . . . 5 2\n\
             7 A DUPONT 1 2 3\n",
        );
        assert_eq!(names, vec!["DUPONT".to_string(), "MARTIN".to_string()]);
    }

    #[test]
    fn test_names_empty_block() {
        let names = names_of("no team here\njust prose\n");
        assert!(names.is_empty());
    }

    #[test]
    fn test_names_skip_indented_lines() {
        // The anchored pattern ignores continuation lines that happen to
        // carry digits but are indented.
        let names = names_of(
            "CLUB OLYMPIQUE\n\
             POINTS SERVICE RECEPTION ATTAQUE BK\n\
             7 A DUPONT 3 10\n\
             \x20  12 B NOTAROW 1 2\n",
        );
        assert_eq!(names, vec!["DUPONT".to_string()]);
    }

    #[test]
    fn test_names_stop_at_second_stats_header() {
        let names = names_of(
            "CLUB OLYMPIQUE\n\
             POINTS SERVICE RECEPTION ATTAQUE BK\n\
             7 A DUPONT 3 10\n\
             POINTS SERVICE RECEPTION ATTAQUE BK\n\
             9 B AUTRE 1 2\n",
        );
        assert_eq!(names, vec!["DUPONT".to_string()]);
    }
}
