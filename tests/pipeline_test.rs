//! End-to-end tests for the extraction pipeline: bytes in, projections out.

use std::io::{Cursor, Write};

use scoresheet::{detect_format, DocFormat, Outcome, Scoresheet, Stat};

const REPORT: &[u8] = b"CLUB OLYMPIQUE\n\
    POINTS SERVICE RECEPTION ATTAQUE BK\n\
    7 A DUPONT 3 10 85% 2 0 4 1 75% 1\n";

/// Minimal DOCX: a ZIP with one `word/document.xml` entry, one paragraph
/// per line.
fn docx_bytes(lines: &[&str]) -> Vec<u8> {
    let mut body = String::new();
    for line in lines {
        body.push_str(&format!("<w:p><w:r><w:t>{line}</w:t></w:r></w:p>"));
    }
    let xml = format!("<w:document><w:body>{body}</w:body></w:document>");

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_plain_report_end_to_end() {
    let extraction = scoresheet::extract(REPORT, None).unwrap();

    assert_eq!(extraction.outcome, Outcome::Found);
    assert_eq!(extraction.player_names(), ["DUPONT"]);

    // Every section carries at least one recovered value.
    let stats = extraction.stats_for("DUPONT");
    assert_eq!(stats.number, Some(7));
    assert_eq!(stats.points.vote, Stat::some(3));
    assert_eq!(stats.points.total, Stat::some(10));
    assert_eq!(stats.serve.total, Stat::some(2));
    assert_eq!(stats.reception.err, Stat::some(4));
    assert_eq!(stats.attack.eff_pct, Stat::some(75));
    assert_eq!(stats.block.stuffs, Stat::some(1));

    let table = extraction.ascii_table();
    assert!(table.contains("CLUB OLYMPIQUE"));
    assert!(table.contains("DUPONT"));
}

#[test]
fn test_player_lookup_ignores_case_and_diacritics() {
    let stats = scoresheet::player_stats(REPORT, None, "dupónt").unwrap();
    assert_eq!(stats.number, Some(7));
    assert_eq!(stats.name, "DUPONT");
}

#[test]
fn test_absent_player_yields_sentinel_stats() {
    let stats = scoresheet::player_stats(REPORT, None, "NOBODY").unwrap();
    assert_eq!(stats.name, "NOBODY");
    assert_eq!(stats.number, None);
    assert!(stats.points.total.is_none());
}

#[test]
fn test_no_team_header_is_not_found() {
    let extraction = scoresheet::extract(b"random prose\nmore prose\n", None).unwrap();
    assert_eq!(extraction.outcome, Outcome::NotFound);
    assert!(extraction.player_names().is_empty());
    assert!(extraction.clean_text().is_empty());
    assert!(extraction.ascii_table().is_empty());
    assert!(extraction.token_matrix().is_empty());
}

#[test]
fn test_missing_header_degrades_to_default_offsets() {
    let extraction = scoresheet::extract(b"CLUB OLYMPIQUE\n7 DUPONT 3 10\n", None).unwrap();
    assert_eq!(extraction.outcome, Outcome::Degraded);

    let layout = extraction.layout.as_ref().unwrap();
    assert!(layout.is_ordered());

    let stats = extraction.stats_for("DUPONT");
    assert_eq!(stats.points.vote, Stat::some(3));
    assert_eq!(stats.points.total, Stat::some(10));
}

#[test]
fn test_header_offsets_strictly_increasing() {
    let extraction = scoresheet::extract(REPORT, None).unwrap();
    let offsets = extraction.layout.as_ref().unwrap().offsets();
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_team_filter_selects_the_matching_block() {
    let report = b"CLUB OLYMPIQUE MARSEILLE\n\
        POINTS SERVICE RECEPTION ATTAQUE BK\n\
        7 A DUPONT 3 10 85% 2 0 4 1 75% 1\n\
        \n\
        STADE POITEVIN VOLLEY BALL\n\
        POINTS SERVICE RECEPTION ATTAQUE BK\n\
        9 MOREAU 2 8 90% 1 1 3 2 60% 0\n";

    let names = scoresheet::player_names(report, Some("poitevin")).unwrap();
    assert_eq!(names, ["MOREAU"]);

    let names = scoresheet::player_names(report, None).unwrap();
    assert_eq!(names, ["DUPONT"]);
}

#[test]
fn test_custom_team_literal() {
    let report = b"ENTENTE SPORTIVE NORD\n\
        POINTS SERVICE RECEPTION ATTAQUE BK\n\
        5 LEROY 1 4 80% 2 0 3 1 50% 2\n";

    let extraction = Scoresheet::new()
        .with_team_literal("ENTENTE SPORTIVE")
        .extract(report)
        .unwrap();
    assert_eq!(extraction.outcome, Outcome::Found);
    assert_eq!(extraction.player_names(), ["LEROY"]);
}

#[test]
fn test_libero_sentinels_survive_the_pipeline() {
    // Aligned grid: the reception values sit under the RECEPTION label.
    let report = b"CLUB OLYMPIQUE\n\
        POINTS  SERVICE  RECEPTION     ATTAQUE  BK\n\
        12 L MARTIN . . . 5 2 88% 12%\n";

    let extraction = scoresheet::extract(report, None).unwrap();
    assert_eq!(extraction.outcome, Outcome::Found);

    let stats = extraction.stats_for("MARTIN");
    assert!(stats.is_libero());
    assert_eq!(stats.reception.total, Stat::some(5));
    assert_eq!(stats.reception.err, Stat::some(2));
    assert_eq!(stats.reception.pos_pct, Stat::some(88));
    assert_eq!(stats.reception.exc_pct, Stat::some(12));
    assert!(stats.serve.total.is_none());
    assert!(stats.attack.total.is_none());
    assert!(stats.block.stuffs.is_none());
}

#[test]
fn test_clean_text_is_idempotent() {
    let once = scoresheet::clean_text(REPORT, None).unwrap();
    let twice = scoresheet::clean_text(once.as_bytes(), None).unwrap();
    assert!(!once.is_empty());
    assert_eq!(once, twice);
}

#[test]
fn test_format_detection_routes_by_magic_bytes() {
    assert_eq!(detect_format(b"%PDF-1.7\n..."), DocFormat::Pdf);
    assert_eq!(detect_format(b"PK\x03\x04rest"), DocFormat::Docx);
    assert_eq!(detect_format(b"CLUB OLYMPIQUE"), DocFormat::Plain);
}

#[test]
fn test_docx_report_end_to_end() {
    let data = docx_bytes(&[
        "CLUB OLYMPIQUE",
        "POINTS SERVICE RECEPTION ATTAQUE BK",
        "7 A DUPONT 3 10 85% 2 0 4 1 75% 1",
    ]);

    let extraction = scoresheet::extract(&data, None).unwrap();
    assert_eq!(extraction.corpus.format, DocFormat::Docx);
    assert_eq!(extraction.outcome, Outcome::Found);
    assert_eq!(extraction.player_names(), ["DUPONT"]);
}

#[test]
fn test_corrupt_input_is_the_only_hard_failure() {
    // ZIP magic without a readable archive fails at load time.
    assert!(scoresheet::extract(b"PK\x03\x04 not a zip", None).is_err());
    // An empty document loads fine and degrades to a miss.
    let extraction = scoresheet::extract(b"", None).unwrap();
    assert_eq!(extraction.outcome, Outcome::NotFound);
}
