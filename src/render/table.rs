//! Fixed-width ASCII table rendering of parsed player rows.

use std::fmt::Write as _;

use crate::model::PlayerRow;

const MIN_NAME_WIDTH: usize = 8;

/// Render parsed rows as a monospaced table with a title and a rule.
///
/// Meant both for human reading and as plain-text context handed to a
/// downstream question-answering collaborator, so every cell is padded to
/// a fixed width and missing values show the sentinel dot.
pub fn ascii_table(title: &str, rows: &[PlayerRow]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    let mut out = String::new();
    let header = format!(
        "{:>3} {:1} {:<name_width$} | {:>4} {:>4} {:>4} | {:>4} {:>4} {:>4} | {:>4} {:>4} {:>4} {:>4} | {:>4} {:>4} {:>4} {:>4} {:>4} | {:>4}",
        "No", "R", "Name",
        "Vote", "Pts", "W-L",
        "Srv", "Err", "Ace",
        "Rec", "Err", "Pos%", "Exc%",
        "Att", "Err", "Blkd", "Kill", "Eff%",
        "Blk",
    );

    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(header.chars().count()));
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));
    out.push('\n');

    for row in rows {
        let s = &row.stats;
        let number = row.number.map(|n| n.to_string()).unwrap_or_else(|| ".".into());
        let role = row.role.unwrap_or(' ');
        let _ = writeln!(
            out,
            "{:>3} {:1} {:<name_width$} | {:>4} {:>4} {:>4} | {:>4} {:>4} {:>4} | {:>4} {:>4} {:>4} {:>4} | {:>4} {:>4} {:>4} {:>4} {:>4} | {:>4}",
            number, role, row.name,
            s.points.vote, s.points.total, s.points.win_loss,
            s.serve.total, s.serve.err, s.serve.points,
            s.reception.total, s.reception.err, s.reception.pos_pct, s.reception.exc_pct,
            s.attack.total, s.attack.err, s.attack.blocked, s.attack.points, s.attack.eff_pct,
            s.block.stuffs,
        );
    }

    out
}
