//! Rendering module: projections of a parsed team block.
//!
//! All three renderers are pure functions over already-parsed data: a
//! cleaned plain-text block, a fixed-width ASCII table, and a debug token
//! matrix for tuning column offsets against new document templates.

mod clean;
mod debug;
mod table;

pub use clean::{clean_block, clean_text};
pub use debug::{token_matrix, BlockReport, DebugRow};
pub use table::ascii_table;
