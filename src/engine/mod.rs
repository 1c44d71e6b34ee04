//! The heuristic table-recovery engine.
//!
//! Everything in here is total: given a corpus, each stage returns an
//! empty or default value when its heuristic finds nothing, never an
//! error. The pipeline is one linear pass with no backtracking:
//! locate block, locate header, parse rows.

mod config;
mod header;
mod locate;
mod names;
mod normalize;
mod row;

pub use config::EngineConfig;
pub use header::{locate_header, HeaderScan};
pub use locate::locate_block;
pub use names::extract_names;
pub use row::parse_rows;

pub(crate) use normalize::normalize;
#[cfg(test)]
pub(crate) use row::parse_row;
