//! Data model for recovered statistics tables.
//!
//! These types form the intermediate representation between document
//! decoding and rendering: an immutable line corpus, the located team
//! block, the inferred header column layout, and the typed per-player
//! rows. Nothing here is persisted; everything is recomputed per call.

mod block;
mod corpus;
mod layout;
mod outcome;
mod player;

pub use block::TeamBlock;
pub use corpus::LineCorpus;
pub use layout::HeaderLayout;
pub use outcome::Outcome;
pub use player::{
    AttackLine, BlockLine, PlayerRow, PlayerStats, PointsLine, ReceptionLine, ServeLine, Stat,
    LIBERO_MARKER,
};
