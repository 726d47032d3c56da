//! Shared chess game records and PGN move extraction.

pub mod error;
pub mod game_data;
pub mod pgn;

pub use error::PgnError;
pub use game_data::{GameData, GameMetadata};
