//! Opening classification for a player's games.
//!
//! `classify` looks at the first 20 plies of a SAN move list and names the
//! opening the player chose, from White's or Black's side. It is total:
//! every game with at least two plies gets a bucket, unmatched lines fall
//! back to the nearest default.

pub mod batch;
pub mod bucket;
mod black;
pub mod error;
pub mod matching;
pub mod moves;
pub mod perspective;
mod white;

use tracing::trace;

pub use batch::{classify_game, classify_games, ClassifiedGame};
pub use bucket::{OpeningBucket, Repertoire};
pub use error::ParseError;
pub use matching::all_present;
pub use moves::{black_moves, opening_window, white_moves, OpeningWindow, OPENING_WINDOW_PLIES};
pub use perspective::Perspective;

/// Classify a game's opening from `perspective`'s side.
///
/// Returns `None` when fewer than two plies were played.
pub fn classify<S: AsRef<str>>(moves: &[S], perspective: Perspective) -> Option<OpeningBucket> {
    let window = OpeningWindow::new(moves);
    if window.len() < 2 {
        return None;
    }

    let bucket = match perspective {
        Perspective::White => white::classify_white(&window),
        Perspective::Black => black::classify_black(&window),
    };
    trace!(%perspective, bucket = bucket.as_str(), "Classified opening");
    Some(bucket)
}
