//! Classify a tracked player's games in bulk.

use chess_core::GameData;
use serde::Serialize;
use tracing::{debug, info};

use crate::bucket::OpeningBucket;
use crate::classify;
use crate::perspective::Perspective;

/// One game's classification, as written to reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedGame {
    pub link: Option<String>,
    pub white: String,
    pub black: String,
    pub date: Option<String>,
    pub eco: Option<String>,
    pub perspective: Perspective,
    pub bucket: OpeningBucket,
    pub label: &'static str,
}

/// Classify one game from `player`'s side.
///
/// `None` when the player didn't play in the game or it has fewer than
/// two plies.
pub fn classify_game(game: &GameData, player: &str) -> Option<ClassifiedGame> {
    let perspective = Perspective::for_player(&game.metadata, player)?;
    let bucket = classify(&game.moves, perspective)?;

    Some(ClassifiedGame {
        link: game.metadata.link.clone(),
        white: game.metadata.white.clone(),
        black: game.metadata.black.clone(),
        date: game.metadata.date.clone(),
        eco: game.metadata.eco.clone(),
        perspective,
        bucket,
        label: bucket.display_name(),
    })
}

/// Classify every game the player took part in, skipping the rest.
pub fn classify_games(player: &str, games: &[GameData]) -> Vec<ClassifiedGame> {
    let mut classified = Vec::with_capacity(games.len());

    for (index, game) in games.iter().enumerate() {
        match classify_game(game, player) {
            Some(result) => classified.push(result),
            None => debug!(
                index,
                white = %game.metadata.white,
                black = %game.metadata.black,
                plies = game.moves.len(),
                "Skipping unclassifiable game"
            ),
        }
    }

    info!(
        player,
        total = games.len(),
        classified = classified.len(),
        skipped = games.len() - classified.len(),
        "Classified openings"
    );
    classified
}
