use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameMetadata {
    pub white: String,
    pub black: String,
    pub result: String, // "1-0", "0-1", "1/2-1/2", "*"
    pub date: Option<String>,
    pub eco: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameData {
    pub metadata: GameMetadata,
    pub moves: Vec<String>, // SAN notation, ply order
}

impl GameData {
    /// Build a game with placeholder headers from a list of SAN moves.
    pub fn from_moves<S: AsRef<str>>(moves: &[S]) -> Self {
        Self {
            metadata: GameMetadata {
                white: "Unknown".to_string(),
                black: "Unknown".to_string(),
                result: "*".to_string(),
                ..GameMetadata::default()
            },
            moves: moves.iter().map(|m| m.as_ref().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_moves_keeps_order() {
        let game = GameData::from_moves(&["e4", "c5", "Nf3"]);
        assert_eq!(game.moves, vec!["e4", "c5", "Nf3"]);
        assert_eq!(game.metadata.white, "Unknown");
        assert_eq!(game.metadata.result, "*");
    }

    #[test]
    fn test_metadata_json_shape() {
        let game = GameData::from_moves(&["d4"]);
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["metadata"]["black"], "Unknown");
        assert_eq!(json["moves"][0], "d4");
        assert!(json["metadata"]["eco"].is_null());
    }
}
