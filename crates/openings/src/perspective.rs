//! Which side's repertoire a game is classified for.

use std::fmt;
use std::str::FromStr;

use chess_core::GameMetadata;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    White,
    Black,
}

impl Perspective {
    pub fn as_str(self) -> &'static str {
        match self {
            Perspective::White => "white",
            Perspective::Black => "black",
        }
    }

    /// The side `username` played in a game, matched case-insensitively
    /// against the White/Black headers. `None` if they played neither.
    pub fn for_player(metadata: &GameMetadata, username: &str) -> Option<Self> {
        let username_lower = username.to_lowercase();
        if metadata.white.to_lowercase() == username_lower {
            Some(Perspective::White)
        } else if metadata.black.to_lowercase() == username_lower {
            Some(Perspective::Black)
        } else {
            None
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Perspective {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "white" | "w" => Ok(Perspective::White),
            "black" | "b" => Ok(Perspective::Black),
            _ => Err(ParseError::UnknownPerspective(s.to_string())),
        }
    }
}
