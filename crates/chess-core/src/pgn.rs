//! PGN parsing utilities — lightweight regex-based parser.
//!
//! Only what the opening classifier needs: headers for player names and
//! links, and the mainline SAN tokens in play order. No legality checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PgnError;
use crate::game_data::{GameData, GameMetadata};

const RESULT_TOKENS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

const STANDARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[(\w+)\s+"([^"]*)"\]"#).expect("valid header regex"));

static HEADER_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("valid header line regex"));

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}|;[^\n]*").expect("valid comment regex"));

static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?[+#]?|[O0]-[O0](?:-[O0])?[+#]?")
        .expect("valid move regex")
});

/// Parse a single-game PGN string into a GameData struct.
///
/// Returns `None` for games set up from a non-standard position and for
/// games without any moves.
pub fn parse_pgn(pgn: &str) -> Option<GameData> {
    let mut white = "Unknown".to_string();
    let mut black = "Unknown".to_string();
    let mut result = "*".to_string();
    let mut date = None;
    let mut eco = None;
    let mut link = None;
    let mut setup = None;
    let mut fen = None;

    for cap in HEADER_RE.captures_iter(pgn) {
        let key = &cap[1];
        let value = cap[2].to_string();
        match key {
            "White" => white = value,
            "Black" => black = value,
            "Result" => result = value,
            "Date" => date = Some(value),
            "ECO" => eco = Some(value),
            "Link" => link = Some(value),
            "Site" if link.is_none() => link = Some(value),
            "SetUp" => setup = Some(value),
            "FEN" => fen = Some(value),
            _ => {}
        }
    }

    // Filter non-standard positions
    if setup.as_deref() == Some("1") {
        if let Some(ref f) = fen {
            if f != STANDARD_START_FEN {
                return None;
            }
        }
    }

    let moves = extract_moves(pgn);
    if moves.is_empty() {
        return None;
    }

    Some(GameData {
        metadata: GameMetadata {
            white,
            black,
            result,
            date,
            eco,
            link,
        },
        moves,
    })
}

/// Split a multi-game PGN file and parse every game in it.
///
/// Games that `parse_pgn` rejects are dropped; an input where nothing
/// survives is an error.
pub fn parse_games(text: &str) -> Result<Vec<GameData>, PgnError> {
    let games: Vec<GameData> = split_games(text)?
        .iter()
        .filter_map(|g| parse_pgn(g))
        .collect();

    if games.is_empty() {
        return Err(PgnError::NoGames);
    }
    Ok(games)
}

/// Split PGN text into one string per game. A new game starts at a header
/// line that follows movetext, or at movetext that follows a line ending in
/// a result token (header-less files).
pub fn split_games(text: &str) -> Result<Vec<String>, PgnError> {
    if text.trim().is_empty() {
        return Err(PgnError::Empty);
    }

    let mut games = Vec::new();
    let mut current = String::new();
    let mut in_movetext = false;
    let mut finished = false;

    for line in text.lines() {
        let trimmed = line.trim();
        let is_header = trimmed.starts_with('[');
        let is_movetext = !is_header && !trimmed.is_empty();

        if (is_header && in_movetext) || (is_movetext && finished) {
            games.push(std::mem::take(&mut current));
            in_movetext = false;
            finished = false;
        }
        if is_movetext {
            in_movetext = true;
            finished = ends_with_result(trimmed);
        }

        current.push_str(line);
        current.push('\n');
    }

    if !current.trim().is_empty() {
        games.push(current);
    }

    Ok(games)
}

fn ends_with_result(line: &str) -> bool {
    line.split_whitespace()
        .last()
        .is_some_and(|token| RESULT_TOKENS.contains(&token))
}

/// Extract mainline SAN moves from PGN text (after removing headers,
/// comments and variations).
pub fn extract_moves(pgn: &str) -> Vec<String> {
    let no_headers = HEADER_LINE_RE.replace_all(pgn, "");
    let no_comments = COMMENT_RE.replace_all(&no_headers, "");
    let mainline = strip_variations(&no_comments);

    MOVE_RE
        .find_iter(&mainline)
        .map(|m| normalize_castling(m.as_str()))
        .collect()
}

/// Castling written with zeros (`0-0`, `0-0-0+`) gets the SAN letter `O`.
fn normalize_castling(token: &str) -> String {
    if token.starts_with('0') {
        token.replace('0', "O")
    } else {
        token.to_string()
    }
}

/// Remove parenthesised variations, including nested ones.
fn strip_variations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;

    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}
