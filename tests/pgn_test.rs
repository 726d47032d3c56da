//! Integration tests: PGN text in, per-game opening report out.

use chess_core::pgn::parse_games;
use openings::{classify_games, OpeningBucket, Perspective};

const GAMES: &str = r#"[Event "Rated Blitz game"]
[Site "https://lichess.org/aaaa1111"]
[White "tracked_player"]
[Black "opponent1"]
[Result "1-0"]

1. e4 e5 2. Nf3 Nc6 3. Bb5 {The Spanish} a6 (3... Nf6 4. O-O) 4. Ba4 Nf6 5. O-O Be7 1-0

[Event "Rated Blitz game"]
[Site "https://lichess.org/bbbb2222"]
[White "opponent2"]
[Black "Tracked_Player"]
[Result "0-1"]

1. e4 c5 2. Nf3 d6 3. d4 cxd4 4. Nxd4 Nf6 5. Nc3 a6 6. Be3 e5 0-1

[Event "Rated Blitz game"]
[Site "https://lichess.org/cccc3333"]
[White "someone"]
[Black "else"]
[Result "1/2-1/2"]

1. d4 d5 1/2-1/2

[Event "Rated Blitz game"]
[Link "https://www.chess.com/game/live/42"]
[White "opponent3"]
[Black "tracked_player"]
[Result "1-0"]

1. d4 1-0

[Event "Rated Blitz game"]
[White "opponent4"]
[Black "tracked_player"]
[Result "0-1"]

1. d4 Nf6 2. c4 e6 3. Nf3 Bb4+ 4. Bd2 Qe7 0-1
"#;

#[test]
fn test_report_for_tracked_player() {
    let games = parse_games(GAMES).unwrap();
    assert_eq!(games.len(), 5);

    let report = classify_games("tracked_player", &games);
    let summary: Vec<(Perspective, OpeningBucket)> =
        report.iter().map(|g| (g.perspective, g.bucket)).collect();

    assert_eq!(
        summary,
        vec![
            (Perspective::White, OpeningBucket::RuyLopez),
            (Perspective::Black, OpeningBucket::SicilianNajdorf),
            (Perspective::Black, OpeningBucket::BogoIndian),
        ]
    );
    assert_eq!(report[0].link.as_deref(), Some("https://lichess.org/aaaa1111"));
    assert_eq!(report[1].black, "Tracked_Player");
}

#[test]
fn test_report_json() {
    let games = parse_games(GAMES).unwrap();
    let report = classify_games("opponent2", &games);
    assert_eq!(report.len(), 1);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json[0]["perspective"], "white");
    assert_eq!(json[0]["bucket"], "italian_game");
    assert_eq!(json[0]["label"], "Italian Game");
}
