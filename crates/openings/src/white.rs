//! Openings classified from White's side: what the player chose to play
//! with the white pieces.
//!
//! Several deviations by Black land on a White-repertoire default (1.e4 c5
//! sidelines count as `italian_game`, for example). Those buckets describe
//! the player's own first moves, not the named theory.

use crate::bucket::OpeningBucket::{self, *};
use crate::matching::all_present;
use crate::moves::OpeningWindow;

pub(crate) fn classify_white(w: &OpeningWindow<'_>) -> OpeningBucket {
    match w.ply(0) {
        Some("e4") => kings_pawn(w),
        Some("d4") => queens_pawn(w),
        Some("c4") => EnglishOpening,
        Some("Nf3") => reti(w),
        Some("f4") => BirdsOpening,
        Some("b3") => LarsenOpening,
        Some("g4") => GrobAttack,
        _ => OtherWhite,
    }
}

fn kings_pawn(w: &OpeningWindow<'_>) -> OpeningBucket {
    match (w.ply(1), w.ply(2), w.ply(3)) {
        (Some("e5"), ..) => open_game(w),
        (Some("c5"), Some("c3"), _) => SicilianAlapin,
        (Some("c5"), Some("Nc3"), Some("Nc6")) => SicilianClosed,
        (Some("c5"), ..) => ItalianGame,
        (Some("e6" | "c6"), ..) => ItalianGame,
        (Some("d5"), ..) => CenterGame,
        _ => ItalianGame,
    }
}

/// 1.e4 e5
fn open_game(w: &OpeningWindow<'_>) -> OpeningBucket {
    match (w.ply(2), w.ply(3), w.ply(4), w.ply(5)) {
        (Some("Nf3"), Some("Nc6"), Some("Bb5" | "Bb5+"), _) => RuyLopez,
        (Some("Nf3"), Some("Nc6"), Some("Bc4"), _) => ItalianGame,
        (Some("Nf3"), Some("Nc6"), Some("d4"), _) => ScotchGame,
        (Some("Nf3"), Some("Nc6"), Some("Nc3"), Some("Nf6")) => FourKnights,
        (Some("Nf3"), Some("Nc6"), ..) => ItalianGame,
        (Some("Nf3"), Some("Nf6"), ..) => PetrovDefense,
        (Some("Nf3"), Some("d6"), ..) => PhilidorDefense,
        (Some("Nf3"), ..) => ItalianGame,
        (Some("Bc4"), ..) => BishopsOpening,
        (Some("f4"), ..) => KingsGambit,
        (Some("Nc3"), ..) => ViennaGame,
        (Some("d4"), ..) => CenterGame,
        (Some("c3"), ..) => Ponziani,
        _ => ItalianGame,
    }
}

/// 1.d4 systems. First satisfied test wins.
fn queens_pawn(w: &OpeningWindow<'_>) -> OpeningBucket {
    let reply = w.ply(1);
    let second = w.ply(2);

    // c4 among White's moves through ply 4
    if all_present(w.white_first(3), &["c4"]) {
        return if all_present(w.white_first(6), &["g3", "Bg2"]) {
            Catalan
        } else {
            QueensGambit
        };
    }

    let first_four = w.white_first(4);
    let first_five = w.white_first(5);

    if all_present(first_five, &["Bf4"]) && !all_present(first_five, &["c4"]) {
        return LondonSystem;
    }
    if reply == Some("Nf6") && second == Some("Bg5") {
        return Trompowsky;
    }
    if all_present(first_four, &["Nf3", "Bg5"]) {
        return TorreAttack;
    }
    if all_present(first_five, &["e3", "Bd3", "Nf3"]) {
        return ColleSystem;
    }
    if all_present(first_four, &["Nc3", "Bg5"]) && !all_present(first_four, &["c4"]) {
        return Veresov;
    }
    if reply == Some("d5") && second == Some("e4") {
        return BlackmarDiemer;
    }

    QueensGambit
}

fn reti(w: &OpeningWindow<'_>) -> OpeningBucket {
    if all_present(w.white_first(6), &["g3", "Bg2", "d3"]) {
        KingsIndianAttack
    } else {
        RetiOpening
    }
}
