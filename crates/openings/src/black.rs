//! Openings classified from Black's side: which defence the player chose
//! against White's first move.

use crate::bucket::OpeningBucket::{self, *};
use crate::matching::all_present;
use crate::moves::OpeningWindow;

pub(crate) fn classify_black(w: &OpeningWindow<'_>) -> OpeningBucket {
    match (w.ply(0), w.ply(1)) {
        (Some("e4"), _) => against_e4(w),
        (Some("d4"), _) => against_d4(w),
        (Some("c4"), Some("c5")) => EnglishSymmetrical,
        (Some("c4"), Some("Nf6" | "e6")) => AngloIndian,
        (Some("Nf3"), Some("Nf6" | "d5" | "c5")) => AngloIndian,
        _ => OtherBlack,
    }
}

fn against_e4(w: &OpeningWindow<'_>) -> OpeningBucket {
    match w.ply(1) {
        Some("c5") => sicilian(w),
        Some("e6") => FrenchDefense,
        Some("c6") => CaroKann,
        Some("d5") => Scandinavian,
        Some("Nf6") => AlekhineDefense,
        Some("d6") => {
            let black = w.black_first(5);
            if all_present(black, &["Nf6", "g6"]) {
                PircDefense
            } else if all_present(black, &["g6"]) {
                ModernDefense
            } else {
                PhilidorDefense
            }
        }
        Some("g6") => ModernDefense,
        Some("b6") => OwenDefense,
        _ => KingsPawnOther,
    }
}

/// 1.e4 c5
fn sicilian(w: &OpeningWindow<'_>) -> OpeningBucket {
    let has = |targets: &[&str]| all_present(w.black_first(8), targets);

    match (w.ply(2), w.ply(3)) {
        (Some("c3"), _) => SicilianAlapin,
        (Some("Nc3"), _) if all_present(w.white_first(5), &["g3"]) => SicilianClosed,
        (Some("Nf3"), Some("d6")) => {
            // a6 wins even when ...e5 follows
            if has(&["a6"]) {
                SicilianNajdorf
            } else if has(&["g6", "Bg7"]) {
                SicilianDragon
            } else if has(&["e6"]) {
                SicilianScheveningen
            } else if has(&["Nc6", "Nf6"]) {
                SicilianClassical
            } else {
                SicilianOther
            }
        }
        (Some("Nf3"), Some("Nc6")) => {
            if has(&["e5"]) {
                SicilianSveshnikov
            } else if has(&["g6"]) {
                SicilianAcceleratedDragon
            } else {
                SicilianOther
            }
        }
        (Some("Nf3"), Some("e6")) => {
            if has(&["Nc6"]) {
                SicilianTaimanov
            } else if has(&["a6"]) {
                SicilianKan
            } else {
                SicilianOther
            }
        }
        (Some("Nf3"), Some("g6")) => SicilianAcceleratedDragon,
        _ => SicilianOther,
    }
}

fn against_d4(w: &OpeningWindow<'_>) -> OpeningBucket {
    let black_eight = w.black_first(8);

    match (w.ply(1), w.ply(2), w.ply(3)) {
        (Some("Nf6"), Some("c4"), Some("g6")) => {
            if all_present(black_eight, &["d5"]) {
                Grunfeld
            } else {
                KingsIndian
            }
        }
        (Some("Nf6"), Some("c4"), Some("e6")) => indian_with_e6(w),
        (Some("Nf6"), Some("c4"), Some("c5")) => Benoni,
        (Some("Nf6"), Some("c4"), Some("e5")) => BudapestGambit,
        (Some("Nf6"), ..) => D4Other,

        (Some("d5"), Some("c4"), Some("dxc4")) => QueensGambitAccepted,
        (Some("d5"), Some("c4"), Some("c6")) => {
            if all_present(black_eight, &["e6"]) {
                SemiSlav
            } else {
                SlavDefense
            }
        }
        (Some("d5"), Some("c4"), Some("e6")) => {
            if all_present(black_eight, &["c5"]) {
                TarraschDefense
            } else {
                QueensGambitDeclined
            }
        }
        (Some("d5"), Some("c4"), Some("Nc6")) => ChigorinDefense,
        (Some("d5"), ..) => QueensGambitDeclined,

        (Some("f5"), ..) => DutchDefense,
        (Some("e6"), _, Some("f5")) => DutchDefense,
        (Some("e6"), ..) => QueensGambitDeclined,
        (Some("c5"), ..) => Benoni,
        (Some("g6"), ..) => {
            if all_present(w.black_first(6), &["d6", "Nf6"]) {
                KingsIndian
            } else {
                ModernDefense
            }
        }
        _ => D4Other,
    }
}

/// 1.d4 Nf6 2.c4 e6
fn indian_with_e6(w: &OpeningWindow<'_>) -> OpeningBucket {
    match (w.ply(4), w.ply(5)) {
        (Some("Nc3"), Some("Bb4")) => NimzoIndian,
        (Some("Nf3"), Some("b6")) => QueensIndian,
        (Some("Nf3"), Some("Bb4" | "Bb4+")) => BogoIndian,
        // ...Bb4 played a move later
        (fourth, _) if all_present(w.black_first(5), &["Bb4"]) => match fourth {
            Some("Nf3") => BogoIndian,
            Some("Nc3") => NimzoIndian,
            _ => QueensGambitDeclined,
        },
        _ => QueensGambitDeclined,
    }
}
