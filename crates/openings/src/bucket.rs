//! The closed set of opening buckets a game can be classified into.
//!
//! The snake_case strings returned by `as_str` (and used by serde) are a
//! stable contract: display code maps them to labels by exact match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::perspective::Perspective;

/// Which perspective(s) can produce a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repertoire {
    White,
    Black,
    Both,
}

impl Repertoire {
    pub fn includes(self, perspective: Perspective) -> bool {
        matches!(
            (self, perspective),
            (Repertoire::Both, _)
                | (Repertoire::White, Perspective::White)
                | (Repertoire::Black, Perspective::Black)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningBucket {
    // White repertoire
    RuyLopez,
    ItalianGame,
    ScotchGame,
    FourKnights,
    PetrovDefense,
    BishopsOpening,
    KingsGambit,
    ViennaGame,
    CenterGame,
    Ponziani,
    Catalan,
    QueensGambit,
    LondonSystem,
    Trompowsky,
    TorreAttack,
    ColleSystem,
    Veresov,
    BlackmarDiemer,
    EnglishOpening,
    KingsIndianAttack,
    RetiOpening,
    BirdsOpening,
    LarsenOpening,
    GrobAttack,
    OtherWhite,
    // Either side
    SicilianAlapin,
    SicilianClosed,
    PhilidorDefense,
    // Black repertoire
    SicilianNajdorf,
    SicilianDragon,
    SicilianScheveningen,
    SicilianClassical,
    SicilianSveshnikov,
    SicilianAcceleratedDragon,
    SicilianTaimanov,
    SicilianKan,
    SicilianOther,
    FrenchDefense,
    CaroKann,
    Scandinavian,
    AlekhineDefense,
    PircDefense,
    ModernDefense,
    OwenDefense,
    KingsPawnOther,
    Grunfeld,
    KingsIndian,
    NimzoIndian,
    QueensIndian,
    BogoIndian,
    QueensGambitDeclined,
    QueensGambitAccepted,
    SemiSlav,
    SlavDefense,
    TarraschDefense,
    ChigorinDefense,
    Benoni,
    BudapestGambit,
    DutchDefense,
    D4Other,
    EnglishSymmetrical,
    AngloIndian,
    OtherBlack,
}

impl OpeningBucket {
    pub const ALL: [OpeningBucket; 63] = [
        OpeningBucket::RuyLopez,
        OpeningBucket::ItalianGame,
        OpeningBucket::ScotchGame,
        OpeningBucket::FourKnights,
        OpeningBucket::PetrovDefense,
        OpeningBucket::BishopsOpening,
        OpeningBucket::KingsGambit,
        OpeningBucket::ViennaGame,
        OpeningBucket::CenterGame,
        OpeningBucket::Ponziani,
        OpeningBucket::Catalan,
        OpeningBucket::QueensGambit,
        OpeningBucket::LondonSystem,
        OpeningBucket::Trompowsky,
        OpeningBucket::TorreAttack,
        OpeningBucket::ColleSystem,
        OpeningBucket::Veresov,
        OpeningBucket::BlackmarDiemer,
        OpeningBucket::EnglishOpening,
        OpeningBucket::KingsIndianAttack,
        OpeningBucket::RetiOpening,
        OpeningBucket::BirdsOpening,
        OpeningBucket::LarsenOpening,
        OpeningBucket::GrobAttack,
        OpeningBucket::OtherWhite,
        OpeningBucket::SicilianAlapin,
        OpeningBucket::SicilianClosed,
        OpeningBucket::PhilidorDefense,
        OpeningBucket::SicilianNajdorf,
        OpeningBucket::SicilianDragon,
        OpeningBucket::SicilianScheveningen,
        OpeningBucket::SicilianClassical,
        OpeningBucket::SicilianSveshnikov,
        OpeningBucket::SicilianAcceleratedDragon,
        OpeningBucket::SicilianTaimanov,
        OpeningBucket::SicilianKan,
        OpeningBucket::SicilianOther,
        OpeningBucket::FrenchDefense,
        OpeningBucket::CaroKann,
        OpeningBucket::Scandinavian,
        OpeningBucket::AlekhineDefense,
        OpeningBucket::PircDefense,
        OpeningBucket::ModernDefense,
        OpeningBucket::OwenDefense,
        OpeningBucket::KingsPawnOther,
        OpeningBucket::Grunfeld,
        OpeningBucket::KingsIndian,
        OpeningBucket::NimzoIndian,
        OpeningBucket::QueensIndian,
        OpeningBucket::BogoIndian,
        OpeningBucket::QueensGambitDeclined,
        OpeningBucket::QueensGambitAccepted,
        OpeningBucket::SemiSlav,
        OpeningBucket::SlavDefense,
        OpeningBucket::TarraschDefense,
        OpeningBucket::ChigorinDefense,
        OpeningBucket::Benoni,
        OpeningBucket::BudapestGambit,
        OpeningBucket::DutchDefense,
        OpeningBucket::D4Other,
        OpeningBucket::EnglishSymmetrical,
        OpeningBucket::AngloIndian,
        OpeningBucket::OtherBlack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OpeningBucket::RuyLopez => "ruy_lopez",
            OpeningBucket::ItalianGame => "italian_game",
            OpeningBucket::ScotchGame => "scotch_game",
            OpeningBucket::FourKnights => "four_knights",
            OpeningBucket::PetrovDefense => "petrov_defense",
            OpeningBucket::BishopsOpening => "bishops_opening",
            OpeningBucket::KingsGambit => "kings_gambit",
            OpeningBucket::ViennaGame => "vienna_game",
            OpeningBucket::CenterGame => "center_game",
            OpeningBucket::Ponziani => "ponziani",
            OpeningBucket::Catalan => "catalan",
            OpeningBucket::QueensGambit => "queens_gambit",
            OpeningBucket::LondonSystem => "london_system",
            OpeningBucket::Trompowsky => "trompowsky",
            OpeningBucket::TorreAttack => "torre_attack",
            OpeningBucket::ColleSystem => "colle_system",
            OpeningBucket::Veresov => "veresov",
            OpeningBucket::BlackmarDiemer => "blackmar_diemer",
            OpeningBucket::EnglishOpening => "english_opening",
            OpeningBucket::KingsIndianAttack => "kings_indian_attack",
            OpeningBucket::RetiOpening => "reti_opening",
            OpeningBucket::BirdsOpening => "birds_opening",
            OpeningBucket::LarsenOpening => "larsen_opening",
            OpeningBucket::GrobAttack => "grob_attack",
            OpeningBucket::OtherWhite => "other_white",
            OpeningBucket::SicilianAlapin => "sicilian_alapin",
            OpeningBucket::SicilianClosed => "sicilian_closed",
            OpeningBucket::PhilidorDefense => "philidor_defense",
            OpeningBucket::SicilianNajdorf => "sicilian_najdorf",
            OpeningBucket::SicilianDragon => "sicilian_dragon",
            OpeningBucket::SicilianScheveningen => "sicilian_scheveningen",
            OpeningBucket::SicilianClassical => "sicilian_classical",
            OpeningBucket::SicilianSveshnikov => "sicilian_sveshnikov",
            OpeningBucket::SicilianAcceleratedDragon => "sicilian_accelerated_dragon",
            OpeningBucket::SicilianTaimanov => "sicilian_taimanov",
            OpeningBucket::SicilianKan => "sicilian_kan",
            OpeningBucket::SicilianOther => "sicilian_other",
            OpeningBucket::FrenchDefense => "french_defense",
            OpeningBucket::CaroKann => "caro_kann",
            OpeningBucket::Scandinavian => "scandinavian",
            OpeningBucket::AlekhineDefense => "alekhine_defense",
            OpeningBucket::PircDefense => "pirc_defense",
            OpeningBucket::ModernDefense => "modern_defense",
            OpeningBucket::OwenDefense => "owen_defense",
            OpeningBucket::KingsPawnOther => "kings_pawn_other",
            OpeningBucket::Grunfeld => "grunfeld",
            OpeningBucket::KingsIndian => "kings_indian",
            OpeningBucket::NimzoIndian => "nimzo_indian",
            OpeningBucket::QueensIndian => "queens_indian",
            OpeningBucket::BogoIndian => "bogo_indian",
            OpeningBucket::QueensGambitDeclined => "queens_gambit_declined",
            OpeningBucket::QueensGambitAccepted => "queens_gambit_accepted",
            OpeningBucket::SemiSlav => "semi_slav",
            OpeningBucket::SlavDefense => "slav_defense",
            OpeningBucket::TarraschDefense => "tarrasch_defense",
            OpeningBucket::ChigorinDefense => "chigorin_defense",
            OpeningBucket::Benoni => "benoni",
            OpeningBucket::BudapestGambit => "budapest_gambit",
            OpeningBucket::DutchDefense => "dutch_defense",
            OpeningBucket::D4Other => "d4_other",
            OpeningBucket::EnglishSymmetrical => "english_symmetrical",
            OpeningBucket::AngloIndian => "anglo_indian",
            OpeningBucket::OtherBlack => "other_black",
        }
    }

    /// Human-readable name for dashboards and reports.
    pub fn display_name(self) -> &'static str {
        match self {
            OpeningBucket::RuyLopez => "Ruy Lopez",
            OpeningBucket::ItalianGame => "Italian Game",
            OpeningBucket::ScotchGame => "Scotch Game",
            OpeningBucket::FourKnights => "Four Knights Game",
            OpeningBucket::PetrovDefense => "Petrov Defense",
            OpeningBucket::BishopsOpening => "Bishop's Opening",
            OpeningBucket::KingsGambit => "King's Gambit",
            OpeningBucket::ViennaGame => "Vienna Game",
            OpeningBucket::CenterGame => "Center Game",
            OpeningBucket::Ponziani => "Ponziani Opening",
            OpeningBucket::Catalan => "Catalan Opening",
            OpeningBucket::QueensGambit => "Queen's Gambit",
            OpeningBucket::LondonSystem => "London System",
            OpeningBucket::Trompowsky => "Trompowsky Attack",
            OpeningBucket::TorreAttack => "Torre Attack",
            OpeningBucket::ColleSystem => "Colle System",
            OpeningBucket::Veresov => "Veresov Attack",
            OpeningBucket::BlackmarDiemer => "Blackmar-Diemer Gambit",
            OpeningBucket::EnglishOpening => "English Opening",
            OpeningBucket::KingsIndianAttack => "King's Indian Attack",
            OpeningBucket::RetiOpening => "Réti Opening",
            OpeningBucket::BirdsOpening => "Bird's Opening",
            OpeningBucket::LarsenOpening => "Larsen's Opening",
            OpeningBucket::GrobAttack => "Grob Attack",
            OpeningBucket::OtherWhite => "Other (White)",
            OpeningBucket::SicilianAlapin => "Sicilian Defense: Alapin",
            OpeningBucket::SicilianClosed => "Sicilian Defense: Closed",
            OpeningBucket::PhilidorDefense => "Philidor Defense",
            OpeningBucket::SicilianNajdorf => "Sicilian Defense: Najdorf",
            OpeningBucket::SicilianDragon => "Sicilian Defense: Dragon",
            OpeningBucket::SicilianScheveningen => "Sicilian Defense: Scheveningen",
            OpeningBucket::SicilianClassical => "Sicilian Defense: Classical",
            OpeningBucket::SicilianSveshnikov => "Sicilian Defense: Sveshnikov",
            OpeningBucket::SicilianAcceleratedDragon => "Sicilian Defense: Accelerated Dragon",
            OpeningBucket::SicilianTaimanov => "Sicilian Defense: Taimanov",
            OpeningBucket::SicilianKan => "Sicilian Defense: Kan",
            OpeningBucket::SicilianOther => "Sicilian Defense: Other",
            OpeningBucket::FrenchDefense => "French Defense",
            OpeningBucket::CaroKann => "Caro-Kann Defense",
            OpeningBucket::Scandinavian => "Scandinavian Defense",
            OpeningBucket::AlekhineDefense => "Alekhine's Defense",
            OpeningBucket::PircDefense => "Pirc Defense",
            OpeningBucket::ModernDefense => "Modern Defense",
            OpeningBucket::OwenDefense => "Owen's Defense",
            OpeningBucket::KingsPawnOther => "King's Pawn: Other",
            OpeningBucket::Grunfeld => "Grünfeld Defense",
            OpeningBucket::KingsIndian => "King's Indian Defense",
            OpeningBucket::NimzoIndian => "Nimzo-Indian Defense",
            OpeningBucket::QueensIndian => "Queen's Indian Defense",
            OpeningBucket::BogoIndian => "Bogo-Indian Defense",
            OpeningBucket::QueensGambitDeclined => "Queen's Gambit Declined",
            OpeningBucket::QueensGambitAccepted => "Queen's Gambit Accepted",
            OpeningBucket::SemiSlav => "Semi-Slav Defense",
            OpeningBucket::SlavDefense => "Slav Defense",
            OpeningBucket::TarraschDefense => "Tarrasch Defense",
            OpeningBucket::ChigorinDefense => "Chigorin Defense",
            OpeningBucket::Benoni => "Benoni Defense",
            OpeningBucket::BudapestGambit => "Budapest Gambit",
            OpeningBucket::DutchDefense => "Dutch Defense",
            OpeningBucket::D4Other => "Queen's Pawn: Other",
            OpeningBucket::EnglishSymmetrical => "English: Symmetrical",
            OpeningBucket::AngloIndian => "Anglo-Indian / Flank Defense",
            OpeningBucket::OtherBlack => "Other (Black)",
        }
    }

    pub fn repertoire(self) -> Repertoire {
        use OpeningBucket::*;
        match self {
            RuyLopez
            | ItalianGame
            | ScotchGame
            | FourKnights
            | PetrovDefense
            | BishopsOpening
            | KingsGambit
            | ViennaGame
            | CenterGame
            | Ponziani
            | Catalan
            | QueensGambit
            | LondonSystem
            | Trompowsky
            | TorreAttack
            | ColleSystem
            | Veresov
            | BlackmarDiemer
            | EnglishOpening
            | KingsIndianAttack
            | RetiOpening
            | BirdsOpening
            | LarsenOpening
            | GrobAttack
            | OtherWhite => Repertoire::White,
            SicilianAlapin | SicilianClosed | PhilidorDefense => Repertoire::Both,
            _ => Repertoire::Black,
        }
    }
}

impl fmt::Display for OpeningBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpeningBucket {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpeningBucket::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == s)
            .ok_or_else(|| ParseError::UnknownBucket(s.to_string()))
    }
}
