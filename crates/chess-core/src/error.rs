use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PgnError {
    #[error("PGN input is empty")]
    Empty,

    #[error("No games found in PGN input")]
    NoGames,
}
