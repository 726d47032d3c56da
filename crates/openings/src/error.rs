use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown opening bucket: {0}")]
    UnknownBucket(String),

    #[error("Unknown perspective: {0} (expected \"white\" or \"black\")")]
    UnknownPerspective(String),
}
