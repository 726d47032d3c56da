//! CLI configuration from positional arguments and environment variables

use std::env;
use std::path::PathBuf;

use crate::error::CliError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// PGN file holding the games to classify
    pub pgn_path: PathBuf,

    /// Player whose repertoire is classified
    pub player_name: String,

    /// Where to write the JSON report (stdout when unset)
    pub output_path: Option<PathBuf>,

    /// Pretty-print the JSON report
    pub pretty_json: bool,
}

impl CliConfig {
    /// Load configuration. Positional arguments take precedence over
    /// `PGN_PATH` and `PLAYER_NAME`.
    pub fn load() -> Result<Self, CliError> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::from_sources(&args, |key| env::var(key).ok())
    }

    fn from_sources(
        args: &[String],
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CliError> {
        let pgn_path = args
            .first()
            .cloned()
            .or_else(|| var("PGN_PATH"))
            .map(PathBuf::from)
            .ok_or(CliError::Config("PGN_PATH not set"))?;

        let player_name = args
            .get(1)
            .cloned()
            .or_else(|| var("PLAYER_NAME"))
            .filter(|name| !name.trim().is_empty())
            .ok_or(CliError::Config("PLAYER_NAME not set"))?;

        let output_path = var("OUTPUT_PATH").map(PathBuf::from);

        let pretty_json = var("PRETTY_JSON")
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        Ok(Self {
            pgn_path,
            player_name,
            output_path,
            pretty_json,
        })
    }
}
