use thiserror::Error;

use crate::core::PokerError;

/// Errors raised while classifying showdowns and keeping
/// the matchup store on disk.
#[derive(Error, Debug)]
pub enum MatchupError {
    #[error("Not a valid category key: {0:?}")]
    InvalidCategoryKey(String),
    #[error("Unable to deal or rank a showdown")]
    Poker(#[from] PokerError),
    #[error("I/O error on the matchup store")]
    Io(#[from] std::io::Error),
    #[error("Unable to encode the matchup store")]
    Json(#[from] serde_json::Error),
}
