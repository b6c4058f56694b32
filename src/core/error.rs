use thiserror::Error;

use super::Card;

/// This is the core error type for the card and
/// hand handling code. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Hash, PartialEq, Eq)]
pub enum PokerError {
    #[error("Unable to parse value '{0}'")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suit '{0}'")]
    UnexpectedSuitChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Expected between 5 and 7 cards to rank, found {0}")]
    HandSize(usize),
    #[error("The deck ran out of cards: wanted {wanted}, {remaining} left")]
    DeckExhausted { wanted: usize, remaining: usize },
}
