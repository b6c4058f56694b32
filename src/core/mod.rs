//! This is the core module. It exports the cards, deck and
//! hand ranking code that the matchup classifier is built on.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, RANK_CHARS, Suit, Value};

/// Errors for card parsing and hand building.
mod error;
pub use self::error::PokerError;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::CardIter;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// 5 Card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{HandType, Rank, Rankable};

/// Best hand selection and winner determination.
mod evaluate;
pub use self::evaluate::{EvaluatedHand, HandEvaluator, RankEvaluator, Verdict};
