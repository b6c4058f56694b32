//! Generate random heads up holdem showdowns and sort them into fine
//! grained outcome categories, such as "pair beats a lower pair" or
//! "both players chop a straight on the board".
//!
//! The `core` module holds cards, decks and hand ranking. The
//! `matchup` module builds the classifier and sample store on top.

/// Cards, decks, and hand evaluation.
pub mod core;
/// Showdown classification and the matchup store.
pub mod matchup;
