//! Rank value helpers shared by the refiners.
use std::collections::BTreeMap;

use tracing::{Level, event};

use crate::core::{Card, RANK_CHARS};

/// Numeric value of a card, 2 through 14 with the ace high.
pub fn rank_value(card: &Card) -> u8 {
    card.rank_value()
}

/// Value of a card given in its two character display form.
///
/// Returns 0 when the rank character isn't recognized. That should
/// never happen for a valid card so it is reported as a warning.
///
/// ```
/// use poker_matchups::matchup::rank_value_of_display;
///
/// assert_eq!(10, rank_value_of_display("Th"));
/// assert_eq!(0, rank_value_of_display("Zh"));
/// ```
pub fn rank_value_of_display(card: &str) -> u8 {
    let rank_char = card.chars().next().map(|c| c.to_ascii_uppercase());
    match rank_char.and_then(|c| RANK_CHARS.iter().position(|r| *r == c)) {
        Some(idx) => idx as u8 + 2,
        None => {
            event!(Level::WARN, card, "Unrecognized rank character");
            0
        }
    }
}

/// Values of the cards sorted high to low. Duplicates are kept.
pub fn descending_values(cards: &[Card]) -> Vec<u8> {
    let mut values: Vec<u8> = cards.iter().map(rank_value).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values
}

/// How many times each value appears.
pub fn count_by_rank(cards: &[Card]) -> BTreeMap<u8, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(rank_value(card)).or_insert(0) += 1;
    }
    counts
}

/// Values that appear exactly `count` times, high to low.
pub fn ranks_with_count(cards: &[Card], count: usize) -> Vec<u8> {
    count_by_rank(cards)
        .into_iter()
        .rev()
        .filter(|(_, c)| *c == count)
        .map(|(v, _)| v)
        .collect()
}

/// Highest value that appears exactly `count` times, or 0.
pub fn rank_with_count(cards: &[Card], count: usize) -> u8 {
    ranks_with_count(cards, count).first().copied().unwrap_or(0)
}

/// First position where the two sequences differ, only looking as
/// far as the shorter one. `None` means no distinguishing card.
pub fn first_diverging_index(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter().zip(b.iter()).position(|(x, y)| x != y)
}

/// Top card of a straight. The wheel (A-5-4-3-2) tops out at 5.
pub fn straight_top_value(cards: &[Card]) -> u8 {
    let values = descending_values(cards);
    let is_wheel = values.contains(&14) && [5, 4, 3, 2].iter().all(|v| values.contains(v));
    if is_wheel {
        5
    } else {
        values.first().copied().unwrap_or(0)
    }
}
