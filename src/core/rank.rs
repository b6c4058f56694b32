use std::fmt;

use super::Card;

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all for the same suit.
    StraightFlush(u32),
}

/// The rank `rank_straight` gives to ten through ace.
const BROADWAY: u32 = 9;

/// The ten canonical hand types, weakest to strongest.
///
/// This strips the strength detail from a `Rank`, and splits the
/// ace high straight flush out into its own type.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandType {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

const HAND_TYPES: [HandType; 10] = [
    HandType::HighCard,
    HandType::Pair,
    HandType::TwoPair,
    HandType::ThreeOfAKind,
    HandType::Straight,
    HandType::Flush,
    HandType::FullHouse,
    HandType::FourOfAKind,
    HandType::StraightFlush,
    HandType::RoyalFlush,
];

impl HandType {
    /// All hand types, weakest first.
    pub fn all() -> [HandType; 10] {
        HAND_TYPES
    }

    /// Position in the weakest to strongest ordering.
    pub fn strength(self) -> usize {
        self as usize
    }

    /// Human readable name, e.g. "Four of a Kind".
    pub fn name(self) -> &'static str {
        match self {
            HandType::HighCard => "High Card",
            HandType::Pair => "Pair",
            HandType::TwoPair => "Two Pair",
            HandType::ThreeOfAKind => "Three of a Kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full House",
            HandType::FourOfAKind => "Four of a Kind",
            HandType::StraightFlush => "Straight Flush",
            HandType::RoyalFlush => "Royal Flush",
        }
    }

    /// lowerCamel token used inside category keys.
    pub fn token(self) -> &'static str {
        match self {
            HandType::HighCard => "highCard",
            HandType::Pair => "pair",
            HandType::TwoPair => "twoPair",
            HandType::ThreeOfAKind => "threeOfAKind",
            HandType::Straight => "straight",
            HandType::Flush => "flush",
            HandType::FullHouse => "fullHouse",
            HandType::FourOfAKind => "fourOfAKind",
            HandType::StraightFlush => "straightFlush",
            HandType::RoyalFlush => "royalFlush",
        }
    }

    pub fn from_token(token: &str) -> Option<HandType> {
        HAND_TYPES.iter().copied().find(|t| t.token() == token)
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Rank> for HandType {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::HighCard(_) => HandType::HighCard,
            Rank::OnePair(_) => HandType::Pair,
            Rank::TwoPair(_) => HandType::TwoPair,
            Rank::ThreeOfAKind(_) => HandType::ThreeOfAKind,
            Rank::Straight(_) => HandType::Straight,
            Rank::Flush(_) => HandType::Flush,
            Rank::FullHouse(_) => HandType::FullHouse,
            Rank::FourOfAKind(_) => HandType::FourOfAKind,
            Rank::StraightFlush(BROADWAY) => HandType::RoyalFlush,
            Rank::StraightFlush(_) => HandType::StraightFlush,
        }
    }
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Given a bitset of hand ranks. This method
/// will determine if there's a straight, and will give the
/// rank. Wheel is the lowest, broadway is the highest value.
///
/// Returns None if the hand ranks represented don't correspond
/// to a straight.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Five ones in a row survive the shifted and.
    let left =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    let idx = left.leading_zeros();
    if idx < 32 {
        Some(32 - 4 - idx)
    } else if value_set & WHEEL == WHEEL {
        Some(0)
    } else {
        None
    }
}

/// Something that holds exactly five cards that can be ranked.
pub trait Rankable {
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank this five card hand. It doesn't do any caching so it's left
    /// up to the user to understand that duplicate work will be done if
    /// this is called more than once.
    ///
    /// # Examples
    /// ```
    /// use poker_matchups::core::{Card, Rank, Rankable};
    ///
    /// let hand = Card::parse_many("2h2d8d8sKd").unwrap();
    /// let rank = hand.rank_five();
    /// assert!(Rank::TwoPair(0) <= rank);
    /// assert!(Rank::TwoPair(u32::MAX) >= rank);
    /// ```
    ///
    /// # Panics
    /// In debug builds, if there aren't exactly five cards.
    fn rank_five(&self) -> Rank {
        debug_assert_eq!(5, self.cards().count(), "rank_five needs five cards");
        // use for bitset
        let mut suit_set: u32 = 0;
        // Use for bitset
        let mut value_set: u32 = 0;
        let mut value_to_count: [u8; 13] = [0; 13];

        // count => bitset of values.
        let mut count_to_value: [u32; 5] = [0; 5];
        for c in self.cards() {
            let v = c.value as u8;
            let s = c.suit as u8;

            suit_set |= 1 << s;
            value_set |= 1 << v;
            value_to_count[v as usize] += 1;
        }

        // Now rotate the value to count map.
        for (value, &count) in value_to_count.iter().enumerate() {
            count_to_value[usize::from(count.min(4))] |= 1 << value;
        }

        // The major deciding factor for hand rank
        // is the number of unique card values.
        match value_set.count_ones() {
            5 => {
                let is_flush = suit_set.count_ones() == 1;
                match (rank_straight(value_set), is_flush) {
                    (None, false) => Rank::HighCard(value_set),
                    (Some(rank), false) => Rank::Straight(rank),
                    (None, true) => Rank::Flush(value_set),
                    (Some(rank), true) => Rank::StraightFlush(rank),
                }
            }
            4 => {
                // It is always one pair
                let major_rank = count_to_value[2];
                let minor_rank = value_set ^ major_rank;
                Rank::OnePair((major_rank << 13) | minor_rank)
            }
            3 => {
                // this can be three of a kind or two pair.
                let three_value = count_to_value[3];
                if three_value > 0 {
                    let minor_rank = value_set ^ three_value;
                    Rank::ThreeOfAKind((three_value << 13) | minor_rank)
                } else {
                    let major_rank = count_to_value[2];
                    let minor_rank = value_set ^ major_rank;
                    Rank::TwoPair((major_rank << 13) | minor_rank)
                }
            }
            _ => {
                // This can either be full house, or four of a kind.
                let three_value = count_to_value[3];
                if three_value > 0 {
                    let minor_rank = value_set ^ three_value;
                    Rank::FullHouse((three_value << 13) | minor_rank)
                } else {
                    let major_rank = count_to_value[4];
                    let minor_rank = value_set ^ major_rank;
                    Rank::FourOfAKind((major_rank << 13) | minor_rank)
                }
            }
        }
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for [Card; 5] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}
