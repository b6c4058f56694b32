use std::fmt;
use std::str::FromStr;

use super::PokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

/// The rank characters in ascending order.
pub const RANK_CHARS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// Parse the rank character used in the two character card form.
    ///
    /// ```
    /// use poker_matchups::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('X'));
    /// ```
    pub fn from_char(c: char) -> Option<Value> {
        RANK_CHARS
            .iter()
            .position(|r| *r == c.to_ascii_uppercase())
            .map(|idx| VALUES[idx])
    }

    pub fn to_char(self) -> char {
        RANK_CHARS[self as usize]
    }

    /// Numeric poker value, two through fourteen with the ace high.
    pub fn rank_value(self) -> u8 {
        self as u8 + 2
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'd' => Some(Suit::Diamond),
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }
}

/// The main card struct.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Numeric value of the card, 2 through 14.
    ///
    /// ```
    /// use poker_matchups::core::{Card, Suit, Value};
    ///
    /// assert_eq!(14, Card::new(Value::Ace, Suit::Spade).rank_value());
    /// assert_eq!(2, Card::new(Value::Two, Suit::Club).rank_value());
    /// ```
    pub fn rank_value(&self) -> u8 {
        self.value.rank_value()
    }

    /// Parse a run of two character cards such as `"AhKd9s"`.
    pub fn parse_many(cards: &str) -> Result<Vec<Card>, PokerError> {
        let chars: Vec<char> = cards.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() % 2 != 0 {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        chars
            .chunks(2)
            .map(|pair| Card::from_chars(pair[0], pair[1]))
            .collect()
    }

    fn from_chars(v: char, s: char) -> Result<Card, PokerError> {
        let value = Value::from_char(v).ok_or(PokerError::UnexpectedValueChar(v))?;
        let suit = Suit::from_char(s).ok_or(PokerError::UnexpectedSuitChar(s))?;
        Ok(Card { value, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let v = chars.next().ok_or(PokerError::TooFewChars)?;
        let s = chars.next().ok_or(PokerError::TooFewChars)?;
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Card::from_chars(v, s)
    }
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::try_from(s)
    }
}

impl serde::Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Card::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
