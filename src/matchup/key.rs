//! Category keys name the outcome class of a showdown.
//!
//! The string form is `<left>Vs<Right>`: the left side is a lowerCamel
//! token and the right side is the same kind of token with its first
//! letter capitalized. Refined same type matchups add a suffix
//! (`pairVsPairKickerDecides`), a `Lower` prefix on the right side
//! (`pairVsLowerPair`), or for a board that plays for both players the
//! special `onBoard<Type>Chop` form.
//!
//! Internally keys are the closed [`CategoryKey`] enum. The strings are
//! only produced and parsed at the storage and reporting boundary.
use std::fmt;
use std::str::FromStr;

use crate::core::HandType;

use super::MatchupError;

/// Separator between the two sides of a key.
pub const SEPARATOR: &str = "Vs";

const LOWER: &str = "Lower";
const KICKER_DECIDES: &str = "KickerDecides";
const CHOP: &str = "Chop";
const ON_BOARD: &str = "onBoard";

/// Upper case the first letter of a token.
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower case the first letter of a token.
pub fn decapitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a hand type name into a key token.
///
/// Anything outside `[a-z0-9 ]` (ignoring case) is dropped, then the
/// words are camel cased. `capitalize_first` upper cases the first word
/// too, which is how the right side of a key is written.
///
/// ```
/// use poker_matchups::matchup::to_token;
///
/// assert_eq!("fourOfAKind", to_token("Four of a Kind", false));
/// assert_eq!("HighCard", to_token("High Card", true));
/// ```
pub fn to_token(name: &str, capitalize_first: bool) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    cleaned
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 && !capitalize_first {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

/// Build a `LeftVsRight` key from two hand type names.
pub fn build_key(left_name: &str, right_name: &str) -> String {
    format!(
        "{}{}{}",
        to_token(left_name, false),
        SEPARATOR,
        to_token(right_name, true)
    )
}

/// Split a key on the first separator.
///
/// The right side comes back with its first letter lower cased. Returns
/// `None` when there is no separator or either side is empty, which
/// callers treat as "not a same category key".
pub fn parse_key(key: &str) -> Option<(String, String)> {
    let (left, right) = key.split_once(SEPARATOR)?;
    if left.is_empty() || right.is_empty() {
        return None;
    }
    Some((left.to_string(), decapitalize(right)))
}

/// Outcome category of a single showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKey {
    /// Winner's type against the loser's type, e.g. `pairVsHighCard`.
    /// When both are the same type this is the unrefined key.
    Versus { winner: HandType, loser: HandType },
    /// Same type, the winner's primary rank is higher.
    Lower(HandType),
    /// Same type and primary rank, a kicker broke the tie.
    KickerDecides(HandType),
    /// Same type and nothing separates the hands.
    Chop(HandType),
    /// A tie where the board alone made both best hands.
    OnBoardChop(HandType),
}

impl CategoryKey {
    /// Key for a winner and loser, before any refinement.
    pub fn versus(winner: HandType, loser: HandType) -> Self {
        CategoryKey::Versus { winner, loser }
    }

    /// The hand types on each side, for ordering by strength.
    /// Board chops have no sides.
    pub fn sides(&self) -> Option<(HandType, HandType)> {
        match *self {
            CategoryKey::Versus { winner, loser } => Some((winner, loser)),
            CategoryKey::Lower(t) | CategoryKey::KickerDecides(t) | CategoryKey::Chop(t) => {
                Some((t, t))
            }
            CategoryKey::OnBoardChop(_) => None,
        }
    }

    /// Is this an unrefined key where both sides are the same type?
    pub fn is_same_type(&self) -> bool {
        matches!(self, CategoryKey::Versus { winner, loser } if winner == loser)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CategoryKey::Versus { winner, loser } => {
                write!(f, "{}", build_key(winner.name(), loser.name()))
            }
            CategoryKey::Lower(t) => {
                write!(f, "{}{SEPARATOR}{LOWER}{}", t.token(), capitalize(t.token()))
            }
            CategoryKey::KickerDecides(t) => write!(
                f,
                "{}{SEPARATOR}{}{KICKER_DECIDES}",
                t.token(),
                capitalize(t.token())
            ),
            CategoryKey::Chop(t) => {
                write!(f, "{}{SEPARATOR}{}{CHOP}", t.token(), capitalize(t.token()))
            }
            CategoryKey::OnBoardChop(t) => {
                write!(f, "{ON_BOARD}{}{CHOP}", capitalize(t.token()))
            }
        }
    }
}

impl FromStr for CategoryKey {
    type Err = MatchupError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || MatchupError::InvalidCategoryKey(key.to_string());

        if let Some(middle) = key
            .strip_prefix(ON_BOARD)
            .and_then(|rest| rest.strip_suffix(CHOP))
        {
            return HandType::from_token(&decapitalize(middle))
                .map(CategoryKey::OnBoardChop)
                .ok_or_else(invalid);
        }

        let (left, right) = parse_key(key).ok_or_else(invalid)?;
        let left = HandType::from_token(&left).ok_or_else(invalid)?;
        // parse_key lower cased the right side, so undo that before
        // looking at prefixes and suffixes.
        let right = capitalize(&right);

        let same_type = |token: &str, variant: fn(HandType) -> CategoryKey| {
            if decapitalize(token) == left.token() {
                Ok(variant(left))
            } else {
                Err(invalid())
            }
        };

        if let Some(rest) = right.strip_prefix(LOWER) {
            same_type(rest, CategoryKey::Lower)
        } else if let Some(rest) = right.strip_suffix(KICKER_DECIDES) {
            same_type(rest, CategoryKey::KickerDecides)
        } else if let Some(rest) = right.strip_suffix(CHOP) {
            same_type(rest, CategoryKey::Chop)
        } else {
            let loser = HandType::from_token(&decapitalize(&right)).ok_or_else(invalid)?;
            Ok(CategoryKey::versus(left, loser))
        }
    }
}

impl serde::Serialize for CategoryKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CategoryKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_token() {
        assert_eq!("highCard", to_token("High Card", false));
        assert_eq!("threeOfAKind", to_token("Three of a Kind", false));
        assert_eq!("ThreeOfAKind", to_token("Three of a Kind", true));
        assert_eq!("pair", to_token("  Pair!! ", false));
        assert_eq!("", to_token("???", false));
    }

    #[test]
    fn test_token_matches_hand_type() {
        for t in HandType::all() {
            assert_eq!(t.token(), to_token(t.name(), false));
        }
    }

    #[test]
    fn test_build_key() {
        assert_eq!("fourOfAKindVsHighCard", build_key("Four of a Kind", "High Card"));
    }

    #[test]
    fn test_parse_key_round_trip() {
        for t in HandType::all() {
            let key = build_key(t.name(), t.name());
            assert_eq!(
                Some((t.token().to_string(), t.token().to_string())),
                parse_key(&key)
            );
        }
    }

    #[test]
    fn test_parse_key_without_separator() {
        assert_eq!(None, parse_key("onBoardStraightChop"));
        assert_eq!(None, parse_key("pairVs"));
        assert_eq!(None, parse_key(""));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "pairVsHighCard",
            CategoryKey::versus(HandType::Pair, HandType::HighCard).to_string()
        );
        assert_eq!("pairVsLowerPair", CategoryKey::Lower(HandType::Pair).to_string());
        assert_eq!(
            "highCardVsHighCardKickerDecides",
            CategoryKey::KickerDecides(HandType::HighCard).to_string()
        );
        assert_eq!(
            "fourOfAKindVsFourOfAKindChop",
            CategoryKey::Chop(HandType::FourOfAKind).to_string()
        );
        assert_eq!(
            "onBoardStraightChop",
            CategoryKey::OnBoardChop(HandType::Straight).to_string()
        );
    }

    #[test]
    fn test_from_str_every_variant() {
        for t in HandType::all() {
            for other in HandType::all() {
                let key = CategoryKey::versus(t, other);
                assert_eq!(key, key.to_string().parse::<CategoryKey>().unwrap());
            }
            for key in [
                CategoryKey::Lower(t),
                CategoryKey::KickerDecides(t),
                CategoryKey::Chop(t),
                CategoryKey::OnBoardChop(t),
            ] {
                assert_eq!(key, key.to_string().parse::<CategoryKey>().unwrap());
            }
        }
    }

    #[test]
    fn test_from_str_rejects() {
        for bad in [
            "",
            "pair",
            "pairVsLowerFlush",
            "pairVsFlushChop",
            "bogusVsPair",
            "onBoardBogusChop",
            "pairVsPairSomething",
        ] {
            assert!(
                matches!(bad.parse::<CategoryKey>(), Err(MatchupError::InvalidCategoryKey(_))),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn test_serde_as_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(CategoryKey::Lower(HandType::TwoPair), 3);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(r#"{"twoPairVsLowerTwoPair":3}"#, json);
        let back: std::collections::BTreeMap<CategoryKey, i32> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
