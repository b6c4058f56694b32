//! Sub classification of matchups where both players hold the same
//! hand type.
//!
//! The refiners expect the winner's hand first and the loser's hand
//! second. Passing them the other way round is a caller bug; the
//! labels describe the first hand beating the second.
use tracing::{Level, event};

use crate::core::{Card, EvaluatedHand, HandType};

use super::CategoryKey;
use super::values::{
    descending_values, first_diverging_index, rank_with_count, ranks_with_count,
    straight_top_value,
};

/// A same type matchup that should have been decided but wasn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anomaly {
    /// A winner was declared but the comparison found nothing that
    /// separates the two hands.
    UndecidedWinner(HandType),
}

/// The refined key, plus any inconsistency found on the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Refinement {
    pub key: CategoryKey,
    pub anomaly: Option<Anomaly>,
}

impl Refinement {
    fn clean(key: CategoryKey) -> Self {
        Self { key, anomaly: None }
    }
}

/// What separated two hands of the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decider {
    /// The primary rank.
    Lower,
    /// A kicker after equal primary ranks.
    Kicker,
    /// Nothing.
    Chop,
}

/// Refine a winner first key into the deciding factor when both hands
/// are the same type.
///
/// Keys for different types, and keys that are already refined, come
/// back unchanged.
///
/// ```
/// use poker_matchups::core::{Card, EvaluatedHand, HandType};
/// use poker_matchups::matchup::{CategoryKey, refine_same_rank_category};
///
/// let hand = |s: &str| {
///     let cards = Card::parse_many(s).unwrap();
///     EvaluatedHand::from_five([cards[0], cards[1], cards[2], cards[3], cards[4]])
/// };
/// let winner = hand("AhKd9c6s3h");
/// let loser = hand("AcKs9d6h2c");
/// let board = Card::parse_many("AhKd9c6sTd").unwrap();
///
/// let key = CategoryKey::versus(HandType::HighCard, HandType::HighCard);
/// let refined = refine_same_rank_category(key, &winner, &loser, false, &board);
/// assert_eq!("highCardVsHighCardKickerDecides", refined.key.to_string());
/// ```
pub fn refine_same_rank_category(
    key: CategoryKey,
    winner: &EvaluatedHand,
    loser: &EvaluatedHand,
    is_tie: bool,
    board: &[Card],
) -> Refinement {
    let hand_type = match key {
        CategoryKey::Versus { winner: w, loser: l } if w == l => w,
        _ => return Refinement::clean(key),
    };

    if is_tie {
        let on_board = |hand: &EvaluatedHand| hand.best_five().iter().all(|c| board.contains(c));
        return if on_board(winner) && on_board(loser) {
            Refinement::clean(CategoryKey::OnBoardChop(hand_type))
        } else {
            Refinement::clean(CategoryKey::Chop(hand_type))
        };
    }

    let a = winner.best_five();
    let b = loser.best_five();
    let decider = match hand_type {
        HandType::Pair => refine_pair(a, b),
        HandType::HighCard => refine_high_card(a, b),
        HandType::Straight => refine_straight(a, b),
        HandType::Flush => refine_flush(a, b),
        HandType::FullHouse => refine_full_house(a, b),
        HandType::FourOfAKind => refine_four_of_a_kind(a, b),
        HandType::ThreeOfAKind => refine_three_of_a_kind(a, b),
        HandType::TwoPair => refine_two_pair(a, b),
        // No special handling, the cards are compared high to low and
        // any difference is reported as a kicker.
        HandType::StraightFlush | HandType::RoyalFlush => {
            match first_diverging_index(&descending_values(a), &descending_values(b)) {
                Some(_) => Decider::Kicker,
                None => Decider::Chop,
            }
        }
    };

    match decider {
        Decider::Lower => Refinement::clean(CategoryKey::Lower(hand_type)),
        Decider::Kicker => Refinement::clean(CategoryKey::KickerDecides(hand_type)),
        Decider::Chop => {
            event!(
                Level::WARN,
                hand_type = %hand_type,
                winner = ?a,
                loser = ?b,
                "Winner declared but nothing separates the hands"
            );
            Refinement {
                key: CategoryKey::Chop(hand_type),
                anomaly: Some(Anomaly::UndecidedWinner(hand_type)),
            }
        }
    }
}

/// String boundary version of [`refine_same_rank_category`].
///
/// A key that can't be parsed is returned as is.
pub fn refine_key_str(
    key: &str,
    winner: &EvaluatedHand,
    loser: &EvaluatedHand,
    is_tie: bool,
    board: &[Card],
) -> String {
    match key.parse::<CategoryKey>() {
        Ok(parsed) => refine_same_rank_category(parsed, winner, loser, is_tie, board)
            .key
            .to_string(),
        Err(e) => {
            event!(Level::DEBUG, key, error = %e, "Leaving unparseable key unrefined");
            key.to_string()
        }
    }
}

/// Kickers decide only after the primary comparison was equal.
fn kickers(a: &[u8], b: &[u8]) -> Decider {
    match first_diverging_index(a, b) {
        Some(_) => Decider::Kicker,
        None => Decider::Chop,
    }
}

/// Every value except the excluded one, high to low.
fn values_without(cards: &[Card], excluded: u8) -> Vec<u8> {
    descending_values(cards)
        .into_iter()
        .filter(|v| *v != excluded)
        .collect()
}

fn refine_pair(a: &[Card], b: &[Card]) -> Decider {
    let (pair_a, pair_b) = (rank_with_count(a, 2), rank_with_count(b, 2));
    if pair_a != pair_b {
        return Decider::Lower;
    }
    kickers(&values_without(a, pair_a), &values_without(b, pair_b))
}

fn refine_high_card(a: &[Card], b: &[Card]) -> Decider {
    match first_diverging_index(&descending_values(a), &descending_values(b)) {
        Some(0) => Decider::Lower,
        Some(_) => Decider::Kicker,
        None => Decider::Chop,
    }
}

fn refine_straight(a: &[Card], b: &[Card]) -> Decider {
    // Straights with the same top card are a chop whatever the suits.
    if straight_top_value(a) != straight_top_value(b) {
        Decider::Lower
    } else {
        Decider::Chop
    }
}

fn refine_flush(a: &[Card], b: &[Card]) -> Decider {
    match first_diverging_index(&descending_values(a), &descending_values(b)) {
        Some(_) => Decider::Lower,
        None => Decider::Chop,
    }
}

fn refine_full_house(a: &[Card], b: &[Card]) -> Decider {
    if rank_with_count(a, 3) != rank_with_count(b, 3)
        || rank_with_count(a, 2) != rank_with_count(b, 2)
    {
        Decider::Lower
    } else {
        Decider::Chop
    }
}

fn refine_four_of_a_kind(a: &[Card], b: &[Card]) -> Decider {
    let (quad_a, quad_b) = (rank_with_count(a, 4), rank_with_count(b, 4));
    if quad_a != quad_b {
        return Decider::Lower;
    }
    kickers(&values_without(a, quad_a), &values_without(b, quad_b))
}

fn refine_three_of_a_kind(a: &[Card], b: &[Card]) -> Decider {
    let (trips_a, trips_b) = (rank_with_count(a, 3), rank_with_count(b, 3));
    if trips_a != trips_b {
        return Decider::Lower;
    }
    kickers(&values_without(a, trips_a), &values_without(b, trips_b))
}

fn refine_two_pair(a: &[Card], b: &[Card]) -> Decider {
    if first_diverging_index(&ranks_with_count(a, 2), &ranks_with_count(b, 2)).is_some() {
        return Decider::Lower;
    }
    kickers(&ranks_with_count(a, 1), &ranks_with_count(b, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HandEvaluator, RankEvaluator};
    use crate::matchup::normalize_winner_first;

    fn five(s: &str) -> EvaluatedHand {
        let c = Card::parse_many(s).unwrap();
        EvaluatedHand::from_five([c[0], c[1], c[2], c[3], c[4]])
    }

    fn refine(winner: &str, loser: &str) -> Refinement {
        let (winner, loser) = (five(winner), five(loser));
        let t = winner.hand_type();
        refine_same_rank_category(CategoryKey::versus(t, t), &winner, &loser, false, &[])
    }

    fn refine_key(winner: &str, loser: &str) -> String {
        refine(winner, loser).key.to_string()
    }

    /// Deal a full showdown through the evaluator and normalizer.
    fn showdown(board: &str, a: &str, b: &str) -> Refinement {
        let board = Card::parse_many(board).unwrap();
        let a = Card::parse_many(a).unwrap();
        let b = Card::parse_many(b).unwrap();
        let hand1 = RankEvaluator.evaluate(&board, &a).unwrap();
        let hand2 = RankEvaluator.evaluate(&board, &b).unwrap();
        let norm =
            normalize_winner_first(&RankEvaluator, &hand1, &hand2, [a[0], a[1]], [b[0], b[1]]);
        refine_same_rank_category(norm.key, &norm.winner, &norm.loser, norm.is_tie, &board)
    }

    #[test]
    fn test_different_types_unchanged() {
        let key = CategoryKey::versus(HandType::Flush, HandType::Pair);
        let r = refine_same_rank_category(key, &five("Ah9h7h4h2h"), &five("KcKd9s5c3d"), false, &[]);
        assert_eq!(Refinement::clean(key), r);
    }

    #[test]
    fn test_already_refined_unchanged() {
        let key = CategoryKey::Lower(HandType::Pair);
        let hand = five("KcKd9s5c3d");
        let r = refine_same_rank_category(key, &hand, &hand, false, &[]);
        assert_eq!(key, r.key);
    }

    #[test]
    fn test_pair() {
        assert_eq!("pairVsLowerPair", refine_key("KcKd9s5c3d", "QcQdAs5h3h"));
        assert_eq!("pairVsPairKickerDecides", refine_key("KcKdAs9c5d", "KhKsAd9h4c"));
    }

    #[test]
    fn test_pair_identical_kickers_is_flagged() {
        let r = refine("KcKdAs9c5d", "KhKsAd9h5c");
        assert_eq!("pairVsPairChop", r.key.to_string());
        assert_eq!(Some(Anomaly::UndecidedWinner(HandType::Pair)), r.anomaly);
    }

    #[test]
    fn test_high_card() {
        assert_eq!("highCardVsLowerHighCard", refine_key("AhQd9c6s3h", "KcQs9d6h2c"));
        assert_eq!(
            "highCardVsHighCardKickerDecides",
            refine_key("AhKd9c6s3h", "AcKs9d6h2c")
        );
        assert_eq!("highCardVsHighCardChop", refine_key("AhKd9c6s3h", "AcKs9d6h3c"));
    }

    #[test]
    fn test_straight() {
        assert_eq!("straightVsLowerStraight", refine_key("6h5d4c3s2h", "5c4s3d2hAc"));
        assert_eq!("straightVsLowerStraight", refine_key("AhKdQcJsTh", "KcQsJdTh9c"));
        let r = refine("9h8d7c6s5h", "9c8s7d6h5c");
        assert_eq!("straightVsStraightChop", r.key.to_string());
        assert!(r.anomaly.is_some());
    }

    #[test]
    fn test_flush() {
        assert_eq!("flushVsLowerFlush", refine_key("Ah9h7h4h2h", "Ac9c7c3c2c"));
        assert_eq!("flushVsFlushChop", refine_key("Ah9h7h4h2h", "Ac9c7c4c2c"));
    }

    #[test]
    fn test_full_house() {
        assert_eq!("fullHouseVsLowerFullHouse", refine_key("KhKdKc2s2h", "QhQdQcAsAh"));
        assert_eq!("fullHouseVsLowerFullHouse", refine_key("KhKdKc3s3h", "KhKdKs2c2d"));
        assert_eq!("fullHouseVsFullHouseChop", refine_key("KhKdKc3s3h", "KhKdKs3c3d"));
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(
            "fourOfAKindVsLowerFourOfAKind",
            refine_key("KhKdKcKs2h", "QhQdQcQsAh")
        );
        assert_eq!(
            "fourOfAKindVsFourOfAKindKickerDecides",
            refine_key("KhKdKcKsAh", "KhKdKcKsQh")
        );
        assert_eq!(
            "fourOfAKindVsFourOfAKindChop",
            refine_key("KhKdKcKsAh", "KhKdKcKsAd")
        );
    }

    #[test]
    fn test_three_of_a_kind() {
        assert_eq!(
            "threeOfAKindVsLowerThreeOfAKind",
            refine_key("KhKdKc5s2h", "QhQdQcAsKs")
        );
        assert_eq!(
            "threeOfAKindVsThreeOfAKindKickerDecides",
            refine_key("KhKdKcAs3h", "KhKdKcAs2h")
        );
        assert_eq!(
            "threeOfAKindVsThreeOfAKindChop",
            refine_key("KhKdKcAs3h", "KhKdKcAd3c")
        );
    }

    #[test]
    fn test_two_pair() {
        assert_eq!("twoPairVsLowerTwoPair", refine_key("KhKd5c5s9h", "QhQd5h5dAh"));
        assert_eq!("twoPairVsLowerTwoPair", refine_key("KhKd6c6s2h", "KcKs5h5dAh"));
        assert_eq!("twoPairVsTwoPairKickerDecides", refine_key("KhKd5c5sAh", "KcKs5h5d9h"));
        assert_eq!("twoPairVsTwoPairChop", refine_key("KhKd5c5sAh", "KcKs5h5dAd"));
    }

    #[test]
    fn test_straight_flush_generic() {
        assert_eq!(
            "straightFlushVsStraightFlushKickerDecides",
            refine_key("9h8h7h6h5h", "8c7c6c5c4c")
        );
        assert_eq!(
            "straightFlushVsStraightFlushChop",
            refine_key("9h8h7h6h5h", "9c8c7c6c5c")
        );
    }

    #[test]
    fn test_tie_on_board() {
        let board = Card::parse_many("9h8c7d6s5h").unwrap();
        let hand = five("9h8c7d6s5h");
        let key = CategoryKey::versus(HandType::Straight, HandType::Straight);
        let r = refine_same_rank_category(key, &hand, &hand, true, &board);
        assert_eq!("onBoardStraightChop", r.key.to_string());
        assert_eq!(None, r.anomaly);
    }

    #[test]
    fn test_tie_not_on_board() {
        let board = Card::parse_many("AhAd7c4s2h").unwrap();
        let key = CategoryKey::versus(HandType::Pair, HandType::Pair);
        let r = refine_same_rank_category(
            key,
            &five("AhAdKc7c4s"),
            &five("AhAdKs7c4s"),
            true,
            &board,
        );
        assert_eq!("pairVsPairChop", r.key.to_string());
        assert_eq!(None, r.anomaly);
    }

    #[test]
    fn test_showdown_two_pair_scenario() {
        // Kings and fives beat queens and fives on the top pair.
        let r = showdown("5c5d9s2h3c", "QhQd", "KhKd");
        assert_eq!("twoPairVsLowerTwoPair", r.key.to_string());
        assert_eq!(None, r.anomaly);
    }

    #[test]
    fn test_showdown_board_straight_chop() {
        let r = showdown("9h8c7d6s5h", "2c2d", "3c3d");
        assert_eq!("onBoardStraightChop", r.key.to_string());
    }

    #[test]
    fn test_showdown_hole_card_chop() {
        // Both players play a king from their hand.
        let r = showdown("AhQd8c5s2h", "Kc3d", "Kd4c");
        assert_eq!("highCardVsHighCardChop", r.key.to_string());
        assert_eq!(None, r.anomaly);
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert_eq!("pairVsLowerPair", refine_key("KcKd9s5c3d", "QcQdAs5h3h"));
        }
    }

    #[test_log::test]
    fn test_refine_key_str() {
        let winner = five("KcKd9s5c3d");
        let loser = five("QcQdAs5h3h");
        assert_eq!(
            "pairVsLowerPair",
            refine_key_str("pairVsPair", &winner, &loser, false, &[])
        );
        assert_eq!(
            "garbage",
            refine_key_str("garbage", &winner, &loser, false, &[])
        );
        assert_eq!(
            "pairVsHighCard",
            refine_key_str("pairVsHighCard", &winner, &loser, false, &[])
        );
    }
}
