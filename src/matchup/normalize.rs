use crate::core::{Card, EvaluatedHand, HandEvaluator, Verdict};

use super::CategoryKey;

/// A showdown reordered so the winner comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    /// Winner's type first. On a tie the original order is kept.
    pub key: CategoryKey,
    /// The winner's hole cards, or player one's on a tie.
    pub p1: [Card; 2],
    /// The loser's hole cards, or player two's on a tie.
    pub p2: [Card; 2],
    pub is_tie: bool,
    /// The hand that goes with `p1`.
    pub winner: EvaluatedHand,
    /// The hand that goes with `p2`.
    pub loser: EvaluatedHand,
}

/// Ask the evaluator who won and put the winner's hand type and hole
/// cards in the first slot.
///
/// ```
/// use poker_matchups::core::{Card, HandEvaluator, RankEvaluator};
/// use poker_matchups::matchup::normalize_winner_first;
///
/// let board = Card::parse_many("2c7d9hJsKd").unwrap();
/// let p1 = [Card::try_from("3c").unwrap(), Card::try_from("4d").unwrap()];
/// let p2 = [Card::try_from("Kc").unwrap(), Card::try_from("5d").unwrap()];
/// let hand1 = RankEvaluator.evaluate(&board, &p1).unwrap();
/// let hand2 = RankEvaluator.evaluate(&board, &p2).unwrap();
///
/// let norm = normalize_winner_first(&RankEvaluator, &hand1, &hand2, p1, p2);
/// assert_eq!("pairVsHighCard", norm.key.to_string());
/// assert_eq!(p2, norm.p1);
/// assert!(!norm.is_tie);
/// ```
pub fn normalize_winner_first<E: HandEvaluator + ?Sized>(
    evaluator: &E,
    hand1: &EvaluatedHand,
    hand2: &EvaluatedHand,
    player1: [Card; 2],
    player2: [Card; 2],
) -> Normalized {
    let (winner, loser, p1, p2, is_tie) = match evaluator.declare_winner(hand1, hand2) {
        Verdict::Tie => (hand1, hand2, player1, player2, true),
        Verdict::First => (hand1, hand2, player1, player2, false),
        Verdict::Second => (hand2, hand1, player2, player1, false),
    };

    Normalized {
        key: CategoryKey::versus(winner.hand_type(), loser.hand_type()),
        p1,
        p2,
        is_tie,
        winner: *winner,
        loser: *loser,
    }
}
