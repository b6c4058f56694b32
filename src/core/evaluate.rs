use std::cmp::Ordering;

use super::{Card, CardIter, HandType, PokerError, Rank, Rankable};

/// The best five card hand that can be made from a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvaluatedHand {
    rank: Rank,
    best_five: [Card; 5],
}

impl EvaluatedHand {
    /// Wrap five cards that are already known to be the best hand.
    pub fn from_five(best_five: [Card; 5]) -> Self {
        Self {
            rank: best_five.rank_five(),
            best_five,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn hand_type(&self) -> HandType {
        HandType::from(self.rank)
    }

    /// Human readable hand type, e.g. "Two Pair".
    pub fn type_name(&self) -> &'static str {
        self.hand_type().name()
    }

    /// The five cards that make up the hand, strongest first.
    pub fn best_five(&self) -> &[Card; 5] {
        &self.best_five
    }
}

/// Outcome of comparing two evaluated hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The first hand is the sole winner.
    First,
    /// The second hand is the sole winner.
    Second,
    /// No single winner.
    Tie,
}

/// The hand evaluation oracle consumed by the matchup classifier.
pub trait HandEvaluator {
    /// Find the best five card hand using the shared board and a
    /// player's hole cards.
    fn evaluate(&self, board: &[Card], hole: &[Card]) -> Result<EvaluatedHand, PokerError>;

    /// Decide which of two hands wins, or declare a tie.
    fn declare_winner(&self, first: &EvaluatedHand, second: &EvaluatedHand) -> Verdict {
        match first.rank().cmp(&second.rank()) {
            Ordering::Greater => Verdict::First,
            Ordering::Less => Verdict::Second,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

/// Evaluator that tries every five card subset and ranks each one.
///
/// When several subsets are equally strong the one holding the most
/// board cards wins, so a board that plays is always reported as the
/// board itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct RankEvaluator;

impl HandEvaluator for RankEvaluator {
    fn evaluate(&self, board: &[Card], hole: &[Card]) -> Result<EvaluatedHand, PokerError> {
        let mut cards: Vec<Card> = Vec::with_capacity(board.len() + hole.len());
        for card in board.iter().chain(hole.iter()) {
            if cards.contains(card) {
                return Err(PokerError::DuplicateCard(*card));
            }
            cards.push(*card);
        }
        if !(5..=7).contains(&cards.len()) {
            return Err(PokerError::HandSize(cards.len()));
        }

        let mut best: Option<(Rank, usize, Vec<Card>)> = None;
        for combo in CardIter::new(&cards, 5) {
            let rank = combo.rank_five();
            let on_board = combo.iter().filter(|c| board.contains(c)).count();
            let better = match &best {
                None => true,
                Some((best_rank, best_on_board, _)) => {
                    rank > *best_rank || (rank == *best_rank && on_board > *best_on_board)
                }
            };
            if better {
                best = Some((rank, on_board, combo));
            }
        }

        let (rank, _, combo) = best.ok_or(PokerError::HandSize(cards.len()))?;
        let mut best_five = [combo[0]; 5];
        best_five.copy_from_slice(&combo);
        best_five.sort_by(|a, b| b.cmp(a));
        Ok(EvaluatedHand { rank, best_five })
    }
}
