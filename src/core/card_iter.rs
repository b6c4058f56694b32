use super::Card;

/// Iterator over every `num_cards` sized combination of a slice of cards.
///
/// Combinations come out in lexicographic order of their positions
/// in the source slice. Useful for trying to find the best 5 card
/// hand from 7 cards.
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be picked
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // size of card sets requested.
    num_cards: usize,

    done: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> CardIter<'a> {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            num_cards,
            done: num_cards == 0 || num_cards > possible_cards.len(),
        }
    }

    /// Move the offsets to the next combination.
    fn advance(&mut self) {
        let n = self.possible_cards.len();
        let k = self.num_cards;
        // Find the right most offset that can still move forward.
        match (0..k).rev().find(|&i| self.idx[i] < n - k + i) {
            Some(level) => {
                self.idx[level] += 1;
                for next in level + 1..k {
                    self.idx[next] = self.idx[next - 1] + 1;
                }
            }
            None => self.done = true,
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }
        let result_cards: Vec<Card> = self.idx.iter().map(|i| self.possible_cards[*i]).collect();
        self.advance();
        Some(result_cards)
    }
}
