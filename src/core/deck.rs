use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::card::{Card, Suit, Value};
use crate::core::PokerError;

/// A 52 card deck that is dealt from the top.
///
/// Cards are stored in a `Vec` so that a shuffle is just
/// a uniform permutation of the storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage. The last card is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck that has been shuffled with the provided rng.
    ///
    /// ```
    /// use poker_matchups::core::Deck;
    ///
    /// let mut rng = rand::rng();
    /// let deck = Deck::shuffled(&mut rng);
    /// assert_eq!(52, deck.len());
    /// ```
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffle the cards still left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deal a single card from the top.
    pub fn deal_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal `N` cards from the top of the deck.
    pub fn deal<const N: usize>(&mut self) -> Result<[Card; N], PokerError> {
        if self.cards.len() < N {
            return Err(PokerError::DeckExhausted {
                wanted: N,
                remaining: self.cards.len(),
            });
        }
        let mut dealt = [Card::new(Value::Two, Suit::Spade); N];
        for slot in dealt.iter_mut() {
            // Length was checked above.
            if let Some(card) = self.cards.pop() {
                *slot = card;
            }
        }
        Ok(dealt)
    }
}

impl Default for Deck {
    /// Create the default 52 card deck in a fixed order.
    ///
    /// ```
    /// use poker_matchups::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        let mut cards: Vec<Card> = Vec::with_capacity(52);
        for v in &Value::values() {
            for s in &Suit::suits() {
                cards.push(Card {
                    value: *v,
                    suit: *s,
                });
            }
        }
        Self { cards }
    }
}
