//! Deck, hand, and discard lifecycle for one actor.
//!
//! Cards move between the three piles by value, so every card instance
//! lives in exactly one pile and the multiset union is conserved under
//! draw, discard, and recycling. The deck is ordered: the last element is
//! the top, drawing pops from the top.
//!
//! When a draw request outruns the deck, the discard pile is shuffled back
//! into the deck (recycling) and drawing continues. If deck and discard
//! together can't satisfy the request, the draw caps at the pool size -
//! partial draws are valid, not errors.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::BattleRng;

/// The three piles an actor owns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPiles {
    deck: Vec<Card>,
    hand: Vec<Card>,
    discard: Vec<Card>,
}

impl CardPiles {
    /// Create piles with the given draw pile; hand and discard start empty.
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            deck,
            hand: Vec::new(),
            discard: Vec::new(),
        }
    }

    /// The draw pile, bottom to top.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// The cards currently playable.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The cards spent or discarded since the last recycle.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Total cards across all three piles.
    ///
    /// Invariant under every pile operation; only deck construction
    /// changes it.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Shuffle the draw pile.
    pub fn shuffle_deck(&mut self, rng: &mut BattleRng) {
        rng.shuffle(&mut self.deck);
    }

    /// Draw up to `n` cards into the hand, recycling the discard pile when
    /// the deck runs dry. Stops early at `hand_cap`.
    ///
    /// Returns the number of cards actually drawn.
    pub fn draw(&mut self, n: usize, hand_cap: usize, rng: &mut BattleRng) -> usize {
        let mut drawn = 0;

        while drawn < n && self.hand.len() < hand_cap {
            if self.deck.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.recycle(rng);
            }
            match self.deck.pop() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }

        drawn
    }

    /// Move the discard pile back into the deck and shuffle.
    fn recycle(&mut self, rng: &mut BattleRng) {
        self.deck.append(&mut self.discard);
        rng.shuffle(&mut self.deck);
    }

    /// Remove and return the card at `index` in the hand.
    ///
    /// The caller resolves the card's effect and then returns it via
    /// [`discard_played`].
    ///
    /// [`discard_played`]: CardPiles::discard_played
    pub fn take_from_hand(&mut self, index: usize) -> Option<Card> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    /// Put a played card onto the discard pile.
    pub fn discard_played(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Move the entire hand onto the discard pile (turn-start reset).
    pub fn discard_hand(&mut self) {
        self.discard.append(&mut self.hand);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::standard;

    fn sample_deck() -> Vec<Card> {
        vec![
            standard::strike(),
            standard::heavy_strike(),
            standard::guard(),
            standard::iron_guard(),
            standard::foresight(),
        ]
    }

    #[test]
    fn test_draw_moves_deck_to_hand() {
        let mut rng = BattleRng::new(42);
        let mut piles = CardPiles::new(sample_deck());

        let drawn = piles.draw(3, 5, &mut rng);

        assert_eq!(drawn, 3);
        assert_eq!(piles.hand().len(), 3);
        assert_eq!(piles.deck().len(), 2);
        assert_eq!(piles.total_cards(), 5);
    }

    #[test]
    fn test_draw_respects_hand_cap() {
        let mut rng = BattleRng::new(42);
        let mut piles = CardPiles::new(sample_deck());

        let drawn = piles.draw(5, 2, &mut rng);

        assert_eq!(drawn, 2);
        assert_eq!(piles.hand().len(), 2);
    }

    #[test]
    fn test_draw_recycles_discard() {
        let mut rng = BattleRng::new(42);
        let mut piles = CardPiles::new(sample_deck());

        // Empty the deck into the hand, then spend everything.
        piles.draw(5, 5, &mut rng);
        while let Some(card) = piles.take_from_hand(0) {
            piles.discard_played(card);
        }
        assert_eq!(piles.deck().len(), 0);
        assert_eq!(piles.discard().len(), 5);

        let drawn = piles.draw(2, 5, &mut rng);

        assert_eq!(drawn, 2);
        assert_eq!(piles.hand().len(), 2);
        assert_eq!(piles.deck().len(), 3);
        assert_eq!(piles.discard().len(), 0);
        assert_eq!(piles.total_cards(), 5);
    }

    #[test]
    fn test_draw_caps_at_pool_size() {
        let mut rng = BattleRng::new(42);
        let mut piles = CardPiles::new(vec![standard::strike(), standard::guard()]);

        let drawn = piles.draw(10, 10, &mut rng);

        assert_eq!(drawn, 2);
        assert_eq!(piles.hand().len(), 2);
        assert_eq!(piles.deck().len(), 0);
        assert_eq!(piles.discard().len(), 0);
    }

    #[test]
    fn test_draw_from_empty_pool() {
        let mut rng = BattleRng::new(42);
        let mut piles = CardPiles::new(Vec::new());

        assert_eq!(piles.draw(3, 5, &mut rng), 0);
        assert_eq!(piles.total_cards(), 0);
    }

    #[test]
    fn test_take_from_hand_out_of_range() {
        let mut rng = BattleRng::new(42);
        let mut piles = CardPiles::new(sample_deck());
        piles.draw(2, 5, &mut rng);

        assert!(piles.take_from_hand(2).is_none());
        assert_eq!(piles.hand().len(), 2);
    }

    #[test]
    fn test_discard_hand() {
        let mut rng = BattleRng::new(42);
        let mut piles = CardPiles::new(sample_deck());
        piles.draw(3, 5, &mut rng);

        piles.discard_hand();

        assert_eq!(piles.hand().len(), 0);
        assert_eq!(piles.discard().len(), 3);
        assert_eq!(piles.total_cards(), 5);
    }

    #[test]
    fn test_recycle_preserves_composition() {
        let mut rng = BattleRng::new(7);
        let mut piles = CardPiles::new(sample_deck());

        let mut names_before: Vec<_> = piles.deck().iter().map(|c| c.name.clone()).collect();
        names_before.sort();

        // Churn: draw everything, discard, draw again through a recycle.
        piles.draw(5, 5, &mut rng);
        piles.discard_hand();
        piles.draw(5, 5, &mut rng);

        let mut names_after: Vec<_> = piles
            .deck()
            .iter()
            .chain(piles.hand())
            .chain(piles.discard())
            .map(|c| c.name.clone())
            .collect();
        names_after.sort();

        assert_eq!(names_before, names_after);
    }
}
