//! Card catalog for definition lookup and the standard card set.
//!
//! The `CardCatalog` stores card definitions and provides fast lookup by
//! `CardId`. Deck construction is host wiring, not engine logic - the
//! catalog just keeps the data in one place.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId, CardKind};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use deck_battle::cards::{Card, CardCatalog, CardId, CardKind};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::new(
///     CardId::new(1),
///     "Strike",
///     1,
///     "Deal 6 damage",
///     CardKind::Attack { damage: 6 },
/// ));
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the standard card set.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for card in standard::all() {
            catalog.register(card);
        }
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all registered definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}

/// The standard card set.
///
/// Player cards cost action points; the enemy variants are free because
/// enemy profiles run with a zero AP budget.
pub mod standard {
    use super::{Card, CardId, CardKind};

    /// 1 AP, deal 6 damage.
    #[must_use]
    pub fn strike() -> Card {
        Card::new(
            CardId::new(1),
            "Strike",
            1,
            "Deal 6 damage",
            CardKind::Attack { damage: 6 },
        )
    }

    /// 2 AP, deal 12 damage.
    #[must_use]
    pub fn heavy_strike() -> Card {
        Card::new(
            CardId::new(2),
            "Heavy Strike",
            2,
            "Deal 12 damage",
            CardKind::Attack { damage: 12 },
        )
    }

    /// 1 AP, gain 5 defense points.
    #[must_use]
    pub fn guard() -> Card {
        Card::new(
            CardId::new(3),
            "Guard",
            1,
            "Gain 5 defense points",
            CardKind::Defense { points: 5 },
        )
    }

    /// 2 AP, gain 10 defense points.
    #[must_use]
    pub fn iron_guard() -> Card {
        Card::new(
            CardId::new(4),
            "Iron Guard",
            2,
            "Gain 10 defense points",
            CardKind::Defense { points: 10 },
        )
    }

    /// 1 AP, draw 1 additional card.
    #[must_use]
    pub fn foresight() -> Card {
        Card::new(
            CardId::new(5),
            "Foresight",
            1,
            "Draw 1 additional card",
            CardKind::Draw { count: 1 },
        )
    }

    /// 0 AP enemy attack, deal 6 damage.
    #[must_use]
    pub fn claw() -> Card {
        Card::new(
            CardId::new(6),
            "Claw",
            0,
            "Deal 6 damage",
            CardKind::Attack { damage: 6 },
        )
    }

    /// 0 AP enemy defense, gain 5 defense points.
    #[must_use]
    pub fn hunker() -> Card {
        Card::new(
            CardId::new(7),
            "Hunker",
            0,
            "Gain 5 defense points",
            CardKind::Defense { points: 5 },
        )
    }

    /// Every card in the standard set.
    #[must_use]
    pub fn all() -> Vec<Card> {
        vec![
            strike(),
            heavy_strike(),
            guard(),
            iron_guard(),
            foresight(),
            claw(),
            hunker(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = CardCatalog::new();
        assert!(catalog.is_empty());

        catalog.register(standard::strike());

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(CardId::new(1)));
        assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Strike");
        assert!(catalog.get(CardId::new(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(standard::strike());
        catalog.register(standard::strike());
    }

    #[test]
    fn test_standard_catalog() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 7);
        for card in catalog.iter() {
            assert!(!card.name.is_empty());
            assert!(!card.info.is_empty());
        }
    }

    #[test]
    fn test_standard_ids_are_distinct() {
        let cards = standard::all();
        let mut ids: Vec<_> = cards.iter().map(|c| c.id).collect();
        ids.sort_by_key(|id| id.raw());
        ids.dedup();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn test_enemy_cards_are_free() {
        assert_eq!(standard::claw().cost, 0);
        assert_eq!(standard::hunker().cost, 0);
    }
}
