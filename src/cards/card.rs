//! Card definitions - immutable playable effects.
//!
//! `Card` holds the unchanging properties of a card: name, action-point
//! cost, display text, and its behavior as a [`CardKind`]. The kind is a
//! tagged union over the three fixed behaviors rather than a trait object -
//! card data stays immutable, serializable, and cheap to clone into piles.
//!
//! A card has no owner and never mutates anything itself: moving it between
//! piles and resolving its effect belong to `Actor` and `Battle`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Identifies the "kind" of card (e.g. "Strike"), not a specific copy in a
/// deck - decks may hold many copies sharing one id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which roster a card aims at, relative to the actor playing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetSide {
    /// The side across the table (attacks).
    Opposing,
    /// The acting side, self included (defense, draw).
    Own,
}

/// A card's behavior and its kind-specific payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    /// Deal damage to an opposing actor, routed through its damage-intake
    /// rule (defense absorbs first).
    Attack {
        /// Base damage before the source's attack bonus.
        damage: u32,
    },
    /// Grant defense points to an own-side actor.
    Defense {
        /// Defense points added to the target's buffer.
        points: u32,
    },
    /// The source draws additional cards.
    Draw {
        /// Number of cards drawn (at least 1 in any sane catalog).
        count: u32,
    },
}

impl CardKind {
    /// The roster this kind targets, relative to the source.
    #[must_use]
    pub const fn target_side(self) -> TargetSide {
        match self {
            CardKind::Attack { .. } => TargetSide::Opposing,
            CardKind::Defense { .. } | CardKind::Draw { .. } => TargetSide::Own,
        }
    }
}

/// Immutable card definition.
///
/// ## Example
///
/// ```
/// use deck_battle::cards::{Card, CardId, CardKind, TargetSide};
///
/// let strike = Card::new(
///     CardId::new(1),
///     "Strike",
///     1,
///     "Deal 6 damage",
///     CardKind::Attack { damage: 6 },
/// );
///
/// assert_eq!(strike.cost, 1);
/// assert_eq!(strike.target_side(), TargetSide::Opposing);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Definition identity; copies in a deck share it.
    pub id: CardId,

    /// Card name (for display).
    pub name: String,

    /// Action-point cost to play.
    pub cost: u32,

    /// Display text; doubles as the telegraphed enemy intent.
    pub info: String,

    /// Behavior and payload.
    pub kind: CardKind,
}

impl Card {
    /// Create a new card definition.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        cost: u32,
        info: impl Into<String>,
        kind: CardKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            info: info.into(),
            kind,
        }
    }

    /// The roster this card targets, relative to whoever plays it.
    #[must_use]
    pub fn target_side(&self) -> TargetSide {
        self.kind.target_side()
    }
}
