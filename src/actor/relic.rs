//! Relics: passive modifiers attached to an actor.
//!
//! A relic belongs to exactly one actor once attached. Its passive boon is
//! applied exactly once, at attach time, and holds for the rest of the
//! battle. Relics with no passive effect are legal and attach as no-ops.

use serde::{Deserialize, Serialize};

/// The passive effect a relic grants at attach time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelicBoon {
    /// Flat addend to outgoing attack damage.
    AttackBonus(u32),
    /// No passive effect.
    Inert,
}

/// A relic definition.
///
/// ## Example
///
/// ```
/// use deck_battle::actor::{Relic, RelicBoon};
///
/// let pendant = Relic::new(
///     "Warrior's Pendant",
///     "Increases attack by 2 points",
///     RelicBoon::AttackBonus(2),
/// );
/// assert_eq!(pendant.boon, RelicBoon::AttackBonus(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relic {
    /// Relic name.
    pub name: String,

    /// Display text.
    pub description: String,

    /// Passive effect applied at attach time.
    pub boon: RelicBoon,
}

impl Relic {
    /// Create a new relic.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, boon: RelicBoon) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            boon,
        }
    }

    /// The classic +2 attack pendant.
    #[must_use]
    pub fn warriors_pendant() -> Self {
        Self::new(
            "Warrior's Pendant",
            "Increases attack by 2 points",
            RelicBoon::AttackBonus(2),
        )
    }
}
