//! Error taxonomy for the battle engine.
//!
//! Everything here except [`BattleError::EmptyRoster`] is recoverable: the
//! engine reports the error to the display sink and re-prompts. User input
//! never terminates a battle; only a terminal outcome does.

use thiserror::Error;

use super::side::Side;

/// Errors surfaced while constructing or driving a battle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// A card costs more action points than the actor has left.
    #[error("not enough action points: card costs {cost}, {available} available")]
    InsufficientActionPoints {
        /// Action-point cost of the attempted card.
        cost: u32,
        /// Action points the actor has remaining.
        available: u32,
    },

    /// A hand index that doesn't refer to a held card.
    #[error("no card at hand position {index}")]
    CardNotInHand {
        /// The stale or out-of-range hand index (0-based).
        index: usize,
    },

    /// A target index out of range, or on the wrong side for the card.
    #[error("invalid target selection: {index}")]
    InvalidTarget {
        /// The rejected target index (0-based).
        index: usize,
    },

    /// Console input that parses as neither a card selection nor "end".
    #[error("unrecognized input: {0:?}")]
    MalformedInput(String),

    /// A battle cannot start with an empty roster on either side.
    #[error("cannot start a battle with no {0}")]
    EmptyRoster(Side),
}

impl BattleError {
    /// Whether the engine should re-prompt rather than abort.
    ///
    /// Only roster misconfiguration is fatal, and it is caught before the
    /// first turn.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BattleError::EmptyRoster(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        assert!(BattleError::InsufficientActionPoints {
            cost: 2,
            available: 1
        }
        .is_recoverable());
        assert!(BattleError::CardNotInHand { index: 9 }.is_recoverable());
        assert!(BattleError::InvalidTarget { index: 3 }.is_recoverable());
        assert!(BattleError::MalformedInput("foo".into()).is_recoverable());
        assert!(!BattleError::EmptyRoster(Side::Enemies).is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = BattleError::InsufficientActionPoints {
            cost: 3,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "not enough action points: card costs 3, 1 available"
        );

        let err = BattleError::EmptyRoster(Side::Players);
        assert_eq!(err.to_string(), "cannot start a battle with no players");
    }
}
