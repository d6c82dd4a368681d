//! Actor capability profiles.
//!
//! Enemy variants in this genre traditionally arrive as a subclass per
//! suit. Here a single [`ActorProfile`] record carries the per-variant
//! data instead: action-point budget, hand cap, who controls the actor,
//! and an optional special move. Conventional values ("enemies have 0 AP
//! and a hand of 1") are defaults on the constructors, not hardwired
//! anywhere in the engine.

use serde::{Deserialize, Serialize};

/// A special move some profiles can use instead of playing a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialMove {
    /// Consume an opposing actor's next turn instead of acting.
    Distract,
}

/// Capability record for one actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    /// Health ceiling; current health starts here.
    pub max_health: u32,

    /// Action points granted at each turn start.
    pub action_points_max: u32,

    /// Hand size cap; draws stop here.
    pub max_hand_size: usize,

    /// Manual turn resolution (prompt loop) vs automatic (intent selector).
    pub player_controlled: bool,

    /// Optional special move available to the intent selector.
    pub special: Option<SpecialMove>,
}

impl ActorProfile {
    /// A player-controlled profile: 3 AP, hand of 5.
    #[must_use]
    pub fn player(max_health: u32) -> Self {
        Self {
            max_health,
            action_points_max: 3,
            max_hand_size: 5,
            player_controlled: true,
            special: None,
        }
    }

    /// An AI-controlled profile: 0 AP, hand of 1.
    ///
    /// Enemy cards are free to play; the single-card hand doubles as the
    /// telegraphed intent.
    #[must_use]
    pub fn enemy(max_health: u32) -> Self {
        Self {
            max_health,
            action_points_max: 0,
            max_hand_size: 1,
            player_controlled: false,
            special: None,
        }
    }

    /// Override the per-turn action-point budget.
    #[must_use]
    pub fn with_action_points(mut self, cap: u32) -> Self {
        self.action_points_max = cap;
        self
    }

    /// Override the hand size cap.
    #[must_use]
    pub fn with_hand_size(mut self, cap: usize) -> Self {
        self.max_hand_size = cap;
        self
    }

    /// Grant a special move.
    #[must_use]
    pub fn with_special(mut self, special: SpecialMove) -> Self {
        self.special = Some(special);
        self
    }
}
