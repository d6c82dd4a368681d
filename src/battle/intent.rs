//! Intent selection for AI-controlled actors.
//!
//! Stateless and re-rolled every round: no look-ahead, no difficulty
//! scaling, every choice uniform through the injected RNG. The card an
//! enemy holds fixes which roster the intent aims at; a profile with the
//! distract special first flips a fair coin between playing its card and
//! distracting an opposing actor.

use serde::{Deserialize, Serialize};

use crate::actor::{Actor, SpecialMove};
use crate::cards::TargetSide;
use crate::core::BattleRng;

/// A resolved intent for one enemy turn.
///
/// Target indices point into the roster implied by the intent: the
/// opposing roster for attacks and distraction, the actor's own roster
/// (self included) for defense and draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Play the single held card against `target`.
    PlayCard {
        /// Index into the roster the held card aims at.
        target: usize,
    },
    /// Consume an opposing actor's next turn instead of playing.
    Distract {
        /// Index into the opposing roster.
        target: usize,
    },
    /// Nothing to do: the hand is empty and the card pool is exhausted.
    Pass,
}

/// Choose an intent for an AI-controlled actor.
///
/// `own_len` and `opposing_len` are the sizes of the actor's roster and
/// the roster across the table; both contain only surviving actors.
pub fn choose_intent(
    actor: &Actor,
    own_len: usize,
    opposing_len: usize,
    rng: &mut BattleRng,
) -> Intent {
    if actor.profile().special == Some(SpecialMove::Distract) && rng.coin_flip() {
        if let Some(target) = rng.pick_index(opposing_len) {
            return Intent::Distract { target };
        }
    }

    let Some(card) = actor.piles().hand().first() else {
        return Intent::Pass;
    };

    let target = match card.target_side() {
        TargetSide::Opposing => rng.pick_index(opposing_len),
        TargetSide::Own => rng.pick_index(own_len),
    };

    match target {
        Some(target) => Intent::PlayCard { target },
        None => Intent::Pass,
    }
}
