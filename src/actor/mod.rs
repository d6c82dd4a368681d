//! Combat entities: health, action points, piles, defense, relics.
//!
//! An [`Actor`] owns its piles and its own stats, and nothing else: it
//! never removes itself from a battle roster and never touches another
//! actor. Cross-actor effects (damage from an attack card, defense granted
//! to an ally) are applied by the battle orchestrator, which reads the
//! source's stats, pays for the card via [`Actor::spend_card`], and then
//! mutates the one affected actor.

pub mod piles;
pub mod profile;
pub mod relic;

pub use piles::CardPiles;
pub use profile::{ActorProfile, SpecialMove};
pub use relic::{Relic, RelicBoon};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::Card;
use crate::core::{BattleError, BattleRng};

/// What one incoming hit did to an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Damage soaked by the defense buffer.
    pub absorbed: u32,
    /// Damage that reached health.
    pub health_lost: u32,
    /// Whether health hit 0 on this hit.
    pub defeated: bool,
}

/// A mutable combat entity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Actor {
    /// Display name.
    pub name: String,

    profile: ActorProfile,
    health: u32,
    action_points: u32,
    defense: u32,
    attack_bonus: u32,
    skip_next_turn: bool,
    piles: CardPiles,
    relics: SmallVec<[Relic; 2]>,
}

impl Actor {
    /// Create an actor at full health with the given deck.
    ///
    /// The deck is used as given; the battle shuffles it at setup.
    #[must_use]
    pub fn new(name: impl Into<String>, profile: ActorProfile, deck: Vec<Card>) -> Self {
        let health = profile.max_health;
        Self {
            name: name.into(),
            profile,
            health,
            action_points: 0,
            defense: 0,
            attack_bonus: 0,
            skip_next_turn: false,
            piles: CardPiles::new(deck),
            relics: SmallVec::new(),
        }
    }

    /// The actor's capability profile.
    #[must_use]
    pub fn profile(&self) -> &ActorProfile {
        &self.profile
    }

    /// Current health, `0..=max_health`.
    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Health ceiling.
    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.profile.max_health
    }

    /// Action points remaining this turn.
    #[must_use]
    pub fn action_points(&self) -> u32 {
        self.action_points
    }

    /// Current defense buffer.
    #[must_use]
    pub fn defense(&self) -> u32 {
        self.defense
    }

    /// Flat addend applied to outgoing attack damage.
    #[must_use]
    pub fn attack_bonus(&self) -> u32 {
        self.attack_bonus
    }

    /// Whether this actor's health has reached 0.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// The actor's piles.
    #[must_use]
    pub fn piles(&self) -> &CardPiles {
        &self.piles
    }

    /// Relics attached so far.
    #[must_use]
    pub fn relics(&self) -> &[Relic] {
        &self.relics
    }

    /// Whether this actor's next turn is forfeit.
    #[must_use]
    pub fn skip_next_turn(&self) -> bool {
        self.skip_next_turn
    }

    /// Mark this actor's next turn as forfeit.
    pub fn set_skip_next_turn(&mut self) {
        self.skip_next_turn = true;
    }

    /// Consume the skip flag, returning whether it was set.
    pub fn take_skip_flag(&mut self) -> bool {
        std::mem::take(&mut self.skip_next_turn)
    }

    /// Apply incoming damage: the defense buffer absorbs first, health
    /// floors at 0.
    pub fn take_damage(&mut self, amount: u32) -> DamageReport {
        let absorbed = self.defense.min(amount);
        self.defense -= absorbed;

        let health_lost = (amount - absorbed).min(self.health);
        self.health -= health_lost;

        let report = DamageReport {
            absorbed,
            health_lost,
            defeated: self.health == 0,
        };
        debug!(
            actor = %self.name,
            amount,
            absorbed,
            health = self.health,
            "damage taken"
        );
        report
    }

    /// Accrue defense points.
    ///
    /// The buffer has no ceiling and is consumed only by incoming damage -
    /// it carries over between rounds rather than resetting at turn
    /// boundaries.
    pub fn add_defense(&mut self, points: u32) {
        self.defense += points;
    }

    /// Shuffle the draw pile (battle setup).
    pub fn shuffle_deck(&mut self, rng: &mut BattleRng) {
        self.piles.shuffle_deck(rng);
    }

    /// Draw up to `n` cards, recycling the discard pile as needed.
    ///
    /// Returns the number of cards actually drawn.
    pub fn draw_cards(&mut self, n: usize, rng: &mut BattleRng) -> usize {
        self.piles.draw(n, self.profile.max_hand_size, rng)
    }

    /// Validate and pay for the card at `index` in the hand.
    ///
    /// On success the card leaves the hand, its cost is deducted, and the
    /// card is handed to the caller for resolution; the caller returns it
    /// via [`discard_played`]. On failure nothing changes.
    ///
    /// [`discard_played`]: Actor::discard_played
    pub fn spend_card(&mut self, index: usize) -> Result<Card, BattleError> {
        let cost = match self.piles.hand().get(index) {
            Some(card) => card.cost,
            None => return Err(BattleError::CardNotInHand { index }),
        };

        if cost > self.action_points {
            return Err(BattleError::InsufficientActionPoints {
                cost,
                available: self.action_points,
            });
        }

        self.action_points -= cost;
        // The index was validated above.
        let card = self
            .piles
            .take_from_hand(index)
            .expect("validated hand index");
        debug!(actor = %self.name, card = %card.name, "card spent");
        Ok(card)
    }

    /// Put a resolved card onto the discard pile.
    pub fn discard_played(&mut self, card: Card) {
        self.piles.discard_played(card);
    }

    /// Attach a relic, applying its passive boon exactly once.
    pub fn attach_relic(&mut self, relic: Relic) {
        match relic.boon {
            RelicBoon::AttackBonus(bonus) => self.attack_bonus += bonus,
            RelicBoon::Inert => {}
        }
        debug!(actor = %self.name, relic = %relic.name, "relic attached");
        self.relics.push(relic);
    }

    /// Turn-start reset: discard the hand, draw a fresh one up to the hand
    /// cap, restore action points.
    ///
    /// Invoked by the battle orchestrator, never by the actor itself.
    pub fn begin_turn(&mut self, rng: &mut BattleRng) {
        self.piles.discard_hand();
        self.piles
            .draw(self.profile.max_hand_size, self.profile.max_hand_size, rng);
        self.action_points = self.profile.action_points_max;
    }
}
