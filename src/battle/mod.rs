//! Battle orchestration: the turn-order state machine.
//!
//! One round is `RoundStart -> PlayerPhase -> EnemyPhase`, repeating until
//! a terminal state. The battle owns both rosters and is the only code
//! that mutates them: actors mutate their own fields, the battle resolves
//! cross-actor effects, removes the defeated, and checks termination after
//! every card play and every turn.
//!
//! Turn order inside a phase is an index-based traversal with liveness
//! re-checked before each turn, so mid-phase eliminations never invalidate
//! the iteration.
//!
//! Termination is asymmetric by design: the player side loses the instant
//! any one player falls; it wins only when every enemy is down.

pub mod intent;

pub use intent::{choose_intent, Intent};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::actor::Actor;
use crate::cards::{CardKind, TargetSide};
use crate::core::{BattleError, BattleRng, Side};
use crate::interface::{ActorView, BattleView, DisplaySink, InputSource, PlayerAction, TurnPrompt};

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Every enemy was eliminated.
    Victory,
    /// A player fell.
    Defeat,
}

/// A battle between two rosters.
#[derive(Debug)]
pub struct Battle {
    players: Vec<Actor>,
    enemies: Vec<Actor>,
    rng: BattleRng,
    round: u32,
}

impl Battle {
    /// Create a battle and shuffle every deck.
    ///
    /// Fails fast with [`BattleError::EmptyRoster`] if either side is
    /// empty; no turn is ever processed for a misconfigured battle.
    pub fn new(
        players: Vec<Actor>,
        enemies: Vec<Actor>,
        rng: BattleRng,
    ) -> Result<Self, BattleError> {
        if players.is_empty() {
            return Err(BattleError::EmptyRoster(Side::Players));
        }
        if enemies.is_empty() {
            return Err(BattleError::EmptyRoster(Side::Enemies));
        }

        let mut battle = Self {
            players,
            enemies,
            rng,
            round: 0,
        };
        for actor in battle
            .players
            .iter_mut()
            .chain(battle.enemies.iter_mut())
        {
            actor.shuffle_deck(&mut battle.rng);
        }
        Ok(battle)
    }

    /// The player roster in turn order.
    #[must_use]
    pub fn players(&self) -> &[Actor] {
        &self.players
    }

    /// The surviving enemy roster in turn order.
    #[must_use]
    pub fn enemies(&self) -> &[Actor] {
        &self.enemies
    }

    /// Rounds started so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Snapshot the battle for rendering.
    #[must_use]
    pub fn view(&self) -> BattleView {
        let actor_view = |actor: &Actor, intent: Option<String>| ActorView {
            name: actor.name.clone(),
            health: actor.health(),
            max_health: actor.max_health(),
            defense: actor.defense(),
            intent,
        };

        BattleView {
            round: self.round,
            players: self
                .players
                .iter()
                .map(|actor| actor_view(actor, None))
                .collect(),
            enemies: self
                .enemies
                .iter()
                .map(|actor| {
                    let intent = actor.piles().hand().first().map(|card| card.info.clone());
                    actor_view(actor, intent)
                })
                .collect(),
        }
    }

    /// Drive the battle to a terminal state.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        display: &mut dyn DisplaySink,
    ) -> BattleOutcome {
        let outcome = loop {
            self.begin_round();
            if let Some(outcome) = self.check_termination() {
                break outcome;
            }
            display.render(&self.view());

            if let Some(outcome) = self.player_phase(input, display) {
                break outcome;
            }
            if let Some(outcome) = self.enemy_phase(display) {
                break outcome;
            }
        };

        info!(?outcome, round = self.round, "battle over");
        display.note(match outcome {
            BattleOutcome::Victory => "You win!",
            BattleOutcome::Defeat => "Game over. You lost.",
        });
        outcome
    }

    /// Round start: every surviving enemy refreshes its telegraphed
    /// intent (discard, redraw up to the hand cap).
    fn begin_round(&mut self) {
        self.round += 1;
        debug!(round = self.round, "round start");

        let rng = &mut self.rng;
        for enemy in &mut self.enemies {
            enemy.begin_turn(rng);
        }
    }

    /// Terminal-state check: any fallen player loses the battle; victory
    /// needs every enemy down.
    fn check_termination(&self) -> Option<BattleOutcome> {
        if self.players.iter().any(Actor::is_defeated) {
            return Some(BattleOutcome::Defeat);
        }
        if self.enemies.iter().all(Actor::is_defeated) {
            return Some(BattleOutcome::Victory);
        }
        None
    }

    fn player_phase(
        &mut self,
        input: &mut dyn InputSource,
        display: &mut dyn DisplaySink,
    ) -> Option<BattleOutcome> {
        for index in 0..self.players.len() {
            if self.players[index].is_defeated() {
                continue;
            }
            if self.players[index].take_skip_flag() {
                display.note(&format!(
                    "{} is distracted and skips the turn!",
                    self.players[index].name
                ));
                continue;
            }
            if let Some(outcome) = self.player_turn(index, input, display) {
                return Some(outcome);
            }
        }
        None
    }

    fn player_turn(
        &mut self,
        index: usize,
        input: &mut dyn InputSource,
        display: &mut dyn DisplaySink,
    ) -> Option<BattleOutcome> {
        self.players[index].begin_turn(&mut self.rng);
        debug!(player = %self.players[index].name, "player turn start");
        display.render(&self.view());

        loop {
            if !self.has_playable_card(index) {
                display.note(&format!(
                    "{} has no playable cards left.",
                    self.players[index].name
                ));
                break;
            }

            let prompt = self.turn_prompt(index);
            match input.decide(&prompt) {
                Ok(PlayerAction::EndTurn) => break,
                Ok(PlayerAction::Play { card, target }) => {
                    match self.play_player_card(index, card, target) {
                        Ok(()) => {
                            self.retire_defeated_enemies(display);
                            display.render(&self.view());
                            if let Some(outcome) = self.check_termination() {
                                return Some(outcome);
                            }
                        }
                        // Recoverable: report and prompt again.
                        Err(err) => display.note(&err.to_string()),
                    }
                }
                Err(err) => display.note(&err.to_string()),
            }
        }
        None
    }

    /// Whether the player can afford any card still in hand.
    fn has_playable_card(&self, index: usize) -> bool {
        let actor = &self.players[index];
        actor
            .piles()
            .hand()
            .iter()
            .any(|card| card.cost <= actor.action_points())
    }

    fn turn_prompt(&self, index: usize) -> TurnPrompt {
        let actor = &self.players[index];
        TurnPrompt {
            actor: actor.name.clone(),
            action_points: actor.action_points(),
            hand: actor.piles().hand().to_vec(),
            allies: self.players.iter().map(|a| a.name.clone()).collect(),
            enemies: self.enemies.iter().map(|a| a.name.clone()).collect(),
        }
    }

    /// Play one card for a player: validate, pay, resolve, discard.
    ///
    /// The target is validated before anything mutates, so a rejected play
    /// leaves the battle untouched. An omitted target defaults to the
    /// first enemy for attacks and to the acting player for own-side
    /// cards.
    fn play_player_card(
        &mut self,
        source: usize,
        card_index: usize,
        target: Option<usize>,
    ) -> Result<(), BattleError> {
        let kind = match self.players[source].piles().hand().get(card_index) {
            Some(card) => card.kind,
            None => return Err(BattleError::CardNotInHand { index: card_index }),
        };

        let target = match kind.target_side() {
            TargetSide::Opposing => {
                let index = target.unwrap_or(0);
                if index >= self.enemies.len() {
                    return Err(BattleError::InvalidTarget { index });
                }
                index
            }
            TargetSide::Own => {
                let index = target.unwrap_or(source);
                if index >= self.players.len() {
                    return Err(BattleError::InvalidTarget { index });
                }
                index
            }
        };

        let attack_bonus = self.players[source].attack_bonus();
        let card = self.players[source].spend_card(card_index)?;

        match card.kind {
            CardKind::Attack { damage } => {
                let dealt = damage + attack_bonus;
                let report = self.enemies[target].take_damage(dealt);
                info!(
                    source = %self.players[source].name,
                    target = %self.enemies[target].name,
                    dealt,
                    absorbed = report.absorbed,
                    "attack resolved"
                );
            }
            CardKind::Defense { points } => {
                self.players[target].add_defense(points);
            }
            CardKind::Draw { count } => {
                self.players[source].draw_cards(count as usize, &mut self.rng);
            }
        }

        self.players[source].discard_played(card);
        Ok(())
    }

    /// Remove defeated enemies from the roster, immediately.
    fn retire_defeated_enemies(&mut self, display: &mut dyn DisplaySink) {
        let mut fallen = Vec::new();
        self.enemies.retain(|enemy| {
            if enemy.is_defeated() {
                fallen.push(enemy.name.clone());
                false
            } else {
                true
            }
        });
        for name in fallen {
            info!(enemy = %name, "enemy defeated");
            display.note(&format!("{name} is defeated!"));
        }
    }

    fn enemy_phase(&mut self, display: &mut dyn DisplaySink) -> Option<BattleOutcome> {
        for index in 0..self.enemies.len() {
            if self.enemies[index].is_defeated() {
                continue;
            }
            if self.enemies[index].take_skip_flag() {
                display.note(&format!(
                    "{} is distracted and skips the turn!",
                    self.enemies[index].name
                ));
                continue;
            }

            let intent = choose_intent(
                &self.enemies[index],
                self.enemies.len(),
                self.players.len(),
                &mut self.rng,
            );
            self.resolve_enemy_intent(index, intent, display);
            display.render(&self.view());

            if let Some(outcome) = self.check_termination() {
                return Some(outcome);
            }
        }
        None
    }

    fn resolve_enemy_intent(
        &mut self,
        index: usize,
        intent: Intent,
        display: &mut dyn DisplaySink,
    ) {
        match intent {
            Intent::Pass => {
                debug!(enemy = %self.enemies[index].name, "nothing to play");
            }
            Intent::Distract { target } => {
                self.players[target].set_skip_next_turn();
                display.note(&format!(
                    "{} distracts {}!",
                    self.enemies[index].name, self.players[target].name
                ));
            }
            Intent::PlayCard { target } => {
                let attack_bonus = self.enemies[index].attack_bonus();
                // Enemies always play their sole card; a profile whose
                // cards it cannot afford simply forfeits the turn.
                let card = match self.enemies[index].spend_card(0) {
                    Ok(card) => card,
                    Err(err) => {
                        warn!(enemy = %self.enemies[index].name, %err, "enemy forfeits turn");
                        return;
                    }
                };

                match card.kind {
                    CardKind::Attack { damage } => {
                        let dealt = damage + attack_bonus;
                        let report = self.players[target].take_damage(dealt);
                        display.note(&format!(
                            "{} hits {} for {} damage.",
                            self.enemies[index].name,
                            self.players[target].name,
                            report.absorbed + report.health_lost
                        ));
                        info!(
                            source = %self.enemies[index].name,
                            target = %self.players[target].name,
                            dealt,
                            absorbed = report.absorbed,
                            "attack resolved"
                        );
                    }
                    CardKind::Defense { points } => {
                        self.enemies[target].add_defense(points);
                    }
                    CardKind::Draw { count } => {
                        self.enemies[index].draw_cards(count as usize, &mut self.rng);
                    }
                }

                self.enemies[index].discard_played(card);
                // Replacement card: the intent shown until the next
                // round-start refresh.
                self.enemies[index].draw_cards(1, &mut self.rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorProfile;
    use crate::cards::catalog::standard;

    fn player(name: &str) -> Actor {
        Actor::new(
            name,
            ActorProfile::player(30),
            vec![standard::strike(); 5],
        )
    }

    fn enemy(name: &str) -> Actor {
        Actor::new(name, ActorProfile::enemy(20), vec![standard::claw(); 4])
    }

    #[test]
    fn test_empty_rosters_rejected() {
        let err = Battle::new(Vec::new(), vec![enemy("Gremlin")], BattleRng::new(1)).unwrap_err();
        assert_eq!(err, BattleError::EmptyRoster(Side::Players));

        let err = Battle::new(vec![player("Hero")], Vec::new(), BattleRng::new(1)).unwrap_err();
        assert_eq!(err, BattleError::EmptyRoster(Side::Enemies));
    }

    #[test]
    fn test_view_shows_enemy_intent_after_round_start() {
        let mut battle =
            Battle::new(vec![player("Hero")], vec![enemy("Gremlin")], BattleRng::new(1)).unwrap();
        battle.begin_round();

        let view = battle.view();
        assert_eq!(view.round, 1);
        assert_eq!(view.players[0].intent, None);
        assert_eq!(view.enemies[0].intent.as_deref(), Some("Deal 6 damage"));
    }

    #[test]
    fn test_attack_defaults_to_first_enemy() {
        let mut battle = Battle::new(
            vec![player("Hero")],
            vec![enemy("Left"), enemy("Right")],
            BattleRng::new(1),
        )
        .unwrap();
        battle.begin_round();
        battle.players[0].begin_turn(&mut battle.rng);

        battle.play_player_card(0, 0, None).unwrap();

        assert_eq!(battle.enemies[0].health(), 14);
        assert_eq!(battle.enemies[1].health(), 20);
    }

    #[test]
    fn test_attack_rejects_out_of_range_target() {
        let mut battle =
            Battle::new(vec![player("Hero")], vec![enemy("Gremlin")], BattleRng::new(1)).unwrap();
        battle.begin_round();
        battle.players[0].begin_turn(&mut battle.rng);
        let hand_before = battle.players[0].piles().hand().len();

        let err = battle.play_player_card(0, 0, Some(3)).unwrap_err();

        assert_eq!(err, BattleError::InvalidTarget { index: 3 });
        assert_eq!(battle.players[0].piles().hand().len(), hand_before);
        assert_eq!(battle.players[0].action_points(), 3);
        assert_eq!(battle.enemies[0].health(), 20);
    }

    #[test]
    fn test_defense_defaults_to_self() {
        let mut battle = Battle::new(
            vec![
                Actor::new("Hero", ActorProfile::player(30), vec![standard::guard(); 5]),
                player("Sidekick"),
            ],
            vec![enemy("Gremlin")],
            BattleRng::new(1),
        )
        .unwrap();
        battle.begin_round();
        battle.players[0].begin_turn(&mut battle.rng);

        battle.play_player_card(0, 0, None).unwrap();

        assert_eq!(battle.players[0].defense(), 5);
        assert_eq!(battle.players[1].defense(), 0);
    }

    #[test]
    fn test_defense_can_target_ally() {
        let mut battle = Battle::new(
            vec![
                Actor::new("Hero", ActorProfile::player(30), vec![standard::guard(); 5]),
                player("Sidekick"),
            ],
            vec![enemy("Gremlin")],
            BattleRng::new(1),
        )
        .unwrap();
        battle.begin_round();
        battle.players[0].begin_turn(&mut battle.rng);

        battle.play_player_card(0, 0, Some(1)).unwrap();

        assert_eq!(battle.players[0].defense(), 0);
        assert_eq!(battle.players[1].defense(), 5);
    }

    #[test]
    fn test_draw_card_refills_hand() {
        let mut deck = vec![standard::foresight()];
        deck.extend(vec![standard::strike(); 6]);
        let mut battle = Battle::new(
            vec![Actor::new("Hero", ActorProfile::player(30), deck)],
            vec![enemy("Gremlin")],
            BattleRng::new(1),
        )
        .unwrap();
        battle.begin_round();
        battle.players[0].begin_turn(&mut battle.rng);

        let foresight_at = battle.players[0]
            .piles()
            .hand()
            .iter()
            .position(|card| card.name == "Foresight");
        let Some(foresight_at) = foresight_at else {
            // Shuffle left the draw card in the deck for this seed.
            return;
        };

        battle.play_player_card(0, foresight_at, None).unwrap();

        // Played one, drew one back.
        assert_eq!(battle.players[0].piles().hand().len(), 5);
        assert_eq!(battle.players[0].piles().total_cards(), 7);
    }

    #[test]
    fn test_retire_removes_defeated_enemies() {
        let mut display = crate::interface::scripted::RecordingDisplay::new();
        let mut battle = Battle::new(
            vec![player("Hero")],
            vec![enemy("Left"), enemy("Right")],
            BattleRng::new(1),
        )
        .unwrap();

        battle.enemies[0].take_damage(20);
        battle.retire_defeated_enemies(&mut display);

        assert_eq!(battle.enemies.len(), 1);
        assert_eq!(battle.enemies[0].name, "Right");
        assert!(display.notes.iter().any(|n| n.contains("Left is defeated")));
    }

    #[test]
    fn test_termination_policy_is_asymmetric() {
        let mut battle = Battle::new(
            vec![player("Hero"), player("Sidekick")],
            vec![enemy("Left"), enemy("Right")],
            BattleRng::new(1),
        )
        .unwrap();

        assert_eq!(battle.check_termination(), None);

        // One enemy down is not victory.
        battle.enemies[0].take_damage(20);
        assert_eq!(battle.check_termination(), None);

        // One player down is instant defeat, even with the other standing.
        battle.players[1].take_damage(30);
        assert_eq!(battle.check_termination(), Some(BattleOutcome::Defeat));
    }

    #[test]
    fn test_skip_flag_skips_player_turn() {
        use crate::interface::scripted::{RecordingDisplay, ScriptedInput};

        let mut battle =
            Battle::new(vec![player("Hero")], vec![enemy("Gremlin")], BattleRng::new(1)).unwrap();
        battle.begin_round();
        battle.players[0].set_skip_next_turn();

        let mut input = ScriptedInput::new([PlayerAction::Play {
            card: 0,
            target: Some(0),
        }]);
        let mut display = RecordingDisplay::new();
        let outcome = battle.player_phase(&mut input, &mut display);

        assert_eq!(outcome, None);
        // Never prompted, nothing played, flag consumed.
        assert_eq!(input.remaining(), 1);
        assert_eq!(battle.enemies[0].health(), 20);
        assert!(!battle.players[0].skip_next_turn());
        assert!(display.notes.iter().any(|n| n.contains("distracted")));
    }

    #[test]
    fn test_skip_flag_skips_enemy_turn() {
        use crate::interface::scripted::RecordingDisplay;

        let mut battle =
            Battle::new(vec![player("Hero")], vec![enemy("Gremlin")], BattleRng::new(1)).unwrap();
        battle.begin_round();
        battle.enemies[0].set_skip_next_turn();

        let mut display = RecordingDisplay::new();
        let outcome = battle.enemy_phase(&mut display);

        assert_eq!(outcome, None);
        assert_eq!(battle.players[0].health(), 30);
        assert!(!battle.enemies[0].skip_next_turn());
    }

    #[test]
    fn test_distract_intent_sets_skip_flag_and_keeps_card() {
        use crate::interface::scripted::RecordingDisplay;

        let mut battle =
            Battle::new(vec![player("Hero")], vec![enemy("Gremlin")], BattleRng::new(1)).unwrap();
        battle.begin_round();

        let mut display = RecordingDisplay::new();
        battle.resolve_enemy_intent(0, Intent::Distract { target: 0 }, &mut display);

        assert!(battle.players[0].skip_next_turn());
        // The held card stays until the next round-start refresh.
        assert_eq!(battle.enemies[0].piles().hand().len(), 1);
        assert!(display.notes.iter().any(|n| n.contains("distracts")));
    }

    #[test]
    fn test_enemy_attack_draws_replacement_intent() {
        use crate::interface::scripted::RecordingDisplay;

        let mut battle =
            Battle::new(vec![player("Hero")], vec![enemy("Gremlin")], BattleRng::new(1)).unwrap();
        battle.begin_round();

        let mut display = RecordingDisplay::new();
        battle.resolve_enemy_intent(0, Intent::PlayCard { target: 0 }, &mut display);

        assert_eq!(battle.players[0].health(), 24);
        // Played card discarded, replacement drawn as the next intent.
        assert_eq!(battle.enemies[0].piles().hand().len(), 1);
        assert_eq!(battle.enemies[0].piles().discard().len(), 1);
    }

    #[test]
    fn test_victory_when_all_enemies_down() {
        let mut battle = Battle::new(
            vec![player("Hero")],
            vec![enemy("Left"), enemy("Right")],
            BattleRng::new(1),
        )
        .unwrap();

        battle.enemies[0].take_damage(20);
        battle.enemies[1].take_damage(20);

        assert_eq!(battle.check_termination(), Some(BattleOutcome::Victory));
    }
}
