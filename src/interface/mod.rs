//! External collaborator seams: display and input.
//!
//! The engine core never touches a terminal. It renders through a
//! [`DisplaySink`] (pure output, called after each state-relevant
//! mutation) and asks for player decisions through an [`InputSource`]
//! (blocking, re-prompted by the engine on any recoverable error). Hosts
//! plug in the console implementations; tests plug in scripted ones and
//! drive battles headlessly.

pub mod console;
pub mod scripted;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::BattleError;

/// A player's decision for one prompt.
///
/// Indices are 0-based engine indices; the console layer converts from
/// the 1-based numbers shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play the hand card at `card`, optionally naming a target on the
    /// side the card aims at. An omitted target defaults to the first
    /// opposing actor for attacks, or the acting player for own-side
    /// cards.
    Play {
        /// 0-based hand index.
        card: usize,
        /// 0-based index into the card's target roster.
        target: Option<usize>,
    },
    /// End the turn explicitly.
    EndTurn,
}

/// Everything an input source needs to prompt for one decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPrompt {
    /// The acting player's name.
    pub actor: String,
    /// Action points remaining.
    pub action_points: u32,
    /// The playable hand, in hand order.
    pub hand: Vec<Card>,
    /// Own-side roster names (targets for defense/draw cards).
    pub allies: Vec<String>,
    /// Opposing roster names (targets for attack cards).
    pub enemies: Vec<String>,
}

/// One actor's visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorView {
    /// Display name.
    pub name: String,
    /// Current health.
    pub health: u32,
    /// Health ceiling.
    pub max_health: u32,
    /// Current defense buffer.
    pub defense: u32,
    /// Telegraphed next action, present for enemies holding a card.
    pub intent: Option<String>,
}

/// Snapshot of the whole battle for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleView {
    /// Current round, starting at 1.
    pub round: u32,
    /// Player roster in turn order.
    pub players: Vec<ActorView>,
    /// Surviving enemy roster in turn order.
    pub enemies: Vec<ActorView>,
}

/// Render-only sink for battle state.
///
/// Called after each state-relevant mutation. Implementations must not
/// block and must not mutate engine state.
pub trait DisplaySink {
    /// Show the current battle state.
    fn render(&mut self, view: &BattleView);

    /// Show a one-line event or recoverable-error message.
    fn note(&mut self, message: &str);
}

/// Blocking source of player decisions.
///
/// Returning a recoverable [`BattleError`] (typically
/// [`BattleError::MalformedInput`]) makes the engine report it and prompt
/// again; implementations should not loop internally.
pub trait InputSource {
    /// Produce the next decision for the prompted turn.
    fn decide(&mut self, prompt: &TurnPrompt) -> Result<PlayerAction, BattleError>;
}

/// Parse one line of console input into a [`PlayerAction`].
///
/// Grammar: `end` (any case) ends the turn; `<card>` plays a card with the
/// default target; `<card> <target>` names a target. Numbers are 1-based
/// as displayed.
pub fn parse_action(line: &str) -> Result<PlayerAction, BattleError> {
    let trimmed = line.trim();

    if trimmed.eq_ignore_ascii_case("end") {
        return Ok(PlayerAction::EndTurn);
    }

    let malformed = || BattleError::MalformedInput(trimmed.to_string());

    let mut parts = trimmed.split_whitespace();
    let card = parts
        .next()
        .and_then(|p| p.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(malformed)?;

    let target = match parts.next() {
        Some(p) => Some(
            p.parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(malformed)?,
        ),
        None => None,
    };

    if parts.next().is_some() {
        return Err(malformed());
    }

    Ok(PlayerAction::Play { card, target })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_end_turn() {
        assert_eq!(parse_action("end").unwrap(), PlayerAction::EndTurn);
        assert_eq!(parse_action("END").unwrap(), PlayerAction::EndTurn);
        assert_eq!(parse_action("  End  ").unwrap(), PlayerAction::EndTurn);
    }

    #[test]
    fn test_parse_card_only() {
        assert_eq!(
            parse_action("1").unwrap(),
            PlayerAction::Play {
                card: 0,
                target: None
            }
        );
        assert_eq!(
            parse_action("3").unwrap(),
            PlayerAction::Play {
                card: 2,
                target: None
            }
        );
    }

    #[test]
    fn test_parse_card_and_target() {
        assert_eq!(
            parse_action("2 1").unwrap(),
            PlayerAction::Play {
                card: 1,
                target: Some(0)
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "play", "1.5", "one", "1 x", "0", "2 0", "1 2 3"] {
            let err = parse_action(bad).unwrap_err();
            assert!(
                matches!(err, BattleError::MalformedInput(_)),
                "{bad:?} should be malformed, got {err:?}"
            );
        }
    }

    #[test]
    fn test_view_serialization() {
        let view = BattleView {
            round: 2,
            players: vec![ActorView {
                name: "Hero".into(),
                health: 25,
                max_health: 30,
                defense: 5,
                intent: None,
            }],
            enemies: vec![ActorView {
                name: "Gremlin".into(),
                health: 8,
                max_health: 20,
                defense: 0,
                intent: Some("Deal 6 damage".into()),
            }],
        };

        let json = serde_json::to_string(&view).unwrap();
        let deserialized: BattleView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
