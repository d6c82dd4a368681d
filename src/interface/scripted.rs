//! Headless display and input implementations.
//!
//! `ScriptedInput` feeds a battle a fixed sequence of decisions and
//! `RecordingDisplay` captures everything the engine renders, so scenario
//! tests can drive a whole battle and assert on the exact view sequence.

use std::collections::VecDeque;

use super::{BattleView, DisplaySink, InputSource, PlayerAction, TurnPrompt};
use crate::core::BattleError;

/// Input source that replays a pre-baked decision list.
///
/// When the script runs out, every further prompt ends the turn, so a
/// battle driven by an exhausted script still terminates.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    actions: VecDeque<PlayerAction>,
}

impl ScriptedInput {
    /// Create a scripted source from a decision sequence.
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Decisions not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl InputSource for ScriptedInput {
    fn decide(&mut self, _prompt: &TurnPrompt) -> Result<PlayerAction, BattleError> {
        Ok(self.actions.pop_front().unwrap_or(PlayerAction::EndTurn))
    }
}

/// Display sink that records every render and note.
#[derive(Clone, Debug, Default)]
pub struct RecordingDisplay {
    /// Every view rendered, in order.
    pub views: Vec<BattleView>,
    /// Every note emitted, in order.
    pub notes: Vec<String>,
}

impl RecordingDisplay {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent view, if any.
    #[must_use]
    pub fn last_view(&self) -> Option<&BattleView> {
        self.views.last()
    }
}

impl DisplaySink for RecordingDisplay {
    fn render(&mut self, view: &BattleView) {
        self.views.push(view.clone());
    }

    fn note(&mut self, message: &str) {
        self.notes.push(message.to_string());
    }
}

/// Display sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentDisplay;

impl DisplaySink for SilentDisplay {
    fn render(&mut self, _view: &BattleView) {}

    fn note(&mut self, _message: &str) {}
}
