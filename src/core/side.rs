//! Side identification: which roster an actor fights on.

use serde::{Deserialize, Serialize};

/// The two rosters of a battle.
///
/// Targeting rules are side-relative: attack cards aim at the opposing
/// side, defense and draw cards at the acting side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player-controlled roster.
    Players,
    /// The AI-controlled roster.
    Enemies,
}

impl Side {
    /// The side across the table.
    #[must_use]
    pub const fn opposing(self) -> Side {
        match self {
            Side::Players => Side::Enemies,
            Side::Enemies => Side::Players,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Players => write!(f, "players"),
            Side::Enemies => write!(f, "enemies"),
        }
    }
}
