//! # deck-battle
//!
//! A turn-based card battle engine: players and enemies alternate phases,
//! playing cards that deal damage, grant temporary defense, or draw more
//! cards, until one side is eliminated.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every shuffle and AI choice flows through a single
//!    injectable [`BattleRng`], so scenarios replay exactly under a fixed
//!    seed.
//!
//! 2. **Headless Core**: Rendering and input live behind the
//!    [`DisplaySink`] / [`InputSource`] traits. The engine can be driven by
//!    a terminal, a test script, or nothing at all.
//!
//! 3. **Data Over Hierarchy**: Card behavior is a tagged union
//!    ([`CardKind`]), actor variants are capability records
//!    ([`ActorProfile`]) - no trait objects for cards, no subclass trees.
//!
//! ## Modules
//!
//! - `core`: RNG handle, error taxonomy, side identification
//! - `cards`: Card values, kinds, and the catalog registry
//! - `actor`: Combat entities, pile lifecycle, profiles, relics
//! - `battle`: Turn-order state machine, intent selection, termination
//! - `interface`: Display/input seams, console and scripted implementations

pub mod core;
pub mod cards;
pub mod actor;
pub mod battle;
pub mod interface;

// Re-export commonly used types
pub use crate::core::{BattleError, BattleRng, BattleRngState, Side};

pub use crate::cards::{Card, CardCatalog, CardId, CardKind, TargetSide};

pub use crate::actor::{
    Actor, ActorProfile, CardPiles, DamageReport, Relic, RelicBoon, SpecialMove,
};

pub use crate::battle::{Battle, BattleOutcome, Intent};

pub use crate::interface::{
    console::{ConsoleDisplay, ConsoleInput},
    scripted::{RecordingDisplay, ScriptedInput, SilentDisplay},
    ActorView, BattleView, DisplaySink, InputSource, PlayerAction, TurnPrompt,
};
