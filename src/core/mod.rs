//! Core engine types: RNG handle, error taxonomy, side identification.
//!
//! This module contains the building blocks every other module leans on.
//! Nothing here knows about cards, actors, or phases.

pub mod error;
pub mod rng;
pub mod side;

pub use error::BattleError;
pub use rng::{BattleRng, BattleRngState};
pub use side::Side;
