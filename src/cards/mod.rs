//! Card values and the catalog registry.
//!
//! A [`Card`] is an immutable definition of a playable effect: a cost, some
//! display text, and one of three behaviors (attack, defense, draw). Piles
//! hold cards by value; playing one is the actor's and battle's job, never
//! the card's.

pub mod card;
pub mod catalog;

pub use card::{Card, CardId, CardKind, TargetSide};
pub use catalog::CardCatalog;
