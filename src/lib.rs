//! Move resolution for gen 7 battles, in the Pokemon Showdown mold.
//!
//! The main entry point is [`sim::moves::MoveActions`], which takes a
//! chosen move through announcement, the gate chain, the hit loop and
//! the aftermath, emitting showdown-protocol log lines along the way.
//! Rule bodies plug in through [`sim::events::BattleHooks`] and damage
//! numbers through [`sim::damage::DamageOracle`].

pub mod battle_logger;
pub mod data;
pub mod sim;

pub use sim::moves::MoveActions;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::battle_logger::BattleLogger;
    pub use crate::sim::battle::{BattleState, Side};
    pub use crate::sim::damage::{DamageOracle, FixedDamage, NoDamage, ScriptedDamage};
    pub use crate::sim::events::{BattleHooks, EventId, EventTarget, NoHooks};
    pub use crate::sim::moves::{ActiveMove, MoveActions};
    pub use crate::sim::outcome::Outcome;
    pub use crate::sim::pokemon::{MonRef, Pokemon};
}
