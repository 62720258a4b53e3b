pub mod actions;
pub mod active;
pub mod mega;
pub mod zmove;

mod hit_steps;
mod move_hit;

pub use actions::MoveActions;
pub use active::{ActiveMove, HitEffect, SecondaryEffect, ZKind};
pub use mega::{can_mega_evo, can_ultra_burst, prime_mega_candidates};
pub use zmove::{can_z_move, get_active_z_move, get_z_move, ZMoveOption};
