//! Battle state and the move resolution pipeline that runs against it.

pub mod battle;
pub mod damage;
pub mod events;
pub mod moves;
pub mod outcome;
pub mod pokemon;
pub mod rng;
pub mod stats;
