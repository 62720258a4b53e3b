//! Static game data, trimmed to what move resolution reads.

pub mod items;
pub mod moves;
pub mod species;
pub mod types;
pub mod zmoves;
