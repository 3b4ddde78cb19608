pub mod components;
pub mod systems;

pub use components::{mob_bundle, Mob, MobKind};
pub use systems::{mob_chase_system, track_closest_mob};
