pub mod plugin;
pub mod resources;
pub mod sets;
pub mod systems;

pub use plugin::plugin;
pub use resources::{ClosestMob, PlayerPosition};
pub use sets::GameSet;
pub use systems::*;
