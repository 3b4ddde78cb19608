pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{movement_vector, player_bundle, DirectionKeys, Player, PlayerAnimation};
pub use plugin::plugin;
pub use systems::player_input_system;
