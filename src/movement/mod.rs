pub mod components;
pub mod plugin;
pub mod systems;

pub use components::Velocity;
pub use plugin::plugin;
pub use systems::apply_velocity;
