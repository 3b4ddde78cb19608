pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::*;
pub use events::*;
pub use plugin::plugin;
pub use resources::*;
pub use systems::*;
