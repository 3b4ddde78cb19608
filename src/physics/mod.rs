pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::{CollisionLayer, Footprint};
pub use events::Overlap;
pub use plugin::plugin;
pub use resources::{OverlapRegistration, OverlapRegistry};
pub use systems::detect_overlaps;
