pub use bevy::prelude::*;
pub use crate::config::*;
pub use crate::states::*;

// Re-export components
pub use crate::combat::components::*;
pub use crate::drops::components::*;
pub use crate::mobs::components::*;
pub use crate::movement::components::*;
pub use crate::physics::components::*;
pub use crate::player::components::*;
pub use crate::weapon::components::*;

// Re-export messages and resources
pub use crate::audio::events::*;
pub use crate::combat::events::*;
pub use crate::drops::events::*;
pub use crate::drops::resources::*;
pub use crate::game::resources::*;
pub use crate::pause::events::*;
pub use crate::physics::events::*;
pub use crate::progression::resources::*;
