pub mod events;
pub mod plugin;
pub mod systems;

pub use events::{PlaySound, SoundId};
pub use plugin::{output_plugin, plugin, SfxChannel};
