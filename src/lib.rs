pub mod audio;
pub mod combat;
pub mod config;
pub mod drops;
pub mod game;
pub mod hud;
pub mod mobs;
pub mod movement;
pub mod pause;
pub mod physics;
pub mod player;
pub mod prelude;
pub mod progression;
pub mod states;
pub mod weapon;

pub use game::plugin as game_plugin;
pub use hud::plugin as hud_plugin;
