use bevy::prelude::*;

#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash, States)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
    /// Experience bar filled; the level-up overlay is shown until confirmed
    LevelingUp,
    GameOver,
}
