use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    /// Player asked to pause
    Pause,
    /// Experience bar filled
    LevelUp,
}

/// Asks the scene to stop gameplay. Turned into a state transition at the end
/// of the frame; a level-up request wins over a plain pause.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseRequest {
    pub reason: PauseReason,
}

impl PauseRequest {
    pub fn pause() -> Self {
        Self {
            reason: PauseReason::Pause,
        }
    }

    pub fn level_up() -> Self {
        Self {
            reason: PauseReason::LevelUp,
        }
    }
}
