use bevy::prelude::*;

/// Root node of the pause or level-up overlay
#[derive(Component)]
pub struct PauseOverlay;

#[derive(Component)]
pub struct ContinueButton;
