use bevy::prelude::*;

#[derive(Component)]
pub struct HealthDisplay;

#[derive(Component)]
pub struct HealthBar;

/// "Lv. n" text of the top bar
#[derive(Component)]
pub struct LevelDisplay;

#[derive(Component)]
pub struct KillsDisplay;

/// Fill node of the experience bar; its width tracks `Progression::ratio`
#[derive(Component)]
pub struct ExpBarFill;

#[derive(Component)]
pub struct GameOverScreen;
