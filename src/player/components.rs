use bevy::prelude::*;

use crate::combat::components::Health;
use crate::movement::components::Velocity;
use crate::physics::components::{CollisionLayer, Footprint};

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Player {
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self { speed: 200.0 }
    }
}

/// Which animation the player sprite should be running
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayerAnimation {
    #[default]
    Idle,
    Run,
}

/// Arrow keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionKeys {
    pub fn from_input(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            left: keys.pressed(KeyCode::ArrowLeft),
            right: keys.pressed(KeyCode::ArrowRight),
            up: keys.pressed(KeyCode::ArrowUp),
            down: keys.pressed(KeyCode::ArrowDown),
        }
    }
}

/// Screen-space movement direction, each axis in {-1, 0, 1} with up negative.
/// Left wins over right and up wins over down when both are held.
pub fn movement_vector(keys: DirectionKeys) -> IVec2 {
    let x = if keys.left {
        -1
    } else if keys.right {
        1
    } else {
        0
    };
    let y = if keys.up {
        -1
    } else if keys.down {
        1
    } else {
        0
    };
    IVec2::new(x, y)
}

pub const PLAYER_FOOTPRINT: f32 = 24.0;
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

pub fn player_bundle(position: Vec2) -> impl Bundle {
    (
        Sprite::from_color(Color::srgb(0.0, 1.0, 0.0), Vec2::splat(PLAYER_FOOTPRINT)),
        Transform::from_translation(position.extend(1.0)),
        Player::default(),
        PlayerAnimation::default(),
        Health::new(PLAYER_MAX_HEALTH),
        Velocity::default(),
        Footprint::square(PLAYER_FOOTPRINT),
        CollisionLayer::Player,
    )
}
