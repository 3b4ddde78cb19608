use bevy::prelude::*;

use crate::combat::components::Damage;
use crate::movement::components::Velocity;
use crate::physics::components::{CollisionLayer, Footprint};

/// A weapon that travels on its own and expires when its `Lifetime` runs out
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct DynamicWeapon;

/// A weapon that stays pinned to the player
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct StaticWeapon;

#[derive(Component, Debug, Clone)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    pub fn from_seconds(seconds: f32) -> Self {
        Self(Timer::from_seconds(seconds, TimerMode::Once))
    }
}

pub const BEAM_DAMAGE: f32 = 10.0;
pub const BEAM_SPEED: f32 = 400.0;
pub const BEAM_LIFETIME_SECS: f32 = 3.0;
pub const BEAM_SIZE: Vec2 = Vec2::new(40.0, 8.0);

pub const AURA_DAMAGE: f32 = 5.0;
pub const AURA_SIZE: f32 = 64.0;

/// Beam travelling along `direction` from `position`
pub fn beam_bundle(position: Vec2, direction: Vec2) -> impl Bundle {
    (
        Sprite::from_color(Color::srgb(0.4, 0.9, 1.0), BEAM_SIZE),
        Transform::from_translation(position.extend(2.0)),
        DynamicWeapon,
        Damage::new(BEAM_DAMAGE),
        Velocity::new(direction.normalize_or_zero() * BEAM_SPEED),
        Lifetime::from_seconds(BEAM_LIFETIME_SECS),
        Footprint::new(BEAM_SIZE.x, BEAM_SIZE.y),
        CollisionLayer::DynamicWeapon,
    )
}

/// Aura centred on the player
pub fn aura_bundle(position: Vec2) -> impl Bundle {
    (
        Sprite::from_color(Color::srgba(1.0, 0.8, 0.2, 0.3), Vec2::splat(AURA_SIZE)),
        Transform::from_translation(position.extend(0.8)),
        StaticWeapon,
        Damage::new(AURA_DAMAGE),
        Footprint::square(AURA_SIZE),
        CollisionLayer::StaticWeapon,
    )
}
