use bevy::prelude::*;

use crate::combat::components::Health;
use crate::movement::components::Velocity;
use crate::physics::components::{CollisionLayer, Footprint};

/// Mob type tag; selects sprite and experience drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobKind {
    Mob1,
    Mob2,
    Mob3,
    Mob4,
}

impl MobKind {
    pub const ALL: [MobKind; 4] = [MobKind::Mob1, MobKind::Mob2, MobKind::Mob3, MobKind::Mob4];

    /// Asset key the mob's sprite was loaded under
    pub fn texture_key(&self) -> &'static str {
        match self {
            MobKind::Mob1 => "mob1",
            MobKind::Mob2 => "mob2",
            MobKind::Mob3 => "mob3",
            MobKind::Mob4 => "mob4",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            MobKind::Mob1 => Color::srgb(0.8, 0.3, 0.3),
            MobKind::Mob2 => Color::srgb(0.5, 0.3, 0.8),
            MobKind::Mob3 => Color::srgb(0.8, 0.7, 0.2),
            MobKind::Mob4 => Color::srgb(0.2, 0.6, 0.3),
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Mob {
    pub kind: MobKind,
    pub speed: f32,
    /// Chance (0.0 to 1.0) of leaving an experience item on death
    pub drop_rate: f32,
}

impl Mob {
    pub const DEFAULT_SPEED: f32 = 50.0;
    pub const DEFAULT_DROP_RATE: f32 = 0.3;

    pub fn new(kind: MobKind) -> Self {
        Self {
            kind,
            speed: Self::DEFAULT_SPEED,
            drop_rate: Self::DEFAULT_DROP_RATE,
        }
    }
}

pub const MOB_FOOTPRINT: f32 = 24.0;

/// Everything a mob needs to chase the player and be hit
pub fn mob_bundle(mob: Mob, hp: f32, position: Vec2) -> impl Bundle {
    (
        Sprite::from_color(mob.kind.color(), Vec2::splat(MOB_FOOTPRINT)),
        Transform::from_translation(position.extend(0.5)),
        Health::new(hp),
        Velocity::default(),
        Footprint::square(MOB_FOOTPRINT),
        CollisionLayer::Mob,
        mob,
    )
}
