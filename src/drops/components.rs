use bevy::prelude::*;

use crate::drops::resources::{DropTable, DropTableError};
use crate::mobs::components::MobKind;
use crate::physics::components::{CollisionLayer, Footprint};

/// Collision box of an experience item, independent of its sprite scale
pub const EXP_UP_FOOTPRINT: f32 = 20.0;
pub const EXP_UP_SPRITE_SCALE: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpVariant {
    Red,
    Blue,
    Yellow,
    Green,
}

impl ExpVariant {
    pub fn color(&self) -> Color {
        match self {
            ExpVariant::Red => Color::srgb(1.0, 0.2, 0.2),
            ExpVariant::Blue => Color::srgb(0.2, 0.4, 1.0),
            ExpVariant::Yellow => Color::srgb(1.0, 0.9, 0.2),
            ExpVariant::Green => Color::srgb(0.2, 0.9, 0.3),
        }
    }
}

/// Experience item left by a defeated mob.
/// The value is fixed at creation; once collected the item is inert.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ExpUp {
    value: u32,
    variant: ExpVariant,
    active: bool,
}

impl ExpUp {
    pub fn new(value: u32, variant: ExpVariant) -> Self {
        Self {
            value,
            variant,
            active: true,
        }
    }

    pub fn from_mob(table: &DropTable, kind: MobKind) -> Result<Self, DropTableError> {
        let property = table.get(kind)?;
        Ok(Self::new(property.exp, property.variant))
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn variant(&self) -> ExpVariant {
        self.variant
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Hands out the value the first time only
    pub fn collect(&mut self) -> Option<u32> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(self.value)
    }
}

pub fn exp_up_bundle(item: ExpUp, position: Vec2) -> impl Bundle {
    (
        Sprite::from_color(item.variant().color(), Vec2::splat(EXP_UP_FOOTPRINT)),
        Transform::from_translation(position.extend(0.3))
            .with_scale(Vec3::splat(EXP_UP_SPRITE_SCALE)),
        Footprint::square(EXP_UP_FOOTPRINT),
        CollisionLayer::ExpUp,
        item,
    )
}
