use bevy::prelude::*;

use crate::mobs::components::MobKind;

/// Where a hit came from. Dynamic and static weapons stay distinct so each can
/// get its own feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    /// Contact with a mob
    Mob(Entity),
    /// A moving, expiring weapon such as a beam
    DynamicWeapon(Entity),
    /// A weapon fixed in place or pattern
    StaticWeapon,
}

/// Message fired when an entity takes damage
#[derive(Message, Debug, Clone, PartialEq)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: f32,
    pub source: DamageSource,
}

impl DamageEvent {
    pub fn new(target: Entity, amount: f32, source: DamageSource) -> Self {
        Self {
            target,
            amount,
            source,
        }
    }
}

/// Message fired when a mob's health reaches zero
#[derive(Message, Debug, Clone, PartialEq)]
pub struct MobDeathEvent {
    pub mob: Entity,
    pub position: Vec3,
    pub kind: MobKind,
    /// Chance (0.0 to 1.0) that the mob leaves an experience item
    pub drop_rate: f32,
}
