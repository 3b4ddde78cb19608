use bevy::prelude::*;

/// Player position on the XY plane, refreshed after movement each frame
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerPosition(pub Vec2);

/// Mob nearest to the player this frame, if any
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosestMob(pub Option<Entity>);
