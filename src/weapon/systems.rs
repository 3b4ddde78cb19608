use bevy::prelude::*;

use crate::game::resources::{ClosestMob, PlayerPosition};
use crate::movement::components::Velocity;
use crate::weapon::components::{DynamicWeapon, Lifetime, StaticWeapon};

/// Turns dynamic weapons spawned since the last frame toward the closest mob,
/// keeping their speed. Without a target they keep their launch heading.
pub fn aim_dynamic_weapons(
    closest: Res<ClosestMob>,
    targets: Query<&Transform>,
    mut weapons: Query<(&Transform, &mut Velocity), Added<DynamicWeapon>>,
) {
    let Some(target) = closest.0 else {
        return;
    };
    let Ok(target_transform) = targets.get(target) else {
        return;
    };
    let target_pos = target_transform.translation.truncate();

    for (transform, mut velocity) in weapons.iter_mut() {
        let direction = (target_pos - transform.translation.truncate()).normalize_or_zero();
        if direction == Vec2::ZERO {
            continue;
        }
        velocity.0 = direction * velocity.0.length();
    }
}

/// Despawns dynamic weapons whose lifetime ran out
pub fn expire_dynamic_weapons(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Lifetime), With<DynamicWeapon>>,
) {
    for (entity, mut lifetime) in query.iter_mut() {
        lifetime.0.tick(time.delta());
        if lifetime.0.is_finished() {
            commands.entity(entity).try_despawn();
        }
    }
}

/// Keeps static weapons centred on the player
pub fn static_weapon_follow_player(
    player_position: Res<PlayerPosition>,
    mut query: Query<&mut Transform, With<StaticWeapon>>,
) {
    for mut transform in query.iter_mut() {
        transform.translation.x = player_position.0.x;
        transform.translation.y = player_position.0.y;
    }
}
