use bevy::prelude::*;

use crate::game::resources::{ClosestMob, PlayerPosition};
use crate::mobs::components::Mob;
use crate::movement::components::Velocity;

/// Points every mob's velocity at the player
pub fn mob_chase_system(
    mut mob_query: Query<(&Transform, &Mob, &mut Velocity)>,
    player_position: Res<PlayerPosition>,
) {
    let player_pos = player_position.0;

    for (transform, mob, mut velocity) in mob_query.iter_mut() {
        let mob_pos = transform.translation.truncate();
        let direction = (player_pos - mob_pos).normalize_or_zero();
        velocity.0 = direction * mob.speed;
    }
}

/// Recomputes the mob nearest to the player from scratch.
/// Linear scan over all mobs; fine for the mob counts a wave produces.
pub fn track_closest_mob(
    mob_query: Query<(Entity, &Transform), With<Mob>>,
    player_position: Res<PlayerPosition>,
    mut closest: ResMut<ClosestMob>,
) {
    let player_pos = player_position.0;
    let mut closest_mob = None;
    let mut closest_distance = f32::INFINITY;

    for (entity, transform) in mob_query.iter() {
        let distance = player_pos.distance_squared(transform.translation.truncate());
        if distance < closest_distance {
            closest_distance = distance;
            closest_mob = Some(entity);
        }
    }

    closest.set_if_neq(ClosestMob(closest_mob));
}
