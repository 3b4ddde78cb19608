use bevy::prelude::*;

use crate::movement::components::Velocity;

/// Moves every entity with a velocity on the XY plane; Z (draw order) is kept.
pub fn apply_velocity(mut query: Query<(&mut Transform, &Velocity)>, time: Res<Time>) {
    for (mut transform, velocity) in query.iter_mut() {
        let movement = velocity.value() * time.delta_secs();
        transform.translation += movement.extend(0.0);
    }
}
