use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::mobs::systems::mob_chase_system;
use crate::movement::systems::apply_velocity;

/// Steers mobs toward the player, then integrates all velocities.
pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (mob_chase_system, apply_velocity)
            .chain()
            .in_set(GameSet::Movement),
    );
}
