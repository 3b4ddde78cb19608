use bevy::prelude::*;

use crate::combat::events::{DamageEvent, MobDeathEvent};
use crate::combat::systems::*;
use crate::game::sets::GameSet;

/// Combat plugin: overlap rules, damage application and death handling
pub fn plugin(app: &mut App) {
    app.add_message::<DamageEvent>()
        .add_message::<MobDeathEvent>()
        .add_systems(
            Update,
            (
                resolve_overlaps,
                apply_damage_system,
                check_mob_death_system,
                check_player_death_system,
            )
                .chain()
                .in_set(GameSet::Combat),
        );
}
