use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::game::systems::update_player_position;
use crate::mobs::systems::track_closest_mob;
use crate::weapon::systems::*;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            static_weapon_follow_player.after(update_player_position),
            aim_dynamic_weapons.after(track_closest_mob),
            expire_dynamic_weapons,
        )
            .in_set(GameSet::Movement),
    );
}
