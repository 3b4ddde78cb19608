use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::player::systems::player_input_system;

pub fn plugin(app: &mut App) {
    app.add_systems(Update, player_input_system.in_set(GameSet::Input));
}
