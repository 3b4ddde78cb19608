use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::physics::events::Overlap;
use crate::physics::resources::OverlapRegistry;
use crate::physics::systems::detect_overlaps;

pub fn plugin(app: &mut App) {
    app.add_message::<Overlap>()
        .init_resource::<OverlapRegistry>()
        .add_systems(Update, detect_overlaps.in_set(GameSet::Collision));
}
