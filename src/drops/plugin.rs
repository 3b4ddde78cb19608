use bevy::prelude::*;

use crate::drops::events::PickupEvent;
use crate::drops::resources::DropTable;
use crate::drops::systems::drop_exp_up_system;
use crate::game::sets::GameSet;

pub fn plugin(app: &mut App) {
    app.add_message::<PickupEvent>()
        .init_resource::<DropTable>()
        .add_systems(Update, drop_exp_up_system.in_set(GameSet::Progression));
}
