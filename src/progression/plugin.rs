use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::progression::resources::{Progression, TopBar};
use crate::progression::systems::{after_level_up, pick_exp_up};
use crate::states::GameState;

/// Experience bar and level counter. `Progression` is built from
/// `GameConfig` when one has been inserted.
pub fn plugin(app: &mut App) {
    app.init_resource::<Progression>()
        .init_resource::<TopBar>()
        .add_systems(Update, pick_exp_up.in_set(GameSet::Progression))
        .add_systems(OnExit(GameState::LevelingUp), after_level_up);
}
