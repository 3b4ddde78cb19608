use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::pause::events::PauseRequest;
use crate::pause::systems::*;
use crate::progression::systems::pick_exp_up;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_message::<PauseRequest>()
        .add_systems(Update, pause_key_input.in_set(GameSet::Input))
        .add_systems(
            Update,
            handle_pause_requests
                .after(pick_exp_up)
                .in_set(GameSet::Progression),
        )
        .add_systems(OnEnter(GameState::Paused), setup_pause_overlay)
        .add_systems(OnEnter(GameState::LevelingUp), setup_level_up_overlay)
        .add_systems(
            Update,
            resume_from_pause.run_if(in_state(GameState::Paused)),
        )
        .add_systems(
            Update,
            confirm_level_up.run_if(in_state(GameState::LevelingUp)),
        )
        .add_systems(
            Update,
            continue_button_interactions
                .run_if(in_state(GameState::Paused).or(in_state(GameState::LevelingUp))),
        )
        .add_systems(OnExit(GameState::Paused), cleanup_pause_overlay)
        .add_systems(OnExit(GameState::LevelingUp), cleanup_pause_overlay);
}
