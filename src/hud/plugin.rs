use bevy::prelude::*;

use crate::hud::systems::*;
use crate::states::GameState;

/// Top bar, experience bar, health and the game-over screen
pub fn plugin(app: &mut App) {
    app.add_systems(Startup, setup_hud)
        .add_systems(
            Update,
            (update_top_bar_display, update_exp_bar, update_health_display),
        )
        .add_systems(OnEnter(GameState::GameOver), setup_game_over_ui)
        .add_systems(
            Update,
            game_over_input.run_if(in_state(GameState::GameOver)),
        );
}
