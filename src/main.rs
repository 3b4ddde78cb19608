use bevy::prelude::*;
use clap::Parser;
use mob_survivor::{
    audio,
    config::{Cli, GameConfig},
    game_plugin, hud_plugin,
    states::GameState,
};

fn main() {
    let config = GameConfig::from(Cli::parse());

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(audio::output_plugin)
        .insert_resource(config)
        .init_state::<GameState>()
        .add_plugins((audio::plugin, game_plugin, hud_plugin))
        .run();
}
