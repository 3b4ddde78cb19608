use bevy::prelude::*;

use crate::audio::events::{PlaySound, SoundId};
use crate::combat::rules::OverlapRule;
use crate::game::resources::PlayerPosition;
use crate::mobs::components::{mob_bundle, Mob, MobKind};
use crate::physics::resources::OverlapRegistry;
use crate::player::components::{player_bundle, Player};
use crate::weapon::components::{aura_bundle, beam_bundle};

/// Where the first mob appears relative to the player
pub const INITIAL_MOB_OFFSET: Vec2 = Vec2::new(300.0, 200.0);
pub const INITIAL_MOB_HP: f32 = 10.0;

/// Registers every collision rule of the scene once
pub fn register_overlap_rules(mut registry: ResMut<OverlapRegistry>) {
    for rule in OverlapRule::ALL {
        let (a, b) = rule.layers();
        registry.register(a, b, rule);
    }
    debug!("Registered {} overlap rules", registry.len());
}

pub fn setup_scene(mut commands: Commands, mut sounds: MessageWriter<PlaySound>) {
    commands.spawn(Camera2d);
    commands.spawn(player_bundle(Vec2::ZERO));

    commands.spawn(mob_bundle(
        Mob::new(MobKind::Mob2),
        INITIAL_MOB_HP,
        INITIAL_MOB_OFFSET,
    ));
    sounds.write(PlaySound(SoundId::Growl));

    commands.spawn(aura_bundle(Vec2::ZERO));
    // Launched rightward; aimed at the closest mob on its first frame
    commands.spawn(beam_bundle(Vec2::ZERO, Vec2::X));
    sounds.write(PlaySound(SoundId::Beam));
}

pub fn update_player_position(
    player_query: Query<&Transform, With<Player>>,
    mut player_position: ResMut<PlayerPosition>,
) {
    if let Ok(transform) = player_query.single() {
        player_position.set_if_neq(PlayerPosition(transform.translation.truncate()));
    }
}

pub fn camera_follow_player(
    player_position: Res<PlayerPosition>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    for mut camera_transform in camera_query.iter_mut() {
        camera_transform.translation.x = player_position.0.x;
        camera_transform.translation.y = player_position.0.y;
    }
}
