use bevy::prelude::*;
use bevy_kira_audio::{AudioApp, AudioPlugin as KiraAudioPlugin};

use crate::audio::events::PlaySound;
use crate::audio::systems::play_sounds;

/// Audio channel for one-shot sound effects
#[derive(Resource)]
pub struct SfxChannel;

/// Registers sound requests. Playback happens in `PostUpdate` so every
/// request of the frame, including ones from state transitions, is heard.
pub fn plugin(app: &mut App) {
    app.add_message::<PlaySound>()
        .add_systems(PostUpdate, play_sounds);
}

/// Kira backend and the effects channel. Needs a real audio device, so it is
/// only added by the binary.
pub fn output_plugin(app: &mut App) {
    app.add_plugins(KiraAudioPlugin).add_audio_channel::<SfxChannel>();
}
