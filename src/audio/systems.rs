use bevy::prelude::*;
use bevy_kira_audio::{AudioChannel, AudioControl};

use crate::audio::events::PlaySound;
use crate::audio::plugin::SfxChannel;

/// Forwards queued sound requests to the effects channel.
/// Requests are dropped when audio is not set up (headless runs, tests).
pub fn play_sounds(
    mut requests: MessageReader<PlaySound>,
    asset_server: Option<Res<AssetServer>>,
    channel: Option<Res<AudioChannel<SfxChannel>>>,
) {
    let (Some(asset_server), Some(channel)) = (asset_server, channel) else {
        requests.clear();
        return;
    };

    for PlaySound(sound) in requests.read() {
        channel.play(asset_server.load(sound.path()));
    }
}
