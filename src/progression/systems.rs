use bevy::prelude::*;

use crate::audio::events::{PlaySound, SoundId};
use crate::drops::components::ExpUp;
use crate::drops::events::PickupEvent;
use crate::pause::events::PauseRequest;
use crate::progression::resources::{Progression, ProgressionPhase, ProgressionSignal, TopBar};

/// Credits every picked-up item once and asks for a level-up pause when the
/// bar fills.
pub fn pick_exp_up(
    mut commands: Commands,
    mut pickups: MessageReader<PickupEvent>,
    mut items: Query<&mut ExpUp>,
    mut progression: ResMut<Progression>,
    mut sounds: MessageWriter<PlaySound>,
    mut pause_requests: MessageWriter<PauseRequest>,
) {
    for pickup in pickups.read() {
        let Ok(mut item) = items.get_mut(pickup.item) else {
            continue;
        };
        let Some(value) = item.collect() else {
            continue;
        };
        commands.entity(pickup.item).try_despawn();
        sounds.write(PlaySound(SoundId::ExpUp));

        if progression.increase(value) == ProgressionSignal::LevelUp {
            debug!(
                "Experience bar full ({}/{})",
                progression.current(),
                progression.max()
            );
            pause_requests.write(PauseRequest::level_up());
        }
    }
}

/// Runs when the level-up screen is left: moves to the next level and
/// re-requests the screen if carried experience already fills the new bar.
/// Does nothing unless a level-up is pending.
pub fn after_level_up(
    mut progression: ResMut<Progression>,
    mut top_bar: ResMut<TopBar>,
    mut pause_requests: MessageWriter<PauseRequest>,
) {
    if progression.phase() != ProgressionPhase::LevelingUp {
        return;
    }
    let signal = progression.level_up();
    top_bar.gain_level();
    info!(
        "Reached level {} (exp {}/{})",
        top_bar.level(),
        progression.current(),
        progression.max()
    );

    if signal == ProgressionSignal::LevelUp {
        pause_requests.write(PauseRequest::level_up());
    }
}
