use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::audio::events::{PlaySound, SoundId};
use crate::combat::components::Health;
use crate::pause::components::*;
use crate::pause::events::{PauseReason, PauseRequest};
use crate::player::components::Player;
use crate::states::GameState;

const BUTTON_GREEN: Color = Color::srgb(0.2, 0.6, 0.2);
const BUTTON_HOVER: Color = Color::srgb(0.4, 0.4, 0.4);

/// ESC during play asks for a pause
pub fn pause_key_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut pause_requests: MessageWriter<PauseRequest>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        pause_requests.write(PauseRequest::pause());
    }
}

/// Turns this frame's pause requests into a single state transition.
/// A dead player or a pending game over drops the requests: game over wins.
pub fn handle_pause_requests(
    mut pause_requests: MessageReader<PauseRequest>,
    mut next_state: ResMut<NextState<GameState>>,
    players: Query<&Health, With<Player>>,
    mut sounds: MessageWriter<PlaySound>,
) {
    let mut requested = None;
    for request in pause_requests.read() {
        if request.reason == PauseReason::LevelUp || requested.is_none() {
            requested = Some(request.reason);
        }
    }

    let game_over = matches!(*next_state, NextState::Pending(GameState::GameOver))
        || players.iter().any(|health| health.is_dead());
    if game_over {
        if let Some(reason) = requested {
            debug!("Dropping {:?} request, the run is over", reason);
        }
        return;
    }

    match requested {
        Some(PauseReason::LevelUp) => {
            debug!("Pausing for level-up");
            sounds.write(PlaySound(SoundId::NextLevel));
            next_state.set(GameState::LevelingUp);
        }
        Some(PauseReason::Pause) => {
            debug!("Pausing");
            sounds.write(PlaySound(SoundId::PauseIn));
            next_state.set(GameState::Paused);
        }
        None => {}
    }
}

/// ESC while paused resumes play
pub fn resume_from_pause(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut sounds: MessageWriter<PlaySound>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        sounds.write(PlaySound(SoundId::PauseOut));
        next_state.set(GameState::Playing);
    }
}

/// Enter or Space accepts the level-up and resumes play
pub fn confirm_level_up(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut sounds: MessageWriter<PlaySound>,
) {
    if keyboard_input.any_just_pressed([KeyCode::Enter, KeyCode::Space]) {
        sounds.write(PlaySound(SoundId::PauseOut));
        next_state.set(GameState::Playing);
    }
}

pub fn continue_button_interactions(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<ContinueButton>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for (interaction, mut background_color) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                sounds.write(PlaySound(SoundId::PauseOut));
                next_state.set(GameState::Playing);
            }
            Interaction::Hovered => {
                *background_color = BackgroundColor(BUTTON_HOVER);
            }
            Interaction::None => {
                *background_color = BackgroundColor(BUTTON_GREEN);
            }
        }
    }
}

pub fn setup_pause_overlay(mut commands: Commands) {
    spawn_overlay(&mut commands, "PAUSED", "Press ESC to resume");
}

pub fn setup_level_up_overlay(mut commands: Commands) {
    spawn_overlay(&mut commands, "LEVEL UP!", "Press Enter to continue");
}

fn spawn_overlay(commands: &mut Commands, title: &str, hint: &str) {
    commands
        .spawn((
            PauseOverlay,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 60.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new(hint),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));
            spawn_continue_button(parent);
        });
}

fn spawn_continue_button(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn((
            Button,
            ContinueButton,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_GREEN),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new("Continue"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn cleanup_pause_overlay(mut commands: Commands, query: Query<Entity, With<PauseOverlay>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
