use bevy::prelude::*;

use crate::combat::components::Health;
use crate::hud::components::*;
use crate::player::components::Player;
use crate::progression::resources::{Progression, TopBar};

pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            // Experience bar across the top edge
            parent
                .spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        top: Val::Px(0.0),
                        left: Val::Px(0.0),
                        width: Val::Percent(100.0),
                        height: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.2, 0.2, 0.2, 0.8)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.4, 0.8, 1.0)),
                        ExpBarFill,
                    ));
                });

            parent
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(20.0),
                    left: Val::Px(20.0),
                    flex_direction: FlexDirection::Column,
                    ..default()
                })
                .with_children(|column| {
                    column.spawn((
                        Text::new("Lv. 1"),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 1.0, 0.0)),
                        LevelDisplay,
                    ));
                    column.spawn((
                        Text::new("Kills: 0"),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        KillsDisplay,
                    ));
                    column.spawn((
                        Text::new("Health: 100"),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        Node {
                            margin: UiRect::top(Val::Px(10.0)),
                            ..default()
                        },
                        HealthDisplay,
                    ));
                    column
                        .spawn((
                            Node {
                                width: Val::Px(200.0),
                                height: Val::Px(16.0),
                                margin: UiRect::top(Val::Px(5.0)),
                                ..default()
                            },
                            BackgroundColor(Color::srgb(0.3, 0.3, 0.3)),
                        ))
                        .with_children(|bar| {
                            bar.spawn((
                                Node {
                                    width: Val::Percent(100.0),
                                    height: Val::Percent(100.0),
                                    ..default()
                                },
                                BackgroundColor(Color::srgb(0.0, 1.0, 0.0)),
                                HealthBar,
                            ));
                        });
                });
        });
}

pub fn update_top_bar_display(
    top_bar: Res<TopBar>,
    mut level_query: Query<&mut Text, (With<LevelDisplay>, Without<KillsDisplay>)>,
    mut kills_query: Query<&mut Text, (With<KillsDisplay>, Without<LevelDisplay>)>,
) {
    if !top_bar.is_changed() {
        return;
    }
    for mut text in level_query.iter_mut() {
        **text = format!("Lv. {}", top_bar.level());
    }
    for mut text in kills_query.iter_mut() {
        **text = format!("Kills: {}", top_bar.mobs_killed());
    }
}

pub fn update_exp_bar(
    progression: Res<Progression>,
    mut bar_query: Query<&mut Node, With<ExpBarFill>>,
) {
    if !progression.is_changed() {
        return;
    }
    for mut node in bar_query.iter_mut() {
        node.width = Val::Percent(progression.ratio() * 100.0);
    }
}

pub fn update_health_display(
    player_query: Query<&Health, (With<Player>, Changed<Health>)>,
    mut health_text_query: Query<&mut Text, With<HealthDisplay>>,
    mut health_bar_query: Query<(&mut Node, &mut BackgroundColor), With<HealthBar>>,
) {
    let Ok(health) = player_query.single() else {
        return;
    };

    for mut text in &mut health_text_query {
        **text = format!("Health: {:.0}", health.current.max(0.0));
    }

    let bar_color = if health.current > 60.0 {
        Color::srgb(0.0, 1.0, 0.0)
    } else if health.current > 30.0 {
        Color::srgb(1.0, 1.0, 0.0)
    } else {
        Color::srgb(1.0, 0.0, 0.0)
    };
    for (mut node, mut background_color) in &mut health_bar_query {
        node.width = Val::Percent(health.percentage() * 100.0);
        *background_color = BackgroundColor(bar_color);
    }
}

pub fn setup_game_over_ui(mut commands: Commands, top_bar: Res<TopBar>) {
    commands
        .spawn((
            GameOverScreen,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Game Over"),
                TextFont {
                    font_size: 60.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new(format!(
                    "Level {} - {} mobs defeated",
                    top_bar.level(),
                    top_bar.mobs_killed()
                )),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(50.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("Press ESC to quit"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
            ));
        });
}

pub fn game_over_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        app_exit.write(AppExit::Success);
    }
}
