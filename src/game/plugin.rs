use bevy::prelude::*;

use crate::game::resources::{ClosestMob, PlayerPosition};
use crate::game::sets::GameSet;
use crate::game::systems::*;
use crate::mobs::systems::track_closest_mob;
use crate::movement::systems::apply_velocity;
use crate::states::GameState;
use crate::{combat, drops, movement, pause, physics, player, progression, weapon};

/// The playing scene: orders the frame, registers collision rules and wires
/// every gameplay plugin together.
pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Movement,
            GameSet::Collision,
            GameSet::Combat,
            GameSet::Progression,
        )
            .chain()
            .run_if(in_state(GameState::Playing)),
    )
    .init_resource::<PlayerPosition>()
    .init_resource::<ClosestMob>()
    .add_plugins((
        physics::plugin,
        combat::plugin,
        movement::plugin,
        player::plugin,
        weapon::plugin,
        drops::plugin,
        progression::plugin,
        pause::plugin,
    ))
    .add_systems(Startup, (register_overlap_rules, setup_scene))
    .add_systems(
        Update,
        (
            update_player_position.after(apply_velocity),
            camera_follow_player.after(update_player_position),
            track_closest_mob.after(update_player_position),
        )
            .in_set(GameSet::Movement),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::events::PlaySound;
    use crate::combat::components::Health;
    use crate::drops::components::{exp_up_bundle, ExpUp, ExpVariant};
    use crate::player::components::Player;
    use crate::progression::resources::{Progression, TopBar};

    fn setup_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            bevy::time::TimePlugin,
            bevy::state::app::StatesPlugin,
            bevy::input::InputPlugin,
        ));
        app.init_state::<GameState>();
        app.add_message::<PlaySound>();
        app.add_plugins(plugin);
        app
    }

    fn player(app: &mut App) -> Entity {
        app.world_mut()
            .query_filtered::<Entity, With<Player>>()
            .single(app.world())
            .unwrap()
    }

    fn state(app: &App) -> GameState {
        *app.world().resource::<State<GameState>>().get()
    }

    #[test]
    fn test_startup_builds_the_scene() {
        let mut app = setup_app();
        app.update();

        assert_eq!(
            app.world()
                .resource::<crate::physics::resources::OverlapRegistry>()
                .len(),
            4
        );
        player(&mut app);
        assert_eq!(state(&app), GameState::Playing);
    }

    #[test]
    fn test_filling_the_bar_pauses_for_level_up() {
        let mut app = setup_app();
        app.update();

        let item = app
            .world_mut()
            .spawn(exp_up_bundle(ExpUp::new(50, ExpVariant::Green), Vec2::ZERO))
            .id();
        app.update();
        app.update();

        assert!(!app.world().entities().contains(item));
        assert_eq!(state(&app), GameState::LevelingUp);
        assert_eq!(app.world().resource::<Progression>().current(), 50);
    }

    #[test]
    fn test_gameplay_halts_while_leveling_up() {
        let mut app = setup_app();
        app.update();
        app.world_mut()
            .spawn(exp_up_bundle(ExpUp::new(50, ExpVariant::Green), Vec2::ZERO));
        app.update();
        app.update();
        assert_eq!(state(&app), GameState::LevelingUp);

        let player = player(&mut app);
        let before = app.world().get::<Health>(player).unwrap().current;
        app.world_mut().spawn(crate::mobs::components::mob_bundle(
            crate::mobs::components::Mob::new(crate::mobs::components::MobKind::Mob1),
            10.0,
            Vec2::ZERO,
        ));
        app.update();
        app.update();

        assert_eq!(app.world().get::<Health>(player).unwrap().current, before);
    }

    #[test]
    fn test_fatal_hit_and_full_bar_in_one_frame_ends_the_run() {
        let mut app = setup_app();
        app.update();

        let player = player(&mut app);
        app.world_mut()
            .get_mut::<Health>(player)
            .unwrap()
            .take_damage(90.0);
        app.world_mut().spawn(crate::mobs::components::mob_bundle(
            crate::mobs::components::Mob::new(crate::mobs::components::MobKind::Mob1),
            10.0,
            Vec2::ZERO,
        ));
        app.world_mut()
            .spawn(exp_up_bundle(ExpUp::new(50, ExpVariant::Green), Vec2::ZERO));
        app.update();
        app.update();

        assert_eq!(state(&app), GameState::GameOver);
        assert_eq!(app.world().resource::<TopBar>().level(), 1);
    }

    #[test]
    fn test_leaving_level_up_advances_level() {
        let mut app = setup_app();
        app.update();
        app.world_mut()
            .spawn(exp_up_bundle(ExpUp::new(50, ExpVariant::Green), Vec2::ZERO));
        app.update();
        app.update();

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Playing);
        app.update();

        assert_eq!(state(&app), GameState::Playing);
        assert_eq!(app.world().resource::<TopBar>().level(), 2);
        let progression = app.world().resource::<Progression>();
        assert_eq!(progression.current(), 0);
        assert_eq!(progression.max(), 100);
    }
}
