use bevy::prelude::*;

use crate::player::components::{movement_vector, DirectionKeys, Player, PlayerAnimation};
use crate::movement::components::Velocity;

/// Turns the arrow keys into the player's velocity and animation state.
/// The animation only changes on idle/moving edges so a running loop is not
/// restarted every frame.
pub fn player_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut player_query: Query<(&Player, &mut Velocity, &mut PlayerAnimation)>,
) {
    let keys = DirectionKeys::from_input(&keyboard_input);
    let direction = movement_vector(keys);
    // Screen space has y pointing down, the world has y pointing up
    let world_direction = Vec2::new(direction.x as f32, -direction.y as f32);

    for (player, mut velocity, mut animation) in player_query.iter_mut() {
        velocity.0 = world_direction * player.speed;

        let next = if velocity.is_moving() {
            PlayerAnimation::Run
        } else {
            PlayerAnimation::Idle
        };
        animation.set_if_neq(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_app() -> (App, Entity) {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_systems(Update, player_input_system);
        let player = app
            .world_mut()
            .spawn((Player::default(), Velocity::default(), PlayerAnimation::default()))
            .id();
        (app, player)
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    fn release(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    #[test]
    fn test_left_and_right_moves_left() {
        let (mut app, player) = setup_app();
        press(&mut app, KeyCode::ArrowLeft);
        press(&mut app, KeyCode::ArrowRight);

        app.update();

        let velocity = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(velocity.0, Vec2::new(-200.0, 0.0));
    }

    #[test]
    fn test_up_moves_toward_positive_world_y() {
        let (mut app, player) = setup_app();
        press(&mut app, KeyCode::ArrowUp);
        press(&mut app, KeyCode::ArrowDown);

        app.update();

        let velocity = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(velocity.0, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn test_animation_switches_on_edges() {
        let (mut app, player) = setup_app();

        app.update();
        assert_eq!(
            *app.world().get::<PlayerAnimation>(player).unwrap(),
            PlayerAnimation::Idle
        );

        press(&mut app, KeyCode::ArrowDown);
        app.update();
        assert_eq!(
            *app.world().get::<PlayerAnimation>(player).unwrap(),
            PlayerAnimation::Run
        );

        release(&mut app, KeyCode::ArrowDown);
        app.update();
        assert_eq!(
            *app.world().get::<PlayerAnimation>(player).unwrap(),
            PlayerAnimation::Idle
        );
    }

    #[test]
    fn test_animation_not_touched_while_state_holds() {
        let (mut app, player) = setup_app();
        press(&mut app, KeyCode::ArrowRight);
        app.update();

        let first_change = app
            .world()
            .entity(player)
            .get_ref::<PlayerAnimation>()
            .unwrap()
            .last_changed();

        app.update();
        app.update();

        let last_change = app
            .world()
            .entity(player)
            .get_ref::<PlayerAnimation>()
            .unwrap()
            .last_changed();
        assert_eq!(first_change, last_change);
    }

    #[test]
    fn test_opposite_keys_still_count_as_moving() {
        let (mut app, player) = setup_app();
        press(&mut app, KeyCode::ArrowLeft);
        press(&mut app, KeyCode::ArrowRight);

        app.update();

        assert_eq!(
            *app.world().get::<PlayerAnimation>(player).unwrap(),
            PlayerAnimation::Run
        );
    }
}
