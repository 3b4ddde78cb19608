use bevy::prelude::*;

/// System sets for explicit ordering of one playing-scene frame.
/// Chained in declaration order and gated on `GameState::Playing`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Keyboard polling - movement vector, pause key
    Input,
    /// Velocity integration, mob chase, camera follow, closest mob
    Movement,
    /// Overlap detection for the registered rules
    Collision,
    /// Rule dispatch, damage application, death checks
    Combat,
    /// Experience drops, pickups, level-up and pause transitions
    Progression,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::app::App;

    #[test]
    fn test_game_set_derives_required_traits() {
        let input = GameSet::Input;
        let input_clone = input.clone();

        assert_eq!(input, input_clone);
        assert_ne!(GameSet::Collision, GameSet::Combat);

        let debug_str = format!("{:?}", GameSet::Progression);
        assert!(debug_str.contains("Progression"));

        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(GameSet::Input);
        set.insert(GameSet::Movement);
        set.insert(GameSet::Collision);
        set.insert(GameSet::Combat);
        set.insert(GameSet::Progression);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_game_set_ordering_chain() {
        let mut app = App::new();

        fn input_system() {}
        fn collision_system() {}
        fn progression_system() {}

        app.configure_sets(
            Update,
            (
                GameSet::Input,
                GameSet::Movement,
                GameSet::Collision,
                GameSet::Combat,
                GameSet::Progression,
            )
                .chain(),
        );

        app.add_systems(Update, input_system.in_set(GameSet::Input));
        app.add_systems(Update, collision_system.in_set(GameSet::Collision));
        app.add_systems(Update, progression_system.in_set(GameSet::Progression));

        app.update();
    }
}
