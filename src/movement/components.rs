use bevy::prelude::*;

/// Current movement vector of an entity in world units per second.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn new(velocity: Vec2) -> Self {
        Self(velocity)
    }

    pub fn value(&self) -> Vec2 {
        self.0
    }

    pub fn is_moving(&self) -> bool {
        self.0 != Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_creation() {
        let velocity = Velocity::new(Vec2::new(100.0, 50.0));
        assert_eq!(velocity.value(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_velocity_default_is_still() {
        let velocity = Velocity::default();
        assert_eq!(velocity.value(), Vec2::ZERO);
        assert!(!velocity.is_moving());
    }
}
