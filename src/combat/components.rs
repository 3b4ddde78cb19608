use bevy::prelude::*;

/// Health component for entities that can take damage
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    /// Create a new Health component with full health
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage to this entity
    pub fn take_damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    /// Check if this entity is dead
    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    /// Get health as a percentage (0.0 to 1.0)
    pub fn percentage(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

/// Damage dealt by a weapon on every overlap with a mob
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Damage(pub f32);

impl Damage {
    pub fn new(amount: f32) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> f32 {
        self.0
    }
}

impl Default for Damage {
    fn default() -> Self {
        Self(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod health_tests {
        use super::*;

        #[test]
        fn test_health_new() {
            let health = Health::new(50.0);
            assert_eq!(health.current, 50.0);
            assert_eq!(health.max, 50.0);
        }

        #[test]
        fn test_health_take_damage() {
            let mut health = Health::new(100.0);
            health.take_damage(30.0);
            assert_eq!(health.current, 70.0);
        }

        #[test]
        fn test_health_take_damage_clamps_to_zero() {
            let mut health = Health::new(50.0);
            health.take_damage(100.0);
            assert_eq!(health.current, 0.0);
        }

        #[test]
        fn test_health_is_dead() {
            let mut health = Health::new(10.0);
            assert!(!health.is_dead());
            health.take_damage(10.0);
            assert!(health.is_dead());
        }

        #[test]
        fn test_health_percentage() {
            let mut half_health = Health::new(100.0);
            half_health.take_damage(50.0);
            assert_eq!(half_health.percentage(), 0.5);
        }

        #[test]
        fn test_health_percentage_zero_max() {
            let health = Health { current: 0.0, max: 0.0 };
            assert_eq!(health.percentage(), 0.0);
        }
    }

    #[test]
    fn test_damage_new() {
        let damage = Damage::new(25.0);
        assert_eq!(damage.amount(), 25.0);
    }

    #[test]
    fn test_damage_default() {
        assert_eq!(Damage::default().amount(), 10.0);
    }
}
