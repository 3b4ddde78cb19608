use bevy::prelude::*;

use crate::combat::rules::OverlapRule;
use crate::physics::components::CollisionLayer;

/// One (group A, group B, handler) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapRegistration {
    pub a: CollisionLayer,
    pub b: CollisionLayer,
    pub rule: OverlapRule,
}

/// Registered overlap rules, evaluated in registration order every tick
#[derive(Resource, Debug, Default, Clone)]
pub struct OverlapRegistry {
    registrations: Vec<OverlapRegistration>,
}

impl OverlapRegistry {
    pub fn register(&mut self, a: CollisionLayer, b: CollisionLayer, rule: OverlapRule) {
        if self.is_registered(rule) {
            warn!("Overlap rule {:?} registered twice, ignoring", rule);
            return;
        }
        self.registrations.push(OverlapRegistration { a, b, rule });
    }

    pub fn is_registered(&self, rule: OverlapRule) -> bool {
        self.registrations.iter().any(|r| r.rule == rule)
    }

    pub fn registrations(&self) -> &[OverlapRegistration] {
        &self.registrations
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_starts_empty() {
        let registry = OverlapRegistry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_keeps_order() {
        let mut registry = OverlapRegistry::default();
        registry.register(CollisionLayer::Player, CollisionLayer::Mob, OverlapRule::PlayerHitByMob);
        registry.register(
            CollisionLayer::Player,
            CollisionLayer::ExpUp,
            OverlapRule::PlayerPicksExpUp,
        );

        let rules: Vec<_> = registry.registrations().iter().map(|r| r.rule).collect();
        assert_eq!(rules, vec![OverlapRule::PlayerHitByMob, OverlapRule::PlayerPicksExpUp]);
    }

    #[test]
    fn test_register_same_rule_twice_is_ignored() {
        let mut registry = OverlapRegistry::default();
        registry.register(CollisionLayer::Player, CollisionLayer::Mob, OverlapRule::PlayerHitByMob);
        registry.register(CollisionLayer::Player, CollisionLayer::Mob, OverlapRule::PlayerHitByMob);
        assert_eq!(registry.len(), 1);
    }
}
