//! Collision rules for the playing scene.
//!
//! Each rule maps one overlapping pair to the effect it has on the world.
//! Rules hold no state: they only read the participants handed to them and
//! return the effect for the combat systems to apply.

use bevy::prelude::*;

use crate::combat::components::Damage;
use crate::combat::events::{DamageEvent, DamageSource};
use crate::drops::events::PickupEvent;
use crate::physics::components::CollisionLayer;

/// Flat damage a mob deals to the player on every overlapping tick
pub const MOB_CONTACT_DAMAGE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlapRule {
    PlayerHitByMob,
    DynamicWeaponHitsMob,
    StaticWeaponHitsMob,
    PlayerPicksExpUp,
}

impl OverlapRule {
    pub const ALL: [OverlapRule; 4] = [
        OverlapRule::PlayerHitByMob,
        OverlapRule::DynamicWeaponHitsMob,
        OverlapRule::StaticWeaponHitsMob,
        OverlapRule::PlayerPicksExpUp,
    ];

    /// The (a, b) layer pair this rule is registered against
    pub fn layers(&self) -> (CollisionLayer, CollisionLayer) {
        match self {
            Self::PlayerHitByMob => (CollisionLayer::Player, CollisionLayer::Mob),
            Self::DynamicWeaponHitsMob => (CollisionLayer::DynamicWeapon, CollisionLayer::Mob),
            Self::StaticWeaponHitsMob => (CollisionLayer::StaticWeapon, CollisionLayer::Mob),
            Self::PlayerPicksExpUp => (CollisionLayer::Player, CollisionLayer::ExpUp),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollisionEffect {
    Damage(DamageEvent),
    Pickup(PickupEvent),
}

pub fn player_hit_by_mob(player: Entity, mob: Entity) -> CollisionEffect {
    CollisionEffect::Damage(DamageEvent::new(
        player,
        MOB_CONTACT_DAMAGE,
        DamageSource::Mob(mob),
    ))
}

pub fn dynamic_weapon_hits_mob(weapon: Entity, damage: Damage, mob: Entity) -> CollisionEffect {
    CollisionEffect::Damage(DamageEvent::new(
        mob,
        damage.amount(),
        DamageSource::DynamicWeapon(weapon),
    ))
}

pub fn static_weapon_hits_mob(damage: Damage, mob: Entity) -> CollisionEffect {
    CollisionEffect::Damage(DamageEvent::new(
        mob,
        damage.amount(),
        DamageSource::StaticWeapon,
    ))
}

pub fn player_picks_exp_up(player: Entity, item: Entity) -> CollisionEffect {
    CollisionEffect::Pickup(PickupEvent { player, item })
}

/// Dispatch an overlapping pair to its rule.
/// `a_damage` is the `Damage` of `a` when it has one; weapon rules yield
/// nothing without it.
pub fn resolve(
    rule: OverlapRule,
    a: Entity,
    b: Entity,
    a_damage: Option<Damage>,
) -> Option<CollisionEffect> {
    match rule {
        OverlapRule::PlayerHitByMob => Some(player_hit_by_mob(a, b)),
        OverlapRule::DynamicWeaponHitsMob => {
            a_damage.map(|damage| dynamic_weapon_hits_mob(a, damage, b))
        }
        OverlapRule::StaticWeaponHitsMob => a_damage.map(|damage| static_weapon_hits_mob(damage, b)),
        OverlapRule::PlayerPicksExpUp => Some(player_picks_exp_up(a, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities() -> (Entity, Entity) {
        let mut world = World::new();
        (world.spawn_empty().id(), world.spawn_empty().id())
    }

    #[test]
    fn test_player_hit_by_mob_is_flat_ten() {
        let (player, mob) = entities();
        let effect = resolve(OverlapRule::PlayerHitByMob, player, mob, None);
        assert_eq!(
            effect,
            Some(CollisionEffect::Damage(DamageEvent::new(
                player,
                10.0,
                DamageSource::Mob(mob)
            )))
        );
    }

    #[test]
    fn test_player_hit_ignores_mob_damage_attribute() {
        let (player, mob) = entities();
        let effect = resolve(OverlapRule::PlayerHitByMob, player, mob, Some(Damage(99.0)));
        match effect {
            Some(CollisionEffect::Damage(event)) => assert_eq!(event.amount, MOB_CONTACT_DAMAGE),
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_dynamic_weapon_uses_its_own_damage() {
        let (weapon, mob) = entities();
        let effect = resolve(OverlapRule::DynamicWeaponHitsMob, weapon, mob, Some(Damage(37.0)));
        assert_eq!(
            effect,
            Some(CollisionEffect::Damage(DamageEvent::new(
                mob,
                37.0,
                DamageSource::DynamicWeapon(weapon)
            )))
        );
    }

    #[test]
    fn test_static_weapon_uses_its_own_damage() {
        let (weapon, mob) = entities();
        let effect = resolve(OverlapRule::StaticWeaponHitsMob, weapon, mob, Some(Damage(4.5)));
        assert_eq!(
            effect,
            Some(CollisionEffect::Damage(DamageEvent::new(
                mob,
                4.5,
                DamageSource::StaticWeapon
            )))
        );
    }

    #[test]
    fn test_weapon_rules_need_damage() {
        let (weapon, mob) = entities();
        assert_eq!(resolve(OverlapRule::DynamicWeaponHitsMob, weapon, mob, None), None);
        assert_eq!(resolve(OverlapRule::StaticWeaponHitsMob, weapon, mob, None), None);
    }

    #[test]
    fn test_player_picks_exp_up() {
        let (player, item) = entities();
        assert_eq!(
            resolve(OverlapRule::PlayerPicksExpUp, player, item, None),
            Some(CollisionEffect::Pickup(PickupEvent { player, item }))
        );
    }

    #[test]
    fn test_rule_layers() {
        assert_eq!(
            OverlapRule::PlayerHitByMob.layers(),
            (CollisionLayer::Player, CollisionLayer::Mob)
        );
        assert_eq!(
            OverlapRule::DynamicWeaponHitsMob.layers(),
            (CollisionLayer::DynamicWeapon, CollisionLayer::Mob)
        );
        assert_eq!(
            OverlapRule::StaticWeaponHitsMob.layers(),
            (CollisionLayer::StaticWeapon, CollisionLayer::Mob)
        );
        assert_eq!(
            OverlapRule::PlayerPicksExpUp.layers(),
            (CollisionLayer::Player, CollisionLayer::ExpUp)
        );
    }
}
