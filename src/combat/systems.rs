use bevy::prelude::*;

use crate::audio::events::{PlaySound, SoundId};
use crate::combat::components::{Damage, Health};
use crate::combat::events::{DamageEvent, DamageSource, MobDeathEvent};
use crate::combat::rules::{self, CollisionEffect};
use crate::drops::events::PickupEvent;
use crate::mobs::components::Mob;
use crate::physics::events::Overlap;
use crate::player::components::Player;
use crate::progression::resources::TopBar;
use crate::states::GameState;

/// Runs every overlap of this tick through its collision rule and forwards the
/// resulting effect as a damage or pickup message.
pub fn resolve_overlaps(
    mut overlaps: MessageReader<Overlap>,
    weapons: Query<&Damage>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut pickup_events: MessageWriter<PickupEvent>,
) {
    for overlap in overlaps.read() {
        let a_damage = weapons.get(overlap.a).ok().copied();
        match rules::resolve(overlap.rule, overlap.a, overlap.b, a_damage) {
            Some(CollisionEffect::Damage(event)) => {
                damage_events.write(event);
            }
            Some(CollisionEffect::Pickup(event)) => {
                pickup_events.write(event);
            }
            None => warn!(
                "Overlap {:?} between {:?} and {:?} has no damage to apply",
                overlap.rule, overlap.a, overlap.b
            ),
        }
    }
}

/// Applies damage in message order. A target that is already dead (killed
/// earlier this tick) or gone is skipped, so a mob only dies once.
pub fn apply_damage_system(
    mut messages: MessageReader<DamageEvent>,
    mut query: Query<&mut Health>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for event in messages.read() {
        let Ok(mut health) = query.get_mut(event.target) else {
            continue;
        };
        if health.is_dead() {
            continue;
        }
        health.take_damage(event.amount);

        let sound = match event.source {
            DamageSource::Mob(_) => SoundId::Hurt,
            DamageSource::DynamicWeapon(_) => SoundId::HitMob,
            DamageSource::StaticWeapon => SoundId::Scratch,
        };
        sounds.write(PlaySound(sound));
    }
}

/// Despawns dead mobs, counts the kill and fires `MobDeathEvent` for drops
pub fn check_mob_death_system(
    mut commands: Commands,
    query: Query<(Entity, &Health, &Transform, &Mob)>,
    mut death_events: MessageWriter<MobDeathEvent>,
    mut top_bar: ResMut<TopBar>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for (entity, health, transform, mob) in query.iter() {
        if !health.is_dead() {
            continue;
        }
        debug!("{:?} ({}) defeated", entity, mob.kind.texture_key());

        death_events.write(MobDeathEvent {
            mob: entity,
            position: transform.translation,
            kind: mob.kind,
            drop_rate: mob.drop_rate,
        });
        top_bar.gain_mobs_killed();
        sounds.write(PlaySound(SoundId::Explosion));
        commands.entity(entity).try_despawn();
    }
}

/// Ends the run once the player's health is gone
pub fn check_player_death_system(
    query: Query<&Health, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut sounds: MessageWriter<PlaySound>,
) {
    let Ok(health) = query.single() else {
        return;
    };
    if health.is_dead() {
        debug!("Player defeated, game over");
        sounds.write(PlaySound(SoundId::GameOver));
        next_state.set(GameState::GameOver);
    }
}
