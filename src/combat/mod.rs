pub mod components;
pub mod events;
pub mod plugin;
pub mod rules;
pub mod systems;

pub use components::{Damage, Health};
pub use events::{DamageEvent, DamageSource, MobDeathEvent};
pub use plugin::plugin;
pub use rules::{CollisionEffect, OverlapRule, MOB_CONTACT_DAMAGE};
pub use systems::{
    apply_damage_system, check_mob_death_system, check_player_death_system, resolve_overlaps,
};
