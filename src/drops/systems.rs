use bevy::prelude::*;
use rand::Rng;

use crate::combat::events::MobDeathEvent;
use crate::drops::components::{exp_up_bundle, ExpUp};
use crate::drops::resources::DropTable;

/// Rolls each dead mob's drop chance and spawns an experience item where it fell.
/// A mob kind missing from the table aborts the system with an error.
pub fn drop_exp_up_system(
    mut commands: Commands,
    mut deaths: MessageReader<MobDeathEvent>,
    table: Res<DropTable>,
) -> Result {
    let mut rng = rand::thread_rng();

    for death in deaths.read() {
        let chance = if death.drop_rate.is_nan() {
            0.0
        } else {
            death.drop_rate.clamp(0.0, 1.0) as f64
        };
        if !rng.gen_bool(chance) {
            continue;
        }
        let item = ExpUp::from_mob(&table, death.kind)?;
        debug!(
            "{:?} dropped {} exp at {:?}",
            death.kind,
            item.value(),
            death.position
        );
        commands.spawn(exp_up_bundle(item, death.position.truncate()));
    }
    Ok(())
}
