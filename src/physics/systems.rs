use bevy::prelude::*;

use crate::physics::components::{CollisionLayer, Footprint};
use crate::physics::events::Overlap;
use crate::physics::resources::OverlapRegistry;

/// Broad-phase overlap check for every registered rule.
/// Writes one `Overlap` per overlapping (a, b) pair, rules in registration order.
pub fn detect_overlaps(
    registry: Res<OverlapRegistry>,
    bodies: Query<(Entity, &Transform, &Footprint, &CollisionLayer)>,
    mut overlaps: MessageWriter<Overlap>,
) {
    if registry.is_empty() {
        return;
    }

    let bodies: Vec<(Entity, Vec2, Footprint, CollisionLayer)> = bodies
        .iter()
        .map(|(entity, transform, footprint, layer)| {
            (entity, transform.translation.truncate(), *footprint, *layer)
        })
        .collect();

    for registration in registry.registrations() {
        for (a, a_pos, a_footprint, _) in bodies.iter().filter(|b| b.3 == registration.a) {
            for (b, b_pos, b_footprint, _) in bodies.iter().filter(|b| b.3 == registration.b) {
                if a == b {
                    continue;
                }
                if a_footprint.overlaps(*a_pos, b_footprint, *b_pos) {
                    overlaps.write(Overlap {
                        rule: registration.rule,
                        a: *a,
                        b: *b,
                    });
                }
            }
        }
    }
}
