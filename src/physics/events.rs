use bevy::prelude::*;

use crate::combat::rules::OverlapRule;

/// Message fired once per tick for each overlapping pair of a registered rule.
/// `a` belongs to the registration's first layer, `b` to its second.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    pub rule: OverlapRule,
    pub a: Entity,
    pub b: Entity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_message_can_be_registered() {
        let mut app = App::new();
        app.add_message::<Overlap>();
        let a = app.world_mut().spawn_empty().id();
        let b = app.world_mut().spawn_empty().id();
        app.world_mut().write_message(Overlap {
            rule: OverlapRule::PlayerHitByMob,
            a,
            b,
        });
        app.update();
    }
}
