use bevy::prelude::*;

/// The player touched an experience item this tick
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct PickupEvent {
    pub player: Entity,
    pub item: Entity,
}
