use std::collections::HashMap;

use bevy::prelude::*;
use thiserror::Error;

use crate::drops::components::ExpVariant;
use crate::mobs::components::MobKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DropTableError {
    #[error("no drop property for mob kind {0:?}")]
    UnknownMobKind(MobKind),
}

/// What a mob kind leaves behind when it drops experience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropProperty {
    pub exp: u32,
    pub variant: ExpVariant,
}

/// Experience value and look per mob kind
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DropTable {
    entries: HashMap<MobKind, DropProperty>,
}

impl Default for DropTable {
    fn default() -> Self {
        Self::empty()
            .with(MobKind::Mob1, 10, ExpVariant::Red)
            .with(MobKind::Mob2, 20, ExpVariant::Blue)
            .with(MobKind::Mob3, 30, ExpVariant::Yellow)
            .with(MobKind::Mob4, 40, ExpVariant::Green)
    }
}

impl DropTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with(mut self, kind: MobKind, exp: u32, variant: ExpVariant) -> Self {
        self.entries.insert(kind, DropProperty { exp, variant });
        self
    }

    pub fn get(&self, kind: MobKind) -> Result<&DropProperty, DropTableError> {
        self.entries
            .get(&kind)
            .ok_or(DropTableError::UnknownMobKind(kind))
    }
}
