use bevy::prelude::*;

use crate::config::{GameConfig, OverflowPolicy};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProgressionPhase {
    #[default]
    Playing,
    /// Bar is full and the level-up has been signalled but not yet confirmed
    LevelingUp,
}

/// Outcome of feeding experience into the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionSignal {
    None,
    LevelUp,
}

/// Experience bar of the current level.
/// `max` is always at least 1; a level-up is signalled once per fill.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Progression {
    current: u32,
    max: u32,
    phase: ProgressionPhase,
    overflow: OverflowPolicy,
    threshold_step: u32,
}

impl FromWorld for Progression {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<GameConfig>()
            .copied()
            .unwrap_or_default();
        Self::from_config(&config)
    }
}

impl Progression {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            current: 0,
            max: config.max_exp.max(1),
            phase: ProgressionPhase::Playing,
            overflow: config.overflow,
            threshold_step: config.threshold_step,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn phase(&self) -> ProgressionPhase {
        self.phase
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Fill ratio for the HUD bar, capped at 1.0
    pub fn ratio(&self) -> f32 {
        (self.current as f32 / self.max as f32).min(1.0)
    }

    /// Adds collected experience. Signals `LevelUp` only on the transition
    /// into the leveling-up phase; experience gained after that accumulates
    /// silently until `level_up` is called.
    pub fn increase(&mut self, amount: u32) -> ProgressionSignal {
        self.current = self.current.saturating_add(amount);
        if self.phase == ProgressionPhase::Playing && self.is_full() {
            self.phase = ProgressionPhase::LevelingUp;
            return ProgressionSignal::LevelUp;
        }
        ProgressionSignal::None
    }

    /// Confirms a pending level-up: applies the overflow policy and raises the
    /// threshold. Returns `LevelUp` again when the carried experience still
    /// fills the new bar.
    pub fn level_up(&mut self) -> ProgressionSignal {
        if self.phase != ProgressionPhase::LevelingUp {
            return ProgressionSignal::None;
        }

        self.current = match self.overflow {
            OverflowPolicy::Reset => 0,
            OverflowPolicy::CarryOver => self.current.saturating_sub(self.max),
        };
        self.max = self.max.saturating_add(self.threshold_step);
        self.phase = ProgressionPhase::Playing;

        if self.is_full() {
            self.phase = ProgressionPhase::LevelingUp;
            return ProgressionSignal::LevelUp;
        }
        ProgressionSignal::None
    }
}

/// Level and kill counter shown at the top of the screen
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct TopBar {
    level: u32,
    mobs_killed: u32,
}

impl Default for TopBar {
    fn default() -> Self {
        Self {
            level: 1,
            mobs_killed: 0,
        }
    }
}

impl TopBar {
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn mobs_killed(&self) -> u32 {
        self.mobs_killed
    }

    pub fn gain_level(&mut self) {
        self.level += 1;
    }

    pub fn gain_mobs_killed(&mut self) {
        self.mobs_killed += 1;
    }
}
