use bevy::prelude::*;
use clap::{Parser, ValueEnum};

/// Default experience needed for the first level-up
pub const DEFAULT_MAX_EXP: u32 = 50;
/// Default increase of the experience threshold on each level-up
pub const DEFAULT_THRESHOLD_STEP: u32 = 50;

/// What happens to experience above the threshold when a level-up is confirmed
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Discard the remainder; the bar starts empty on the new level
    #[default]
    Reset,
    /// Keep the remainder as progress toward the new level
    CarryOver,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "mob-survivor", about = "Top-down survival game")]
pub struct Cli {
    /// Experience required for the first level-up
    #[arg(long, default_value_t = DEFAULT_MAX_EXP, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_exp: u32,

    /// Amount the threshold grows by on each level-up
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_STEP)]
    pub threshold_step: u32,

    /// Overflow handling when the bar fills past its threshold
    #[arg(long, value_enum, default_value_t = OverflowPolicy::Reset)]
    pub overflow: OverflowPolicy,
}

/// Game tuning resolved from the command line
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_exp: u32,
    pub threshold_step: u32,
    pub overflow: OverflowPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_exp: DEFAULT_MAX_EXP,
            threshold_step: DEFAULT_THRESHOLD_STEP,
            overflow: OverflowPolicy::Reset,
        }
    }
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        Self {
            max_exp: cli.max_exp,
            threshold_step: cli.threshold_step,
            overflow: cli.overflow,
        }
    }
}
