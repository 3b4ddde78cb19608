use bevy::prelude::*;

/// Sound effects the playing scene can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Beam,
    Scratch,
    HitMob,
    Growl,
    Explosion,
    ExpUp,
    Hurt,
    NextLevel,
    GameOver,
    GameClear,
    PauseIn,
    PauseOut,
}

impl SoundId {
    pub fn path(&self) -> &'static str {
        match self {
            SoundId::Beam => "sounds/beam.ogg",
            SoundId::Scratch => "sounds/scratch.ogg",
            SoundId::HitMob => "sounds/hit_mob.ogg",
            SoundId::Growl => "sounds/growl.ogg",
            SoundId::Explosion => "sounds/explosion.ogg",
            SoundId::ExpUp => "sounds/exp_up.ogg",
            SoundId::Hurt => "sounds/hurt.ogg",
            SoundId::NextLevel => "sounds/next_level.ogg",
            SoundId::GameOver => "sounds/game_over.ogg",
            SoundId::GameClear => "sounds/game_clear.ogg",
            SoundId::PauseIn => "sounds/pause_in.ogg",
            SoundId::PauseOut => "sounds/pause_out.ogg",
        }
    }
}

/// Fire-and-forget request to play a sound effect
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySound(pub SoundId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_paths_are_unique() {
        use std::collections::HashSet;
        let all = [
            SoundId::Beam,
            SoundId::Scratch,
            SoundId::HitMob,
            SoundId::Growl,
            SoundId::Explosion,
            SoundId::ExpUp,
            SoundId::Hurt,
            SoundId::NextLevel,
            SoundId::GameOver,
            SoundId::GameClear,
            SoundId::PauseIn,
            SoundId::PauseOut,
        ];
        let paths: HashSet<_> = all.iter().map(|s| s.path()).collect();
        assert_eq!(paths.len(), all.len());
    }

    #[test]
    fn test_sound_paths_live_under_sounds() {
        assert!(SoundId::ExpUp.path().starts_with("sounds/"));
    }
}
