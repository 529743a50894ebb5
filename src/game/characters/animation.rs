// Walk-cycle timing and sprite frame selection

use super::state::CharacterMode;

/// Number of frames in the walk cycle
pub const WALK_FRAME_COUNT: u8 = 2;

/// Frame-counted two-step walk animation
///
/// Advances one frame every `period` ticks while running. Any tick that is not
/// running resets both the frame and the tick counter, so the cycle always
/// restarts from frame 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkCycle {
    frame: u8,
    timer: u8,
}

impl WalkCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance or reset the cycle (called once per update)
    pub fn tick(&mut self, running: bool, period: u8) {
        if !running {
            self.reset();
            return;
        }

        self.timer = self.timer.saturating_add(1);
        if self.timer >= period {
            self.timer = 0;
            self.frame = (self.frame + 1) % WALK_FRAME_COUNT;
        }
    }

    /// Return to frame 0
    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0;
    }

    /// Get the current frame index
    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Get ticks elapsed since the last frame advance
    pub fn timer(&self) -> u8 {
        self.timer
    }
}

/// Which sprite family to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpritePose {
    Idle,
    Walk,
    Jump,
    Dash,
}

impl SpritePose {
    /// Sprite family for a mode (Moore output: depends on the mode alone)
    pub fn for_mode(mode: CharacterMode) -> Self {
        match mode {
            CharacterMode::Idle => Self::Idle,
            CharacterMode::Moving => Self::Walk,
            CharacterMode::Jumping => Self::Jump,
            CharacterMode::Dashing => Self::Dash,
        }
    }
}

/// Data needed to render the current animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameData {
    pub pose: SpritePose,
    pub frame_index: u8,
    pub flip_horizontal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_advances_every_period() {
        let mut cycle = WalkCycle::new();
        for _ in 0..9 {
            cycle.tick(true, 10);
        }
        assert_eq!(cycle.frame(), 0);
        assert_eq!(cycle.timer(), 9);

        cycle.tick(true, 10);
        assert_eq!(cycle.frame(), 1);
        assert_eq!(cycle.timer(), 0);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut cycle = WalkCycle::new();
        for _ in 0..16 {
            cycle.tick(true, 8);
        }
        assert_eq!(cycle.frame(), 0);
    }

    #[test]
    fn test_not_running_resets() {
        let mut cycle = WalkCycle::new();
        for _ in 0..12 {
            cycle.tick(true, 8);
        }
        assert_eq!(cycle.frame(), 1);

        cycle.tick(false, 8);
        assert_eq!(cycle, WalkCycle::new());
    }

    #[test]
    fn test_pose_for_mode() {
        assert_eq!(SpritePose::for_mode(CharacterMode::Idle), SpritePose::Idle);
        assert_eq!(SpritePose::for_mode(CharacterMode::Moving), SpritePose::Walk);
        assert_eq!(SpritePose::for_mode(CharacterMode::Jumping), SpritePose::Jump);
        assert_eq!(SpritePose::for_mode(CharacterMode::Dashing), SpritePose::Dash);
    }
}
