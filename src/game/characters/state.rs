// Character mode state machine

/// Discrete behaviour mode of a character
///
/// The jump policy only ever produces `Idle`, `Moving` and `Jumping`; the dash
/// policy only ever produces `Idle`, `Moving` and `Dashing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterMode {
    /// Standing still
    #[default]
    Idle,
    /// Walking in some direction
    Moving,
    /// Airborne after a jump
    Jumping,
    /// Temporary high-speed movement
    Dashing,
}

impl CharacterMode {
    /// Check if the walk cycle should be running
    pub fn animates(&self) -> bool {
        matches!(self, Self::Moving)
    }

    /// Get the animation name for this mode
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Moving => "walk",
            Self::Jumping => "jump",
            Self::Dashing => "dash",
        }
    }
}

/// Tracks the current and previous mode of one character
///
/// `previous` always holds the mode of the last frame, even when it equals the
/// current mode, so observers can detect edges. Transition rules live in the
/// movement policies, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeMachine {
    current: CharacterMode,
    previous: CharacterMode,
}

impl ModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current mode
    pub fn mode(&self) -> CharacterMode {
        self.current
    }

    /// Get the mode of the previous frame
    pub fn previous_mode(&self) -> CharacterMode {
        self.previous
    }

    /// Check if the mode changed on the last frame
    pub fn just_changed(&self) -> bool {
        self.current != self.previous
    }

    /// Record this frame's mode. Returns true on a transition.
    pub fn advance(&mut self, next: CharacterMode) -> bool {
        self.previous = self.current;
        self.current = next;
        self.just_changed()
    }
}
