// Character tuning constants and configuration validation
//
// Values are fixed per deployment. Units are pixels and frames (one frame per
// ~30 ms tick) unless noted.

use std::str::FromStr;

use glam::IVec2;

use crate::core::Bounds;
use crate::engine::input::DEFAULT_DEAD_ZONE;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid bounds: min {min:?} exceeds max {max:?}")]
    InvalidBounds { min: IVec2, max: IVec2 },

    #[error("Speed must be positive, got {0}")]
    InvalidSpeed(i32),

    #[error("Dash duration must be at least one frame")]
    ZeroDashDuration,

    #[error("Walk animation period must be at least one frame")]
    ZeroWalkPeriod,

    #[error("Jump velocity must be negative (upward), got {0}")]
    InvalidJumpVelocity(f32),

    #[error("Gravity must be positive, got {0}")]
    InvalidGravity(f32),

    #[error("Max fall velocity must be positive, got {0}")]
    InvalidFallVelocity(f32),

    #[error("Ground line {ground_y} must lie below the ceiling {min_y} and at most {max_y}")]
    GroundOutOfBounds { ground_y: i32, min_y: i32, max_y: i32 },

    #[error("Dead zone must be within 0.0..1.0, got {0}")]
    InvalidDeadZone(f32),

    #[error("Unknown controller variant: {0}")]
    UnknownVariant(String),
}

/// Which movement policy a deployment runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Top-down 8-way movement with a timed dash
    #[default]
    Dash,
    /// Side-on run with gravity and a jump
    Jump,
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dash" => Ok(Self::Dash),
            "jump" => Ok(Self::Jump),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

/// Tuning for the top-down dash controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashConfig {
    /// Rectangle the sprite centre must stay inside
    pub bounds: Bounds,
    /// Default spawn point
    pub spawn: IVec2,
    /// Pixels per frame when walking
    pub speed: i32,
    /// Pixels per frame while the dash timer runs
    pub dash_speed: i32,
    /// Frames a dash lasts
    pub dash_duration: u8,
    /// Frames between walk animation steps
    pub walk_period: u8,
}

/// The dash tuning used on the demo board
pub const BASE_DASH: DashConfig = DashConfig {
    // 8x8 sprite scaled 4x keeps a 20px margin on a 240px screen
    bounds: Bounds::new(20, 20, 220, 220),
    spawn: IVec2::new(120, 120),
    speed: 2,
    dash_speed: 5,
    dash_duration: 20,
    walk_period: 10,
};

impl Default for DashConfig {
    fn default() -> Self {
        BASE_DASH
    }
}

impl DashConfig {
    /// Check the configuration for values the update rule cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bounds(&self.bounds)?;
        validate_speed(self.speed)?;
        validate_speed(self.dash_speed)?;

        if self.dash_duration == 0 {
            return Err(ConfigError::ZeroDashDuration);
        }
        if self.walk_period == 0 {
            return Err(ConfigError::ZeroWalkPeriod);
        }

        Ok(())
    }
}

/// Tuning for the side-on jump controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpConfig {
    /// Horizontal limits and ceiling; the ground line must lie inside, below the ceiling
    pub bounds: Bounds,
    /// Vertical position of the ground line (larger y is lower on screen)
    pub ground_y: i32,
    /// Default spawn point
    pub spawn: IVec2,
    /// Pixels per frame when walking
    pub speed: i32,
    /// Initial vertical velocity of a jump (negative is upward)
    pub jump_velocity: f32,
    /// Added to vertical velocity every airborne frame
    pub gravity: f32,
    /// Terminal downward velocity
    pub max_fall_velocity: f32,
    /// Analog axis magnitude that must be exceeded to walk
    pub dead_zone: f32,
    /// Frames between walk animation steps
    pub walk_period: u8,
}

/// The jump tuning used on the demo board
pub const BASE_JUMP: JumpConfig = JumpConfig {
    bounds: Bounds::new(20, 20, 220, 200),
    ground_y: 200,
    spawn: IVec2::new(120, 200),
    speed: 2,
    jump_velocity: -8.0,
    gravity: 0.5,
    max_fall_velocity: 6.0,
    dead_zone: DEFAULT_DEAD_ZONE,
    walk_period: 8,
};

impl Default for JumpConfig {
    fn default() -> Self {
        BASE_JUMP
    }
}

impl JumpConfig {
    /// Check the configuration for values the update rule cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bounds(&self.bounds)?;
        validate_speed(self.speed)?;

        // At least one pixel of air between the ceiling and the ground
        if self.ground_y <= self.bounds.min.y || self.ground_y > self.bounds.max.y {
            return Err(ConfigError::GroundOutOfBounds {
                ground_y: self.ground_y,
                min_y: self.bounds.min.y,
                max_y: self.bounds.max.y,
            });
        }
        if self.jump_velocity >= 0.0 || !self.jump_velocity.is_finite() {
            return Err(ConfigError::InvalidJumpVelocity(self.jump_velocity));
        }
        if self.gravity <= 0.0 || !self.gravity.is_finite() {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if self.max_fall_velocity <= 0.0 || !self.max_fall_velocity.is_finite() {
            return Err(ConfigError::InvalidFallVelocity(self.max_fall_velocity));
        }
        if !(0.0..1.0).contains(&self.dead_zone) {
            return Err(ConfigError::InvalidDeadZone(self.dead_zone));
        }
        if self.walk_period == 0 {
            return Err(ConfigError::ZeroWalkPeriod);
        }

        Ok(())
    }
}

fn validate_bounds(bounds: &Bounds) -> Result<(), ConfigError> {
    if bounds.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidBounds {
            min: bounds.min,
            max: bounds.max,
        })
    }
}

fn validate_speed(speed: i32) -> Result<(), ConfigError> {
    if speed > 0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpeed(speed))
    }
}
