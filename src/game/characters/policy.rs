// Movement policies: the per-variant update rules
//
// A deployment picks exactly one policy when it builds its controller. Each
// policy moves the character for one frame and reports the mode that frame
// ends in; the controller owns mode bookkeeping and the walk cycle.

use glam::{IVec2, Vec2};

use crate::core::math::clamp;
use crate::core::Bounds;
use crate::engine::input::{axis_intent, Compass};

use super::character::CharacterState;
use super::config::{ConfigError, DashConfig, JumpConfig};
use super::state::CharacterMode;

/// Per-frame movement rule for one controller variant
pub trait MovementPolicy {
    /// What the input collaborator hands over each frame
    type Input: Copy;

    /// Check the tuning before any character is driven with it
    fn validate(&self) -> Result<(), ConfigError>;

    /// Position used when no spawn point is given
    fn spawn_position(&self) -> IVec2;

    /// Pull a position into the region this policy allows
    fn confine(&self, position: IVec2) -> IVec2;

    /// Update ticks between walk animation steps
    fn walk_period(&self) -> u8;

    /// Move the character for one frame and return the mode it ends in
    fn step(
        &self,
        state: &mut CharacterState,
        input: Self::Input,
        ability_pressed: bool,
    ) -> CharacterMode;
}

impl MovementPolicy for DashConfig {
    type Input = Compass;

    fn validate(&self) -> Result<(), ConfigError> {
        DashConfig::validate(self)
    }

    fn spawn_position(&self) -> IVec2 {
        self.spawn
    }

    fn confine(&self, position: IVec2) -> IVec2 {
        self.bounds.clamp(position)
    }

    fn walk_period(&self) -> u8 {
        self.walk_period
    }

    fn step(
        &self,
        state: &mut CharacterState,
        input: Compass,
        ability_pressed: bool,
    ) -> CharacterMode {
        let direction = input.vector();

        // A press while a dash is running is consumed and dropped
        if ability_pressed && state.ability_timer == 0 {
            state.ability_timer = self.dash_duration;
            log::trace!("dash triggered at {}", state.position);
        }

        // The triggering frame already counts toward the duration
        let speed = if state.ability_timer > 0 {
            state.ability_timer -= 1;
            self.dash_speed
        } else {
            self.speed
        };

        if direction != IVec2::ZERO {
            state.position = self.bounds.clamp(state.position.saturating_add(direction * speed));
            state.facing = direction;
        }

        if state.ability_timer > 0 {
            CharacterMode::Dashing
        } else if direction != IVec2::ZERO {
            CharacterMode::Moving
        } else {
            CharacterMode::Idle
        }
    }
}

impl JumpConfig {
    /// Region the character may occupy: ceiling down to the ground line
    fn allowed_region(&self) -> Bounds {
        Bounds::new(
            self.bounds.min.x,
            self.bounds.min.y,
            self.bounds.max.x,
            self.ground_y,
        )
    }
}

impl MovementPolicy for JumpConfig {
    type Input = Vec2;

    fn validate(&self) -> Result<(), ConfigError> {
        JumpConfig::validate(self)
    }

    fn spawn_position(&self) -> IVec2 {
        self.spawn
    }

    fn confine(&self, position: IVec2) -> IVec2 {
        self.allowed_region().clamp(position)
    }

    fn walk_period(&self) -> u8 {
        self.walk_period
    }

    fn step(
        &self,
        state: &mut CharacterState,
        input: Vec2,
        ability_pressed: bool,
    ) -> CharacterMode {
        let intent = axis_intent(input.x, self.dead_zone);

        if intent != 0 {
            state.position.x = self
                .bounds
                .clamp_x(state.position.x.saturating_add(intent * self.speed));
            state.facing = IVec2::new(intent, 0);
        }

        // Sampled before the jump nudge so the launch frame does not integrate
        let on_ground = state.position.y >= self.ground_y;

        if on_ground {
            state.position.y = self.ground_y;
            if ability_pressed {
                state.vertical_velocity = self.jump_velocity;
                state.position.y = self.ground_y - 1;
                log::trace!("jump from x={}", state.position.x);
            }
        } else {
            state.vertical_velocity =
                (state.vertical_velocity + self.gravity).min(self.max_fall_velocity);
            state.position.y = state
                .position
                .y
                .saturating_add(state.vertical_velocity.floor() as i32);

            if state.position.y >= self.ground_y {
                state.position.y = self.ground_y;
                state.vertical_velocity = 0.0;
                log::trace!("landed at x={}", state.position.x);
            } else if state.position.y < self.bounds.min.y {
                // Ceiling: stop rising, keep falling speed
                state.position.y = self.bounds.min.y;
                state.vertical_velocity = state.vertical_velocity.max(0.0);
            }
        }

        state.position.y = clamp(state.position.y, self.bounds.min.y, self.ground_y);

        if state.position.y < self.ground_y {
            CharacterMode::Jumping
        } else if intent != 0 {
            CharacterMode::Moving
        } else {
            CharacterMode::Idle
        }
    }
}
