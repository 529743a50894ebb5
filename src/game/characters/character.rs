// Character state record and per-frame controller

use glam::IVec2;

use crate::engine::input::AbilityLatch;

use super::animation::{FrameData, SpritePose, WalkCycle};
use super::config::ConfigError;
use super::policy::MovementPolicy;
use super::sprites::{SpriteDraw, SpriteRenderer};
use super::state::{CharacterMode, ModeMachine};

/// Everything that changes about one on-screen character
///
/// Fixed-size and `Copy`; one record per character, owned by whoever drives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterState {
    /// Sprite centre in screen pixels
    pub position: IVec2,
    /// Signed vertical speed in pixels per frame (jump policy only, 0 when grounded)
    pub vertical_velocity: f32,
    /// Remaining dash frames (dash policy only, 0 when inactive)
    pub ability_timer: u8,
    /// Last nonzero movement direction
    pub facing: IVec2,
    modes: ModeMachine,
    walk: WalkCycle,
}

impl CharacterState {
    /// Fresh idle state at `position`
    pub fn new(position: IVec2) -> Self {
        Self {
            position,
            vertical_velocity: 0.0,
            ability_timer: 0,
            facing: IVec2::X,
            modes: ModeMachine::new(),
            walk: WalkCycle::new(),
        }
    }

    /// Get the current mode
    pub fn mode(&self) -> CharacterMode {
        self.modes.mode()
    }

    /// Get the mode of the previous frame
    pub fn previous_mode(&self) -> CharacterMode {
        self.modes.previous_mode()
    }

    /// Walk animation frame, always 0 outside `Moving`
    pub fn animation_frame(&self) -> u8 {
        self.walk.frame()
    }

    /// Update ticks since the last walk frame advance, always 0 outside `Moving`
    pub fn frame_timer(&self) -> u8 {
        self.walk.timer()
    }

    /// Sprite selection for the renderer
    pub fn current_frame(&self) -> FrameData {
        FrameData {
            pose: SpritePose::for_mode(self.mode()),
            frame_index: self.animation_frame(),
            flip_horizontal: self.facing.x < 0,
        }
    }
}

/// Drives character state with one movement policy
///
/// The policy is fixed at construction; build one controller per deployment
/// and share it across any number of characters.
#[derive(Debug, Clone)]
pub struct CharacterController<P: MovementPolicy> {
    policy: P,
}

impl<P: MovementPolicy> CharacterController<P> {
    /// Create a controller, rejecting tuning the update rule cannot honour
    pub fn new(policy: P) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Get the active policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Spawn a character at `spawn`, or at the policy's default spawn point.
    /// The position is pulled inside the allowed region.
    pub fn initialize(&self, spawn: Option<IVec2>) -> CharacterState {
        let position = spawn.unwrap_or_else(|| self.policy.spawn_position());
        CharacterState::new(self.policy.confine(position))
    }

    /// Advance one frame.
    ///
    /// `ability_pressed` must be an already debounced edge: true for exactly one
    /// frame per physical press.
    pub fn update(&self, state: &mut CharacterState, input: P::Input, ability_pressed: bool) {
        let next = self.policy.step(state, input, ability_pressed);
        state.position = self.policy.confine(state.position);

        if state.modes.advance(next) {
            log::debug!(
                "mode {} -> {} at {}",
                state.modes.previous_mode().animation_name(),
                next.animation_name(),
                state.position
            );
        }

        state.walk.tick(next.animates(), self.policy.walk_period());
    }

    /// Advance one frame, consuming the latched ability press
    pub fn update_latched(
        &self,
        state: &mut CharacterState,
        input: P::Input,
        latch: &mut AbilityLatch,
    ) {
        let pressed = latch.take();
        self.update(state, input, pressed);
    }

    /// Get the mode the renderer should show
    pub fn current_mode(&self, state: &CharacterState) -> CharacterMode {
        state.mode()
    }

    /// Get the sprite the renderer should show
    pub fn current_frame(&self, state: &CharacterState) -> FrameData {
        state.current_frame()
    }

    /// Hand the current sprite to the display collaborator
    pub fn draw<R: SpriteRenderer>(&self, state: &CharacterState, renderer: &mut R) {
        let frame = state.current_frame();
        let sprite = SpriteDraw::centred(state.position.x, state.position.y, &frame);
        renderer.draw_sprite(&sprite);
    }
}
