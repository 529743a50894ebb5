// Character system
//
// This module contains everything related to the controlled character:
// - Character state record and the per-frame controller
// - Tuning constants and validation
// - Movement policies (dash or jump, one per deployment)
// - Mode state machine
// - Walk-cycle timing and sprite selection
// - Sprite bitmaps and the renderer seam

pub mod animation;
pub mod character;
pub mod config;
pub mod policy;
pub mod sprites;
pub mod state;

// Re-export commonly used types
pub use animation::{FrameData, SpritePose, WalkCycle};
pub use character::{CharacterController, CharacterState};
pub use config::{ConfigError, DashConfig, JumpConfig, Variant, BASE_DASH, BASE_JUMP};
pub use policy::MovementPolicy;
pub use sprites::{SpriteDraw, SpriteRenderer};
pub use state::{CharacterMode, ModeMachine};
