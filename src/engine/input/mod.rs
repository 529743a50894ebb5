// Input adapters for the character controller
//
// The joystick driver and button interrupt live outside this crate. These
// modules turn what they hand over into the plain values the controller eats.
//
// ## Architecture
//
// - `compass`: 9-way joystick directions and their movement vectors
// - `axis`: dead-zone handling for analog stick axes
// - `latch`: debounced, set-once-until-cleared ability button flag
//
// ## Usage Example
//
// ```rust
// use engine::input::{AbilityLatch, Compass};
//
// let mut latch = AbilityLatch::default();
//
// // From the button handler
// latch.press(now_ms);
//
// // Once per frame
// let direction = Compass::from_raw(raw_code);
// controller.update_latched(&mut state, direction, &mut latch);
// ```

pub mod axis;
pub mod compass;
pub mod latch;

// Re-export commonly used types
pub use axis::{axis_intent, DEFAULT_DEAD_ZONE};
pub use compass::Compass;
pub use latch::AbilityLatch;
