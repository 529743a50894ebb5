// Per-frame character controller for an 8x8 pixel sprite
//
// One character is a `CharacterState` record driven by a `CharacterController`
// built around either the dash or the jump movement policy. Input devices,
// frame timing and pixel drawing stay with the caller.

pub mod core;
pub mod engine;
pub mod game;
