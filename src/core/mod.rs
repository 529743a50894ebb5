// Core utilities shared by engine and game code

pub mod math;

pub use math::Bounds;
