// Game-side modules

pub mod characters;
