// Engine modules: input adapters

pub mod input;
