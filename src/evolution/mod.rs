pub mod builder;
pub mod generation;
pub mod launcher;
pub mod options;

pub use builder::EvolverBuilder;
pub use generation::advance_generation;
pub use launcher::{Evolver, DEFAULT_GENERATIONS, DEFAULT_RUNS};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
