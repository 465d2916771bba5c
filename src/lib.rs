pub mod error;
pub mod evolution;
pub mod history;
pub mod population;
pub mod report;
pub mod rng;
pub mod scenario;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionOptions, Evolver, EvolverBuilder, LogLevel};
pub use history::{EvolutionHistory, GenerationRecord, HistoryAttribute, RunHistory};
pub use population::{Population, ScoredIndividual};
pub use rng::RandomNumberGenerator;
pub use scenario::{FnScenario, GenerationVerdict, Scenario};
