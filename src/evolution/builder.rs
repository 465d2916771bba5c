use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
    scenario::Scenario,
};

use super::{EvolutionOptions, Evolver};

/// Assembles an [`Evolver`] step by step.
///
/// Options default to [`EvolutionOptions::default`] and the random source
/// to an entropy-seeded generator. A scenario is required.
///
/// ```rust
/// use evolver::{evolution::EvolverBuilder, scenario::FnScenario};
///
/// let scenario = FnScenario::builder()
///     .initial_population(|_run| Ok(vec![1u8, 2, 3]))
///     .fitness(|x: &u8, _run, _generation| Ok(f64::from(*x)))
///     .build()
///     .unwrap();
///
/// let mut evolver = EvolverBuilder::new()
///     .with_scenario(scenario)
///     .with_seed(42)
///     .build()
///     .unwrap();
/// let history = evolver.start(2, 5).unwrap();
/// assert_eq!(history.len(), 2);
/// ```
pub struct EvolverBuilder<S: Scenario> {
    options: Option<EvolutionOptions>,
    scenario: Option<S>,
    rng: Option<RandomNumberGenerator>,
}

impl<S: Scenario> EvolverBuilder<S> {
    pub fn new() -> Self {
        Self {
            options: None,
            scenario: None,
            rng: None,
        }
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_scenario(mut self, scenario: S) -> Self {
        self.scenario = Some(scenario);
        self
    }

    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Shorthand for a seeded random source.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(RandomNumberGenerator::from_seed(seed))
    }

    pub fn build(self) -> Result<Evolver<S>> {
        let scenario = self
            .scenario
            .ok_or_else(|| GeneticError::Configuration("Scenario not specified".to_string()))?;

        let options = self.options.unwrap_or_default();
        options.validate()?;

        Ok(Evolver::with_rng(
            options,
            scenario,
            self.rng.unwrap_or_default(),
        ))
    }
}

impl<S: Scenario> Default for EvolverBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
