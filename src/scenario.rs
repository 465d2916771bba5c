//! # Scenario
//!
//! A scenario supplies everything domain specific about an evolution: how the
//! first population of a run looks, how fit an individual is, how two parents
//! combine, how a child mutates and what happens after each generation. The
//! engine calls into the scenario but never looks inside an individual.
//!
//! `initial_population` and `fitness` are required. Crossover, mutation and
//! the generation hook are optional and fall back to:
//!
//! - no crossover: a child is a verbatim copy of one randomly picked parent,
//! - no mutation: children pass through unchanged,
//! - no generation hook: the run lasts the requested number of generations.
//!
//! Run numbers passed to callbacks start at 1.
//!
//! ## Example
//!
//! ```rust
//! use evolver::{
//!     error::Result,
//!     population::Population,
//!     rng::RandomNumberGenerator,
//!     scenario::{GenerationVerdict, Scenario},
//! };
//!
//! struct CountUp;
//!
//! impl Scenario for CountUp {
//!     type Individual = u32;
//!
//!     fn initial_population(&mut self, _run: usize) -> Result<Vec<u32>> {
//!         Ok(vec![0, 1, 2])
//!     }
//!
//!     fn fitness(&self, individual: &u32, _run: usize, _generation: usize) -> Result<f64> {
//!         Ok(f64::from(*individual))
//!     }
//!
//!     fn mutate(
//!         &mut self,
//!         individual: u32,
//!         _run: usize,
//!         _generation: usize,
//!         rng: &mut RandomNumberGenerator,
//!     ) -> Result<u32> {
//!         Ok(individual + rng.gen_range(0..=1))
//!     }
//!
//!     fn on_generation(
//!         &mut self,
//!         population: &Population<u32>,
//!         _run: usize,
//!         _generation: usize,
//!     ) -> Result<GenerationVerdict> {
//!         let best = population.fittest().and_then(|member| member.fitness);
//!         Ok(if best >= Some(10.0) {
//!             GenerationVerdict::Stop
//!         } else {
//!             GenerationVerdict::Defer
//!         })
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::{
    error::{GeneticError, Result},
    population::Population,
    rng::RandomNumberGenerator,
};

/// What the generation hook wants the run loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationVerdict {
    /// Produce another generation, even past the requested count.
    Continue,
    /// End the run now.
    Stop,
    /// No preference: continue while fewer generations than requested have run.
    #[default]
    Defer,
}

impl GenerationVerdict {
    /// Collapses the verdict into a continue decision, using `default` for `Defer`.
    pub fn resolve(self, default: bool) -> bool {
        match self {
            GenerationVerdict::Continue => true,
            GenerationVerdict::Stop => false,
            GenerationVerdict::Defer => default,
        }
    }
}

impl From<Option<bool>> for GenerationVerdict {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => GenerationVerdict::Continue,
            Some(false) => GenerationVerdict::Stop,
            None => GenerationVerdict::Defer,
        }
    }
}

/// The domain-specific side of an evolution.
pub trait Scenario {
    /// The representation of one candidate solution.
    type Individual: Clone + Debug;

    /// Produces the seed population of a run. Called once per run, before
    /// the first generation.
    fn initial_population(&mut self, run: usize) -> Result<Vec<Self::Individual>>;

    /// Scores an individual; larger is fitter. Called exactly once per child
    /// per generation and expected to depend only on its inputs.
    fn fitness(&self, individual: &Self::Individual, run: usize, generation: usize) -> Result<f64>;

    /// Whether [`Scenario::crossover`] should be used. When `false` the engine
    /// only picks one parent per child and copies it.
    fn has_crossover(&self) -> bool {
        false
    }

    /// Combines two parents into a child. Parents may be the same individual.
    fn crossover(
        &mut self,
        parent_a: &Self::Individual,
        _parent_b: &Self::Individual,
        _run: usize,
        _generation: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Self::Individual> {
        Ok(parent_a.clone())
    }

    /// Perturbs a child. Not required to change anything.
    fn mutate(
        &mut self,
        individual: Self::Individual,
        _run: usize,
        _generation: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Self::Individual> {
        Ok(individual)
    }

    /// Called after each generation's survivors are final and recorded.
    /// `generation` counts the generations completed so far in this run.
    fn on_generation(
        &mut self,
        _population: &Population<Self::Individual>,
        _run: usize,
        _generation: usize,
    ) -> Result<GenerationVerdict> {
        Ok(GenerationVerdict::Defer)
    }
}

type InitialPopulationFn<I> = Box<dyn FnMut(usize) -> Result<Vec<I>>>;
type FitnessFn<I> = Box<dyn Fn(&I, usize, usize) -> Result<f64>>;
type CrossoverFn<I> = Box<dyn FnMut(&I, &I, usize, usize, &mut RandomNumberGenerator) -> Result<I>>;
type MutateFn<I> = Box<dyn FnMut(I, usize, usize, &mut RandomNumberGenerator) -> Result<I>>;
type OnGenerationFn<I> = Box<dyn FnMut(&Population<I>, usize, usize) -> Result<GenerationVerdict>>;

/// A [`Scenario`] assembled from closures.
///
/// ```rust
/// use evolver::scenario::FnScenario;
///
/// let scenario = FnScenario::builder()
///     .initial_population(|_run| Ok(vec![1.0_f64, 2.0, 3.0]))
///     .fitness(|x: &f64, _run, _generation| Ok(-(x - 2.5).abs()))
///     .crossover(|a: &f64, b: &f64, _run, _generation, _rng| Ok((a + b) / 2.0))
///     .build()
///     .unwrap();
/// ```
pub struct FnScenario<I> {
    initial_population: InitialPopulationFn<I>,
    fitness: FitnessFn<I>,
    crossover: Option<CrossoverFn<I>>,
    mutate: Option<MutateFn<I>>,
    on_generation: Option<OnGenerationFn<I>>,
}

impl<I> FnScenario<I> {
    pub fn builder() -> FnScenarioBuilder<I> {
        FnScenarioBuilder::default()
    }
}

impl<I: Clone + Debug> Scenario for FnScenario<I> {
    type Individual = I;

    fn initial_population(&mut self, run: usize) -> Result<Vec<I>> {
        (self.initial_population)(run)
    }

    fn fitness(&self, individual: &I, run: usize, generation: usize) -> Result<f64> {
        (self.fitness)(individual, run, generation)
    }

    fn has_crossover(&self) -> bool {
        self.crossover.is_some()
    }

    fn crossover(
        &mut self,
        parent_a: &I,
        parent_b: &I,
        run: usize,
        generation: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<I> {
        match self.crossover.as_mut() {
            Some(crossover) => crossover(parent_a, parent_b, run, generation, rng),
            None => Ok(parent_a.clone()),
        }
    }

    fn mutate(
        &mut self,
        individual: I,
        run: usize,
        generation: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<I> {
        match self.mutate.as_mut() {
            Some(mutate) => mutate(individual, run, generation, rng),
            None => Ok(individual),
        }
    }

    fn on_generation(
        &mut self,
        population: &Population<I>,
        run: usize,
        generation: usize,
    ) -> Result<GenerationVerdict> {
        match self.on_generation.as_mut() {
            Some(on_generation) => on_generation(population, run, generation),
            None => Ok(GenerationVerdict::Defer),
        }
    }
}

/// Registers the callbacks of a [`FnScenario`].
pub struct FnScenarioBuilder<I> {
    initial_population: Option<InitialPopulationFn<I>>,
    fitness: Option<FitnessFn<I>>,
    crossover: Option<CrossoverFn<I>>,
    mutate: Option<MutateFn<I>>,
    on_generation: Option<OnGenerationFn<I>>,
}

impl<I> Default for FnScenarioBuilder<I> {
    fn default() -> Self {
        Self {
            initial_population: None,
            fitness: None,
            crossover: None,
            mutate: None,
            on_generation: None,
        }
    }
}

impl<I> FnScenarioBuilder<I> {
    pub fn initial_population<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize) -> Result<Vec<I>> + 'static,
    {
        self.initial_population = Some(Box::new(f));
        self
    }

    pub fn fitness<F>(mut self, f: F) -> Self
    where
        F: Fn(&I, usize, usize) -> Result<f64> + 'static,
    {
        self.fitness = Some(Box::new(f));
        self
    }

    pub fn crossover<F>(mut self, f: F) -> Self
    where
        F: FnMut(&I, &I, usize, usize, &mut RandomNumberGenerator) -> Result<I> + 'static,
    {
        self.crossover = Some(Box::new(f));
        self
    }

    pub fn mutate<F>(mut self, f: F) -> Self
    where
        F: FnMut(I, usize, usize, &mut RandomNumberGenerator) -> Result<I> + 'static,
    {
        self.mutate = Some(Box::new(f));
        self
    }

    pub fn on_generation<F>(mut self, f: F) -> Self
    where
        F: FnMut(&Population<I>, usize, usize) -> Result<GenerationVerdict> + 'static,
    {
        self.on_generation = Some(Box::new(f));
        self
    }

    /// Builds the scenario, failing if a required callback is missing.
    pub fn build(self) -> Result<FnScenario<I>> {
        let initial_population = self.initial_population.ok_or_else(|| {
            GeneticError::Configuration("Initial population callback not specified".to_string())
        })?;

        let fitness = self.fitness.ok_or_else(|| {
            GeneticError::Configuration("Fitness callback not specified".to_string())
        })?;

        Ok(FnScenario {
            initial_population,
            fitness,
            crossover: self.crossover,
            mutate: self.mutate,
            on_generation: self.on_generation,
        })
    }
}
