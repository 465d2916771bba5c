use tracing::instrument;

use super::{
    generation::advance_generation,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{GeneticError, Result},
    history::{EvolutionHistory, GenerationRecord, HistoryAttribute, RunHistory},
    population::Population,
    report,
    rng::RandomNumberGenerator,
    scenario::Scenario,
};

/// Number of runs used by [`Evolver::start_default`].
pub const DEFAULT_RUNS: usize = 1;
/// Number of generations per run used by [`Evolver::start_default`].
pub const DEFAULT_GENERATIONS: usize = 10;

/// Drives a scenario through independent runs of repeated generations.
///
/// The evolver owns the configuration, the scenario, the random source and
/// the population of the run in progress. The population is reseeded from
/// the scenario at the start of every run and replaced by the survivors of
/// every generation.
pub struct Evolver<S: Scenario> {
    options: EvolutionOptions,
    scenario: S,
    rng: RandomNumberGenerator,
    population: Population<S::Individual>,
}

impl<S: Scenario> Evolver<S> {
    /// Creates a new `Evolver` with an entropy-seeded random source.
    ///
    /// # Arguments
    ///
    /// * `options` - Per-generation breeding and logging parameters.
    /// * `scenario` - The domain callbacks to evolve with.
    pub fn new(options: EvolutionOptions, scenario: S) -> Self {
        Self::with_rng(options, scenario, RandomNumberGenerator::new())
    }

    /// Creates a new `Evolver` drawing randomness from `rng`.
    ///
    /// Use a seeded generator to make evolutions reproducible.
    pub fn with_rng(options: EvolutionOptions, scenario: S, rng: RandomNumberGenerator) -> Self {
        Self {
            options,
            scenario,
            rng,
            population: Population::new(),
        }
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn scenario(&self) -> &S {
        &self.scenario
    }

    pub fn scenario_mut(&mut self) -> &mut S {
        &mut self.scenario
    }

    pub fn into_scenario(self) -> S {
        self.scenario
    }

    /// The population of the most recent run: the survivors of its last
    /// completed generation.
    pub fn population(&self) -> &Population<S::Individual> {
        &self.population
    }

    /// Evolves `runs` independent runs of up to `generations` generations each.
    ///
    /// Runs are numbered from 1 when passed to the scenario, while the
    /// returned history is indexed from 0: run number `n` is at index `n - 1`.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - `runs` or `generations` is zero, or the options are invalid
    /// - the scenario returns an empty initial population
    /// - a fitness value is not finite
    /// - any scenario callback fails
    ///
    /// No partial history is returned when a run fails.
    pub fn start(&mut self, runs: usize, generations: usize) -> Result<EvolutionHistory> {
        if runs == 0 {
            return Err(GeneticError::Configuration(
                "Number of runs cannot be zero".to_string(),
            ));
        }

        self.check_run_request(generations)?;

        let mut history = EvolutionHistory::with_capacity(runs);
        for run in 1..=runs {
            history.push(self.run(run, generations)?);
        }

        Ok(history)
    }

    /// Same as [`Evolver::start`] with one run of ten generations.
    pub fn start_default(&mut self) -> Result<EvolutionHistory> {
        self.start(DEFAULT_RUNS, DEFAULT_GENERATIONS)
    }

    /// Evolves a single run from a fresh initial population.
    ///
    /// After each generation the scenario's `on_generation` decides whether
    /// to continue; when it defers, the run continues while fewer than
    /// `generations` generations have completed. The returned history has
    /// one record per executed generation.
    ///
    /// # Errors
    ///
    /// Same as [`Evolver::start`], checked before the scenario is called.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self, run: usize, generations: usize) -> Result<RunHistory> {
        self.check_run_request(generations)?;

        let initial = self.scenario.initial_population(run)?;
        if initial.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        self.population = Population::seed(initial);
        tracing::debug!(size = self.population.len(), "Seeded initial population");

        let mut history = RunHistory::new();
        let mut generation = 0;

        loop {
            let (survivors, record) = advance_generation(
                &mut self.scenario,
                &self.population,
                &self.options,
                run,
                generation,
                &mut self.rng,
            )?;
            self.population = survivors;
            history.push(record);
            self.log_generation(run, generation, &record);

            generation += 1;
            let verdict = self
                .scenario
                .on_generation(&self.population, run, generation)?;
            if !verdict.resolve(generation < generations) {
                tracing::debug!(generations = generation, ?verdict, "Run finished");
                break;
            }
        }

        Ok(history)
    }

    /// Prints `attribute` of `history` to stdout.
    pub fn dump_history(&self, history: &EvolutionHistory, attribute: HistoryAttribute) -> Result<()> {
        report::dump_history(history, attribute)
    }

    fn check_run_request(&self, generations: usize) -> Result<()> {
        if generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        self.options.validate()
    }

    fn log_generation(&self, run: usize, generation: usize, record: &GenerationRecord) {
        match self.options.get_log_level() {
            LogLevel::Minimal => {
                tracing::info!(
                    run,
                    generation,
                    best = record.best,
                    average = record.average,
                    "Generation complete"
                );
            }
            LogLevel::Verbose => {
                tracing::info!(
                    run,
                    generation,
                    best = record.best,
                    average = record.average,
                    "Generation complete"
                );
                self.population.iter().for_each(|member| {
                    tracing::debug!(
                        run,
                        generation,
                        individual = ?member.individual,
                        fitness = ?member.fitness,
                        "Survivor"
                    );
                });
            }
            LogLevel::None => {}
        }
    }
}

impl<S> std::fmt::Debug for Evolver<S>
where
    S: Scenario + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evolver")
            .field("options", &self.options)
            .field("scenario", &self.scenario)
            .field("population", &self.population)
            .finish_non_exhaustive()
    }
}
