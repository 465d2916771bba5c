use crate::{
    error::{GeneticError, OptionExt, Result},
    history::GenerationRecord,
    population::{Population, ScoredIndividual},
    rng::RandomNumberGenerator,
    scenario::Scenario,
};

use super::options::EvolutionOptions;

/// Breeds, mutates, scores and prunes one generation.
///
/// Parents are drawn uniformly with replacement from `parents`; a second
/// parent is only drawn when the scenario performs crossover. Every child is
/// scored exactly once, then the children are sorted by descending fitness
/// and the first `children_to_retain` survive. The sort is stable, so children
/// with equal fitness keep the order in which they were bred.
///
/// Returns the survivors as a new population together with their summary.
///
/// # Errors
///
/// - `GeneticError::Configuration` if `options` do not validate.
/// - `GeneticError::EmptyPopulation` if `parents` is empty.
/// - `GeneticError::FitnessCalculation` if a fitness value is NaN or infinite.
/// - `GeneticError::Configuration` if fewer children than `children_to_retain`
///   were produced.
/// - Any error returned by a scenario callback, unchanged.
pub fn advance_generation<S: Scenario>(
    scenario: &mut S,
    parents: &Population<S::Individual>,
    options: &EvolutionOptions,
    run: usize,
    generation: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<(Population<S::Individual>, GenerationRecord)> {
    options.validate()?;
    if parents.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    let children_to_generate = options.get_children_to_generate();
    let children_to_retain = options.get_children_to_retain();

    let mut children = Vec::with_capacity(children_to_generate);
    for _ in 0..children_to_generate {
        let parent_a = pick_parent(parents.members(), rng);
        let child = if scenario.has_crossover() {
            let parent_b = pick_parent(parents.members(), rng);
            scenario.crossover(
                &parent_a.individual,
                &parent_b.individual,
                run,
                generation,
                rng,
            )?
        } else {
            parent_a.individual.clone()
        };
        children.push(child);
    }

    let children = children
        .into_iter()
        .map(|child| scenario.mutate(child, run, generation, rng))
        .collect::<Result<Vec<_>>>()?;

    let mut scored = Vec::with_capacity(children.len());
    for child in children {
        let fitness = scenario.fitness(&child, run, generation)?;
        if !fitness.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness {} for {:?} in run {} generation {}",
                fitness, child, run, generation
            )));
        }
        scored.push((child, fitness));
    }

    if scored.len() < children_to_retain {
        return Err(GeneticError::Configuration(format!(
            "Cannot retain {} children when only {} were produced",
            children_to_retain,
            scored.len()
        )));
    }

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(children_to_retain);

    let best = scored
        .first()
        .map(|(_, fitness)| *fitness)
        .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
    let average = scored.iter().map(|(_, fitness)| fitness).sum::<f64>() / scored.len() as f64;

    let survivors = Population::from_members(
        scored
            .into_iter()
            .map(|(child, fitness)| ScoredIndividual::scored(child, fitness))
            .collect(),
    );

    Ok((survivors, GenerationRecord::new(best, average)))
}

/// Uniform pick with replacement. `parents` must not be empty.
fn pick_parent<'a, I>(
    parents: &'a [ScoredIndividual<I>],
    rng: &mut RandomNumberGenerator,
) -> &'a ScoredIndividual<I> {
    &parents[rng.pick_index(parents.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::options::LogLevel;

    /// Integers scored by their value; mutation adds a fixed offset.
    struct Offset {
        delta: i64,
        crossover: bool,
        mutated: usize,
    }

    impl Scenario for Offset {
        type Individual = i64;

        fn initial_population(&mut self, _run: usize) -> Result<Vec<i64>> {
            Ok(vec![1, 2, 3, 4])
        }

        fn fitness(&self, individual: &i64, _run: usize, _generation: usize) -> Result<f64> {
            Ok(*individual as f64)
        }

        fn has_crossover(&self) -> bool {
            self.crossover
        }

        fn crossover(
            &mut self,
            parent_a: &i64,
            parent_b: &i64,
            _run: usize,
            _generation: usize,
            _rng: &mut RandomNumberGenerator,
        ) -> Result<i64> {
            Ok(parent_a * 100 + parent_b)
        }

        fn mutate(
            &mut self,
            individual: i64,
            _run: usize,
            _generation: usize,
            _rng: &mut RandomNumberGenerator,
        ) -> Result<i64> {
            self.mutated += 1;
            Ok(individual + self.delta)
        }
    }

    fn seeded(values: Vec<i64>) -> Population<i64> {
        Population::seed(values)
    }

    #[test]
    fn test_survivors_sorted_and_truncated() {
        let mut scenario = Offset { delta: 0, crossover: false, mutated: 0 };
        let options = EvolutionOptions::new(12, 5, LogLevel::None).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(11);

        let (survivors, record) =
            advance_generation(&mut scenario, &seeded(vec![1, 2, 3, 4]), &options, 1, 0, &mut rng)
                .unwrap();

        assert_eq!(survivors.len(), 5);
        let fitness: Vec<f64> = survivors.iter().map(|m| m.fitness.unwrap()).collect();
        assert!(fitness.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(record.best, fitness[0]);
        let mean = fitness.iter().sum::<f64>() / fitness.len() as f64;
        assert!((record.average - mean).abs() < 1e-12);
    }

    #[test]
    fn test_children_copy_parents_without_crossover() {
        let mut scenario = Offset { delta: 0, crossover: false, mutated: 0 };
        let options = EvolutionOptions::new(16, 16, LogLevel::None).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);

        let (survivors, _) =
            advance_generation(&mut scenario, &seeded(vec![7, 9]), &options, 1, 0, &mut rng).unwrap();

        assert!(survivors.individuals().all(|child| *child == 7 || *child == 9));
        assert_eq!(scenario.mutated, 16);
    }

    #[test]
    fn test_crossover_combines_two_parents() {
        let mut scenario = Offset { delta: 0, crossover: true, mutated: 0 };
        let options = EvolutionOptions::new(10, 10, LogLevel::None).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);

        let (survivors, _) =
            advance_generation(&mut scenario, &seeded(vec![1, 2]), &options, 1, 0, &mut rng).unwrap();

        for child in survivors.individuals() {
            assert!([101, 102, 201, 202].contains(child));
        }
    }

    #[test]
    fn test_mutation_applies_before_scoring() {
        let mut scenario = Offset { delta: 10, crossover: false, mutated: 0 };
        let options = EvolutionOptions::new(4, 2, LogLevel::None).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);

        let (survivors, record) =
            advance_generation(&mut scenario, &seeded(vec![5]), &options, 1, 0, &mut rng).unwrap();

        assert!(survivors.individuals().all(|child| *child == 15));
        assert_eq!(record, GenerationRecord::new(15.0, 15.0));
    }

    #[test]
    fn test_empty_parents_rejected() {
        let mut scenario = Offset { delta: 0, crossover: false, mutated: 0 };
        let options = EvolutionOptions::default();
        let mut rng = RandomNumberGenerator::from_seed(2);

        let result = advance_generation(&mut scenario, &seeded(vec![]), &options, 1, 0, &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_pick_parent_draws_with_replacement() {
        let parents = seeded(vec![10, 20, 30]);
        let mut rng = RandomNumberGenerator::from_seed(9);
        let picks: Vec<i64> = (0..60)
            .map(|_| pick_parent(parents.members(), &mut rng).individual)
            .collect();
        assert!(picks.iter().all(|pick| [10, 20, 30].contains(pick)));
        assert!(picks.windows(2).any(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_unvalidated_options_rejected() {
        let mut scenario = Offset { delta: 0, crossover: false, mutated: 0 };
        let mut rng = RandomNumberGenerator::from_seed(2);
        let zero_retained = EvolutionOptions {
            children_to_generate: 4,
            children_to_retain: 0,
            log_level: LogLevel::None,
        };

        let result =
            advance_generation(&mut scenario, &seeded(vec![1, 2]), &zero_retained, 1, 0, &mut rng);
        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("retain cannot be zero")),
            _ => panic!("Expected Configuration error"),
        }
        assert_eq!(scenario.mutated, 0);

        let too_many = EvolutionOptions {
            children_to_generate: 2,
            children_to_retain: 3,
            log_level: LogLevel::None,
        };
        let result =
            advance_generation(&mut scenario, &seeded(vec![1, 2]), &too_many, 1, 0, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_non_finite_fitness_rejected() {
        struct NotANumber;

        impl Scenario for NotANumber {
            type Individual = u8;

            fn initial_population(&mut self, _run: usize) -> Result<Vec<u8>> {
                Ok(vec![0])
            }

            fn fitness(&self, _individual: &u8, _run: usize, _generation: usize) -> Result<f64> {
                Ok(f64::NAN)
            }
        }

        let options = EvolutionOptions::default();
        let mut rng = RandomNumberGenerator::from_seed(2);
        let result = advance_generation(
            &mut NotANumber,
            &Population::seed(vec![0u8]),
            &options,
            2,
            3,
            &mut rng,
        );
        match result {
            Err(GeneticError::FitnessCalculation(msg)) => {
                assert!(msg.contains("run 2 generation 3"));
            }
            _ => panic!("Expected FitnessCalculation error"),
        }
    }
}
