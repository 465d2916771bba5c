//! Evolves four-letter lowercase words towards `zzzz`, then flips the
//! environment at generation 20 so that `aaaa` becomes the ideal.
//!
//! Run with `cargo run --example four_letter_words`.

use evolver::{
    error::Result,
    evolution::{EvolutionOptions, Evolver, LogLevel},
    history::HistoryAttribute,
    population::Population,
    rng::RandomNumberGenerator,
    scenario::{FnScenario, GenerationVerdict},
};
use tracing::Level;

const RUNS: usize = 2;
const GENERATIONS: usize = 25;
const MUTATION_RANGE_MAX: u8 = 2;
const ENVIRONMENT_CHANGE_GENERATION: usize = 20;

fn letter_value(byte: u8) -> f64 {
    f64::from(byte - b'a' + 1)
}

fn fitness(word: &String, _run: usize, generation: usize) -> Result<f64> {
    let fitness = word.bytes().map(letter_value).sum::<f64>() / word.len() as f64;
    Ok(if generation < ENVIRONMENT_CHANGE_GENERATION {
        fitness
    } else {
        -fitness
    })
}

fn crossover(
    parent_a: &String,
    parent_b: &String,
    _run: usize,
    _generation: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<String> {
    let (head, tail) = if rng.gen_bool(0.5) {
        (parent_b, parent_a)
    } else {
        (parent_a, parent_b)
    };
    let child = format!("{}{}", &head[..2], &tail[2..4]);
    tracing::trace!(%parent_a, %parent_b, %child, "crossover");
    Ok(child)
}

fn mutate(
    word: String,
    _run: usize,
    _generation: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<String> {
    let mut letters = word.clone().into_bytes();
    let index = rng.gen_range(0..letters.len());
    let shift = rng.gen_range(1..=MUTATION_RANGE_MAX);
    letters[index] = if rng.gen_bool(0.5) {
        letters[index].saturating_sub(shift).max(b'a')
    } else {
        letters[index].saturating_add(shift).min(b'z')
    };
    let mutant: String = letters.into_iter().map(char::from).collect();
    tracing::trace!(%word, %mutant, "mutate");
    Ok(mutant)
}

fn report(population: &Population<String>, run: usize, generation: usize) -> Result<GenerationVerdict> {
    println!("Run {} Generation {}:", run, generation);
    for member in population {
        println!("  {} ({:?})", member.individual, member.fitness);
    }
    if let Some(average) = population.average_fitness() {
        println!("  Average fitness: {}", average);
    }
    Ok(GenerationVerdict::Defer)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let scenario = FnScenario::builder()
        .initial_population(|_run| {
            Ok(["coat", "path", "moon", "jump"]
                .iter()
                .map(|word| word.to_string())
                .collect::<Vec<String>>())
        })
        .fitness(fitness)
        .crossover(crossover)
        .mutate(mutate)
        .on_generation(report)
        .build()?;

    let options = EvolutionOptions::builder()
        .children_to_generate(8)
        .children_to_retain(4)
        .log_level(LogLevel::Minimal)
        .build()?;

    let mut evolver = Evolver::new(options, scenario);
    let history = evolver.start(RUNS, GENERATIONS)?;

    evolver.dump_history(&history, HistoryAttribute::Best)?;
    evolver.dump_history(&history, HistoryAttribute::Average)?;
    Ok(())
}
