//! # Population
//!
//! The currently alive generation of individuals, each paired with the fitness
//! computed for it. Individuals are opaque to the engine: it only clones them
//! when a parent is copied into a child and hands them to scenario callbacks.
//!
//! A population is seeded from the scenario at the start of every run (all
//! fitness values unset) and is replaced wholesale by the survivors of each
//! generation.

/// An individual together with its cached fitness.
///
/// `fitness` is `None` until the individual has been scored, which only
/// happens to children during a generation step. Members of a freshly seeded
/// population are therefore unscored.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredIndividual<I> {
    /// The scenario-defined individual.
    pub individual: I,
    /// The fitness computed for this individual, larger is fitter.
    pub fitness: Option<f64>,
}

impl<I> ScoredIndividual<I> {
    /// Wraps an individual that has not been scored yet.
    pub fn unscored(individual: I) -> Self {
        Self {
            individual,
            fitness: None,
        }
    }

    /// Wraps an individual with a known fitness.
    pub fn scored(individual: I, fitness: f64) -> Self {
        Self {
            individual,
            fitness: Some(fitness),
        }
    }
}

/// An ordered collection of scored individuals.
///
/// After a generation step the members are sorted by descending fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Population<I> {
    members: Vec<ScoredIndividual<I>>,
}

impl<I> Population<I> {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Seeds a population from unscored individuals, keeping their order.
    pub fn seed(individuals: Vec<I>) -> Self {
        Self {
            members: individuals
                .into_iter()
                .map(ScoredIndividual::unscored)
                .collect(),
        }
    }

    /// Creates a population from already scored members.
    pub fn from_members(members: Vec<ScoredIndividual<I>>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[ScoredIndividual<I>] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredIndividual<I>> {
        self.members.iter()
    }

    /// Iterates over the individuals without their fitness.
    pub fn individuals(&self) -> impl Iterator<Item = &I> {
        self.members.iter().map(|member| &member.individual)
    }

    /// Returns the first member, which is the fittest once the population
    /// has gone through a generation step.
    pub fn fittest(&self) -> Option<&ScoredIndividual<I>> {
        self.members.first()
    }

    /// Mean fitness of the scored members, `None` if no member is scored.
    pub fn average_fitness(&self) -> Option<f64> {
        let (sum, count) = self
            .members
            .iter()
            .filter_map(|member| member.fitness)
            .fold((0.0, 0usize), |(sum, count), fitness| (sum + fitness, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    pub fn into_members(self) -> Vec<ScoredIndividual<I>> {
        self.members
    }
}

impl<I> Default for Population<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I> IntoIterator for &'a Population<I> {
    type Item = &'a ScoredIndividual<I>;
    type IntoIter = std::slice::Iter<'a, ScoredIndividual<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
