//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the per-generation parameters of the
//! engine: how many children are bred and how many of them survive, plus the
//! logging level. Options are validated when they are built, so an
//! `EvolutionOptions` value is always usable.
//!
//! ## Example
//!
//! ```rust
//! use evolver::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(8, 4, LogLevel::Minimal).unwrap();
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//!
//! // Retaining more children than are bred is rejected
//! assert!(EvolutionOptions::new(4, 8, LogLevel::None).is_err());
//! ```
//!
//! ## Fields
//!
//! - `children_to_generate`: Number of children bred per generation.
//! - `children_to_retain`: Number of the fittest children that survive a generation.
//! - `log_level`: How much progress is reported through `tracing`.
//!
//! ## LogLevel
//!
//! - `Verbose`: One event per generation plus one per survivor.
//! - `Minimal`: One event per generation.
//! - `None`: Disables logging.

use crate::error::{GeneticError, Result};

pub const DEFAULT_CHILDREN_TO_GENERATE: usize = 10;
pub const DEFAULT_CHILDREN_TO_RETAIN: usize = 5;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

/// Deserialized options go through [`EvolutionOptions::new`], so invalid
/// counts are rejected the same way as when built in code.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedOptions"))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    pub(crate) children_to_generate: usize,
    pub(crate) children_to_retain: usize,
    pub(crate) log_level: LogLevel,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedOptions {
    children_to_generate: usize,
    children_to_retain: usize,
    #[serde(default)]
    log_level: LogLevel,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedOptions> for EvolutionOptions {
    type Error = GeneticError;

    fn try_from(raw: UncheckedOptions) -> Result<Self> {
        Self::new(raw.children_to_generate, raw.children_to_retain, raw.log_level)
    }
}

impl EvolutionOptions {
    /// Creates validated options.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if either count is zero or if
    /// `children_to_retain` exceeds `children_to_generate`.
    pub fn new(
        children_to_generate: usize,
        children_to_retain: usize,
        log_level: LogLevel,
    ) -> Result<Self> {
        let options = Self {
            children_to_generate,
            children_to_retain,
            log_level,
        };
        options.validate()?;
        Ok(options)
    }

    /// Checks the invariants between the counts.
    pub fn validate(&self) -> Result<()> {
        if self.children_to_generate == 0 {
            return Err(GeneticError::Configuration(
                "Number of children to generate cannot be zero".to_string(),
            ));
        }

        if self.children_to_retain == 0 {
            return Err(GeneticError::Configuration(
                "Number of children to retain cannot be zero".to_string(),
            ));
        }

        if self.children_to_retain > self.children_to_generate {
            return Err(GeneticError::Configuration(format!(
                "Cannot retain {} children when only {} are generated",
                self.children_to_retain, self.children_to_generate
            )));
        }

        Ok(())
    }

    pub fn get_children_to_generate(&self) -> usize {
        self.children_to_generate
    }

    pub fn get_children_to_retain(&self) -> usize {
        self.children_to_retain
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use evolver::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .children_to_generate(8)
    ///     .children_to_retain(4)
    ///     .log_level(LogLevel::Minimal)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(options.get_children_to_retain(), 4);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            children_to_generate: DEFAULT_CHILDREN_TO_GENERATE,
            children_to_retain: DEFAULT_CHILDREN_TO_RETAIN,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields take their default values; `build` validates the result.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    children_to_generate: Option<usize>,
    children_to_retain: Option<usize>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn children_to_generate(mut self, value: usize) -> Self {
        self.children_to_generate = Some(value);
        self
    }

    pub fn children_to_retain(mut self, value: usize) -> Self {
        self.children_to_retain = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    pub fn build(self) -> Result<EvolutionOptions> {
        EvolutionOptions::new(
            self.children_to_generate
                .unwrap_or(DEFAULT_CHILDREN_TO_GENERATE),
            self.children_to_retain.unwrap_or(DEFAULT_CHILDREN_TO_RETAIN),
            self.log_level.unwrap_or_default(),
        )
    }
}
