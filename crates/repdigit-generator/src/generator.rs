use rand::distr::{Distribution as _, Uniform};
use rand_pcg::Pcg64;
use repdigit_core::{IdRange, RangeList, RangeSums, pow10};

use crate::{GenerateError, GeneratorConfig, RangeSeed};

/// A generated puzzle input together with its expected answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRanges {
    /// The seed that reproduces this input.
    pub seed: RangeSeed,
    /// The ranges, in input order.
    pub ranges: RangeList,
    /// The part 1 (mirror) and part 2 (periodic) answers.
    pub answers: RangeSums,
    /// Number of range draws, including rejected ones.
    pub attempts: u64,
}

/// Generates range-list inputs whose answers stay within a bound.
///
/// Ranges are drawn one at a time. A candidate whose sums would push either
/// running answer above [`GeneratorConfig::answer_bound`] is rejected and redrawn.
///
/// # Examples
///
/// ```
/// use repdigit_generator::{GeneratorConfig, RangeGenerator};
///
/// let generator = RangeGenerator::new(GeneratorConfig {
///     count: 5,
///     ..GeneratorConfig::default()
/// })?;
/// let generated = generator.generate()?;
///
/// assert_eq!(generated.ranges.len(), 5);
/// assert_eq!(generated.ranges.sums()?, generated.answers);
///
/// // the same seed reproduces the same input
/// assert_eq!(generator.generate_with_seed(generated.seed)?, generated);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct RangeGenerator {
    config: GeneratorConfig,
}

impl RangeGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// Returns an error if [`GeneratorConfig::validate`] rejects `config`.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates an input from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`RangeGenerator::generate_with_seed`].
    pub fn generate(&self) -> Result<GeneratedRanges, GenerateError> {
        self.generate_with_seed(RangeSeed::random())
    }

    /// Generates the input determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::BoundUnreachable`] if
    /// [`GeneratorConfig::max_attempts`] draws do not produce enough ranges within
    /// the answer bound.
    pub fn generate_with_seed(&self, seed: RangeSeed) -> Result<GeneratedRanges, GenerateError> {
        let config = &self.config;
        let mut ranges = RangeList::new();
        let mut answers = RangeSums::default();
        let mut attempts = 0;

        while ranges.len() < config.count {
            if attempts == config.max_attempts {
                return Err(GenerateError::BoundUnreachable {
                    accepted: ranges.len(),
                    requested: config.count,
                    attempts,
                });
            }
            let mut rng = seed.attempt_rng(attempts);
            attempts += 1;

            let range = self.draw_range(&mut rng)?;
            let total = answers + range.sums()?;
            if total.mirror > config.answer_bound || total.periodic > config.answer_bound {
                log::debug!(
                    "rejected range {range}: answers would reach {}/{} (bound {})",
                    total.mirror,
                    total.periodic,
                    config.answer_bound
                );
                continue;
            }
            answers = total;
            ranges.push(range);
        }

        log::debug!(
            "generated {} ranges from seed {seed} in {attempts} attempts",
            ranges.len()
        );
        Ok(GeneratedRanges {
            seed,
            ranges,
            answers,
            attempts,
        })
    }

    fn draw_range(&self, rng: &mut Pcg64) -> Result<IdRange, GenerateError> {
        let max_digits = self.config.max_digits;
        let digits = Uniform::new_inclusive(1, max_digits)?.sample(rng);
        let lo = Uniform::new_inclusive(pow10(digits - 1), pow10(digits) - 1)?.sample(rng);
        let span = Uniform::new_inclusive(0, self.config.max_span)?.sample(rng);
        let hi = lo.saturating_add(span).min(pow10(max_digits) - 1);
        Ok(IdRange::new(lo, hi))
    }
}
