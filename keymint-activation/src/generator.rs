//! Activation key generation.
//!
//! A key is derived from a seed in four steps:
//!
//! 1. advance the previous seed, or draw a random one when there is none;
//! 2. render the seed as digits, padded on the right with random digits to
//!    fill every component;
//! 3. in each component replace one random position through the
//!    digit-to-letter table and another through the digit-to-digit table
//!    (a single letter substitution when both picks coincide);
//! 4. join the components with the separator and prepend the prefix.
//!
//! The returned [`ActivationKey`] carries the new seed, which the caller
//! stores and passes back on the next call.

use crate::error::{ActivationKeyError, ActivationKeyResult};
use crate::key::ActivationKey;
use crate::properties::ActivationKeyProperties;
use crate::seed::ActivationKeySeed;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Lowest seed accepted as a predecessor; smaller seeds are replaced by a
/// random one. Also the lower bound of the random seed range.
pub const MIN_RANDOM_SEED: u128 = 25_674_500;

/// Exclusive upper bound of the random seed range.
pub const MAX_RANDOM_SEED: u128 = 1_995_674_500;

/// Generates activation keys of a fixed shape.
///
/// The generator snapshots the properties it was built from; changing the
/// substitution tables afterwards only affects generators built later.
#[derive(Debug)]
pub struct ActivationKeyGenerator<R = StdRng> {
    properties: ActivationKeyProperties,
    rng: R,
}

impl ActivationKeyGenerator<StdRng> {
    /// Creates a generator backed by an entropy-seeded [`StdRng`].
    #[must_use]
    pub fn new(properties: &ActivationKeyProperties) -> Self {
        Self::with_rng(properties, StdRng::from_entropy())
    }
}

impl<R: Rng> ActivationKeyGenerator<R> {
    /// Creates a generator drawing randomness from `rng`.
    ///
    /// Pass a seeded RNG for reproducible output.
    pub fn with_rng(properties: &ActivationKeyProperties, rng: R) -> Self {
        Self {
            properties: properties.clone(),
            rng,
        }
    }

    /// Returns the properties captured at construction.
    #[must_use]
    pub fn properties(&self) -> &ActivationKeyProperties {
        &self.properties
    }

    /// Creates a key without a prefix.
    ///
    /// # Errors
    ///
    /// Fails only if `previous_seed` is the largest representable seed.
    pub fn create_activation_key(
        &mut self,
        previous_seed: Option<&ActivationKeySeed>,
    ) -> ActivationKeyResult<ActivationKey> {
        self.calculate_next_value(None, previous_seed)
    }

    /// Creates a key starting with `prefix` and the separator.
    ///
    /// The prefix is dropped if the properties disable prefixes.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `prefix` is empty or whitespace, and a
    /// range error if prefixes are enabled and `prefix` does not have exactly
    /// `prefix_length` characters. No randomness is consumed on failure.
    pub fn create_activation_key_with_prefix(
        &mut self,
        prefix: &str,
        previous_seed: Option<&ActivationKeySeed>,
    ) -> ActivationKeyResult<ActivationKey> {
        if prefix.trim().is_empty() {
            return Err(ActivationKeyError::invalid(
                "prefix",
                "must not be empty or whitespace",
            ));
        }
        if self.properties.use_prefix() {
            let length = prefix.chars().count();
            if length != self.properties.prefix_length() {
                return Err(ActivationKeyError::out_of_range(
                    "prefix length",
                    format!("exactly {}", self.properties.prefix_length()),
                    length,
                ));
            }
        }
        self.calculate_next_value(Some(prefix), previous_seed)
    }

    fn calculate_next_value(
        &mut self,
        prefix: Option<&str>,
        previous_seed: Option<&ActivationKeySeed>,
    ) -> ActivationKeyResult<ActivationKey> {
        let seed = self.next_seed(previous_seed)?;
        let digits = self.render_digits(&seed);

        let separator = self.properties.component_separator().to_string();
        let components: Vec<String> = split_to_components(
            &digits,
            self.properties.component_length(),
            self.properties.component_count(),
        )
        .into_iter()
        .map(|component| self.scramble(component))
        .collect();

        let mut value = components.join(&separator);
        if let Some(prefix) = prefix.filter(|_| self.properties.use_prefix()) {
            value = format!("{prefix}{separator}{value}");
        }

        debug!(seed = %seed, components = components.len(), "generated activation key");
        Ok(ActivationKey::new(value, seed))
    }

    fn next_seed(
        &mut self,
        previous_seed: Option<&ActivationKeySeed>,
    ) -> ActivationKeyResult<ActivationKeySeed> {
        match previous_seed {
            Some(seed) if seed.value() >= MIN_RANDOM_SEED => seed.next(),
            Some(seed) => {
                debug!(seed = %seed, "previous seed below minimum, drawing a random seed");
                Ok(self.random_seed())
            }
            None => {
                debug!("no previous seed, drawing a random seed");
                Ok(self.random_seed())
            }
        }
    }

    fn random_seed(&mut self) -> ActivationKeySeed {
        ActivationKeySeed::new(self.rng.gen_range(MIN_RANDOM_SEED..MAX_RANDOM_SEED))
    }

    /// Renders exactly `components_length` digits for `seed`.
    fn render_digits(&mut self, seed: &ActivationKeySeed) -> String {
        let capacity = self.properties.components_length();
        let mut digits = seed.value().to_string();

        if digits.len() > capacity {
            // Keep the low-order digits; they change on every advance.
            debug!(seed = %seed, capacity, "seed longer than key, truncating high-order digits");
            digits = digits.split_off(digits.len() - capacity);
        }
        while digits.len() < capacity {
            digits.push(char::from(b'0' + self.rng.gen_range(0..10u8)));
        }
        digits
    }

    fn scramble(&mut self, component: String) -> String {
        let mut chars: Vec<char> = component.chars().collect();
        if chars.is_empty() {
            return component;
        }

        let j = self.rng.gen_range(0..chars.len());
        let k = self.rng.gen_range(0..chars.len());

        chars[j] = self.properties.number_to_letter_map().translate(chars[j]);
        if j != k {
            chars[k] = self.properties.number_to_number_map().translate(chars[k]);
        }
        chars.into_iter().collect()
    }
}

/// Cuts `digits` into at most `count` chunks of `length` characters.
///
/// A trailing chunk shorter than `length` is kept.
fn split_to_components(digits: &str, length: usize, count: usize) -> Vec<String> {
    let chars: Vec<char> = digits.chars().collect();
    chars
        .chunks(length.max(1))
        .take(count)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
