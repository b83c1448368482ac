//! Serialized key issuance for generators shared between threads.

use crate::error::{ActivationKeyError, ActivationKeyResult};
use crate::generator::ActivationKeyGenerator;
use crate::key::ActivationKey;
use crate::properties::ActivationKeyProperties;
use crate::seed::ActivationKeySeed;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Mutex;
use tracing::info;

struct SequenceState<R> {
    generator: ActivationKeyGenerator<R>,
    last_seed: Option<ActivationKeySeed>,
}

/// Issues keys one at a time, feeding each new seed into the next call.
///
/// Every issued key has a seed exactly one above the previous key's seed,
/// except the first, which starts from a random seed unless the sequence was
/// resumed.
pub struct ActivationKeySequence<R = StdRng> {
    state: Mutex<SequenceState<R>>,
}

impl ActivationKeySequence<StdRng> {
    /// Creates a sequence with an entropy-seeded generator.
    #[must_use]
    pub fn new(properties: &ActivationKeyProperties) -> Self {
        Self::from_generator(ActivationKeyGenerator::new(properties))
    }
}

impl<R: Rng> ActivationKeySequence<R> {
    /// Creates a sequence drawing randomness from `rng`.
    pub fn with_rng(properties: &ActivationKeyProperties, rng: R) -> Self {
        Self::from_generator(ActivationKeyGenerator::with_rng(properties, rng))
    }

    /// Wraps an existing generator.
    pub fn from_generator(generator: ActivationKeyGenerator<R>) -> Self {
        Self {
            state: Mutex::new(SequenceState {
                generator,
                last_seed: None,
            }),
        }
    }

    /// Continues after `seed`, typically restored from storage.
    #[must_use]
    pub fn resume_from(self, seed: ActivationKeySeed) -> Self {
        info!(seed = %seed, "resuming activation key sequence");
        let mut state = match self.state.into_inner() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.last_seed = Some(seed);
        Self {
            state: Mutex::new(state),
        }
    }

    /// Issues the next key without a prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ActivationKeyError::Poisoned`] if another thread panicked
    /// while issuing, otherwise the generator's errors.
    pub fn issue(&self) -> ActivationKeyResult<ActivationKey> {
        self.issue_inner(None)
    }

    /// Issues the next key with `prefix`.
    ///
    /// # Errors
    ///
    /// See [`ActivationKeyGenerator::create_activation_key_with_prefix`].
    pub fn issue_with_prefix(&self, prefix: &str) -> ActivationKeyResult<ActivationKey> {
        self.issue_inner(Some(prefix))
    }

    /// Returns the seed of the most recently issued key.
    ///
    /// # Errors
    ///
    /// Returns [`ActivationKeyError::Poisoned`] if the lock is poisoned.
    pub fn last_seed(&self) -> ActivationKeyResult<Option<ActivationKeySeed>> {
        let state = self.state.lock().map_err(|_| ActivationKeyError::Poisoned)?;
        Ok(state.last_seed)
    }

    fn issue_inner(&self, prefix: Option<&str>) -> ActivationKeyResult<ActivationKey> {
        let mut state = self.state.lock().map_err(|_| ActivationKeyError::Poisoned)?;
        let SequenceState {
            generator,
            last_seed,
        } = &mut *state;

        let key = match prefix {
            Some(prefix) => {
                generator.create_activation_key_with_prefix(prefix, last_seed.as_ref())?
            }
            None => generator.create_activation_key(last_seed.as_ref())?,
        };
        *last_seed = Some(*key.seed());
        Ok(key)
    }
}
