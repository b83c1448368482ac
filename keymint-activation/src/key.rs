//! Generated activation key values.

use crate::error::ActivationKeyError;
use crate::seed::ActivationKeySeed;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated activation key and the seed it was derived from.
///
/// Persist [`ActivationKey::seed`] and pass it back to the generator so the
/// next key continues the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredActivationKey")]
pub struct ActivationKey {
    value: String,
    seed: ActivationKeySeed,
}

impl ActivationKey {
    pub(crate) fn new(value: String, seed: ActivationKeySeed) -> Self {
        Self { value, seed }
    }

    /// Returns the printable key.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the seed used to derive this key.
    #[must_use]
    pub fn seed(&self) -> &ActivationKeySeed {
        &self.seed
    }

    /// Splits the key into its parts.
    ///
    /// The prefix, when present, is the first part.
    pub fn parts(&self, separator: char) -> impl Iterator<Item = &str> {
        self.value.split(separator)
    }
}

impl fmt::Display for ActivationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Unchecked serde form of [`ActivationKey`].
#[derive(Deserialize)]
struct StoredActivationKey {
    value: String,
    seed: ActivationKeySeed,
}

impl TryFrom<StoredActivationKey> for ActivationKey {
    type Error = ActivationKeyError;

    fn try_from(stored: StoredActivationKey) -> Result<Self, Self::Error> {
        if stored.value.trim().is_empty() {
            return Err(ActivationKeyError::invalid(
                "activation key",
                "value must not be empty",
            ));
        }
        Ok(Self::new(stored.value, stored.seed))
    }
}
