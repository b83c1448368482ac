//! Monotonic seed from which activation key digits are derived.
//!
//! A seed is a non-negative whole number. Callers persist the seed of the last
//! issued key (usually as text in a database counter) and hand it back on the
//! next call, so the text form is the canonical external representation.

use crate::error::{ActivationKeyError, ActivationKeyResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Counter value behind an activation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActivationKeySeed(u128);

impl ActivationKeySeed {
    /// Creates a seed from a native value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Parses a seed from its decimal text form.
    ///
    /// A zero fraction (`"42.000"`) is accepted.
    ///
    /// # Errors
    ///
    /// Returns an argument error if the text is not a whole number and a range
    /// error if it is negative or too large.
    pub fn parse(s: &str) -> ActivationKeyResult<Self> {
        let s = s.trim();
        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ActivationKeyError::invalid(
                "seed",
                format!("'{s}' is not a decimal number"),
            ));
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ActivationKeyError::invalid(
                "seed",
                format!("'{s}' is not a decimal number"),
            ));
        }
        if fraction.bytes().any(|b| b != b'0') {
            return Err(ActivationKeyError::invalid(
                "seed",
                format!("'{s}' is not a whole number"),
            ));
        }

        let value: u128 = whole
            .parse()
            .map_err(|_| ActivationKeyError::out_of_range("seed", "[0, 2^128)", s))?;

        if negative && value != 0 {
            return Err(ActivationKeyError::out_of_range("seed", "[0, 2^128)", s));
        }

        Ok(Self(value))
    }

    /// Returns the seed value.
    #[must_use]
    pub const fn value(&self) -> u128 {
        self.0
    }

    /// Returns the seed that follows this one (`value + 1`).
    ///
    /// # Errors
    ///
    /// Returns a range error if the value space is exhausted.
    pub fn next(&self) -> ActivationKeyResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| ActivationKeyError::out_of_range("seed", "[0, 2^128)", "2^128"))
    }
}

impl fmt::Display for ActivationKeySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ActivationKeySeed {
    type Err = ActivationKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u128> for ActivationKeySeed {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl TryFrom<i128> for ActivationKeySeed {
    type Error = ActivationKeyError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        u128::try_from(value)
            .map(Self)
            .map_err(|_| ActivationKeyError::out_of_range("seed", "[0, 2^128)", value))
    }
}

impl TryFrom<String> for ActivationKeySeed {
    type Error = ActivationKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ActivationKeySeed> for String {
    fn from(seed: ActivationKeySeed) -> Self {
        seed.to_string()
    }
}
