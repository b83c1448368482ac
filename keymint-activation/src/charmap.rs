//! Read-only character substitution tables.

use crate::error::{ActivationKeyError, ActivationKeyResult};
use std::collections::BTreeMap;

/// A one-to-one association from source characters to replacement characters.
///
/// Once built the map cannot be modified; cloning yields an independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterMap {
    entries: BTreeMap<char, char>,
}

impl CharacterMap {
    /// Builds a map from `(source, destination)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an argument error if a source character appears more than once.
    pub fn from_pairs<I>(pairs: I) -> ActivationKeyResult<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut entries = BTreeMap::new();
        for (source, destination) in pairs {
            if entries.insert(source, destination).is_some() {
                return Err(ActivationKeyError::invalid(
                    "character map",
                    format!("source character '{source}' appears more than once"),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// Builds a map from a literal table known to have unique sources.
    pub(crate) fn from_table(table: &[(char, char)]) -> Self {
        Self {
            entries: table.iter().copied().collect(),
        }
    }

    /// Builds a digit map from a string whose i-th character is the
    /// replacement for digit `i`.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `destinations` does not hold exactly ten
    /// characters.
    pub fn from_digit_string(destinations: &str) -> ActivationKeyResult<Self> {
        let count = destinations.chars().count();
        if count != 10 {
            return Err(ActivationKeyError::invalid(
                "character map",
                format!("expected 10 destination characters, got {count}"),
            ));
        }
        Self::from_pairs(('0'..='9').zip(destinations.chars()))
    }

    /// Returns the replacement for `source`, if mapped.
    #[must_use]
    pub fn get(&self, source: char) -> Option<char> {
        self.entries.get(&source).copied()
    }

    /// Returns the replacement for `source`, or `source` itself if unmapped.
    #[must_use]
    pub fn translate(&self, source: char) -> char {
        self.get(source).unwrap_or(source)
    }

    /// Returns true if `source` has a replacement.
    #[must_use]
    pub fn contains(&self, source: char) -> bool {
        self.entries.contains_key(&source)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(source, destination)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().map(|(&s, &d)| (s, d))
    }

    /// Renders the destinations of digits `0..=9` as a string.
    ///
    /// Unmapped digits are rendered as themselves.
    #[must_use]
    pub fn to_digit_string(&self) -> String {
        ('0'..='9').map(|d| self.translate(d)).collect()
    }
}
