//! Key shape configuration.
//!
//! An [`ActivationKeyProperties`] describes how generated keys look: how many
//! components, how long each one is, what separates them, whether a prefix is
//! expected, and which substitution tables obscure the seed digits. Every
//! constraint is checked at construction; nothing is clamped.

use crate::charmap::CharacterMap;
use crate::error::{ActivationKeyError, ActivationKeyResult};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Valid range for the number of characters per component.
pub const COMPONENT_LENGTH_RANGE: RangeInclusive<usize> = 3..=6;

/// Valid range for the number of components.
pub const COMPONENT_COUNT_RANGE: RangeInclusive<usize> = 2..=8;

/// Valid range for the prefix length (0 disables the prefix).
pub const PREFIX_LENGTH_RANGE: RangeInclusive<usize> = 0..=6;

const DEFAULT_SEPARATOR: char = '-';
const DEFAULT_COMPONENT_LENGTH: usize = 4;
const DEFAULT_COMPONENT_COUNT: usize = 4;
const DEFAULT_PREFIX_LENGTH: usize = 4;

// No digit maps to a neighbour (d ± 1 mod 10), so the substituted last digit
// of a seed never reproduces the last digit of the following seed.
const DEFAULT_NUMBER_TO_NUMBER: [(char, char); 10] = [
    ('0', '5'),
    ('1', '8'),
    ('2', '0'),
    ('3', '6'),
    ('4', '9'),
    ('5', '2'),
    ('6', '4'),
    ('7', '1'),
    ('8', '3'),
    ('9', '7'),
];

const DEFAULT_NUMBER_TO_LETTER: [(char, char); 10] = [
    ('0', 'K'),
    ('1', 'X'),
    ('2', 'R'),
    ('3', 'M'),
    ('4', 'W'),
    ('5', 'T'),
    ('6', 'H'),
    ('7', 'P'),
    ('8', 'Z'),
    ('9', 'C'),
];

/// Returns a fresh copy of the default digit-to-digit table.
#[must_use]
pub fn default_number_to_number_map() -> CharacterMap {
    CharacterMap::from_table(&DEFAULT_NUMBER_TO_NUMBER)
}

/// Returns a fresh copy of the default digit-to-letter table.
#[must_use]
pub fn default_number_to_letter_map() -> CharacterMap {
    CharacterMap::from_table(&DEFAULT_NUMBER_TO_LETTER)
}

/// Validated shape of generated activation keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationKeyProperties {
    component_separator: char,
    component_length: usize,
    component_count: usize,
    prefix_length: usize,
    number_to_number_map: CharacterMap,
    number_to_letter_map: CharacterMap,
}

impl ActivationKeyProperties {
    /// Creates properties without a prefix.
    ///
    /// # Errors
    ///
    /// See [`ActivationKeyProperties::with_prefix`].
    pub fn new(
        separator: char,
        component_length: usize,
        component_count: usize,
    ) -> ActivationKeyResult<Self> {
        Self::with_prefix(separator, component_length, component_count, 0)
    }

    /// Creates properties with a prefix of `prefix_length` characters.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `separator` is whitespace, and a range
    /// error if `component_length`, `component_count` or `prefix_length` is
    /// outside its valid range. Checks run in that order.
    pub fn with_prefix(
        separator: char,
        component_length: usize,
        component_count: usize,
        prefix_length: usize,
    ) -> ActivationKeyResult<Self> {
        if separator.is_whitespace() {
            return Err(ActivationKeyError::invalid(
                "component separator",
                "must not be a whitespace character",
            ));
        }
        check_range("component length", component_length, &COMPONENT_LENGTH_RANGE)?;
        check_range("component count", component_count, &COMPONENT_COUNT_RANGE)?;
        check_range("prefix length", prefix_length, &PREFIX_LENGTH_RANGE)?;

        Ok(Self {
            component_separator: separator,
            component_length,
            component_count,
            prefix_length,
            number_to_number_map: default_number_to_number_map(),
            number_to_letter_map: default_number_to_letter_map(),
        })
    }

    /// Character joining components (and the prefix).
    #[must_use]
    pub fn component_separator(&self) -> char {
        self.component_separator
    }

    /// Characters per component.
    #[must_use]
    pub fn component_length(&self) -> usize {
        self.component_length
    }

    /// Number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Required prefix length, 0 when prefixes are disabled.
    #[must_use]
    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Returns true if keys carry a prefix.
    #[must_use]
    pub fn use_prefix(&self) -> bool {
        self.prefix_length > 0
    }

    /// Total number of digit characters across all components.
    #[must_use]
    pub fn components_length(&self) -> usize {
        self.component_count * self.component_length
    }

    /// Digit-to-digit substitution table.
    #[must_use]
    pub fn number_to_number_map(&self) -> &CharacterMap {
        &self.number_to_number_map
    }

    /// Digit-to-letter substitution table.
    #[must_use]
    pub fn number_to_letter_map(&self) -> &CharacterMap {
        &self.number_to_letter_map
    }

    /// Replaces the digit-to-digit table with a copy of `map`.
    ///
    /// # Errors
    ///
    /// Returns an argument error unless `map` maps each ASCII digit, and only
    /// those, to a distinct ASCII digit.
    pub fn change_number_to_number_map(&mut self, map: &CharacterMap) -> ActivationKeyResult<()> {
        validate_digit_map("number to number map", map, |c| c.is_ascii_digit())?;
        self.number_to_number_map = map.clone();
        Ok(())
    }

    /// Replaces the digit-to-letter table with a copy of `map`.
    ///
    /// # Errors
    ///
    /// Returns an argument error unless `map` maps each ASCII digit, and only
    /// those, to a distinct ASCII letter.
    pub fn change_number_to_letter_map(&mut self, map: &CharacterMap) -> ActivationKeyResult<()> {
        validate_digit_map("number to letter map", map, |c| c.is_ascii_alphabetic())?;
        self.number_to_letter_map = map.clone();
        Ok(())
    }
}

impl Default for ActivationKeyProperties {
    fn default() -> Self {
        Self {
            component_separator: DEFAULT_SEPARATOR,
            component_length: DEFAULT_COMPONENT_LENGTH,
            component_count: DEFAULT_COMPONENT_COUNT,
            prefix_length: DEFAULT_PREFIX_LENGTH,
            number_to_number_map: default_number_to_number_map(),
            number_to_letter_map: default_number_to_letter_map(),
        }
    }
}

fn check_range(
    param: &'static str,
    value: usize,
    range: &RangeInclusive<usize>,
) -> ActivationKeyResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ActivationKeyError::out_of_range(
            param,
            format!("[{}, {}]", range.start(), range.end()),
            value,
        ))
    }
}

fn validate_digit_map(
    param: &'static str,
    map: &CharacterMap,
    allowed_destination: impl Fn(char) -> bool,
) -> ActivationKeyResult<()> {
    if map.len() != 10 {
        return Err(ActivationKeyError::invalid(
            param,
            format!("expected 10 entries, got {}", map.len()),
        ));
    }
    // Ten entries with every digit present means each digit appears exactly once.
    if let Some(missing) = ('0'..='9').find(|&d| !map.contains(d)) {
        return Err(ActivationKeyError::invalid(
            param,
            format!("digit '{missing}' has no replacement"),
        ));
    }
    if let Some((source, destination)) = map.iter().find(|&(_, d)| !allowed_destination(d)) {
        return Err(ActivationKeyError::invalid(
            param,
            format!("replacement '{destination}' for '{source}' is not allowed"),
        ));
    }
    let mut seen = BTreeSet::new();
    if let Some((source, destination)) = map.iter().find(|&(_, d)| !seen.insert(d)) {
        return Err(ActivationKeyError::invalid(
            param,
            format!("replacement '{destination}' for '{source}' is used more than once"),
        ));
    }
    Ok(())
}
