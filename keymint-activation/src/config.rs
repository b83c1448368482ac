//! Serializable key shape configuration.
//!
//! [`KeyShapeConfig`] is the on-disk form of [`ActivationKeyProperties`].
//! Missing fields fall back to the canonical default shape, so a document
//! only has to mention what it changes:
//!
//! ```json
//! { "component_count": 5, "prefix_length": 0 }
//! ```
//!
//! Substitution tables are written as ten-character strings whose i-th
//! character replaces digit `i`.

use crate::charmap::CharacterMap;
use crate::error::{ActivationKeyError, ActivationKeyResult};
use crate::properties::ActivationKeyProperties;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Serde representation of an activation key shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyShapeConfig {
    /// Character joining components.
    pub separator: char,
    /// Characters per component.
    pub component_length: usize,
    /// Number of components.
    pub component_count: usize,
    /// Prefix length, 0 for none.
    pub prefix_length: usize,
    /// Digit-to-digit table as a ten-character string.
    pub number_to_number_map: String,
    /// Digit-to-letter table as a ten-character string.
    pub number_to_letter_map: String,
}

impl KeyShapeConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for KeyShapeConfig {
    fn default() -> Self {
        Self::from(&ActivationKeyProperties::default())
    }
}

impl From<&ActivationKeyProperties> for KeyShapeConfig {
    fn from(properties: &ActivationKeyProperties) -> Self {
        Self {
            separator: properties.component_separator(),
            component_length: properties.component_length(),
            component_count: properties.component_count(),
            prefix_length: properties.prefix_length(),
            number_to_number_map: properties.number_to_number_map().to_digit_string(),
            number_to_letter_map: properties.number_to_letter_map().to_digit_string(),
        }
    }
}

impl TryFrom<KeyShapeConfig> for ActivationKeyProperties {
    type Error = ActivationKeyError;

    fn try_from(config: KeyShapeConfig) -> Result<Self, Self::Error> {
        let mut properties = ActivationKeyProperties::with_prefix(
            config.separator,
            config.component_length,
            config.component_count,
            config.prefix_length,
        )?;
        properties.change_number_to_number_map(&CharacterMap::from_digit_string(
            &config.number_to_number_map,
        )?)?;
        properties.change_number_to_letter_map(&CharacterMap::from_digit_string(
            &config.number_to_letter_map,
        )?)?;
        Ok(properties)
    }
}

impl ActivationKeyProperties {
    /// Loads and validates properties from a JSON [`KeyShapeConfig`].
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON, otherwise the same
    /// errors as direct construction.
    pub fn from_json(json: &str) -> ActivationKeyResult<Self> {
        let config = KeyShapeConfig::from_json(json)?;
        let properties = Self::try_from(config)?;
        info!(
            component_count = properties.component_count(),
            component_length = properties.component_length(),
            prefix_length = properties.prefix_length(),
            "loaded activation key shape"
        );
        Ok(properties)
    }
}
