//! Human-typeable activation key generation.
//!
//! This crate handles:
//! - Validated key shape configuration ([`ActivationKeyProperties`])
//! - Monotonic seeds that survive restarts through external storage
//! - Key generation with digit obfuscation ([`ActivationKeyGenerator`])
//! - Serialized issuance for shared generators ([`ActivationKeySequence`])
//!
//! # Key Format
//!
//! With the default shape keys look like `ABCD-7K31-09XW-P4M2-1Z8T`: an
//! optional prefix followed by four components of four characters. Each
//! component holds seed digits (padded with random digits) where one position
//! was swapped for a letter and another for a different digit.
//!
//! # Usage
//!
//! ```
//! use keymint_activation::{ActivationKeyGenerator, ActivationKeyProperties};
//!
//! let properties = ActivationKeyProperties::default();
//! let mut generator = ActivationKeyGenerator::new(&properties);
//!
//! let first = generator.create_activation_key(None).unwrap();
//! let second = generator.create_activation_key(Some(first.seed())).unwrap();
//! assert_eq!(second.seed().value(), first.seed().value() + 1);
//! ```

mod charmap;
mod config;
mod error;
mod generator;
mod key;
mod properties;
mod seed;
mod sequence;

pub use charmap::CharacterMap;
pub use config::KeyShapeConfig;
pub use error::{ActivationKeyError, ActivationKeyResult};
pub use generator::{ActivationKeyGenerator, MAX_RANDOM_SEED, MIN_RANDOM_SEED};
pub use key::ActivationKey;
pub use properties::{
    default_number_to_letter_map, default_number_to_number_map, ActivationKeyProperties,
    COMPONENT_COUNT_RANGE, COMPONENT_LENGTH_RANGE, PREFIX_LENGTH_RANGE,
};
pub use seed::ActivationKeySeed;
pub use sequence::ActivationKeySequence;
