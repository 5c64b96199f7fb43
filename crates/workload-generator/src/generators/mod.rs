//! Document generators.
//!
//! Both generators are pure functions of the key; the [`Generator`] enum
//! picks one from the workload configuration.

pub mod profile;
pub mod sized;
pub mod states;

use crate::keys::KeyFormat;
use profile::ProfileGenerator;
use sized::SizedGenerator;
use workload_core::{Document, GeneratorConfig};

/// Trait for turning a key into a document.
pub trait DocumentGenerator {
    /// Key encoding that pairs with this generator.
    fn key_format(&self) -> KeyFormat;

    /// Derive the document for `key`.
    fn generate(&self, key: &str) -> Document;
}

/// Generator selected by configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    Sized(SizedGenerator),
    Profile(ProfileGenerator),
}

impl Generator {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        match config {
            GeneratorConfig::Sized {
                indexable_fields,
                value_size,
            } => Generator::Sized(SizedGenerator::new(*indexable_fields, *value_size)),
            GeneratorConfig::Profile { .. } => Generator::Profile(ProfileGenerator),
        }
    }
}

impl DocumentGenerator for Generator {
    fn key_format(&self) -> KeyFormat {
        match self {
            Generator::Sized(g) => g.key_format(),
            Generator::Profile(g) => g.key_format(),
        }
    }

    fn generate(&self, key: &str) -> Document {
        match self {
            Generator::Sized(g) => g.generate(key),
            Generator::Profile(g) => g.generate(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_pairs_key_formats() {
        let sized = Generator::from_config(&GeneratorConfig::default());
        assert_eq!(sized.key_format(), KeyFormat::Hashed);

        let profile = Generator::from_config(&GeneratorConfig::Profile {
            hot_data_percentage: 0,
            hot_access_percentage: 0,
            queries: vec![],
        });
        assert_eq!(profile.key_format(), KeyFormat::Padded);
    }
}
