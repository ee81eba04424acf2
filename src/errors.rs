//! Errors that can occur while generating fuzzer configuration.

use std::{num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Failures that abort task generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// An option marked as required was not found in any source.
    #[error("{name} must be specified")]
    MissingRequiredOption { name: String },

    /// The expansion file could not be read.
    #[error("Could not read expansion file '{}'", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The expansion file did not contain a valid yaml mapping.
    #[error("Could not parse expansion file '{}'", path.display())]
    FileParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An option expected to be an integer held some other value.
    #[error("Expected an integer for '{name}', got '{value}'")]
    TypeConversion {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Generated configuration could not be written to disk.
    #[error("Could not write generated configuration to '{}'", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
