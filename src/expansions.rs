use std::{collections::HashMap, path::Path};

use anyhow::Result;
use serde::Deserialize;
use serde_yaml::Value;
use tracing::{error, warn};

use crate::{errors::GeneratorError, services::option_resolver::OptionSource};

/// Expansions from evergreen used to determine how the fuzzer should be generated.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(from = "HashMap<String, Value>")]
pub struct EvgExpansions {
    expansions: HashMap<String, String>,
}

impl EvgExpansions {
    /// Read evergreen expansions from the given yaml file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to YAML file to read.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| GeneratorError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        match serde_yaml::from_str::<Self>(&contents) {
            Ok(expansions) => Ok(expansions),
            Err(source) => {
                error!(
                    file = path.display().to_string(),
                    contents = &contents,
                    "Failed to parse yaml for expansions from file",
                );
                Err(GeneratorError::FileParse {
                    path: path.to_path_buf(),
                    source,
                }
                .into())
            }
        }
    }
}

impl From<HashMap<String, Value>> for EvgExpansions {
    /// Build expansions from parsed yaml values.
    ///
    /// Scalars are kept in their string form. Null values are treated as if the expansion was not
    /// set.
    fn from(raw_expansions: HashMap<String, Value>) -> Self {
        let expansions = raw_expansions
            .into_iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    Value::Null => None,
                    _ => {
                        warn!(expansion = key.as_str(), "Ignoring non-scalar expansion");
                        None
                    }
                };
                value.map(|v| (key, v))
            })
            .collect();

        Self { expansions }
    }
}

impl OptionSource for EvgExpansions {
    fn lookup(&self, name: &str) -> Option<String> {
        self.expansions.get(name).cloned()
    }
}
