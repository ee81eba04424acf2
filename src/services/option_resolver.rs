//! Layered lookup of configuration options.
//!
//! Options can come from the command line or from the evergreen expansion file. Values given on
//! the command line take precedence over the expansion file, which takes precedence over any
//! default.

use std::collections::HashMap;

use anyhow::{bail, Result};

use crate::errors::GeneratorError;

/// A place option values can be looked up from.
pub trait OptionSource {
    /// Lookup the value of the given option.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of option to lookup.
    ///
    /// # Returns
    ///
    /// Value of the option if it was provided.
    fn lookup(&self, name: &str) -> Option<String>;
}

impl OptionSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Determine the value to use for the given option.
///
/// A value counts as provided whenever a source has it, even if it is empty or zero. This lets
/// an explicit `--num-files 0` override the expansion file.
///
/// # Arguments
///
/// * `name` - Name of option to resolve.
/// * `cli_options` - Options provided on the command line.
/// * `file_options` - Options provided by the expansion file.
/// * `required` - Should an error be returned if no value is found.
/// * `default` - Value to use if no source provides one.
///
/// # Returns
///
/// The value to use for the option, or an error if a required option is missing.
pub fn resolve_option(
    name: &str,
    cli_options: &dyn OptionSource,
    file_options: &dyn OptionSource,
    required: bool,
    default: Option<&str>,
) -> Result<Option<String>> {
    if let Some(value) = cli_options.lookup(name) {
        return Ok(Some(value));
    }

    if let Some(value) = file_options.lookup(name) {
        return Ok(Some(value));
    }

    if required {
        bail!(GeneratorError::MissingRequiredOption {
            name: name.to_string()
        });
    }

    Ok(default.map(|d| d.to_string()))
}

/// Determine the value of an option that must be provided and cannot be empty.
///
/// Evergreen expands unset variables to an empty string, so an empty value on the command line
/// falls through to the expansion file instead of overriding it.
///
/// # Arguments
///
/// * `name` - Name of option to resolve.
/// * `cli_options` - Options provided on the command line.
/// * `file_options` - Options provided by the expansion file.
///
/// # Returns
///
/// The value to use for the option.
pub fn resolve_required_option(
    name: &str,
    cli_options: &dyn OptionSource,
    file_options: &dyn OptionSource,
) -> Result<String> {
    let value = [cli_options, file_options]
        .iter()
        .filter_map(|source| source.lookup(name))
        .find(|value| !value.is_empty());

    match value {
        Some(value) => Ok(value),
        None => bail!(GeneratorError::MissingRequiredOption {
            name: name.to_string()
        }),
    }
}

/// Determine the value of an option that falls back to a default.
///
/// # Arguments
///
/// * `name` - Name of option to resolve.
/// * `cli_options` - Options provided on the command line.
/// * `file_options` - Options provided by the expansion file.
/// * `default` - Value to use if no source provides one.
///
/// # Returns
///
/// The value to use for the option.
pub fn resolve_default_option(
    name: &str,
    cli_options: &dyn OptionSource,
    file_options: &dyn OptionSource,
    default: &str,
) -> Result<String> {
    Ok(resolve_option(name, cli_options, file_options, false, Some(default))?
        .unwrap_or_else(|| default.to_string()))
}

/// Determine the value of a required option that must be an unsigned integer.
///
/// # Arguments
///
/// * `name` - Name of option to resolve.
/// * `cli_options` - Options provided on the command line.
/// * `file_options` - Options provided by the expansion file.
///
/// # Returns
///
/// The parsed value of the option.
pub fn resolve_required_u64(
    name: &str,
    cli_options: &dyn OptionSource,
    file_options: &dyn OptionSource,
) -> Result<u64> {
    let value = resolve_required_option(name, cli_options, file_options)?;
    let parsed = value
        .trim()
        .parse::<u64>()
        .map_err(|source| GeneratorError::TypeConversion {
            name: name.to_string(),
            value: value.clone(),
            source,
        })?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use rstest::rstest;

    fn source(values: Vec<(&str, &str)>) -> HashMap<String, String> {
        values
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case(Some("x"), Some("y"), Some("z"), Some("x"))]
    #[case(None, Some("y"), Some("z"), Some("y"))]
    #[case(None, None, Some("z"), Some("z"))]
    #[case(None, None, None, None)]
    #[case(Some("0"), Some("y"), Some("z"), Some("0"))]
    #[case(Some(""), Some("y"), Some("z"), Some(""))]
    #[case(None, Some(""), Some("z"), Some(""))]
    fn test_resolve_option_precedence(
        #[case] cli_value: Option<&str>,
        #[case] file_value: Option<&str>,
        #[case] default: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let cli_options = source(cli_value.map(|v| ("opt", v)).into_iter().collect());
        let file_options = source(file_value.map(|v| ("opt", v)).into_iter().collect());

        let value = resolve_option("opt", &cli_options, &file_options, false, default).unwrap();

        assert_eq!(value, expected.map(|e| e.to_string()));
    }

    #[test]
    fn test_resolve_option_should_fail_if_required_and_missing() {
        let cli_options: HashMap<String, String> = hashmap! {};
        let file_options = hashmap! {
            "other".to_string() => "value".to_string(),
        };

        let result = resolve_option("opt", &cli_options, &file_options, true, None);

        let err = result.unwrap_err();
        match err.downcast_ref::<GeneratorError>() {
            Some(GeneratorError::MissingRequiredOption { name }) => assert_eq!(name, "opt"),
            _ => panic!("Unexpected error: {:?}", err),
        }
    }

    #[test]
    fn test_resolve_option_should_not_use_default_if_required() {
        let cli_options: HashMap<String, String> = hashmap! {};
        let file_options: HashMap<String, String> = hashmap! {};

        let result = resolve_option("opt", &cli_options, &file_options, true, Some("z"));

        assert!(result.is_err());
    }

    #[rstest]
    #[case(Some("cli"), Some("file"), Some("cli"))]
    #[case(Some("cli"), None, Some("cli"))]
    #[case(None, Some("file"), Some("file"))]
    #[case(Some(""), Some("file"), Some("file"))]
    #[case(Some(""), Some(""), None)]
    #[case(None, Some(""), None)]
    #[case(Some(""), None, None)]
    #[case(None, None, None)]
    fn test_resolve_required_option(
        #[case] cli_value: Option<&str>,
        #[case] file_value: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let cli_options = source(cli_value.map(|v| ("opt", v)).into_iter().collect());
        let file_options = source(file_value.map(|v| ("opt", v)).into_iter().collect());

        let result = resolve_required_option("opt", &cli_options, &file_options);

        match expected {
            Some(expected) => assert_eq!(result.unwrap(), expected),
            None => assert!(matches!(
                result.unwrap_err().downcast_ref::<GeneratorError>(),
                Some(GeneratorError::MissingRequiredOption { .. })
            )),
        }
    }

    #[test]
    fn test_resolve_default_option_should_use_default_if_missing() {
        let cli_options: HashMap<String, String> = hashmap! {};
        let file_options: HashMap<String, String> = hashmap! {};

        let value =
            resolve_default_option("npm_command", &cli_options, &file_options, "jstestfuzz")
                .unwrap();

        assert_eq!(value, "jstestfuzz");
    }

    #[rstest]
    #[case("42", 42)]
    #[case("0", 0)]
    #[case(" 7 ", 7)]
    fn test_resolve_required_u64_should_parse_value(#[case] value: &str, #[case] expected: u64) {
        let cli_options: HashMap<String, String> = hashmap! {};
        let file_options = source(vec![("num_tasks", value)]);

        let parsed = resolve_required_u64("num_tasks", &cli_options, &file_options).unwrap();

        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("five")]
    #[case("-3")]
    #[case("1.5")]
    fn test_resolve_required_u64_should_fail_on_non_integer(#[case] value: &str) {
        let cli_options = source(vec![("num_tasks", value)]);
        let file_options: HashMap<String, String> = hashmap! {};

        let result = resolve_required_u64("num_tasks", &cli_options, &file_options);

        let err = result.unwrap_err();
        match err.downcast_ref::<GeneratorError>() {
            Some(GeneratorError::TypeConversion { name, value: v, .. }) => {
                assert_eq!(name, "num_tasks");
                assert_eq!(v, value);
            }
            _ => panic!("Unexpected error: {:?}", err),
        }
    }
}
