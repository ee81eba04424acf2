//! Configuration for generating fuzzer tasks.

use std::path::Path;

use anyhow::Result;
use tracing::{event, Level};

use crate::{
    evergreen_names::{
        BUILD_VARIANT, CONTINUE_ON_FAILURE, FUZZER_PARAMETERS, IDLE_TIMEOUT, NPM_COMMAND,
        NUM_FUZZER_FILES, NUM_FUZZER_TASKS, RESMOKE_ARGS, SHOULD_SHUFFLE_TESTS, TASK_NAME,
        TASK_PATH_SUFFIX,
    },
    expansions::EvgExpansions,
    services::option_resolver::{
        resolve_default_option, resolve_option, resolve_required_option, resolve_required_u64,
        OptionSource,
    },
};

const DEFAULT_NPM_COMMAND: &str = "jstestfuzz";
const DEFAULT_CONTINUE_ON_FAILURE: &str = "false";
const DEFAULT_SHOULD_SHUFFLE: &str = "false";
const DEFAULT_TIMEOUT_SECS: &str = "1800";

/// Options provided on the command line.
///
/// Every option is optional here; anything not given falls back to the expansion file.
#[derive(Debug, Default, Clone)]
pub struct CliOptions {
    pub num_files: Option<u64>,
    pub num_tasks: Option<u64>,
    pub resmoke_args: Option<String>,
    pub npm_command: Option<String>,
    pub jstestfuzz_vars: Option<String>,
    pub name: Option<String>,
    pub build_variant: Option<String>,
    pub continue_on_failure: Option<String>,
    pub should_shuffle: Option<String>,
    pub timeout_secs: Option<String>,
    pub task_path_suffix: Option<String>,
}

impl OptionSource for CliOptions {
    fn lookup(&self, name: &str) -> Option<String> {
        match name {
            NUM_FUZZER_FILES => self.num_files.map(|n| n.to_string()),
            NUM_FUZZER_TASKS => self.num_tasks.map(|n| n.to_string()),
            RESMOKE_ARGS => self.resmoke_args.clone(),
            NPM_COMMAND => self.npm_command.clone(),
            FUZZER_PARAMETERS => self.jstestfuzz_vars.clone(),
            TASK_NAME => self.name.clone(),
            BUILD_VARIANT => self.build_variant.clone(),
            CONTINUE_ON_FAILURE => self.continue_on_failure.clone(),
            SHOULD_SHUFFLE_TESTS => self.should_shuffle.clone(),
            IDLE_TIMEOUT => self.timeout_secs.clone(),
            TASK_PATH_SUFFIX => self.task_path_suffix.clone(),
            _ => None,
        }
    }
}

/// Resolved options describing how the fuzzer should be generated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigOptions {
    /// Number of javascript files fuzzer should generate.
    pub num_files: u64,
    /// Number of sub-tasks fuzzer should generate.
    pub num_tasks: u64,
    /// Arguments to pass to resmoke invocation.
    pub resmoke_args: String,
    /// NPM command to perform fuzzer execution.
    pub npm_command: String,
    /// Arguments to pass to fuzzer invocation.
    pub jstestfuzz_vars: String,
    /// Name of task being generated.
    pub name: String,
    /// Name of build variant being generated on.
    pub variant: String,
    /// Should generated tests continue running after hitting error.
    pub continue_on_failure: String,
    /// Should tests be executed out of order.
    pub should_shuffle: String,
    /// Timeout before test execution is considered hung.
    pub timeout_secs: String,
    /// Task path suffix for multipath tasks, multiversion setup is done when set.
    pub use_multipath: Option<String>,
}

impl ConfigOptions {
    /// Build the configuration from the command line and an optional expansion file.
    ///
    /// Command line options override expansion file options.
    ///
    /// # Arguments
    ///
    /// * `cli_options` - Options specified on the command line.
    /// * `expansion_file` - Expansion file to read options from.
    ///
    /// # Returns
    ///
    /// Configuration to generate the fuzzer with.
    pub fn build(cli_options: &CliOptions, expansion_file: Option<&Path>) -> Result<Self> {
        let expansions = match expansion_file {
            Some(path) => EvgExpansions::from_yaml_file(path)?,
            None => EvgExpansions::default(),
        };

        Self::from_sources(cli_options, &expansions)
    }

    /// Resolve each option from the given sources.
    ///
    /// # Arguments
    ///
    /// * `cli_options` - Options specified on the command line.
    /// * `file_options` - Options specified in the expansion file.
    ///
    /// # Returns
    ///
    /// Configuration to generate the fuzzer with.
    pub fn from_sources(
        cli_options: &dyn OptionSource,
        file_options: &dyn OptionSource,
    ) -> Result<Self> {
        let options = Self {
            num_files: resolve_required_u64(NUM_FUZZER_FILES, cli_options, file_options)?,
            num_tasks: resolve_required_u64(NUM_FUZZER_TASKS, cli_options, file_options)?,
            resmoke_args: resolve_default_option(RESMOKE_ARGS, cli_options, file_options, "")?,
            npm_command: resolve_default_option(
                NPM_COMMAND,
                cli_options,
                file_options,
                DEFAULT_NPM_COMMAND,
            )?,
            jstestfuzz_vars: resolve_default_option(
                FUZZER_PARAMETERS,
                cli_options,
                file_options,
                "",
            )?,
            name: resolve_required_option(TASK_NAME, cli_options, file_options)?,
            variant: resolve_required_option(BUILD_VARIANT, cli_options, file_options)?,
            continue_on_failure: resolve_default_option(
                CONTINUE_ON_FAILURE,
                cli_options,
                file_options,
                DEFAULT_CONTINUE_ON_FAILURE,
            )?,
            should_shuffle: resolve_default_option(
                SHOULD_SHUFFLE_TESTS,
                cli_options,
                file_options,
                DEFAULT_SHOULD_SHUFFLE,
            )?,
            timeout_secs: resolve_default_option(
                IDLE_TIMEOUT,
                cli_options,
                file_options,
                DEFAULT_TIMEOUT_SECS,
            )?,
            // An empty suffix means multipath is not in use.
            use_multipath: resolve_option(TASK_PATH_SUFFIX, cli_options, file_options, false, None)?
                .filter(|suffix| !suffix.is_empty()),
        };

        event!(
            Level::INFO,
            task_name = options.name.as_str(),
            variant = options.variant.as_str(),
            num_tasks = options.num_tasks,
            num_files = options.num_files,
            "Resolved fuzzer configuration"
        );

        Ok(options)
    }

    /// Determine if the generated tasks need multiversion setup.
    pub fn is_multipath(&self) -> bool {
        self.use_multipath.is_some()
    }
}
