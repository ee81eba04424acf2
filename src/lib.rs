//! Entry point into the fuzzer generation logic.
//!
//! This code resolves how a fuzzer should be split up from the command line and evergreen
//! expansions, then creates task definitions for each sub-task along with a build variant and
//! display task that reference them.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Result;
use shrub_rs::models::project::EvgProject;
use task_types::fuzzer_tasks::{build_evg_project, GenFuzzerService, GenFuzzerServiceImpl};
use tracing::{event, Level};
use utils::fs_service::{FsService, FsServiceImpl};

pub use configuration::{CliOptions, ConfigOptions};
pub use errors::GeneratorError;

mod configuration;
mod errors;
mod evergreen_names;
mod expansions;
mod services;
mod task_types;
mod utils;

/// Default directory to place generated configuration in.
pub const CONFIG_DIRECTORY: &str = "generated_resmoke_config";

/// Collection of services needed for execution.
#[derive(Clone)]
pub struct Dependencies {
    gen_fuzzer_service: Arc<dyn GenFuzzerService>,
    fs_service: Arc<dyn FsService>,
}

impl Dependencies {
    /// Create a new set of dependency instances.
    pub fn new() -> Self {
        Self {
            gen_fuzzer_service: Arc::new(GenFuzzerServiceImpl::new()),
            fs_service: Arc::new(FsServiceImpl::new()),
        }
    }
}

impl Default for Dependencies {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the evergreen configuration for a fuzzer.
///
/// # Arguments
///
/// * `deps` - Dependencies needed to perform generation.
/// * `options` - Resolved options describing the fuzzer.
///
/// # Returns
///
/// Shrub project containing the generated sub-tasks and build variant.
pub fn generate_evg_project(deps: &Dependencies, options: &ConfigOptions) -> EvgProject {
    let generated_suite = deps.gen_fuzzer_service.generate_fuzzer_task(options);
    build_evg_project(options, generated_suite.as_ref())
}

/// Create the evergreen configuration for a fuzzer and write it to `<target_directory>/<name>.json`.
///
/// Nothing is written if the configuration cannot be resolved.
///
/// # Arguments
///
/// * `deps` - Dependencies needed to perform generation.
/// * `cli_options` - Options provided on the command line.
/// * `expansion_file` - Evergreen expansion file to read options not given on the command line.
/// * `target_directory` - Directory to store generated configuration.
///
/// # Returns
///
/// Path to the written configuration file.
pub fn generate_configuration(
    deps: &Dependencies,
    cli_options: &CliOptions,
    expansion_file: Option<&Path>,
    target_directory: &Path,
) -> Result<PathBuf> {
    let options = ConfigOptions::build(cli_options, expansion_file)?;
    let gen_evg_project = generate_evg_project(deps, &options);
    // Go through `Value` so map keys are always written in sorted order.
    let contents = serde_json::to_string_pretty(&serde_json::to_value(&gen_evg_project)?)?;

    deps.fs_service.ensure_directory(target_directory)?;
    let mut config_file = target_directory.to_path_buf();
    config_file.push(format!("{}.json", options.name));
    deps.fs_service.write_file(&config_file, &contents)?;

    event!(
        Level::INFO,
        file = config_file.display().to_string(),
        num_tasks = gen_evg_project.tasks.len(),
        "Wrote generated configuration"
    );
    Ok(config_file)
}
