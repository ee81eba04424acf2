use std::collections::HashMap;

use maplit::hashmap;
use shrub_rs::models::{
    commands::{fn_call, fn_call_with_params, EvgCommand},
    params::ParamValue,
    project::EvgProject,
    task::{EvgTask, TaskDependency},
    variant::BuildVariant,
};
use tracing::{event, Level};

use crate::{
    configuration::ConfigOptions,
    evergreen_names::{
        COMPILE_TASK, CONTINUE_ON_FAILURE, DO_MULTIVERSION_SETUP, DO_SETUP, FUZZER_PARAMETERS,
        IDLE_TIMEOUT, NPM_COMMAND, RESMOKE_ARGS, RUN_FUZZER, RUN_TESTS, SHOULD_SHUFFLE_TESTS,
        TASK_PATH_SUFFIX,
    },
    utils::task_name::name_generated_task,
};

use super::generated_suite::GeneratedSuite;

impl ConfigOptions {
    /// Create parameters to send to fuzzer to generate appropriate fuzzer tests.
    fn build_fuzzer_parameters(&self) -> HashMap<String, ParamValue> {
        hashmap! {
            FUZZER_PARAMETERS.to_string() => ParamValue::String(format!("--numGeneratedFiles {} {}", self.num_files, self.jstestfuzz_vars)),
            NPM_COMMAND.to_string() => ParamValue::from(self.npm_command.as_str()),
        }
    }

    /// Build the vars to send to tasks in the 'run tests' function.
    ///
    /// # Returns
    ///
    /// Map of arguments to pass to 'run tests' function.
    fn build_run_tests_vars(&self) -> HashMap<String, ParamValue> {
        let task_path_suffix = match &self.use_multipath {
            Some(suffix) => ParamValue::from(suffix.as_str()),
            None => ParamValue::from(false),
        };

        hashmap! {
            CONTINUE_ON_FAILURE.to_string() => ParamValue::from(self.continue_on_failure.as_str()),
            RESMOKE_ARGS.to_string() => ParamValue::from(self.resmoke_args.as_str()),
            SHOULD_SHUFFLE_TESTS.to_string() => ParamValue::from(self.should_shuffle.as_str()),
            TASK_PATH_SUFFIX.to_string() => task_path_suffix,
            IDLE_TIMEOUT.to_string() => ParamValue::from(self.timeout_secs.as_str()),
        }
    }

    /// Build the dependency structure to use for the generated sub-tasks.
    fn get_dependencies(&self) -> Vec<TaskDependency> {
        vec![TaskDependency {
            name: COMPILE_TASK.to_string(),
            variant: None,
        }]
    }
}

/// A Generated Fuzzer task.
#[derive(Debug, Default)]
pub struct FuzzerTask {
    /// Name for generated task.
    pub task_name: String,
    /// Sub-tasks comprising generated task.
    pub sub_tasks: Vec<EvgTask>,
}

impl GeneratedSuite for FuzzerTask {
    /// Get the display name to use for the generated task.
    fn display_name(&self) -> String {
        self.task_name.to_string()
    }

    /// Get the list of sub-tasks that comprise the generated task.
    fn sub_tasks(&self) -> Vec<EvgTask> {
        self.sub_tasks.clone()
    }
}

/// A service for generating fuzzer tasks.
pub trait GenFuzzerService: Sync + Send {
    /// Generate a fuzzer task.
    fn generate_fuzzer_task(&self, options: &ConfigOptions) -> Box<dyn GeneratedSuite>;
}

/// Implementation of the GenFuzzerService.
pub struct GenFuzzerServiceImpl {}

impl GenFuzzerServiceImpl {
    /// Create a new instance of the GenFuzzerService.
    pub fn new() -> Self {
        Self {}
    }
}

impl GenFuzzerService for GenFuzzerServiceImpl {
    /// Generate a fuzzer task based on the given options.
    ///
    /// # Arguments
    ///
    /// * `options` - Options describing how to generate fuzzer.
    ///
    /// # Returns
    ///
    /// GeneratedSuite with details of how shrub task for the suite is built.
    fn generate_fuzzer_task(&self, options: &ConfigOptions) -> Box<dyn GeneratedSuite> {
        event!(
            Level::INFO,
            task_name = options.name.as_str(),
            num_tasks = options.num_tasks,
            "Generating fuzzer"
        );

        let sub_tasks = (0..options.num_tasks)
            .map(|i| build_fuzzer_sub_task(i, options))
            .collect();

        Box::new(FuzzerTask {
            task_name: options.name.to_string(),
            sub_tasks,
        })
    }
}

/// Build a sub-task for a fuzzer.
///
/// # Arguments
///
/// * `sub_task_index` - Index of sub-task to build.
/// * `options` - Options for how task should be generated.
///
/// # Returns
///
/// A shrub task to generate the sub-task.
fn build_fuzzer_sub_task(sub_task_index: u64, options: &ConfigOptions) -> EvgTask {
    let sub_task_name = format!(
        "{}_{}",
        name_generated_task(&options.name, sub_task_index, options.num_tasks),
        options.variant
    );

    let mut commands: Vec<EvgCommand> = vec![fn_call(DO_SETUP)];
    if options.is_multipath() {
        commands.push(fn_call(DO_MULTIVERSION_SETUP));
    }
    commands.extend(vec![
        fn_call_with_params(RUN_FUZZER, options.build_fuzzer_parameters()),
        fn_call_with_params(RUN_TESTS, options.build_run_tests_vars()),
    ]);

    EvgTask {
        name: sub_task_name,
        commands: Some(commands),
        depends_on: Some(options.get_dependencies()),
        ..Default::default()
    }
}

/// Build the evergreen project holding the generated fuzzer.
///
/// All sub-tasks are added to a single build variant along with a display task grouping them.
///
/// # Arguments
///
/// * `options` - Options the fuzzer was generated with.
/// * `generated_suite` - Generated fuzzer task.
///
/// # Returns
///
/// Shrub project to be serialized into evergreen configuration.
pub fn build_evg_project(
    options: &ConfigOptions,
    generated_suite: &dyn GeneratedSuite,
) -> EvgProject {
    let build_variant = BuildVariant {
        name: options.variant.clone(),
        tasks: generated_suite.build_task_ref(),
        display_tasks: Some(vec![generated_suite.build_display_task()]),
        ..Default::default()
    };

    EvgProject {
        buildvariants: vec![build_variant],
        tasks: generated_suite.sub_tasks(),
        ..Default::default()
    }
}
