//! Names referencing items in the mongodb/mongo etc/evergreen.yml.

// Functions for running generated fuzzer tasks.
/// Function to setup a resmoke task.
pub const DO_SETUP: &str = "do setup";
/// Function to do setup for multi-version testing.
pub const DO_MULTIVERSION_SETUP: &str = "do multiversion setup";
/// Function to generated fuzzer tests.
pub const RUN_FUZZER: &str = "run jstestfuzz";
/// Function to run generated tests.
pub const RUN_TESTS: &str = "run tests";

// Tasks
/// Task which creates artifacts needed to execute tests.
pub const COMPILE_TASK: &str = "compile";

// Fuzzer parameters.
/// Name of npm command to run.
pub const NPM_COMMAND: &str = "npm_command";
/// Parameters to pass to fuzzer command.
pub const FUZZER_PARAMETERS: &str = "jstestfuzz_vars";
/// Arguments to pass to resmoke command.
pub const RESMOKE_ARGS: &str = "resmoke_args";
/// Should test execution continue after a failure.
pub const CONTINUE_ON_FAILURE: &str = "continue_on_failure";
/// Should test order to shuffled for execution.
pub const SHOULD_SHUFFLE_TESTS: &str = "should_shuffle";
/// Idle timeout to set for execution.
pub const IDLE_TIMEOUT: &str = "timeout_secs";
/// Suffix of task path used by multipath tasks.
pub const TASK_PATH_SUFFIX: &str = "task_path_suffix";

// Expansions
/// Number of javascript files each fuzzer sub-task should generate.
pub const NUM_FUZZER_FILES: &str = "num_files";
/// Number of sub-tasks the fuzzer should be split into.
pub const NUM_FUZZER_TASKS: &str = "num_tasks";
/// Name of task being generated.
pub const TASK_NAME: &str = "name";
/// Build variant the tasks are being generated for.
pub const BUILD_VARIANT: &str = "build_variant";
