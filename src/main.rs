use std::{path::PathBuf, process::exit, time::Instant};

use clap::Parser;
use fuzzer_task_generator::{generate_configuration, CliOptions, Dependencies, CONFIG_DIRECTORY};
use tracing::{event, Level};
use tracing_subscriber::fmt::format;

/// Generate fuzzer tests to run in evergreen.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Location of expansions file generated by evergreen.
    #[arg(long)]
    expansion_file: Option<PathBuf>,

    /// Number of files to generate per task.
    #[arg(long)]
    num_files: Option<u64>,

    /// Number of tasks to generate.
    #[arg(long)]
    num_tasks: Option<u64>,

    /// Arguments to pass to resmoke.
    #[arg(long, allow_hyphen_values = true)]
    resmoke_args: Option<String>,

    /// npm command to run for fuzzer.
    #[arg(long)]
    npm_command: Option<String>,

    /// Options to pass to jstestfuzz.
    #[arg(long, allow_hyphen_values = true)]
    jstestfuzz_vars: Option<String>,

    /// Name of task to generate.
    #[arg(long)]
    name: Option<String>,

    /// Build variant to generate.
    #[arg(long = "variant")]
    build_variant: Option<String>,

    /// Task path suffix for multipath generated tasks.
    #[arg(long = "use-multipath")]
    task_path_suffix: Option<String>,

    /// continue_on_failure value for generated tasks.
    #[arg(long)]
    continue_on_failure: Option<String>,

    /// should_shuffle value for generated tasks.
    #[arg(long)]
    should_shuffle: Option<String>,

    /// timeout_secs value for generated tasks.
    #[arg(long)]
    timeout_secs: Option<String>,

    /// Directory to write generated configuration to.
    #[arg(long, default_value = CONFIG_DIRECTORY)]
    target_directory: PathBuf,
}

impl From<&Args> for CliOptions {
    fn from(args: &Args) -> Self {
        Self {
            num_files: args.num_files,
            num_tasks: args.num_tasks,
            resmoke_args: args.resmoke_args.clone(),
            npm_command: args.npm_command.clone(),
            jstestfuzz_vars: args.jstestfuzz_vars.clone(),
            name: args.name.clone(),
            build_variant: args.build_variant.clone(),
            continue_on_failure: args.continue_on_failure.clone(),
            should_shuffle: args.should_shuffle.clone(),
            timeout_secs: args.timeout_secs.clone(),
            task_path_suffix: args.task_path_suffix.clone(),
        }
    }
}

/// Configure logging for the command execution.
fn configure_logging() {
    let format = format::json();
    let subscriber = tracing_subscriber::fmt().event_format(format).finish();

    tracing::subscriber::set_global_default(subscriber).unwrap();
}

fn main() {
    let args = Args::parse();
    configure_logging();

    let deps = Dependencies::new();
    let start = Instant::now();
    let result = generate_configuration(
        &deps,
        &CliOptions::from(&args),
        args.expansion_file.as_deref(),
        &args.target_directory,
    );
    event!(
        Level::INFO,
        duration_secs = start.elapsed().as_secs_f64(),
        "generation completed"
    );
    if let Err(err) = result {
        eprintln!("Error encountered during execution: {:?}", err);
        exit(1);
    }
}
