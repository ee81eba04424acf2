pub mod fuzzer_tasks;
pub mod generated_suite;
