//! Utilities for working with task names.

const GEN_SUFFIX: &str = "_gen";

/// Generate a name for a generated task.
///
/// The index is zero-padded so that names sort in the same order as their indexes.
///
/// # Arguments
///
/// * `display_name` - Name of parent task being generated.
/// * `sub_task_index` - Index of sub-task being named.
/// * `total_tasks` - Total number of sub-tasks generated for this parent task.
pub fn name_generated_task(display_name: &str, sub_task_index: u64, total_tasks: u64) -> String {
    let alignment = (total_tasks as f64).log10().ceil() as usize;
    format!(
        "{}_{:0fill$}",
        display_name,
        sub_task_index,
        fill = alignment
    )
}

/// Name of the task that generates the sub-tasks of the given task.
///
/// # Arguments
///
/// * `display_name` - Name of parent task being generated.
///
/// # Returns
///
/// Name of task with `_gen` appended.
pub fn name_gen_task(display_name: &str) -> String {
    format!("{}{}", display_name, GEN_SUFFIX)
}
