use shrub_rs::models::{
    task::{EvgTask, TaskRef},
    variant::DisplayTask,
};

use crate::utils::task_name::name_gen_task;

/// Interface for representing a generated task.
pub trait GeneratedSuite: Sync + Send {
    /// Get the display name to use for the generated task.
    fn display_name(&self) -> String;

    /// Get the list of sub-tasks that comprise the generated task.
    fn sub_tasks(&self) -> Vec<EvgTask>;

    /// Build a shrub display task for this generated task.
    ///
    /// The display task groups all the sub-tasks together with the "_gen" task that created them.
    fn build_display_task(&self) -> DisplayTask {
        let display_name = self.display_name();
        let mut execution_tasks: Vec<String> = self
            .sub_tasks()
            .iter()
            .map(|s| s.name.to_string())
            .collect();
        execution_tasks.push(name_gen_task(&display_name));

        DisplayTask {
            name: display_name,
            execution_tasks,
        }
    }

    /// Build shrub task references for the sub-tasks of this generated task.
    fn build_task_ref(&self) -> Vec<TaskRef> {
        self.sub_tasks()
            .iter()
            .map(|s| s.get_reference(None, None))
            .collect()
    }
}
