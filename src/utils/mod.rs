pub mod fs_service;
pub mod task_name;
