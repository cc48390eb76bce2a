pub mod estimate_list;
pub mod estimation;
pub mod estimation_types;
pub mod pert;
pub mod report_file;
pub mod tasks_yaml;
