pub mod base_commands;
pub mod completions_cmd;
pub mod estimate_cmd;
pub mod report_format;
