pub mod calendar;
pub mod estimate;
pub mod project;
