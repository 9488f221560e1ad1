pub mod classifier;
pub mod dashboard;
pub mod report;
