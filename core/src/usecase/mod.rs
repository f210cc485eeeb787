pub mod dashboard;
pub mod generate;
pub mod process;
