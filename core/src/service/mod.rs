pub mod aggregation;
pub mod dashboard;
pub mod dto;
pub mod frequency;
