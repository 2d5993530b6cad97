pub mod dashboard;
pub mod rules;
