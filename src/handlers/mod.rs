pub mod dashboard;
pub mod marketing;
pub mod reports;
