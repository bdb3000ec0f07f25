pub mod dashboard;
pub mod marketing;
pub mod report_views;
pub mod reports;
