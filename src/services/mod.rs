pub mod catalog_service;
pub mod dashboard_service;
pub mod report_service;

pub use catalog_service::CatalogService;
pub use dashboard_service::DashboardService;
pub use report_service::ReportService;
