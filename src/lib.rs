//! HTTP gateway behind the ceiling studio web app: turns the reporting API's
//! monthly rows into ready-to-render report views and serves the marketing
//! pricing and service pages.

pub mod analytics;
pub mod common;
pub mod config;
pub mod content;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod routes;
pub mod services;

pub use config::{AppState, Settings};
pub use routes::build_router;
