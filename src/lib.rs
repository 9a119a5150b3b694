pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use database::ActivityRegistry;
pub use web::build_router;
