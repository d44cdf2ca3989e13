pub mod api;
pub mod clients;
pub mod config;
pub mod emoji;
pub mod metrics;
pub mod models;
pub mod utils;
