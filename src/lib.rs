//! Treklog Server
//!
//! A REST JSON API for logging travels, hikes and outdoor activities,
//! with per-user dashboard statistics aggregated from locations,
//! visits, activities and route collections.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
