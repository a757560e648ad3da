//! Formdesk
//!
//! Form handling for the book and student REST backends: field collection,
//! validation, a typed CRUD client, HTML table rendering and the overlay and
//! notice state around them.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod render;
pub mod services;
pub mod ui;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorKind};

/// Application state shared by the front end
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: services::Services,
}

impl AppState {
    pub fn new(config: AppConfig, notifier: Arc<dyn ui::Notifier>) -> AppResult<Self> {
        let api = api::ApiClient::new(&config.backend)?;
        let services = services::Services::new(&api, notifier, &config.ui);
        Ok(Self {
            config: Arc::new(config),
            services,
        })
    }
}
