//! REST client for the book and student backends
//!
//! Every call is a single request with a JSON content type. Non-2xx
//! responses are decoded here, once, into [`AppError`] kinds; nothing above
//! this module looks at status codes.

pub mod resource;

use reqwest::Url;

use crate::{
    config::BackendConfig,
    error::{AppError, AppResult},
    models::Entity,
};

pub use resource::Resource;

/// Shared HTTP client bound to one backend
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            tracing::error!("Invalid backend URL {}: {}", config.base_url, e);
            AppError::Request(format!("Invalid backend URL: {}", config.base_url))
        })?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("formdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Client for the collection of `E`, rooted at its schema endpoint
    pub fn resource<E: Entity>(&self) -> Resource<E> {
        let mut root = self.base_url.clone();
        if let Ok(mut segments) = root.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(split_path(E::schema().endpoint));
        }
        Resource::new(self.http.clone(), root)
    }
}

pub(crate) fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
