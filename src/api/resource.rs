//! Typed CRUD calls against one entity collection

use std::marker::PhantomData;

use reqwest::{header, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::split_path;
use crate::{
    error::{AppError, AppResult},
    models::Entity,
};

pub struct Resource<E> {
    http: reqwest::Client,
    root: Url,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Resource<E> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            root: self.root.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Resource<E> {
    pub(crate) fn new(http: reqwest::Client, root: Url) -> Self {
        Self {
            http,
            root,
            _entity: PhantomData,
        }
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    /// `GET {root}`
    pub async fn list(&self) -> AppResult<Vec<E>> {
        let url = self.root.clone();
        self.send(self.request(Method::GET, url), "Failed to load records")
            .await
    }

    /// `GET {root}/{id}`
    pub async fn get(&self, id: i64) -> AppResult<E> {
        let url = self.url([id.to_string().as_str()]);
        self.send(self.request(Method::GET, url), "Failed to load record")
            .await
    }

    /// `POST {root}`
    pub async fn create(&self, body: &E::Request) -> AppResult<E> {
        let url = self.root.clone();
        let req = self.request(Method::POST, url).json(body);
        self.send(req, "Failed to create record").await
    }

    /// `PATCH` or `PUT {root}/{id}`, whichever the schema names
    pub async fn update(&self, id: i64, body: &E::Request) -> AppResult<E> {
        let url = self.url([id.to_string().as_str()]);
        let method = E::schema().update_method.clone();
        let req = self.request(method, url).json(body);
        self.send(req, "Failed to update record").await
    }

    /// `DELETE {root}/{id}`. A 404 is reported as an error.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let url = self.url([id.to_string().as_str()]);
        let response = self.request(Method::DELETE, url).send().await?;
        check_status(response, "Failed to delete record").await?;
        Ok(())
    }

    /// `GET {root}{path}?{param}={value}`
    pub async fn search(&self, path: &str, param: &str, value: &str) -> AppResult<Vec<E>> {
        let url = self.url(split_path(path));
        let req = self.request(Method::GET, url).query(&[(param, value)]);
        self.send(req, "Search failed").await
    }

    /// `GET {root}{path}/{value}`, `value` percent-encoded as one segment
    pub async fn find_by(&self, path: &str, value: &str) -> AppResult<E> {
        let url = self.url(split_path(path).chain(std::iter::once(value)));
        self.send(self.request(Method::GET, url), "Search failed")
            .await
    }

    fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.root.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);
        self.http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder, fallback: &str) -> AppResult<T> {
        let response = req.send().await?;
        let response = check_status(response, fallback).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

async fn check_status(response: reqwest::Response, fallback: &str) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    let err = AppError::from_status(status, &body, fallback);
    tracing::error!("{} from {}: {}", status, url, err);
    Err(err)
}
