//! Data models for Formdesk
//!
//! Entity shapes are owned by the backend; these types mirror its JSON.

pub mod book;
pub mod student;

use maud::Markup;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::AppResult,
    form::{EntitySchema, FormValues},
    render::{self, RowAction},
};

// Re-export commonly used types
pub use book::{Book, BookRequest};
pub use student::{DetailRequest, Student, StudentDetail, StudentRequest};

/// A record type managed through the generic form component
pub trait Entity: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Body of create and update requests
    type Request: Serialize + Send + Sync;

    fn schema() -> &'static EntitySchema;

    /// Build the request body from already validated form values.
    fn request_from_form(values: &FormValues) -> AppResult<Self::Request>;

    fn id(&self) -> i64;

    /// Table header labels, without the trailing actions column
    fn columns() -> &'static [&'static str];

    /// Plain-text cells in `columns()` order
    fn cells(&self) -> Vec<String>;

    /// Row triggers, in display order
    fn actions() -> &'static [RowAction];

    /// Form values used to prefill the edit form
    fn to_form(&self) -> FormValues;

    /// Text searched by client-side filtering on `field`
    fn field_text(&self, field: &str) -> Option<String>;

    /// Content of the detail overlay
    fn detail_markup(&self) -> Markup {
        render::detail::render_fields(self)
    }
}

/// Parse an optional form field already checked by the validator.
pub(crate) fn parse_optional<T: std::str::FromStr>(
    values: &FormValues,
    field: &'static str,
    message: &str,
) -> AppResult<Option<T>> {
    values
        .optional(field)
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| crate::error::AppError::validation(field, message))
        })
        .transpose()
}
