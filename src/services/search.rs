//! Search by field
//!
//! Fields are tried in the order the entity schema lists them; the first one
//! with a non-empty query decides the field, whatever order the caller gave.
//! The field's strategy decides whether the backend or the client matches.

use crate::{
    api::Resource,
    error::{AppError, AppResult},
    form::{EntitySchema, SearchField, SearchStrategy},
    models::Entity,
};

/// Field queries as entered in the search form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    fields: Vec<(String, String)>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, query: impl AsRef<str>) -> Self {
        self.fields
            .push((field.into(), query.as_ref().trim().to_string()));
        self
    }

    /// Non-empty query entered for `field`
    pub fn query(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, q)| f == field && !q.is_empty())
            .map(|(_, q)| q.as_str())
    }

    /// Pick the search field by schema priority.
    ///
    /// A non-empty query for a field the schema cannot search by is rejected.
    pub fn active<'s>(
        &self,
        schema: &'s EntitySchema,
    ) -> AppResult<Option<(&'s SearchField, &str)>> {
        if let Some((field, _)) = self
            .fields
            .iter()
            .find(|(f, q)| !q.is_empty() && schema.search_field(f).is_none())
        {
            return Err(AppError::validation(
                "search",
                format!("Cannot search by {}", field),
            ));
        }

        Ok(schema
            .search
            .iter()
            .find_map(|spec| self.query(spec.key).map(|q| (spec, q))))
    }
}

/// Run the search. `Ok(None)` means every query was empty and the caller
/// should show the full list.
pub async fn run<E: Entity>(
    resource: &Resource<E>,
    criteria: &SearchCriteria,
) -> AppResult<Option<Vec<E>>> {
    let Some((spec, query)) = criteria.active(E::schema())? else {
        return Ok(None);
    };
    let field = spec.key;

    tracing::debug!("searching {} by {} = {:?}", E::schema().label, field, query);

    let rows = match &spec.strategy {
        SearchStrategy::Server { path, param } => resource.search(path, param, query).await?,
        SearchStrategy::ExactThenPartial { path } => match resource.find_by(path, query).await {
            Ok(record) => vec![record],
            Err(AppError::NotFound(_)) => Vec::new(),
            Err(e) => {
                tracing::warn!("exact lookup by {} failed ({}), trying partial match", field, e);
                filter_partial(resource.list().await?, field, query)
            }
        },
        SearchStrategy::Client => filter_partial(resource.list().await?, field, query),
    };

    Ok(Some(rows))
}

/// Case-insensitive substring match on `field`
pub fn filter_partial<E: Entity>(records: Vec<E>, field: &str, query: &str) -> Vec<E> {
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| {
            r.field_text(field)
                .map(|t| t.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}
