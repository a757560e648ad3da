//! Per-entity form configuration: fields, rules, endpoint and search fields

use regex::Regex;
use reqwest::Method;

/// Format check applied to a non-empty field value
#[derive(Debug, Clone)]
pub enum FieldRule {
    Pattern(Regex),
    Email,
    Integer,
    /// Calendar date as `YYYY-MM-DD`
    Date,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: &'static str,
    /// Message shown when a required field is empty; `None` for optional fields
    pub required: Option<&'static str>,
    pub rule: Option<(FieldRule, &'static str)>,
}

impl FieldSpec {
    pub fn required(key: &'static str, message: &'static str) -> Self {
        Self {
            key,
            required: Some(message),
            rule: None,
        }
    }

    pub fn optional(key: &'static str) -> Self {
        Self {
            key,
            required: None,
            rule: None,
        }
    }

    pub fn with_rule(mut self, rule: FieldRule, message: &'static str) -> Self {
        self.rule = Some((rule, message));
        self
    }
}

/// How a search on one field reaches the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStrategy {
    /// `GET {endpoint}{path}?{param}={query}`
    Server {
        path: &'static str,
        param: &'static str,
    },
    /// `GET {endpoint}{path}/{query}`; 404 means no match, any other failure
    /// falls back to a partial match over the full list
    ExactThenPartial { path: &'static str },
    /// Fetch the full list and filter by case-insensitive substring
    Client,
}

#[derive(Debug, Clone)]
pub struct SearchField {
    pub key: &'static str,
    pub strategy: SearchStrategy,
}

impl SearchField {
    pub fn new(key: &'static str, strategy: SearchStrategy) -> Self {
        Self { key, strategy }
    }
}

/// Everything the generic form component needs to know about one entity type
#[derive(Debug, Clone)]
pub struct EntitySchema {
    /// Display name, e.g. "Book"
    pub label: &'static str,
    /// Collection path relative to the backend base URL, e.g. `/api/books`
    pub endpoint: &'static str,
    pub update_method: Method,
    /// Validation order is the order of this list
    pub fields: Vec<FieldSpec>,
    pub search: Vec<SearchField>,
}

impl EntitySchema {
    pub fn search_field(&self, key: &str) -> Option<&SearchField> {
        self.search.iter().find(|f| f.key == key)
    }
}
