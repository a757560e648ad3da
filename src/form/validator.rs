//! Field validation against an entity schema
//!
//! Required fields are checked first, in schema order, then format rules in
//! schema order. The first failing rule decides the message.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::collector::FormValues;
use super::schema::{EntitySchema, FieldRule};
use crate::error::{AppError, AppResult};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn validate(schema: &EntitySchema, values: &FormValues) -> AppResult<()> {
    for spec in &schema.fields {
        if let Some(message) = spec.required {
            if values.get(spec.key).is_empty() {
                return Err(AppError::validation(spec.key, message));
            }
        }
    }

    for spec in &schema.fields {
        let Some((rule, message)) = &spec.rule else {
            continue;
        };
        let value = values.get(spec.key);
        // optional fields are only checked when filled in
        if value.is_empty() {
            continue;
        }
        if !rule.accepts(value) {
            return Err(AppError::validation(spec.key, *message));
        }
    }

    Ok(())
}

impl FieldRule {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FieldRule::Pattern(re) => re.is_match(value),
            FieldRule::Email => EMAIL_PATTERN.is_match(value),
            FieldRule::Integer => value.parse::<i64>().is_ok(),
            FieldRule::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        }
    }
}
