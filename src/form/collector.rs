//! Raw form input to trimmed field values

use indexmap::IndexMap;
use serde::Serialize;

/// Trimmed field values of one form submission, in submission order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues(IndexMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect raw `(field, value)` pairs, trimming every value.
    pub fn collect<I, K, V>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        Self(
            raw.into_iter()
                .map(|(k, v)| (k.into(), v.as_ref().trim().to_string()))
                .collect(),
        )
    }

    /// Value of `field`, or `""` when the form has no such field
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    /// `None` for absent or empty fields
    pub fn optional(&self, field: &str) -> Option<String> {
        Some(self.get(field))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for FormValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::collect(iter)
    }
}
