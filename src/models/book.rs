//! Book model and form configuration

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{parse_optional, Entity};
use crate::{
    error::AppResult,
    form::{EntitySchema, FieldRule, FieldSpec, FormValues, SearchField, SearchStrategy},
    render::RowAction,
};

const PRICE_MESSAGE: &str = "Price must be a whole number";
const DATE_MESSAGE: &str = "Publish date must be a valid date";

static BOOK_SCHEMA: Lazy<EntitySchema> = Lazy::new(|| EntitySchema {
    label: "Book",
    endpoint: "/api/books",
    update_method: Method::PATCH,
    fields: vec![
        FieldSpec::required("title", "Please enter a title"),
        FieldSpec::required("author", "Please enter an author"),
        FieldSpec::required("isbn", "Please enter an ISBN").with_rule(
            FieldRule::Pattern(Regex::new(r"^[0-9-]{10,17}$").expect("valid ISBN pattern")),
            "Please enter a valid ISBN",
        ),
        FieldSpec::optional("price").with_rule(FieldRule::Integer, PRICE_MESSAGE),
        FieldSpec::optional("publishDate").with_rule(FieldRule::Date, DATE_MESSAGE),
    ],
    search: vec![
        SearchField::new(
            "title",
            SearchStrategy::Server {
                path: "/search/title",
                param: "title",
            },
        ),
        SearchField::new(
            "author",
            SearchStrategy::Server {
                path: "/search/author",
                param: "author",
            },
        ),
    ],
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub publish_date: Option<NaiveDate>,
}

/// Create / update book request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: Option<i64>,
    pub publish_date: Option<NaiveDate>,
}

impl Entity for Book {
    type Request = BookRequest;

    fn schema() -> &'static EntitySchema {
        &BOOK_SCHEMA
    }

    fn request_from_form(values: &FormValues) -> AppResult<BookRequest> {
        Ok(BookRequest {
            title: values.get("title").to_string(),
            author: values.get("author").to_string(),
            isbn: values.get("isbn").to_string(),
            price: parse_optional(values, "price", PRICE_MESSAGE)?,
            publish_date: parse_optional(values, "publishDate", DATE_MESSAGE)?,
        })
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Title", "Author", "ISBN", "Price", "Publish date"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.author.clone(),
            self.isbn.clone(),
            self.price
                .map(group_thousands)
                .unwrap_or_else(|| "Not specified".to_string()),
            self.publish_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "Not specified".to_string()),
        ]
    }

    fn actions() -> &'static [RowAction] {
        &[RowAction::Edit, RowAction::Delete]
    }

    fn to_form(&self) -> FormValues {
        FormValues::collect([
            ("id", self.id.to_string()),
            ("title", self.title.clone()),
            ("author", self.author.clone()),
            ("isbn", self.isbn.clone()),
            ("price", self.price.map(|p| p.to_string()).unwrap_or_default()),
            (
                "publishDate",
                self.publish_date.map(|d| d.to_string()).unwrap_or_default(),
            ),
        ])
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "title" => Some(self.title.clone()),
            "author" => Some(self.author.clone()),
            "isbn" => Some(self.isbn.clone()),
            _ => None,
        }
    }
}

/// `1234567` -> `1,234,567`
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
