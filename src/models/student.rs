//! Student model and form configuration

use chrono::NaiveDate;
use maud::Markup;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{parse_optional, Entity};
use crate::{
    error::AppResult,
    form::{EntitySchema, FieldRule, FieldSpec, FormValues, SearchField, SearchStrategy},
    render::{render_student_detail, RowAction},
};

const DATE_MESSAGE: &str = "Date of birth must be a valid date";

static STUDENT_SCHEMA: Lazy<EntitySchema> = Lazy::new(|| EntitySchema {
    label: "Student",
    endpoint: "/api/students",
    update_method: Method::PUT,
    fields: vec![
        FieldSpec::required("name", "Please enter a name."),
        FieldSpec::required("studentNumber", "Please enter a student number.").with_rule(
            FieldRule::Pattern(Regex::new(r"^[A-Za-z0-9]+$").expect("valid student number pattern")),
            "Student number may only contain letters and digits.",
        ),
        FieldSpec::required("address", "Please enter an address."),
        FieldSpec::required("phoneNumber", "Please enter a phone number.").with_rule(
            FieldRule::Pattern(Regex::new(r"^[0-9\-\s]+$").expect("valid phone pattern")),
            "Invalid phone number format.",
        ),
        FieldSpec::optional("email").with_rule(FieldRule::Email, "Invalid email format."),
        FieldSpec::optional("dateOfBirth").with_rule(FieldRule::Date, DATE_MESSAGE),
    ],
    search: vec![
        SearchField::new("name", SearchStrategy::Client),
        SearchField::new(
            "studentNumber",
            SearchStrategy::ExactThenPartial { path: "/number" },
        ),
        SearchField::new("address", SearchStrategy::Client),
    ],
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub student_number: String,
    #[serde(default)]
    pub detail: Option<StudentDetail>,
}

/// Contact details attached to a student; optional in the backend schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetail {
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

/// Create / update student request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    pub name: String,
    pub student_number: String,
    pub detail_request: DetailRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRequest {
    pub address: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl From<DetailRequest> for StudentDetail {
    fn from(req: DetailRequest) -> Self {
        Self {
            address: req.address,
            phone_number: req.phone_number,
            email: req.email,
            date_of_birth: req.date_of_birth,
        }
    }
}

impl Entity for Student {
    type Request = StudentRequest;

    fn schema() -> &'static EntitySchema {
        &STUDENT_SCHEMA
    }

    fn request_from_form(values: &FormValues) -> AppResult<StudentRequest> {
        Ok(StudentRequest {
            name: values.get("name").to_string(),
            student_number: values.get("studentNumber").to_string(),
            detail_request: DetailRequest {
                address: values.get("address").to_string(),
                phone_number: values.get("phoneNumber").to_string(),
                email: values.optional("email"),
                date_of_birth: parse_optional(values, "dateOfBirth", DATE_MESSAGE)?,
            },
        })
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn columns() -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "Student number",
            "Address",
            "Phone",
            "Email",
            "Date of birth",
        ]
    }

    fn cells(&self) -> Vec<String> {
        let dash = || "-".to_string();
        let detail = self.detail.as_ref();
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.student_number.clone(),
            detail.map(|d| d.address.clone()).unwrap_or_else(dash),
            detail.map(|d| d.phone_number.clone()).unwrap_or_else(dash),
            detail
                .and_then(|d| d.email.clone())
                .unwrap_or_else(dash),
            detail
                .and_then(|d| d.date_of_birth)
                .map(|d| d.to_string())
                .unwrap_or_else(dash),
        ]
    }

    fn actions() -> &'static [RowAction] {
        &[RowAction::Detail, RowAction::Edit, RowAction::Delete]
    }

    fn to_form(&self) -> FormValues {
        let detail = self.detail.as_ref();
        FormValues::collect([
            ("id", self.id.to_string()),
            ("name", self.name.clone()),
            ("studentNumber", self.student_number.clone()),
            ("address", detail.map(|d| d.address.clone()).unwrap_or_default()),
            (
                "phoneNumber",
                detail.map(|d| d.phone_number.clone()).unwrap_or_default(),
            ),
            (
                "email",
                detail.and_then(|d| d.email.clone()).unwrap_or_default(),
            ),
            (
                "dateOfBirth",
                detail
                    .and_then(|d| d.date_of_birth)
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ),
        ])
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "studentNumber" => Some(self.student_number.clone()),
            "address" => self.detail.as_ref().map(|d| d.address.clone()),
            _ => None,
        }
    }

    fn detail_markup(&self) -> Markup {
        render_student_detail(self)
    }
}
