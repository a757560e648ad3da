use maud::{html, Markup};

use crate::models::{Entity, Student};

fn detail_item(label: &str, value: &str) -> Markup {
    html! {
        div class="detail-item" {
            span class="detail-label" { (label) ":" }
            span class="detail-value" { (value) }
        }
    }
}

/// Label/value list of every table column
pub fn render_fields<E: Entity>(record: &E) -> Markup {
    html! {
        div class="detail-info" {
            div class="detail-section" {
                @for (label, value) in E::columns().iter().zip(record.cells()) {
                    (detail_item(label, &value))
                }
            }
        }
    }
}

/// Content of the student detail overlay
pub fn render_student_detail(student: &Student) -> Markup {
    html! {
        div class="detail-info" {
            div class="detail-section" {
                h3 { "Basic information" }
                (detail_item("Name", &student.name))
                (detail_item("Student number", &student.student_number))
            }
            @if let Some(detail) = &student.detail {
                div class="detail-section" {
                    h3 { "Details" }
                    (detail_item("Address", &detail.address))
                    (detail_item("Phone", &detail.phone_number))
                    @if let Some(email) = &detail.email {
                        (detail_item("Email", email))
                    }
                    @if let Some(dob) = detail.date_of_birth {
                        (detail_item("Date of birth", &dob.to_string()))
                    }
                }
            } @else {
                div class="detail-section" {
                    p { "No detail information registered." }
                }
            }
        }
    }
}
