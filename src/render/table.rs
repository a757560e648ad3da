use maud::{html, Markup};

use crate::models::Entity;

pub const EMPTY_TABLE_TEXT: &str = "No records found";

/// Number of columns including the actions column
fn colspan<E: Entity>() -> usize {
    E::columns().len() + 1
}

/// Full table with header, body rows and action buttons.
///
/// An empty slice renders one placeholder row spanning every column.
pub fn render_table<E: Entity>(records: &[E]) -> Markup {
    html! {
        table class="records" {
            (header::<E>())
            tbody {
                @if records.is_empty() {
                    (placeholder_row::<E>(EMPTY_TABLE_TEXT))
                } @else {
                    @for record in records {
                        (render_row(record))
                    }
                }
            }
        }
    }
}

/// Table shown when the list could not be loaded; the header stays
pub fn render_error_row<E: Entity>(message: &str) -> Markup {
    html! {
        table class="records" {
            (header::<E>())
            tbody {
                (placeholder_row::<E>(message))
            }
        }
    }
}

fn header<E: Entity>() -> Markup {
    html! {
        thead {
            tr {
                @for title in E::columns() {
                    th { (title) }
                }
                th { "Actions" }
            }
        }
    }
}

fn placeholder_row<E: Entity>(text: &str) -> Markup {
    html! {
        tr class="placeholder" {
            td colspan=(colspan::<E>()) { (text) }
        }
    }
}

fn render_row<E: Entity>(record: &E) -> Markup {
    let id = record.id();
    html! {
        tr data-id=(id) {
            @for cell in record.cells() {
                td { (cell) }
            }
            td {
                @for action in E::actions() {
                    button type="button"
                        class={ (action.as_str()) "-btn" }
                        data-action=(action.as_str())
                        data-id=(id) { (action.button_label()) }
                }
            }
        }
    }
}
