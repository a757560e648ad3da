//! HTML fragments for the record table and the detail overlay
//!
//! All text goes through maud, which escapes it on insertion.

pub mod detail;
pub mod table;

use std::fmt;
use std::str::FromStr;

pub use detail::render_student_detail;
pub use table::{render_error_row, render_table};

/// Trigger embedded in each table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Detail,
    Edit,
    Delete,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::Detail => "detail",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            RowAction::Detail => "Details",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RowAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "detail" => Ok(RowAction::Detail),
            "edit" => Ok(RowAction::Edit),
            "delete" => Ok(RowAction::Delete),
            _ => Err(format!("Invalid row action: {}", s)),
        }
    }
}
