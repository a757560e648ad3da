//! Form collection, validation and editing state

pub mod collector;
pub mod schema;
pub mod validator;

pub use collector::FormValues;
pub use schema::{EntitySchema, FieldRule, FieldSpec, SearchField, SearchStrategy};
pub use validator::validate;

/// What a submission of the main form turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update(i64),
}

/// Transient state of one form: the id being edited, if any, and its values
#[derive(Debug, Clone, Default)]
pub struct FormState {
    editing_id: Option<i64>,
    values: FormValues,
}

impl FormState {
    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn mode(&self) -> SubmitMode {
        match self.editing_id {
            Some(id) => SubmitMode::Update(id),
            None => SubmitMode::Create,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn begin_edit(&mut self, id: i64, values: FormValues) {
        self.editing_id = Some(id);
        self.values = values;
    }

    pub fn reset(&mut self) {
        self.editing_id = None;
        self.values = FormValues::new();
    }
}
