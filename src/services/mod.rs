//! Form-handling services

pub mod desk;
pub mod search;

use std::sync::Arc;

use crate::{
    api::ApiClient,
    config::UiConfig,
    models::{Book, Student},
    ui::Notifier,
};

pub use desk::{EntityDesk, View};
pub use search::SearchCriteria;

/// Container for the two desks
pub struct Services {
    pub books: EntityDesk<Book>,
    pub students: EntityDesk<Student>,
}

impl Services {
    pub fn new(api: &ApiClient, notifier: Arc<dyn Notifier>, ui: &UiConfig) -> Self {
        Self {
            books: EntityDesk::new(api.resource::<Book>(), notifier.clone(), ui),
            students: EntityDesk::new(api.resource::<Student>(), notifier, ui),
        }
    }
}
