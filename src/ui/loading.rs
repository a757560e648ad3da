/// Global "working" indicator. Showing it does not block further actions.
#[derive(Debug, Clone, Default)]
pub struct LoadingOverlay {
    message: Option<String>,
}

impl LoadingOverlay {
    pub fn show(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("loading: {}", message);
        self.message = Some(message);
    }

    pub fn hide(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
