//! Transient user-facing messages

use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub shown_at: Instant,
}

/// Where notices end up and who answers confirmation prompts
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn show(&self, notice: &Notice);

    fn confirm(&self, prompt: &str) -> bool;

    /// The loading overlay went up with `message`
    fn loading(&self, message: &str);

    /// The loading overlay came down
    fn loaded(&self);
}

/// Writes notices to the terminal
pub struct ConsoleNotifier {
    pub assume_yes: bool,
}

impl Notifier for ConsoleNotifier {
    fn show(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Error => eprintln!("[{}] {}", notice.kind.as_str(), notice.text),
            _ => println!("[{}] {}", notice.kind.as_str(), notice.text),
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N] ", prompt);
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn loading(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn loaded(&self) {}
}

/// Holds at most one live notice; a new one replaces the old
pub struct NoticeBoard {
    notifier: Arc<dyn Notifier>,
    ttl: Duration,
    current: Option<Notice>,
}

impl NoticeBoard {
    pub fn new(notifier: Arc<dyn Notifier>, ttl: Duration) -> Self {
        Self {
            notifier,
            ttl,
            current: None,
        }
    }

    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) {
        let notice = Notice {
            kind,
            text: text.into(),
            shown_at: Instant::now(),
        };
        tracing::debug!("notice [{}] {}", notice.kind.as_str(), notice.text);
        self.notifier.show(&notice);
        self.current = Some(notice);
    }

    pub fn loading(&self, message: &str) {
        self.notifier.loading(message);
    }

    pub fn loaded(&self) {
        self.notifier.loaded();
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text);
    }

    /// The notice still on screen at `now`
    pub fn current(&self, now: Instant) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.shown_at) < self.ttl)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn confirm(&self, prompt: &str) -> bool {
        self.notifier.confirm(prompt)
    }
}
