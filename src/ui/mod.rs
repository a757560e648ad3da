//! Presentation state: overlays, notices and the loading indicator

pub mod loading;
pub mod modal;
pub mod notice;

pub use loading::LoadingOverlay;
pub use modal::{Modals, Overlay, Point, Rect};
pub use notice::{ConsoleNotifier, Notice, NoticeBoard, NoticeKind, Notifier};
