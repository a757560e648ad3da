//! Edit and detail overlays

use maud::Markup;

use crate::form::FormValues;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Screen-space bounds of an overlay's content box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 600.0,
            height: 400.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Overlay<T> {
    visible: bool,
    pub bounds: Rect,
    content: Option<T>,
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self {
            visible: false,
            bounds: Rect::default(),
            content: None,
        }
    }
}

impl<T> Overlay<T> {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn open(&mut self, content: T) {
        self.content = Some(content);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Close when `p` lies outside the content box. Returns whether it closed.
    pub fn click(&mut self, p: Point) -> bool {
        if self.visible && !self.bounds.contains(p) {
            self.close();
            return true;
        }
        false
    }
}

/// The two independent overlays of a desk
#[derive(Debug, Clone, Default)]
pub struct Modals {
    pub edit: Overlay<FormValues>,
    pub detail: Overlay<Markup>,
}

impl Modals {
    pub fn handle_click(&mut self, p: Point) {
        if self.edit.click(p) {
            tracing::debug!("edit overlay closed by outside click");
        }
        if self.detail.click(p) {
            tracing::debug!("detail overlay closed by outside click");
        }
    }
}
