//! Widget capability.
//!
//! The flex container never knows the concrete type of its children. Anything
//! with an assignable rectangle can be laid out: toolkits implement `Widget`
//! for their own element types and register them in a [`Group`](crate::Group).

use crate::primitives::Rect;

/// A visual element with readable and writable bounds.
pub trait Widget {
    /// Current bounds of the widget.
    fn bounds(&self) -> Rect;

    /// Move and resize the widget.
    fn set_bounds(&mut self, bounds: Rect);

    fn x(&self) -> i32 {
        self.bounds().x
    }

    fn y(&self) -> i32 {
        self.bounds().y
    }

    fn w(&self) -> i32 {
        self.bounds().w
    }

    fn h(&self) -> i32 {
        self.bounds().h
    }

    /// Move and resize from separate coordinates.
    fn resize(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.set_bounds(Rect::new(x, y, w, h));
    }
}

impl<T: Widget + ?Sized> Widget for Box<T> {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        (**self).set_bounds(bounds);
    }
}

/// A plain labelled rectangle.
///
/// Stands in for a real toolkit widget in demos and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    label: String,
    bounds: Rect,
}

impl Frame {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bounds: Rect::ZERO,
        }
    }

    pub fn with_bounds(label: impl Into<String>, bounds: Rect) -> Self {
        Self {
            label: label.into(),
            bounds,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for Frame {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}
