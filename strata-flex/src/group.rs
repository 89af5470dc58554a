//! Widget ownership.
//!
//! A `Group` owns the widgets a flex container positions. Containers hold
//! `WidgetId` handles only, so widget lifetime is decided here and never
//! duplicated by the layout.

use std::fmt;

use crate::widget::Widget;

/// Handle to a widget registered in a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(usize);

impl WidgetId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Append-only widget arena.
///
/// Ids are never reused, so a handle stays valid for the group's lifetime.
#[derive(Debug)]
pub struct Group<W> {
    widgets: Vec<W>,
}

impl<W: Widget> Default for Group<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Widget> Group<W> {
    pub fn new() -> Self {
        Self { widgets: Vec::new() }
    }

    /// Take ownership of `widget` and return its handle.
    pub fn add(&mut self, widget: W) -> WidgetId {
        let id = WidgetId(self.widgets.len());
        self.widgets.push(widget);
        id
    }

    pub fn get(&self, id: WidgetId) -> Option<&W> {
        self.widgets.get(id.0)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut W> {
        self.widgets.get_mut(id.0)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        id.0 < self.widgets.len()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
