//! Child slots.
//!
//! A `ChildSlot` is what a flex container remembers about each child: the
//! widget handle, how it is sized on the main axis, and its padding. The
//! direction is captured by value when the child is added, so a slot never
//! needs to reach back into its container.

use crate::group::WidgetId;
use crate::primitives::{Border, Rect};
use crate::widget::Widget;

use super::length::{Direction, SlotSize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildSlot {
    widget: WidgetId,
    size: SlotSize,
    padding: Border,
    direction: Direction,
}

impl ChildSlot {
    pub(crate) fn new(
        widget: WidgetId,
        size: SlotSize,
        padding: Border,
        direction: Direction,
    ) -> Self {
        Self {
            widget,
            size,
            padding,
            direction,
        }
    }

    pub fn widget(&self) -> WidgetId {
        self.widget
    }

    pub fn size(&self) -> SlotSize {
        self.size
    }

    pub fn padding(&self) -> Border {
        self.padding
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_fixed(&self) -> bool {
        self.size.is_fixed()
    }

    /// Main-axis extent of this child.
    ///
    /// The configured size for fixed children. Liquid children report the
    /// widget's current width or height, i.e. whatever the last layout pass
    /// gave it after padding.
    pub fn extent(&self, widget: &dyn Widget) -> i64 {
        match self.size.fixed() {
            Some(size) => size,
            None => match self.direction {
                Direction::Horizontal => widget.w().into(),
                Direction::Vertical => widget.h().into(),
            },
        }
    }

    /// Bounds for this child when it occupies `pos..pos + size` on the main
    /// axis of `container`, padding applied.
    pub fn bounds_in(&self, container: &Rect, pos: i32, size: i32) -> Rect {
        self.direction
            .slot_rect(container, pos, size)
            .reduced(self.padding)
    }

    /// Apply `bounds_in` to `widget`.
    pub fn place(&self, container: &Rect, pos: i32, size: i32, widget: &mut dyn Widget) {
        let bounds = self.bounds_in(container, pos, size);
        tracing::trace!(widget = %self.widget, ?bounds, "placing child");
        widget.set_bounds(bounds);
    }
}
