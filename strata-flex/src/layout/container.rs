//! Flex container - single-axis layout.
//!
//! Children are packed along one axis in insertion order. Fixed children keep
//! their size; liquid children split whatever is left evenly.
//!
//! ## Lifecycle
//!
//! ```text
//! FlexBuilder::new(..) -> add_child(..)* -> end() -> FlexContainer
//!                                                     resize(..)*
//! ```
//!
//! `end()` consumes the builder, so once a container is live no more children
//! can be added. Both states can be resized; a builder lays out whatever
//! children it has so far.

use crate::config::FlexConfig;
use crate::error::{LayoutError, Result};
use crate::group::{Group, WidgetId};
use crate::primitives::{Border, Rect};
use crate::widget::Widget;

use super::flex::distribute;
use super::length::{Direction, SlotSize};
use super::slot::ChildSlot;

/// State shared by both lifecycle stages.
#[derive(Debug, Clone)]
struct FlexLayout {
    direction: Direction,
    gutter: u32,
    bounds: Rect,
    children: Vec<ChildSlot>,
    /// Running count of fixed children. Only ever incremented.
    fixed_count: usize,
    liquid_size: Option<i32>,
}

impl FlexLayout {
    fn new(bounds: Rect, direction: Direction, gutter: u32) -> Self {
        Self {
            direction,
            gutter,
            bounds,
            children: Vec::new(),
            fixed_count: 0,
            liquid_size: None,
        }
    }

    fn push(&mut self, widget: WidgetId, size: SlotSize, padding: Border) {
        self.children
            .push(ChildSlot::new(widget, size, padding, self.direction));
        if size.is_fixed() {
            self.fixed_count += 1;
        }
    }

    /// A handle missing from `group` stops the pass there; earlier children
    /// keep their new bounds.
    fn resize<W: Widget>(&mut self, group: &mut Group<W>, bounds: Rect) -> Result<()> {
        self.bounds = bounds;

        let main_pos = self.direction.main_pos(&bounds);
        let main_size = self.direction.main_size(&bounds);
        let dist = distribute(
            &self.children,
            self.fixed_count,
            main_pos,
            main_size,
            self.gutter,
        )?;

        tracing::debug!(
            direction = ?self.direction,
            ?bounds,
            children = self.children.len(),
            fixed = self.fixed_count,
            liquid_size = ?dist.liquid_size,
            "flex layout pass"
        );
        if let Some(size) = dist.liquid_size.filter(|s| *s < 0) {
            tracing::warn!(
                liquid_size = size,
                main_size,
                "fixed children and gutters exceed the container, liquid size is negative"
            );
        }

        for (slot, alloc) in self.children.iter().zip(&dist.allocations) {
            let widget = group
                .get_mut(slot.widget())
                .ok_or(LayoutError::UnknownWidget(slot.widget()))?;
            slot.place(&bounds, alloc.pos, alloc.size, widget);
        }

        self.liquid_size = dist.liquid_size;
        Ok(())
    }
}

// =========================================================================
// FlexBuilder (building state)
// =========================================================================

/// A flex container that is still accepting children.
#[derive(Debug, Clone)]
pub struct FlexBuilder {
    layout: FlexLayout,
}

impl FlexBuilder {
    pub fn new(x: i32, y: i32, w: i32, h: i32, direction: Direction, gutter: u32) -> Self {
        Self::from_rect(Rect::new(x, y, w, h), direction, gutter)
    }

    pub fn from_rect(bounds: Rect, direction: Direction, gutter: u32) -> Self {
        Self {
            layout: FlexLayout::new(bounds, direction, gutter),
        }
    }

    /// Start with a zero rectangle; the parent sizes it later.
    pub fn with_direction(direction: Direction, gutter: u32) -> Self {
        Self::from_rect(Rect::ZERO, direction, gutter)
    }

    pub fn from_config(config: &FlexConfig) -> Self {
        Self::from_rect(config.bounds, config.direction, config.gutter)
    }

    /// Register `widget` in `group` and append it as a child.
    ///
    /// The group owns the widget from here on. A fixed size above
    /// `SlotSize::MAX_FIXED` is rejected before the widget is registered.
    pub fn add_child<W: Widget>(
        &mut self,
        group: &mut Group<W>,
        widget: W,
        size: SlotSize,
        padding: Border,
    ) -> Result<WidgetId> {
        let size = size.checked()?;
        let id = group.add(widget);
        self.layout.push(id, size, padding);
        Ok(id)
    }

    /// Append a liquid child with no padding.
    pub fn add_liquid<W: Widget>(&mut self, group: &mut Group<W>, widget: W) -> WidgetId {
        let id = group.add(widget);
        self.layout.push(id, SlotSize::Liquid, Border::default());
        id
    }

    /// Append a fixed-size child with no padding.
    pub fn add_fixed<W: Widget>(
        &mut self,
        group: &mut Group<W>,
        widget: W,
        size: u32,
    ) -> Result<WidgetId> {
        self.add_child(group, widget, SlotSize::Fixed(size), Border::default())
    }

    /// Append a child for a widget that is already registered in a group.
    pub fn adopt_child(
        &mut self,
        widget: WidgetId,
        size: SlotSize,
        padding: Border,
    ) -> Result<()> {
        self.layout.push(widget, size.checked()?, padding);
        Ok(())
    }

    pub fn resize<W: Widget>(
        &mut self,
        group: &mut Group<W>,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) -> Result<()> {
        self.layout.resize(group, Rect::new(x, y, w, h))
    }

    pub fn resize_to<W: Widget>(&mut self, group: &mut Group<W>, bounds: Rect) -> Result<()> {
        self.layout.resize(group, bounds)
    }

    /// Finish adding children and lay them out in the current bounds.
    pub fn end<W: Widget>(mut self, group: &mut Group<W>) -> Result<FlexContainer> {
        let bounds = self.layout.bounds;
        self.layout.resize(group, bounds)?;
        Ok(FlexContainer {
            layout: self.layout,
        })
    }

    pub fn direction(&self) -> Direction {
        self.layout.direction
    }

    pub fn bounds(&self) -> Rect {
        self.layout.bounds
    }

    pub fn len(&self) -> usize {
        self.layout.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.children.is_empty()
    }

    pub fn fixed_count(&self) -> usize {
        self.layout.fixed_count
    }
}

// =========================================================================
// FlexContainer (live state)
// =========================================================================

/// A finalized flex container.
///
/// Every `resize` recomputes the layout from the new rectangle.
#[derive(Debug, Clone)]
pub struct FlexContainer {
    layout: FlexLayout,
}

impl FlexContainer {
    pub fn resize<W: Widget>(
        &mut self,
        group: &mut Group<W>,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) -> Result<()> {
        self.layout.resize(group, Rect::new(x, y, w, h))
    }

    pub fn resize_to<W: Widget>(&mut self, group: &mut Group<W>, bounds: Rect) -> Result<()> {
        self.layout.resize(group, bounds)
    }

    pub fn direction(&self) -> Direction {
        self.layout.direction
    }

    pub fn gutter(&self) -> u32 {
        self.layout.gutter
    }

    pub fn bounds(&self) -> Rect {
        self.layout.bounds
    }

    pub fn children(&self) -> &[ChildSlot] {
        &self.layout.children
    }

    pub fn len(&self) -> usize {
        self.layout.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.children.is_empty()
    }

    pub fn fixed_count(&self) -> usize {
        self.layout.fixed_count
    }

    pub fn liquid_count(&self) -> usize {
        self.layout.children.len() - self.layout.fixed_count
    }

    /// Size the last layout pass gave each liquid child.
    pub fn liquid_size(&self) -> Option<i32> {
        self.layout.liquid_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Frame;

    fn bounds_of(group: &Group<Frame>, ids: &[WidgetId]) -> Vec<Rect> {
        ids.iter().map(|id| group.get(*id).unwrap().bounds()).collect()
    }

    #[test]
    fn test_add_counts_fixed_children() {
        let mut group = Group::new();
        let mut flex = FlexBuilder::with_direction(Direction::Horizontal, 0);
        flex.add_fixed(&mut group, Frame::new("a"), 10).unwrap();
        flex.add_liquid(&mut group, Frame::new("b"));
        flex.add_child(&mut group, Frame::new("c"), SlotSize::Fixed(0), Border::default())
            .unwrap();

        assert_eq!(flex.len(), 3);
        assert_eq!(flex.fixed_count(), 2);
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_add_does_not_lay_out() {
        let mut group = Group::new();
        let mut flex = FlexBuilder::new(0, 0, 100, 100, Direction::Vertical, 0);
        let id = flex.add_liquid(&mut group, Frame::with_bounds("a", Rect::new(1, 1, 1, 1)));

        assert_eq!(group.get(id).unwrap().bounds(), Rect::new(1, 1, 1, 1));
    }

    #[test]
    fn test_end_lays_out_once() {
        let mut group = Group::new();
        let mut flex = FlexBuilder::new(0, 0, 100, 100, Direction::Vertical, 0);
        let a = flex.add_liquid(&mut group, Frame::new("a"));
        let b = flex.add_liquid(&mut group, Frame::new("b"));

        let flex = flex.end(&mut group).unwrap();

        assert_eq!(
            bounds_of(&group, &[a, b]),
            vec![Rect::new(0, 0, 100, 50), Rect::new(0, 50, 100, 50)]
        );
        assert_eq!(flex.liquid_size(), Some(50));
        assert_eq!(flex.liquid_count(), 2);
    }

    #[test]
    fn test_resize_before_end_uses_children_so_far() {
        let mut group = Group::new();
        let mut flex = FlexBuilder::with_direction(Direction::Horizontal, 0);
        let a = flex.add_liquid(&mut group, Frame::new("a"));
        flex.resize(&mut group, 0, 0, 80, 10).unwrap();
        assert_eq!(group.get(a).unwrap().bounds(), Rect::new(0, 0, 80, 10));

        let b = flex.add_liquid(&mut group, Frame::new("b"));
        let flex = flex.end(&mut group).unwrap();

        assert_eq!(flex.bounds(), Rect::new(0, 0, 80, 10));
        assert_eq!(
            bounds_of(&group, &[a, b]),
            vec![Rect::new(0, 0, 40, 10), Rect::new(40, 0, 40, 10)]
        );
    }

    #[test]
    fn test_live_resize_recomputes() {
        let mut group = Group::new();
        let mut flex = FlexBuilder::with_direction(Direction::Horizontal, 10);
        let a = flex.add_fixed(&mut group, Frame::new("a"), 50).unwrap();
        let b = flex.add_liquid(&mut group, Frame::new("b"));
        let mut flex = flex.end(&mut group).unwrap();

        // Zero rectangle: liquid child is squeezed negative
        assert_eq!(flex.liquid_size(), Some(-60));

        flex.resize(&mut group, 10, 5, 200, 40).unwrap();

        assert_eq!(
            bounds_of(&group, &[a, b]),
            vec![Rect::new(10, 5, 50, 40), Rect::new(70, 5, 140, 40)]
        );
    }

    #[test]
    fn test_adopt_child_uses_existing_widget() {
        let mut group = Group::new();
        let id = group.add(Frame::new("pre-registered"));

        let mut flex = FlexBuilder::new(0, 0, 50, 50, Direction::Vertical, 0);
        flex.adopt_child(id, SlotSize::Fixed(20), Border::all(1)).unwrap();
        let flex = flex.end(&mut group).unwrap();

        assert_eq!(flex.fixed_count(), 1);
        assert_eq!(group.len(), 1);
        assert_eq!(group.get(id).unwrap().bounds(), Rect::new(1, 1, 48, 18));
    }

    #[test]
    fn test_unknown_widget_is_an_error() {
        let mut other = Group::new();
        other.add(Frame::new("a"));
        let foreign = other.add(Frame::new("b"));

        let mut group: Group<Frame> = Group::new();
        let mut flex = FlexBuilder::new(0, 0, 50, 50, Direction::Vertical, 0);
        flex.adopt_child(foreign, SlotSize::Liquid, Border::default()).unwrap();

        let err = flex.end(&mut group).unwrap_err();
        assert!(matches!(err, LayoutError::UnknownWidget(id) if id == foreign));
    }

    #[test]
    fn test_missing_widget_stops_the_pass() {
        let mut other: Group<Frame> = Group::new();
        other.add(Frame::new("a"));
        let foreign = other.add(Frame::new("b"));

        let mut group = Group::new();
        let mut flex = FlexBuilder::new(0, 0, 50, 50, Direction::Vertical, 0);
        let first = flex.add_fixed(&mut group, Frame::new("first"), 10).unwrap();
        flex.adopt_child(foreign, SlotSize::Liquid, Border::default()).unwrap();

        assert!(flex.end(&mut group).is_err());
        assert_eq!(group.get(first).unwrap().bounds(), Rect::new(0, 0, 50, 10));
    }

    #[test]
    fn test_oversized_fixed_child_is_rejected() {
        let mut group = Group::new();
        let mut flex = FlexBuilder::new(0, 0, 300, 100, Direction::Horizontal, 0);

        let err = flex
            .add_fixed(&mut group, Frame::new("wide"), 3_000_000_000)
            .unwrap_err();

        assert!(matches!(err, LayoutError::InvalidSize(3_000_000_000)));
        assert!(flex.is_empty());
        assert_eq!(flex.fixed_count(), 0);
        assert!(group.is_empty());
    }

    #[test]
    fn test_adopt_oversized_fixed_child_is_rejected() {
        let mut group = Group::new();
        let id = group.add(Frame::new("wide"));
        let mut flex = FlexBuilder::with_direction(Direction::Vertical, 0);

        let err = flex
            .adopt_child(id, SlotSize::Fixed(u32::MAX), Border::default())
            .unwrap_err();

        assert!(matches!(err, LayoutError::InvalidSize(_)));
        assert!(flex.is_empty());
    }

    #[test]
    fn test_huge_gutter_is_an_overflow_not_an_overlap() {
        let mut group = Group::new();
        let mut flex = FlexBuilder::new(0, 0, 300, 100, Direction::Horizontal, u32::MAX);
        let a = flex.add_fixed(&mut group, Frame::new("a"), 10).unwrap();
        let b = flex.add_fixed(&mut group, Frame::new("b"), 10).unwrap();

        let err = flex.end(&mut group).unwrap_err();

        assert!(matches!(err, LayoutError::Overflow(_)));
        // Nothing was moved
        assert_eq!(group.get(a).unwrap().bounds(), Rect::ZERO);
        assert_eq!(group.get(b).unwrap().bounds(), Rect::ZERO);
    }

    #[test]
    fn test_empty_container_is_a_no_op() {
        let mut group: Group<Frame> = Group::new();
        let mut flex = FlexBuilder::with_direction(Direction::Vertical, 8)
            .end(&mut group)
            .unwrap();
        flex.resize(&mut group, 0, 0, 100, 100).unwrap();

        assert!(flex.is_empty());
        assert_eq!(flex.liquid_size(), None);
    }

    #[test]
    fn test_from_config() {
        let config = FlexConfig {
            direction: Direction::Vertical,
            gutter: 3,
            bounds: Rect::new(1, 2, 3, 4),
        };
        let flex = FlexBuilder::from_config(&config);
        assert_eq!(flex.direction(), Direction::Vertical);
        assert_eq!(flex.bounds(), Rect::new(1, 2, 3, 4));
        assert!(flex.is_empty());
    }
}
