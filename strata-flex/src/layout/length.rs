//! Axis and sizing types.
//!
//! Core types for choosing the main axis and sizing a child along it.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::primitives::Rect;

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Children flow left to right.
    #[default]
    Horizontal,
    /// Children flow top to bottom.
    Vertical,
}

impl Direction {
    /// Start coordinate of `rect` along this axis.
    #[inline]
    pub fn main_pos(self, rect: &Rect) -> i32 {
        match self {
            Direction::Horizontal => rect.x,
            Direction::Vertical => rect.y,
        }
    }

    /// Extent of `rect` along this axis.
    #[inline]
    pub fn main_size(self, rect: &Rect) -> i32 {
        match self {
            Direction::Horizontal => rect.w,
            Direction::Vertical => rect.h,
        }
    }

    /// Rectangle spanning the container's cross axis at `pos..pos + size`.
    #[inline]
    pub fn slot_rect(self, container: &Rect, pos: i32, size: i32) -> Rect {
        match self {
            Direction::Horizontal => Rect::new(pos, container.y, size, container.h),
            Direction::Vertical => Rect::new(container.x, pos, container.w, size),
        }
    }
}

/// Main-axis sizing mode for one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotSize {
    /// Share what remains after fixed children and gutters.
    #[default]
    Liquid,
    /// Fixed pixel size.
    Fixed(u32),
}

impl SlotSize {
    /// Raw value that marks a liquid child in configs and the C-style API.
    pub const LIQUID_RAW: i32 = -1;

    /// Largest fixed size a layout pass can place.
    pub const MAX_FIXED: u32 = i32::MAX as u32;

    /// Parse the raw `-1`-or-size form.
    pub fn from_raw(raw: i32) -> Result<Self> {
        match raw {
            Self::LIQUID_RAW => Ok(SlotSize::Liquid),
            n if n >= 0 => Ok(SlotSize::Fixed(n as u32)),
            n => Err(LayoutError::InvalidSize(n.into())),
        }
    }

    /// Reject fixed sizes outside the `i32` pixel space.
    pub fn checked(self) -> Result<Self> {
        match self {
            SlotSize::Fixed(n) if n > Self::MAX_FIXED => Err(LayoutError::InvalidSize(n.into())),
            size => Ok(size),
        }
    }

    pub fn to_raw(self) -> i64 {
        match self {
            SlotSize::Liquid => Self::LIQUID_RAW.into(),
            SlotSize::Fixed(n) => n.into(),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, SlotSize::Fixed(_))
    }

    /// Fixed size in pixels, if any.
    pub fn fixed(&self) -> Option<i64> {
        match self {
            SlotSize::Fixed(n) => Some((*n).into()),
            SlotSize::Liquid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_picks_axis() {
        let r = Rect::new(1, 2, 30, 40);
        assert_eq!(Direction::Horizontal.main_pos(&r), 1);
        assert_eq!(Direction::Horizontal.main_size(&r), 30);
        assert_eq!(Direction::Vertical.main_pos(&r), 2);
        assert_eq!(Direction::Vertical.main_size(&r), 40);
    }

    #[test]
    fn test_slot_rect_spans_cross_axis() {
        let c = Rect::new(10, 20, 300, 100);
        assert_eq!(Direction::Horizontal.slot_rect(&c, 60, 115), Rect::new(60, 20, 115, 100));
        assert_eq!(Direction::Vertical.slot_rect(&c, 50, 25), Rect::new(10, 50, 300, 25));
    }

    #[test]
    fn test_slot_size_from_raw() {
        assert_eq!(SlotSize::from_raw(-1).unwrap(), SlotSize::Liquid);
        assert_eq!(SlotSize::from_raw(0).unwrap(), SlotSize::Fixed(0));
        assert_eq!(SlotSize::from_raw(42).unwrap(), SlotSize::Fixed(42));
        assert!(matches!(SlotSize::from_raw(-2), Err(LayoutError::InvalidSize(-2))));
        assert_eq!(SlotSize::Fixed(7).to_raw(), 7);
        assert_eq!(SlotSize::Liquid.to_raw(), -1);
    }

    #[test]
    fn test_checked_rejects_sizes_beyond_i32() {
        let largest = SlotSize::Fixed(SlotSize::MAX_FIXED);
        assert_eq!(largest.checked().unwrap(), largest);
        assert_eq!(SlotSize::Liquid.checked().unwrap(), SlotSize::Liquid);
        assert!(matches!(
            SlotSize::Fixed(3_000_000_000).checked(),
            Err(LayoutError::InvalidSize(3_000_000_000))
        ));
    }

    #[test]
    fn test_direction_serde_names() {
        let d: Direction = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(d, Direction::Vertical);
        assert_eq!(serde_json::to_string(&Direction::Horizontal).unwrap(), "\"horizontal\"");
    }
}
