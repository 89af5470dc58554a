//! Core geometry types for strata-flex.
//!
//! Integer pixel geometry: widgets are positioned on whole units, and every
//! layout pass works in `i32` so degenerate inputs stay representable.

use serde::{Deserialize, Serialize};

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const ZERO: Self = Self { x: 0, y: 0, w: 0, h: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right edge X coordinate.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom edge Y coordinate.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Check if `other` lies entirely within this rectangle.
    #[inline]
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Shrink this rectangle inward by `border` on each side.
    ///
    /// No clamping: a border larger than the rectangle yields a negative
    /// width or height.
    #[inline]
    pub fn reduced(&self, border: Border) -> Self {
        Self {
            x: self.x + border.left,
            y: self.y + border.top,
            w: self.w - border.horizontal(),
            h: self.h - border.vertical(),
        }
    }
}

/// A four-sided inset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Border {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Border {
    /// Create a border with explicit values for each side.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Uniform border on all sides.
    pub const fn all(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Symmetric border (horizontal, vertical).
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}
