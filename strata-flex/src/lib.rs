//! strata-flex: single-axis flex layout for widget groups
//!
//! Lays out an ordered list of child widgets horizontally or vertically inside
//! a rectangle. Fixed children keep their size, liquid children split the rest
//! evenly, and a gutter separates consecutive children.
//!
//! # Usage
//!
//! ```
//! use strata_flex::{Direction, FlexBuilder, Frame, Group, Widget};
//!
//! let mut group = Group::new();
//! let mut flex = FlexBuilder::new(0, 0, 300, 100, Direction::Horizontal, 10);
//! let sidebar = flex.add_fixed(&mut group, Frame::new("sidebar"), 50).unwrap();
//! let body = flex.add_liquid(&mut group, Frame::new("body"));
//! let mut flex = flex.end(&mut group).unwrap();
//!
//! assert_eq!(group.get(sidebar).unwrap().w(), 50);
//! assert_eq!(group.get(body).unwrap().x(), 60);
//!
//! // The parent resized us
//! flex.resize(&mut group, 0, 0, 500, 100).unwrap();
//! assert_eq!(group.get(body).unwrap().w(), 440);
//! ```

// Core primitives
pub mod primitives;
pub mod error;

// Widget capability and ownership
pub mod widget;
pub mod group;

// Layout system
pub mod layout;

// Layout descriptions
pub mod config;

// Re-export core types
pub use primitives::{Border, Rect};
pub use error::{LayoutError, Result};
pub use widget::{Frame, Widget};
pub use group::{Group, WidgetId};
pub use config::{ChildConfig, FlexConfig, LayoutFile};

// Layout system exports
pub use layout::{ChildSlot, Direction, FlexBuilder, FlexContainer, SlotSize};
