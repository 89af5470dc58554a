//! Layout System for strata-flex
//!
//! One container type that packs widgets along a single axis. Children are
//! either fixed (explicit main-axis size) or liquid (share the remaining
//! space evenly), separated by a constant gutter.
//!
//! # Architecture
//!
//! ```text
//! FlexBuilder + add_child() -> end() -> FlexContainer -> resize() per parent resize
//! ```
//!
//! The container holds `WidgetId` handles; widgets themselves live in a
//! `Group` that every layout pass borrows mutably.

pub mod flex;
pub mod length;
pub mod slot;

pub mod container;

// Re-export core types
pub use container::{FlexBuilder, FlexContainer};
pub use flex::{Distribution, FlexAllocation, distribute};
pub use length::{Direction, SlotSize};
pub use slot::ChildSlot;
