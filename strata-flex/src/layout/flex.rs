//! Flex distribution math.
//!
//! Axis-agnostic: callers resolve the main-axis origin and extent from the
//! container rectangle, `distribute` returns where each child goes along that
//! axis, and the container turns those into rectangles.

use crate::error::{LayoutError, Result};

use super::slot::ChildSlot;

/// Main-axis placement for one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexAllocation {
    /// Start coordinate along the main axis.
    pub pos: i32,
    /// Extent along the main axis, before padding.
    pub size: i32,
}

/// Result of one distribution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    /// Size given to every liquid child, `None` when there are none.
    pub liquid_size: Option<i32>,
    /// One allocation per slot, in insertion order.
    pub allocations: Vec<FlexAllocation>,
}

/// Distribute `main_size` among `slots`.
///
/// Fixed children keep their size. The rest of the space, minus one gutter
/// between each pair of consecutive children, is split evenly among liquid
/// children with truncating division; remainder pixels are dropped.
/// `fixed_count` is the container's running count of fixed slots.
///
/// Sums are taken in `i64`; any position or size that lands outside `i32`
/// is an `Overflow` error rather than a wrapped coordinate.
pub fn distribute(
    slots: &[ChildSlot],
    fixed_count: usize,
    main_pos: i32,
    main_size: i32,
    gutter: u32,
) -> Result<Distribution> {
    debug_assert!(fixed_count <= slots.len());

    let liquid_count = slots.len() - fixed_count;
    let gutter = i64::from(gutter);

    // No liquid children: pack fixed sizes, nothing to split.
    let liquid_size = if liquid_count == 0 {
        None
    } else {
        let fixed_total = slots
            .iter()
            .filter_map(|s| s.size().fixed())
            .try_fold(0i64, i64::checked_add)
            .ok_or_else(|| overflow("fixed sizes"))?;
        let gutters = gutter
            .checked_mul(slots.len() as i64 - 1)
            .ok_or_else(|| overflow("gutters"))?;
        let available = i64::from(main_size) - gutters;
        let size = (available - fixed_total) / liquid_count as i64;
        Some(to_i32(size, "liquid size")?)
    };

    let mut next_pos = i64::from(main_pos);
    let mut allocations = Vec::with_capacity(slots.len());
    for slot in slots {
        let size = match slot.size().fixed() {
            Some(fixed) => to_i32(fixed, "fixed size")?,
            None => liquid_size.unwrap_or(0),
        };
        allocations.push(FlexAllocation {
            pos: to_i32(next_pos, "child position")?,
            size,
        });
        next_pos += i64::from(size) + gutter;
    }

    Ok(Distribution {
        liquid_size,
        allocations,
    })
}

fn to_i32(value: i64, what: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| overflow(&format!("{what} {value}")))
}

fn overflow(what: &str) -> LayoutError {
    LayoutError::Overflow(what.to_string())
}

// =========================================================================
// Tests
// =========================================================================
