//! Output formatting for layout passes.

use anyhow::Result;
use serde::Serialize;
use strata_flex::{FlexContainer, Frame, Group, Rect, Widget, WidgetId};

/// Snapshot of one layout pass.
#[derive(Debug, Serialize)]
pub struct Pass {
    pub container: Rect,
    pub liquid_size: Option<i32>,
    pub children: Vec<Placement>,
}

#[derive(Debug, Serialize)]
pub struct Placement {
    pub label: String,
    pub size: i64,
    pub bounds: Rect,
}

impl Pass {
    pub fn capture(flex: &FlexContainer, group: &Group<Frame>, ids: &[WidgetId]) -> Self {
        let children = flex
            .children()
            .iter()
            .zip(ids)
            .filter_map(|(slot, id)| {
                let frame = group.get(*id)?;
                Some(Placement {
                    label: frame.label().to_string(),
                    size: slot.size().to_raw(),
                    bounds: frame.bounds(),
                })
            })
            .collect();
        Self {
            container: flex.bounds(),
            liquid_size: flex.liquid_size(),
            children,
        }
    }
}

pub fn print_passes(passes: &[Pass], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(passes)?);
        return Ok(());
    }

    for pass in passes {
        let c = pass.container;
        let liquid = pass
            .liquid_size
            .map(|size| format!("  liquid={size}"))
            .unwrap_or_default();
        println!("container {}x{} at ({}, {}){liquid}", c.w, c.h, c.x, c.y);
        for p in &pass.children {
            let b = p.bounds;
            let size = if p.size < 0 { "liquid".to_string() } else { p.size.to_string() };
            println!(
                "  {:<12} {:>6}  x={:<5} y={:<5} w={:<5} h={:<5}",
                p.label, size, b.x, b.y, b.w, b.h
            );
        }
    }
    Ok(())
}
