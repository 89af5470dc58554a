//! Layout descriptions.
//!
//! A `LayoutFile` is the JSON form of one flex container and its children,
//! used by the demo binary and by tests that want fixtures instead of builder
//! calls.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::group::{Group, WidgetId};
use crate::layout::{Direction, FlexBuilder, FlexContainer, SlotSize};
use crate::primitives::{Border, Rect};
use crate::widget::Frame;

/// Container-level settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexConfig {
    pub direction: Direction,
    pub gutter: u32,
    pub bounds: Rect,
}

/// One child entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildConfig {
    #[serde(default)]
    pub label: String,
    /// `-1` (the default) for liquid, otherwise a fixed size.
    #[serde(default = "liquid_raw")]
    pub size: i32,
    #[serde(default)]
    pub padding: Border,
}

fn liquid_raw() -> i32 {
    SlotSize::LIQUID_RAW
}

/// A container plus its children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(flatten)]
    pub container: FlexConfig,
    #[serde(default)]
    pub children: Vec<ChildConfig>,
}

impl LayoutFile {
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LayoutFile = serde_json::from_str(json)?;
        file.validate()?;
        Ok(file)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading layout file");
        Self::from_json(&json)
    }

    /// Reject sizes that are neither `-1` nor non-negative.
    pub fn validate(&self) -> Result<()> {
        for (i, child) in self.children.iter().enumerate() {
            SlotSize::from_raw(child.size).map_err(|_| {
                LayoutError::Config(format!(
                    "child {i} ({:?}): size {} must be -1 or >= 0",
                    child.label, child.size
                ))
            })?;
        }
        Ok(())
    }

    /// Build a live container with one `Frame` per child.
    pub fn build(&self, group: &mut Group<Frame>) -> Result<(FlexContainer, Vec<WidgetId>)> {
        let mut flex = FlexBuilder::from_config(&self.container);
        let mut ids = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let size = SlotSize::from_raw(child.size)?;
            let frame = Frame::new(child.label.clone());
            ids.push(flex.add_child(group, frame, size, child.padding)?);
        }
        let flex = flex.end(group)?;
        Ok((flex, ids))
    }
}
