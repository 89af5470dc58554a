//! Layout error types.

use thiserror::Error;

use crate::group::WidgetId;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid slot size: {0} (expected -1 or a size in 0..=i32::MAX)")]
    InvalidSize(i64),

    #[error("layout does not fit in i32 pixel space: {0}")]
    Overflow(String),

    #[error("widget {0} is not registered in this group")]
    UnknownWidget(WidgetId),

    #[error("config error: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
