//! Command line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

/// Lay out a flex container described in JSON and print child bounds.
#[derive(Debug, Parser)]
#[command(name = "strata-flex-demo", version)]
pub struct Args {
    /// Layout description (JSON).
    pub layout: PathBuf,

    /// Resize the container after the initial pass. Repeatable, applied in order.
    #[arg(long, value_name = "WxH")]
    pub resize: Vec<Size>,

    /// Print passes as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// A `WxH` container size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
        let w = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
        let h = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
        Ok(Size { w, h })
    }
}
