//! strata-flex-demo: run flex layout passes over a JSON layout description
//! and print where every child lands.

mod cli;
mod logging;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use strata_flex::{Group, LayoutFile, Rect};

use crate::cli::Args;
use crate::logging::setup_logging;
use crate::report::{Pass, print_passes};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let file = LayoutFile::load(&args.layout)
        .with_context(|| format!("failed to load layout '{}'", args.layout.display()))?;
    tracing::info!(
        children = file.children.len(),
        direction = ?file.container.direction,
        "loaded layout"
    );

    let mut group = Group::new();
    let (mut flex, ids) = file.build(&mut group).context("initial layout pass failed")?;

    let mut passes = vec![Pass::capture(&flex, &group, &ids)];
    for size in &args.resize {
        let bounds = Rect::new(flex.bounds().x, flex.bounds().y, size.w, size.h);
        flex.resize_to(&mut group, bounds)
            .with_context(|| format!("layout pass at {}x{} failed", size.w, size.h))?;
        passes.push(Pass::capture(&flex, &group, &ids));
    }

    print_passes(&passes, args.json)
}
