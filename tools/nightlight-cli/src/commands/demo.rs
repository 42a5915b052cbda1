//! Generate sample inputs, optionally running the pipeline on them.

use std::path::PathBuf;

use anyhow::Context;
use nightlight_common::OutputPaths;
use nightlight_compositor::{CompositionJob, Compositor, CompositorConfig};

use crate::demo_assets;

pub fn run(output: PathBuf, compose: bool) -> anyhow::Result<()> {
    std::fs::create_dir_all(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let house_path = output.join("demo_house.png");
    let fixture_path = output.join("demo_fixture.png");

    demo_assets::create_house()
        .save(&house_path)
        .with_context(|| format!("Failed to write {}", house_path.display()))?;
    demo_assets::create_fixture()
        .save(&fixture_path)
        .with_context(|| format!("Failed to write {}", fixture_path.display()))?;

    println!("Sample background: {}", house_path.display());
    println!("Sample fixture:    {}", fixture_path.display());

    if !compose {
        return Ok(());
    }

    let compositor = Compositor::new(CompositorConfig::with_placements(
        demo_assets::stock_placements(),
    ))?;
    let job =
        CompositionJob::new(house_path, fixture_path).with_outputs(OutputPaths::in_dir(&output));
    let report = compositor.run(&job)?;

    println!();
    println!("{report}");
    Ok(())
}
