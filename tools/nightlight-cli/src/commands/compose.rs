//! Composite a fixture onto a background and write the inpainting mask.

use std::path::PathBuf;

use nightlight_common::OutputPaths;
use nightlight_compositor::{CompositionJob, Compositor, CompositorConfig, Placement};

pub struct ComposeArgs {
    pub background: PathBuf,
    pub overlay: PathBuf,
    pub placements: Vec<Placement>,
    pub scale: f64,
    pub dilation: f64,
    pub tone_filter: bool,
    pub composite_out: Option<PathBuf>,
    pub mask_out: Option<PathBuf>,
    pub json: bool,
}

pub fn run(args: ComposeArgs) -> anyhow::Result<()> {
    let config = CompositorConfig {
        scale_factor: args.scale,
        apply_tone_filter: args.tone_filter,
        mask_dilation_percent: args.dilation,
        placements: args.placements,
        ..CompositorConfig::default()
    };

    let compositor =
        Compositor::new(config).map_err(|e| anyhow::anyhow!("Invalid options: {e}"))?;

    let job = CompositionJob::new(args.background, args.overlay)
        .with_outputs(OutputPaths::new(args.composite_out, args.mask_out));

    tracing::debug!(?job, "Starting composition");
    let report = compositor
        .run(&job)
        .map_err(|e| anyhow::anyhow!("Composition failed: {e}"))?;

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        println!("{report}");
    }

    Ok(())
}
