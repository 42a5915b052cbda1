//! End-to-end pipeline: load, compose, persist, report.

use std::fmt;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use nightlight_common::{NightlightError, NightlightResult, OutputPaths};
use serde::{Deserialize, Serialize};

use crate::composite::build_composite;
use crate::config::CompositorConfig;
use crate::geometry::{Dimensions, MaskPadding, PlacementBounds};
use crate::mask::build_mask;
use crate::overlay::{scaled_dimensions, ResizedOverlay};

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionJob {
    pub background: PathBuf,
    pub overlay: PathBuf,
    #[serde(default)]
    pub outputs: OutputPaths,
}

impl CompositionJob {
    /// A job writing to the default output file names.
    pub fn new(background: impl Into<PathBuf>, overlay: impl Into<PathBuf>) -> Self {
        Self {
            background: background.into(),
            overlay: overlay.into(),
            outputs: OutputPaths::default(),
        }
    }

    pub fn with_outputs(mut self, outputs: OutputPaths) -> Self {
        self.outputs = outputs;
        self
    }
}

/// In-memory result of compositing.
#[derive(Debug, Clone)]
pub struct Composition {
    /// Composite with alpha stripped.
    pub composite: RgbImage,
    /// Blurred single-channel mask.
    pub mask: GrayImage,
    /// Size of the resized overlay used for every placement.
    pub overlay_size: Dimensions,
    /// Number of placements processed.
    pub placements: usize,
}

impl Composition {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::of(&self.composite)
    }
}

/// Summary of a persisted run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub composite_path: PathBuf,
    pub mask_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub overlay_width: u32,
    pub overlay_height: u32,
    pub placements: usize,
}

impl RunReport {
    pub fn to_json_pretty(&self) -> NightlightResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Composite saved -> {}  ({}x{})",
            self.composite_path.display(),
            self.width,
            self.height
        )?;
        writeln!(
            f,
            "Mask saved      -> {}  ({}x{})",
            self.mask_path.display(),
            self.width,
            self.height
        )?;
        write!(f, "Fixtures placed: {}", self.placements)
    }
}

/// Overlays a fixture onto a background and derives the inpainting mask.
#[derive(Debug, Clone)]
pub struct Compositor {
    config: CompositorConfig,
}

impl Compositor {
    /// Validate `config` and build a compositor around it.
    pub fn new(config: CompositorConfig) -> NightlightResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Composite and mask decoded rasters. No I/O.
    ///
    /// Fails with `OverlayTooLarge` if the resized overlay does not fit.
    pub fn compose(
        &self,
        background: &RgbaImage,
        overlay: &RgbaImage,
    ) -> NightlightResult<Composition> {
        let target = scaled_dimensions(Dimensions::of(overlay), self.config.scale_factor);
        let bounds = PlacementBounds::new(target, Dimensions::of(background))?;
        let resized = ResizedOverlay::from_source(overlay, self.config.scale_factor);
        let placements = &self.config.placements;

        let composite = build_composite(
            background,
            &resized,
            &bounds,
            placements,
            self.config.active_tone_filter(),
        );

        let padding =
            MaskPadding::from_overlay(resized.dimensions(), self.config.mask_dilation_percent);
        let mask = build_mask(&bounds, placements, padding);

        Ok(Composition {
            composite: DynamicImage::ImageRgba8(composite).to_rgb8(),
            mask,
            overlay_size: resized.dimensions(),
            placements: placements.len(),
        })
    }

    /// Load both inputs, compose, and write composite then mask.
    ///
    /// Nothing is written unless both inputs decode and the geometry is valid.
    /// A mask write failure removes the composite written just before it.
    pub fn run(&self, job: &CompositionJob) -> NightlightResult<RunReport> {
        let background = load_rgba(&job.background)?;
        let overlay = load_rgba(&job.overlay)?;

        let composition = self.compose(&background, &overlay)?;
        let size = composition.dimensions();

        let composite_format = output_format(&job.outputs.composite)?;
        let mask_format = output_format(&job.outputs.mask)?;

        let Composition {
            composite,
            mask,
            overlay_size,
            placements,
        } = composition;

        write_atomically(
            &DynamicImage::ImageRgb8(composite),
            &job.outputs.composite,
            composite_format,
        )?;
        tracing::info!(path = %job.outputs.composite.display(), size = %size, "Composite saved");

        if let Err(e) = write_atomically(
            &DynamicImage::ImageLuma8(mask),
            &job.outputs.mask,
            mask_format,
        ) {
            std::fs::remove_file(&job.outputs.composite).ok();
            return Err(e);
        }
        tracing::info!(path = %job.outputs.mask.display(), size = %size, "Mask saved");
        tracing::info!(placements, "Fixtures placed");

        Ok(RunReport {
            composite_path: job.outputs.composite.clone(),
            mask_path: job.outputs.mask.clone(),
            width: size.width,
            height: size.height,
            overlay_width: overlay_size.width,
            overlay_height: overlay_size.height,
            placements,
        })
    }
}

/// Decode an image file into RGBA8.
pub fn load_rgba(path: &Path) -> NightlightResult<RgbaImage> {
    if !path.exists() {
        return Err(NightlightError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let image = image::open(path).map_err(|e| NightlightError::decode(path, e))?;
    tracing::debug!(path = %path.display(), size = %Dimensions::of(&image), "Loaded image");
    Ok(image.to_rgba8())
}

fn output_format(path: &Path) -> NightlightResult<ImageFormat> {
    ImageFormat::from_path(path).map_err(|e| NightlightError::write(path, e))
}

/// Hidden sibling used while an output is being encoded.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.partial"))
}

fn write_atomically(
    image: &DynamicImage,
    path: &Path,
    format: ImageFormat,
) -> NightlightResult<()> {
    let staging = staging_path(path);

    if let Err(e) = image.save_with_format(&staging, format) {
        std::fs::remove_file(&staging).ok();
        return Err(NightlightError::write(path, e));
    }
    if let Err(e) = std::fs::rename(&staging, path) {
        std::fs::remove_file(&staging).ok();
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Placement;
    use image::Rgba;

    fn background() -> RgbaImage {
        RgbaImage::from_pixel(800, 600, Rgba([240, 240, 240, 255]))
    }

    fn fixture() -> RgbaImage {
        RgbaImage::from_pixel(100, 100, Rgba([200, 160, 50, 255]))
    }

    #[test]
    fn test_compose_shapes() {
        let config = CompositorConfig::with_placements([
            Placement::new(280, 490),
            Placement::new(520, 490),
        ]);
        let compositor = Compositor::new(config).unwrap();
        let out = compositor.compose(&background(), &fixture()).unwrap();

        assert_eq!(out.dimensions(), Dimensions::new(800, 600));
        assert_eq!(out.mask.dimensions(), (800, 600));
        assert_eq!(out.overlay_size, Dimensions::new(20, 20));
        assert_eq!(out.placements, 2);
    }

    #[test]
    fn test_compose_scenario_footprint() {
        let mut config = CompositorConfig::with_placements([Placement::new(280, 490)]);
        config.apply_tone_filter = false;
        let compositor = Compositor::new(config).unwrap();
        let out = compositor.compose(&background(), &fixture()).unwrap();

        // Top-left (270, 480); padded mask region [267, 293) x [477, 503).
        assert_eq!(out.composite.get_pixel(280, 490).0, [200, 160, 50]);
        assert_eq!(out.composite.get_pixel(269, 490).0, [240, 240, 240]);
        assert!(out.mask.get_pixel(267, 477)[0] > 0);
        assert!(out.mask.get_pixel(292, 502)[0] > 0);
        assert_eq!(out.mask.get_pixel(260, 470)[0], 0);
        assert_eq!(out.mask.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let config = CompositorConfig::with_placements([Placement::new(10, 10)]);
        let compositor = Compositor::new(config).unwrap();
        let a = compositor.compose(&background(), &fixture()).unwrap();
        let b = compositor.compose(&background(), &fixture()).unwrap();
        assert_eq!(a.composite, b.composite);
        assert_eq!(a.mask, b.mask);
    }

    #[test]
    fn test_compose_rejects_oversized_overlay() {
        let config = CompositorConfig {
            scale_factor: 10.0,
            ..CompositorConfig::with_placements([Placement::new(0, 0)])
        };
        let compositor = Compositor::new(config).unwrap();
        let err = compositor.compose(&background(), &fixture()).unwrap_err();
        assert!(matches!(err, NightlightError::OverlayTooLarge { .. }));
    }

    #[test]
    fn test_compose_rejects_huge_scale_without_resizing() {
        let config = CompositorConfig {
            scale_factor: 1e12,
            ..CompositorConfig::with_placements([Placement::new(400, 300)])
        };
        let compositor = Compositor::new(config).unwrap();
        let speck = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let err = compositor.compose(&background(), &speck).unwrap_err();
        assert!(matches!(err, NightlightError::OverlayTooLarge { .. }));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CompositorConfig {
            scale_factor: 0.0,
            ..CompositorConfig::default()
        };
        assert!(matches!(
            Compositor::new(config),
            Err(NightlightError::Config { .. })
        ));
    }

    #[test]
    fn test_staging_path_is_hidden_sibling() {
        assert_eq!(
            staging_path(Path::new("/tmp/out/mask.png")),
            PathBuf::from("/tmp/out/.mask.png.partial")
        );
    }

    #[test]
    fn test_report_summary_lines() {
        let report = RunReport {
            composite_path: PathBuf::from("c.png"),
            mask_path: PathBuf::from("m.png"),
            width: 800,
            height: 600,
            overlay_width: 20,
            overlay_height: 20,
            placements: 4,
        };
        let text = report.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("c.png") && lines[0].contains("800x600"));
        assert!(lines[1].contains("m.png"));
        assert_eq!(lines[2], "Fixtures placed: 4");

        let json: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["placements"], 4);
    }
}
