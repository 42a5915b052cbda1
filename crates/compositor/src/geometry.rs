//! Placement geometry: clamping overlay positions and padding mask regions.
//!
//! All coordinates are integer pixels with `(0, 0)` at the top-left of the
//! background.

use std::fmt;
use std::str::FromStr;

use nightlight_common::{NightlightError, NightlightResult};
use serde::{Deserialize, Serialize};

/// Width and height of a raster in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Dimensions of any image buffer.
    pub fn of<I: image::GenericImageView>(image: &I) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height }
    }

    /// Whether `other` fits inside `self` in both dimensions.
    pub fn contains(&self, other: &Dimensions) -> bool {
        other.width <= self.width && other.height <= self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Center point where an overlay instance is anchored.
///
/// May lie outside the background; clamping pulls it back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Placement {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl FromStr for Placement {
    type Err = NightlightError;

    /// Parse `"X,Y"` (whitespace around either number is ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| NightlightError::config(format!("placement '{s}' is not X,Y")))?;

        let parse = |v: &str| {
            v.trim().parse::<i32>().map_err(|e| {
                NightlightError::config(format!("placement '{s}' has bad coordinate '{v}': {e}"))
            })
        };

        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Top-left pixel of a clamped overlay instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopLeft {
    pub x: u32,
    pub y: u32,
}

/// Valid top-left range for an overlay of a fixed size on a fixed background.
///
/// Construction fails when the overlay is larger than the background in
/// either dimension, so `clamp` never sees an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementBounds {
    overlay: Dimensions,
    background: Dimensions,
}

impl PlacementBounds {
    pub fn new(overlay: Dimensions, background: Dimensions) -> NightlightResult<Self> {
        if !background.contains(&overlay) {
            return Err(NightlightError::OverlayTooLarge {
                overlay_width: overlay.width,
                overlay_height: overlay.height,
                background_width: background.width,
                background_height: background.height,
            });
        }
        Ok(Self {
            overlay,
            background,
        })
    }

    pub fn overlay(&self) -> Dimensions {
        self.overlay
    }

    pub fn background(&self) -> Dimensions {
        self.background
    }

    /// Convert a center placement into a top-left that keeps the whole
    /// overlay inside the background.
    pub fn clamp(&self, placement: Placement) -> TopLeft {
        let x = clamp_axis(placement.x, self.overlay.width, self.background.width);
        let y = clamp_axis(placement.y, self.overlay.height, self.background.height);
        TopLeft { x, y }
    }
}

fn clamp_axis(center: i32, overlay_len: u32, background_len: u32) -> u32 {
    let start = i64::from(center) - i64::from(overlay_len / 2);
    let max_start = i64::from(background_len - overlay_len);
    start.clamp(0, max_start) as u32
}

/// Axis-aligned pixel region, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Outward padding applied around each overlay footprint in the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskPadding {
    pub pad_x: u32,
    pub pad_y: u32,
}

impl MaskPadding {
    /// Half of `dilation` times the overlay size goes on each side.
    pub fn from_overlay(overlay: Dimensions, dilation: f64) -> Self {
        let half = |len: u32| (f64::from(len) * dilation / 2.0).round().max(0.0) as u32;
        Self {
            pad_x: half(overlay.width),
            pad_y: half(overlay.height),
        }
    }

    /// Gaussian blur radius for the finished mask. Never below 1.
    pub fn blur_radius(&self) -> u32 {
        (self.pad_x.max(self.pad_y) / 2).max(1)
    }

    /// `blur_radius` capped at the larger side of `canvas`.
    ///
    /// Past that size the blur is already flat across the whole image.
    pub fn blur_radius_within(&self, canvas: Dimensions) -> u32 {
        self.blur_radius().min(canvas.width.max(canvas.height).max(1))
    }

    /// The padded footprint of an overlay at `top_left`, clipped to `bounds`.
    pub fn region(&self, top_left: TopLeft, bounds: &PlacementBounds) -> Region {
        let overlay = bounds.overlay();
        let background = bounds.background();

        let x0 = top_left.x.saturating_sub(self.pad_x);
        let y0 = top_left.y.saturating_sub(self.pad_y);
        let x1 = (top_left.x + overlay.width)
            .saturating_add(self.pad_x)
            .min(background.width);
        let y1 = (top_left.y + overlay.height)
            .saturating_add(self.pad_y)
            .min(background.height);

        Region {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }
}
