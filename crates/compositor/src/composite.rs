//! Composite construction: tone the background, then paste every placement.

use image::RgbaImage;

use crate::blend::paste_over;
use crate::geometry::{Placement, PlacementBounds};
use crate::overlay::ResizedOverlay;
use crate::tone::ToneFilter;

/// Paste `overlay` onto a copy of `background` at each placement, in order.
///
/// When `tone` is given it is applied to the background first, once. Later
/// placements land on top of earlier ones where they overlap. `bounds` must
/// describe this overlay on this background.
pub fn build_composite(
    background: &RgbaImage,
    overlay: &ResizedOverlay,
    bounds: &PlacementBounds,
    placements: &[Placement],
    tone: Option<&ToneFilter>,
) -> RgbaImage {
    let mut composite = match tone {
        Some(filter) => filter.apply(background),
        None => background.clone(),
    };

    for placement in placements {
        let top_left = bounds.clamp(*placement);
        tracing::debug!(
            center = %placement,
            x = top_left.x,
            y = top_left.y,
            "Pasting overlay"
        );
        paste_over(&mut composite, overlay.image(), top_left);
    }

    composite
}
