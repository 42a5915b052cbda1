//! Inpainting mask: white padded rectangles over each placement, softened by a blur.

use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::filter::gaussian_blur_f32;
use imageproc::rect::Rect;

use crate::geometry::{MaskPadding, Placement, PlacementBounds, Region};

const MASK_ON: Luma<u8> = Luma([255]);

/// Build the blurred mask for every placement.
///
/// Only geometry is used here; the composite's pixels never feed the mask.
pub fn build_mask(
    bounds: &PlacementBounds,
    placements: &[Placement],
    padding: MaskPadding,
) -> GrayImage {
    let background = bounds.background();
    let mut mask = GrayImage::new(background.width, background.height);

    for placement in placements {
        let region = padding.region(bounds.clamp(*placement), bounds);
        tracing::debug!(
            center = %placement,
            x = region.x,
            y = region.y,
            width = region.width,
            height = region.height,
            "Filling mask region"
        );
        draw_filled_rect_mut(&mut mask, to_rect(region), MASK_ON);
    }

    let radius = padding.blur_radius_within(background);
    tracing::debug!(radius, "Blurring mask");
    gaussian_blur_f32(&mask, radius as f32)
}

fn to_rect(region: Region) -> Rect {
    Rect::at(region.x as i32, region.y as i32).of_size(region.width, region.height)
}
