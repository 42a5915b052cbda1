//! Alpha blending with the Porter-Duff "over" operator.

use image::{Rgba, RgbaImage};

use crate::geometry::TopLeft;

/// Blend `foreground` over `background`.
///
/// result = foreground + background * (1 - foreground.alpha), with channels
/// un-premultiplied by the output alpha and rounded to the nearest value.
pub fn blend_over(background: Rgba<u8>, foreground: Rgba<u8>) -> Rgba<u8> {
    let fg_alpha = f32::from(foreground[3]) / 255.0;
    if fg_alpha <= 0.0 {
        return background;
    }
    if foreground[3] == u8::MAX {
        return foreground;
    }

    let bg_alpha = f32::from(background[3]) / 255.0;
    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);
    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |fg: u8, bg: u8| -> u8 {
        let fg = f32::from(fg) / 255.0;
        let bg = f32::from(bg) / 255.0;
        let out = (fg * fg_alpha + bg * bg_alpha * (1.0 - fg_alpha)) / out_alpha;
        to_u8(out)
    };

    Rgba([
        channel(foreground[0], background[0]),
        channel(foreground[1], background[1]),
        channel(foreground[2], background[2]),
        to_u8(out_alpha),
    ])
}

/// Composite `layer` onto `target` with its top-left corner at `at`.
///
/// Pixels falling outside `target` are skipped.
pub fn paste_over(target: &mut RgbaImage, layer: &RgbaImage, at: TopLeft) {
    let x_end = (at.x + layer.width()).min(target.width());
    let y_end = (at.y + layer.height()).min(target.height());

    for ty in at.y..y_end {
        for tx in at.x..x_end {
            let src = *layer.get_pixel(tx - at.x, ty - at.y);
            let dst = target.get_pixel_mut(tx, ty);
            *dst = blend_over(*dst, src);
        }
    }
}

fn to_u8(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_foreground_replaces() {
        let out = blend_over(Rgba([1, 2, 3, 255]), Rgba([200, 160, 50, 255]));
        assert_eq!(out, Rgba([200, 160, 50, 255]));
    }

    #[test]
    fn test_transparent_foreground_is_noop() {
        let out = blend_over(Rgba([1, 2, 3, 255]), Rgba([200, 160, 50, 0]));
        assert_eq!(out, Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_half_alpha_over_opaque() {
        let out = blend_over(Rgba([0, 0, 0, 255]), Rgba([255, 255, 255, 128]));
        assert_eq!(out[3], 255);
        assert!((i16::from(out[0]) - 128).abs() <= 1);
    }

    #[test]
    fn test_over_transparent_background_keeps_colour() {
        let out = blend_over(Rgba([0, 0, 0, 0]), Rgba([200, 100, 50, 100]));
        assert_eq!(out, Rgba([200, 100, 50, 100]));
    }

    #[test]
    fn test_paste_over_only_touches_footprint() {
        let mut target = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        let layer = RgbaImage::from_pixel(3, 2, Rgba([255, 0, 0, 255]));
        paste_over(&mut target, &layer, TopLeft { x: 4, y: 5 });

        assert_eq!(*target.get_pixel(4, 5), Rgba([255, 0, 0, 255]));
        assert_eq!(*target.get_pixel(6, 6), Rgba([255, 0, 0, 255]));
        assert_eq!(*target.get_pixel(7, 5), Rgba([0, 0, 0, 255]));
        assert_eq!(*target.get_pixel(4, 7), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_paste_over_clips_at_edges() {
        let mut target = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let layer = RgbaImage::from_pixel(3, 3, Rgba([9, 9, 9, 255]));
        paste_over(&mut target, &layer, TopLeft { x: 2, y: 2 });
        assert_eq!(*target.get_pixel(3, 3), Rgba([9, 9, 9, 255]));
    }
}
