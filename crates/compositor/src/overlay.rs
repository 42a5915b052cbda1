//! Resized overlay shared by the composite and mask builders.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::geometry::Dimensions;

/// The overlay after scaling, computed once per run.
#[derive(Clone)]
pub struct ResizedOverlay {
    image: RgbaImage,
}

impl std::fmt::Debug for ResizedOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizedOverlay")
            .field("dimensions", &self.dimensions())
            .finish()
    }
}

impl ResizedOverlay {
    /// Scale `source` by `scale_factor` in both dimensions with Lanczos3.
    ///
    /// Each dimension is rounded on its own and floored at one pixel.
    pub fn from_source(source: &RgbaImage, scale_factor: f64) -> Self {
        let target = scaled_dimensions(Dimensions::of(source), scale_factor);
        let image = imageops::resize(source, target.width, target.height, FilterType::Lanczos3);
        tracing::debug!(
            from = %Dimensions::of(source),
            to = %target,
            scale_factor,
            "Resized overlay"
        );
        Self { image }
    }

    /// Wrap an image that is already at its final size.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::of(&self.image)
    }
}

/// Target size for a scaled overlay.
pub fn scaled_dimensions(source: Dimensions, scale_factor: f64) -> Dimensions {
    let scale = |len: u32| (f64::from(len) * scale_factor).round().max(1.0) as u32;
    Dimensions::new(scale(source.width), scale(source.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_scaled_dimensions_round() {
        assert_eq!(
            scaled_dimensions(Dimensions::new(100, 100), 0.2),
            Dimensions::new(20, 20)
        );
        assert_eq!(
            scaled_dimensions(Dimensions::new(33, 10), 0.5),
            Dimensions::new(17, 5)
        );
    }

    #[test]
    fn test_scaled_dimensions_never_zero() {
        assert_eq!(
            scaled_dimensions(Dimensions::new(3, 400), 0.01),
            Dimensions::new(1, 4)
        );
    }

    #[test]
    fn test_from_source_resizes_pixels() {
        let source = RgbaImage::from_pixel(100, 50, Rgba([200, 160, 50, 230]));
        let resized = ResizedOverlay::from_source(&source, 0.2);
        assert_eq!(resized.dimensions(), Dimensions::new(20, 10));

        let centre = resized.image().get_pixel(10, 5);
        for (got, want) in centre.0.iter().zip([200u8, 160, 50, 230]) {
            assert!((i16::from(*got) - i16::from(want)).abs() <= 1);
        }
    }
}
