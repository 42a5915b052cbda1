//! Background tone filter: darken, then wash with a translucent tint.

use image::{Rgba, RgbaImage};
use nightlight_common::{NightlightError, NightlightResult};
use serde::{Deserialize, Serialize};

use crate::blend::blend_over;

/// Brightness scaling followed by a constant tint layer blended "over" the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneFilter {
    /// Multiplier for the RGB channels. Alpha is left alone.
    pub brightness: f32,

    /// RGBA tint composited over every pixel after darkening.
    pub tint: [u8; 4],
}

impl ToneFilter {
    /// Half brightness with a faint blue wash.
    pub const NIGHT: ToneFilter = ToneFilter {
        brightness: 0.5,
        tint: [20, 20, 50, 80],
    };

    pub fn validate(&self) -> NightlightResult<()> {
        if !self.brightness.is_finite() || self.brightness < 0.0 {
            return Err(NightlightError::config(format!(
                "tone brightness must be a finite value >= 0, got {}",
                self.brightness
            )));
        }
        Ok(())
    }

    /// Return a tone-adjusted copy of `image`.
    pub fn apply(&self, image: &RgbaImage) -> RgbaImage {
        let tint = Rgba(self.tint);
        let mut out = image.clone();
        for pixel in out.pixels_mut() {
            for channel in pixel.0.iter_mut().take(3) {
                *channel = scale_channel(*channel, self.brightness);
            }
            *pixel = blend_over(*pixel, tint);
        }
        out
    }
}

impl Default for ToneFilter {
    fn default() -> Self {
        Self::NIGHT
    }
}

fn scale_channel(value: u8, factor: f32) -> u8 {
    (f32::from(value) * factor).round().clamp(0.0, 255.0) as u8
}
