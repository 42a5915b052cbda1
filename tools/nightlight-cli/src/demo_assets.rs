//! Synthetic sample inputs for trying the pipeline without real photos.

use image::{ImageBuffer, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;
use nightlight_compositor::Placement;

pub const HOUSE_WIDTH: u32 = 800;
pub const HOUSE_HEIGHT: u32 = 600;
pub const FIXTURE_SIZE: u32 = 100;

/// Flat daytime house: light sky, roof triangle, wall, and door.
pub fn create_house() -> RgbaImage {
    let mut img = ImageBuffer::from_pixel(HOUSE_WIDTH, HOUSE_HEIGHT, Rgba([240, 240, 240, 255]));

    // Roof
    draw_polygon_mut(
        &mut img,
        &[Point::new(200, 300), Point::new(400, 100), Point::new(600, 300)],
        Rgba([180, 140, 100, 255]),
    );

    // Wall
    draw_filled_rect_mut(
        &mut img,
        Rect::at(250, 300).of_size(301, 201),
        Rgba([200, 180, 160, 255]),
    );

    // Door
    draw_filled_rect_mut(
        &mut img,
        Rect::at(350, 380).of_size(101, 121),
        Rgba([120, 80, 60, 255]),
    );

    img
}

/// Warm bronze disc on a transparent square.
pub fn create_fixture() -> RgbaImage {
    let mut img = ImageBuffer::from_pixel(FIXTURE_SIZE, FIXTURE_SIZE, Rgba([0, 0, 0, 0]));
    let centre = (FIXTURE_SIZE / 2) as i32;
    draw_filled_circle_mut(&mut img, (centre, centre), 40, Rgba([200, 160, 50, 230]));
    img
}

/// Fixture centers either side of the door and at both wall corners.
pub fn stock_placements() -> Vec<Placement> {
    vec![
        Placement::new(280, 490),
        Placement::new(520, 490),
        Placement::new(200, 350),
        Placement::new(600, 350),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_has_expected_layout() {
        let house = create_house();
        assert_eq!(house.dimensions(), (HOUSE_WIDTH, HOUSE_HEIGHT));
        assert_eq!(*house.get_pixel(5, 5), Rgba([240, 240, 240, 255]));
        assert_eq!(*house.get_pixel(400, 200), Rgba([180, 140, 100, 255]));
        assert_eq!(*house.get_pixel(300, 350), Rgba([200, 180, 160, 255]));
        assert_eq!(*house.get_pixel(400, 450), Rgba([120, 80, 60, 255]));
    }

    #[test]
    fn fixture_is_transparent_outside_disc() {
        let fixture = create_fixture();
        assert_eq!(fixture.get_pixel(0, 0)[3], 0);
        assert_eq!(*fixture.get_pixel(50, 50), Rgba([200, 160, 50, 230]));
    }

    #[test]
    fn stock_placements_fit_the_house() {
        for p in stock_placements() {
            assert!(p.x >= 0 && (p.x as u32) <= HOUSE_WIDTH);
            assert!(p.y >= 0 && (p.y as u32) <= HOUSE_HEIGHT);
        }
    }
}
