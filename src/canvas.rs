//! The square raster every stage draws into.
//!
//! Shapes are described in coordinates relative to the canvas center, so a
//! point and its mirror image differ only in the sign of `x`.

use image::{Rgb, RgbImage};

pub type Color = Rgb<u8>;

pub const WHITE: Color = Rgb([255, 255, 255]);

/// A point relative to the canvas center, x to the right and y downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflection across the vertical axis through the center.
    pub fn mirrored(self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
    center: u32,
}

impl Canvas {
    /// Creates a `side × side` canvas filled with `color`.
    pub fn new(side: u32, color: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(side, side, color),
            center: side / 2,
        }
    }

    /// Creates a canvas whose pixels are computed from their center-relative position.
    pub fn from_fn(side: u32, f: impl Fn(Point) -> Color) -> Self {
        let center = side / 2;
        let image = RgbImage::from_fn(side, side, |x, y| {
            f(Point::new(
                x as f64 - center as f64,
                y as f64 - center as f64,
            ))
        });
        Self { image, center }
    }

    pub fn side(&self) -> u32 {
        self.image.width()
    }

    /// Pixel index of the center on both axes.
    pub fn center(&self) -> u32 {
        self.center
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        *self.image.get_pixel(x, y)
    }

    /// Blends `color` over the pixel with the given coverage in `[0, 1]`.
    pub fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f64) {
        if coverage <= 0.0 {
            return;
        }
        let pixel = self.image.get_pixel_mut(x, y);
        if coverage >= 1.0 {
            *pixel = color;
            return;
        }
        for (dst, src) in pixel.0.iter_mut().zip(color.0) {
            let d = *dst as f64;
            *dst = (d + (src as f64 - d) * coverage).round() as u8;
        }
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_is_center_relative() {
        let canvas = Canvas::from_fn(8, |p| {
            if p == Point::ORIGIN {
                WHITE
            } else {
                Rgb([0, 0, 0])
            }
        });
        assert_eq!(canvas.center(), 4);
        assert_eq!(canvas.pixel(4, 4), WHITE);
        assert_eq!(canvas.pixel(3, 4), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_blend_partial_coverage() {
        let mut canvas = Canvas::new(2, Rgb([0, 100, 200]));
        canvas.blend(0, 0, Rgb([100, 100, 100]), 0.5);
        assert_eq!(canvas.pixel(0, 0), Rgb([50, 100, 150]));

        canvas.blend(1, 1, WHITE, 1.0);
        assert_eq!(canvas.pixel(1, 1), WHITE);

        canvas.blend(1, 0, WHITE, 0.0);
        assert_eq!(canvas.pixel(1, 0), Rgb([0, 100, 200]));
    }

    #[test]
    fn test_point_mirror() {
        let p = Point::new(-155.0, 95.0);
        assert_eq!(p.mirrored(), Point::new(155.0, 95.0));
        assert_eq!(p.mirrored().mirrored(), p);
        assert_eq!(Point::new(3.0, 4.0).distance(Point::ORIGIN), 5.0);
    }
}
