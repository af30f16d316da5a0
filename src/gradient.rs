//! Radial background gradient.

use crate::canvas::{Canvas, Color, Point};
use image::Rgb;

/// How the normalized distance is shaped before interpolating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// `1 - (1 - r)^2`, brightens the center region and compresses the edge.
    EaseOut,
}

impl Easing {
    pub fn apply(self, ratio: f64) -> f64 {
        match self {
            Easing::Linear => ratio,
            Easing::EaseOut => 1.0 - (1.0 - ratio).powi(2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub inner: Color,
    pub outer: Color,
    /// Distance at which `outer` is reached, as a multiple of half the canvas side.
    pub reach: f64,
    pub easing: Easing,
}

impl RadialGradient {
    /// Distance from the center where the gradient saturates on a canvas of `side`.
    pub fn max_distance(&self, side: u32) -> f64 {
        (side / 2) as f64 * self.reach
    }

    /// Normalized, eased interpolation factor for a pixel at `distance` from the center.
    pub fn ratio(&self, distance: f64, side: u32) -> f64 {
        let linear = (distance / self.max_distance(side)).clamp(0.0, 1.0);
        self.easing.apply(linear)
    }

    pub fn color_at(&self, distance: f64, side: u32) -> Color {
        lerp(self.inner, self.outer, self.ratio(distance, side))
    }

    /// Fills a fresh `side × side` canvas with the gradient.
    pub fn render(&self, side: u32) -> Canvas {
        Canvas::from_fn(side, |p| self.color_at(p.distance(Point::ORIGIN), side))
    }
}

/// Channel-wise interpolation, truncating toward zero.
pub fn lerp(from: Color, to: Color, ratio: f64) -> Color {
    let channel = |i: usize| {
        let a = from.0[i] as f64;
        let b = to.0[i] as f64;
        (a + (b - a) * ratio) as u8
    };
    Rgb([channel(0), channel(1), channel(2)])
}
