//! Parametric point generators for the decorative strokes.
//!
//! Every generator produces the right-hand variant of an element in
//! center-relative coordinates; left-hand variants are obtained by mirroring.

use crate::canvas::Point;
use std::f64::consts::PI;

/// A curve that sweeps outwards along a quarter sine while dropping downwards.
///
/// For progress `p` in `[0, 1]`:
/// `x = start.x + reach * sin(p * PI * phase)` and
/// `y = start.y + drop * p - bow * sin(p * PI)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineCurve {
    pub start: Point,
    pub reach: f64,
    /// Fraction of a half period the sine sweeps through.
    pub phase: f64,
    pub drop: f64,
    /// Upward bulge at mid-curve; zero for a curve that only drops.
    pub bow: f64,
    pub samples: usize,
}

impl SineCurve {
    pub fn at(&self, progress: f64) -> Point {
        Point::new(
            self.start.x + self.reach * (progress * PI * self.phase).sin(),
            self.start.y + self.drop * progress - self.bow * (progress * PI).sin(),
        )
    }

    pub fn points(&self) -> Vec<Point> {
        match self.samples {
            0 => Vec::new(),
            1 => vec![self.at(0.0)],
            n => (0..n)
                .map(|i| self.at(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

/// Points on a circle of `radius` from `start_deg` to `end_deg` inclusive, every `step_deg`.
///
/// Angles follow screen orientation: 90° points straight down.
pub fn arc(radius: f64, start_deg: f64, end_deg: f64, step_deg: f64) -> Vec<Point> {
    if step_deg <= 0.0 || end_deg < start_deg {
        return Vec::new();
    }
    let steps = ((end_deg - start_deg) / step_deg).round() as usize;
    (0..=steps)
        .map(|i| {
            let rad = (start_deg + i as f64 * step_deg).to_radians();
            Point::new(radius * rad.cos(), radius * rad.sin())
        })
        .collect()
}

/// Closed leaf outline: a cardioid pinched at 0° and 180°, tilted by -45°.
///
/// `r = scale * (1 - 0.5 sin t) * (0.8 + 0.2 cos 2t)` sampled every `step_deg`
/// over a full turn. The first point is not repeated at the end.
pub fn leaf_outline(scale: f64, step_deg: f64) -> Vec<Point> {
    if step_deg <= 0.0 {
        return Vec::new();
    }
    let steps = (360.0 / step_deg).round() as usize;
    (0..steps)
        .map(|i| {
            let t = (i as f64 * step_deg).to_radians();
            let r = scale * (1.0 - 0.5 * t.sin()) * (0.8 + 0.2 * (2.0 * t).cos());
            Point::new(r * (t - PI / 4.0).cos(), r * (t - PI / 4.0).sin())
        })
        .collect()
}

/// Mirrors a point sequence across the vertical axis, keeping its order.
pub fn mirror(points: &[Point]) -> Vec<Point> {
    points.iter().map(|p| p.mirrored()).collect()
}
