//! Anti-aliased primitive rasterization.
//!
//! Each primitive is first painted into a coverage mask with 2×2 samples per
//! pixel, placed ±0.25 px around the pixel's own coordinate. The mask is then
//! blended over the canvas once, so overlapping parts of one primitive (the
//! segments and joints of a stroke) never darken each other. Because sample
//! positions are symmetric around every pixel, a shape and its mirror image
//! cover mirrored pixels identically.

use crate::canvas::{Canvas, Color, Point};

const SAMPLES_PER_AXIS: usize = 2;
const SAMPLE_OFFSET: f64 = 0.25;

/// Axis-aligned bounding box in center-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn around(center: Point, rx: f64, ry: f64) -> Self {
        Self {
            min: Point::new(center.x - rx, center.y - ry),
            max: Point::new(center.x + rx, center.y + ry),
        }
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        Some(points.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |b, p| Self {
                min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            },
        ))
    }

    pub fn expand(self, by: f64) -> Self {
        Self {
            min: Point::new(self.min.x - by, self.min.y - by),
            max: Point::new(self.max.x + by, self.max.y + by),
        }
    }
}

/// How consecutive segments of a stroked polyline meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    /// Segments are plain rectangles; outer corners show small notches.
    Butt,
    /// A disc the width of the stroke fills every interior vertex.
    Round,
}

/// Supersampled coverage over a pixel window of the canvas.
struct Coverage {
    center: f64,
    side: u32,
    /// First pixel of the window on each axis.
    x0: u32,
    y0: u32,
    /// Window size in pixels.
    width: u32,
    height: u32,
    samples: Vec<bool>,
}

impl Coverage {
    /// A mask covering `bounds` (plus a pixel of slack), clipped to the canvas.
    fn new(canvas: &Canvas, bounds: Bounds) -> Option<Self> {
        let side = canvas.side();
        let center = canvas.center() as f64;
        let bounds = bounds.expand(1.0);
        let clip = |lo: f64, hi: f64| -> Option<(u32, u32)> {
            let lo = (lo + center).floor().max(0.0);
            let hi = (hi + center).ceil().min(side as f64 - 1.0);
            (lo <= hi && hi >= 0.0 && lo < side as f64).then_some((lo as u32, hi as u32))
        };
        let (x0, x1) = clip(bounds.min.x, bounds.max.x)?;
        let (y0, y1) = clip(bounds.min.y, bounds.max.y)?;
        let width = x1 - x0 + 1;
        let height = y1 - y0 + 1;
        let len = width as usize * height as usize * SAMPLES_PER_AXIS * SAMPLES_PER_AXIS;
        Some(Self {
            center,
            side,
            x0,
            y0,
            width,
            height,
            samples: vec![false; len],
        })
    }

    fn row_len(&self) -> usize {
        self.width as usize * SAMPLES_PER_AXIS
    }

    /// Center-relative coordinate of sample `k` of pixel `pixel`.
    fn sample_coord(&self, pixel: u32, k: usize) -> f64 {
        (pixel as f64 - self.center) - SAMPLE_OFFSET + k as f64 * 2.0 * SAMPLE_OFFSET
    }

    /// Marks every sample within `bounds` for which `inside` holds.
    fn paint(&mut self, bounds: Bounds, inside: impl Fn(Point) -> bool) {
        let bounds = bounds.expand(1.0);
        let span = |lo: f64, hi: f64, first: u32, count: u32| -> (u32, u32) {
            let lo = ((lo + self.center).floor().max(first as f64)) as u32;
            let hi = ((hi + self.center).ceil().min((first + count - 1) as f64)).max(0.0) as u32;
            (lo, hi)
        };
        let (px0, px1) = span(bounds.min.x, bounds.max.x, self.x0, self.width);
        let (py0, py1) = span(bounds.min.y, bounds.max.y, self.y0, self.height);
        if px0 > px1 || py0 > py1 || px1 >= self.side || py1 >= self.side {
            return;
        }
        let row_len = self.row_len();
        for py in py0..=py1 {
            for ky in 0..SAMPLES_PER_AXIS {
                let sy = self.sample_coord(py, ky);
                let row = ((py - self.y0) as usize * SAMPLES_PER_AXIS + ky) * row_len;
                for px in px0..=px1 {
                    for kx in 0..SAMPLES_PER_AXIS {
                        let idx = row + (px - self.x0) as usize * SAMPLES_PER_AXIS + kx;
                        if !self.samples[idx] && inside(Point::new(self.sample_coord(px, kx), sy)) {
                            self.samples[idx] = true;
                        }
                    }
                }
            }
        }
    }

    fn composite(&self, canvas: &mut Canvas, color: Color) {
        let row_len = self.row_len();
        let per_pixel = (SAMPLES_PER_AXIS * SAMPLES_PER_AXIS) as f64;
        for py in 0..self.height as usize {
            for px in 0..self.width as usize {
                let mut hits = 0usize;
                for ky in 0..SAMPLES_PER_AXIS {
                    let row = (py * SAMPLES_PER_AXIS + ky) * row_len;
                    for kx in 0..SAMPLES_PER_AXIS {
                        if self.samples[row + px * SAMPLES_PER_AXIS + kx] {
                            hits += 1;
                        }
                    }
                }
                if hits > 0 {
                    canvas.blend(
                        self.x0 + px as u32,
                        self.y0 + py as u32,
                        color,
                        hits as f64 / per_pixel,
                    );
                }
            }
        }
    }
}

pub fn fill_ellipse(canvas: &mut Canvas, center: Point, rx: f64, ry: f64, color: Color) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let bounds = Bounds::around(center, rx, ry);
    let Some(mut mask) = Coverage::new(canvas, bounds) else {
        return;
    };
    mask.paint(bounds, |p| {
        let nx = (p.x - center.x) / rx;
        let ny = (p.y - center.y) / ry;
        nx * nx + ny * ny <= 1.0
    });
    mask.composite(canvas, color);
}

pub fn fill_circle(canvas: &mut Canvas, center: Point, radius: f64, color: Color) {
    fill_ellipse(canvas, center, radius, radius, color);
}

pub fn fill_rect(canvas: &mut Canvas, min: Point, max: Point, color: Color) {
    fill_rounded_rect(canvas, min, max, 0.0, color);
}

/// Fills the rectangle `[min, max]` with corners rounded to `radius`.
///
/// The radius is capped at half the shorter side.
pub fn fill_rounded_rect(canvas: &mut Canvas, min: Point, max: Point, radius: f64, color: Color) {
    if max.x < min.x || max.y < min.y {
        return;
    }
    let r = radius
        .min((max.x - min.x) / 2.0)
        .min((max.y - min.y) / 2.0)
        .max(0.0);
    let bounds = Bounds { min, max };
    let Some(mut mask) = Coverage::new(canvas, bounds) else {
        return;
    };
    mask.paint(bounds, |p| {
        let qx = p.x.clamp(min.x + r, max.x - r);
        let qy = p.y.clamp(min.y + r, max.y - r);
        let dx = p.x - qx;
        let dy = p.y - qy;
        dx * dx + dy * dy <= r * r
    });
    mask.composite(canvas, color);
}

/// Fills a closed polygon using the even-odd rule.
pub fn fill_polygon(canvas: &mut Canvas, points: &[Point], color: Color) {
    if points.len() < 3 {
        return;
    }
    let Some(bounds) = Bounds::of_points(points) else {
        return;
    };
    let Some(mut mask) = Coverage::new(canvas, bounds) else {
        return;
    };
    mask.paint(bounds, |p| {
        let mut inside = false;
        let mut prev = points[points.len() - 1];
        for &cur in points {
            if (cur.y > p.y) != (prev.y > p.y) {
                let x = cur.x + (p.y - cur.y) * (prev.x - cur.x) / (prev.y - cur.y);
                if p.x < x {
                    inside = !inside;
                }
            }
            prev = cur;
        }
        inside
    });
    mask.composite(canvas, color);
}

/// Strokes an open polyline `width` pixels wide.
pub fn stroke_polyline(
    canvas: &mut Canvas,
    points: &[Point],
    width: f64,
    joint: Joint,
    color: Color,
) {
    if points.len() < 2 || width <= 0.0 {
        return;
    }
    let half = width / 2.0;
    let Some(bounds) = Bounds::of_points(points) else {
        return;
    };
    let Some(mut mask) = Coverage::new(canvas, bounds.expand(half)) else {
        return;
    };

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len2 = dx * dx + dy * dy;
        if len2 == 0.0 {
            continue;
        }
        let Some(seg_bounds) = Bounds::of_points(pair) else {
            continue;
        };
        mask.paint(seg_bounds.expand(half), |p| {
            let px = p.x - a.x;
            let py = p.y - a.y;
            let along = px * dx + py * dy;
            let across = px * dy - py * dx;
            (0.0..=len2).contains(&along) && across * across <= half * half * len2
        });
    }

    if joint == Joint::Round {
        for &v in &points[1..points.len() - 1] {
            mask.paint(Bounds::around(v, half, half), |p| {
                let dx = p.x - v.x;
                let dy = p.y - v.y;
                dx * dx + dy * dy <= half * half
            });
        }
    }

    mask.composite(canvas, color);
}
