//! Composition of primitives into the emblem.

use crate::canvas::{Canvas, Color, Point};
use crate::curves;
use crate::raster::{self, Joint};

/// One drawing primitive with all of its parameters resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
        color: Color,
    },
    RoundedRect {
        min: Point,
        max: Point,
        radius: f64,
        color: Color,
    },
    Polygon {
        points: Vec<Point>,
        color: Color,
    },
    Stroke {
        points: Vec<Point>,
        width: f64,
        joint: Joint,
        color: Color,
    },
}

impl Element {
    pub fn circle(center: Point, radius: f64, color: Color) -> Self {
        Element::Ellipse {
            center,
            rx: radius,
            ry: radius,
            color,
        }
    }

    pub fn stroke(points: Vec<Point>, width: f64, joint: Joint, color: Color) -> Self {
        Element::Stroke {
            points,
            width,
            joint,
            color,
        }
    }

    /// The same element reflected across the vertical axis through the center.
    pub fn mirrored(&self) -> Self {
        match self {
            Element::Ellipse {
                center,
                rx,
                ry,
                color,
            } => Element::Ellipse {
                center: center.mirrored(),
                rx: *rx,
                ry: *ry,
                color: *color,
            },
            Element::RoundedRect {
                min,
                max,
                radius,
                color,
            } => Element::RoundedRect {
                min: Point::new(-max.x, min.y),
                max: Point::new(-min.x, max.y),
                radius: *radius,
                color: *color,
            },
            Element::Polygon { points, color } => Element::Polygon {
                points: curves::mirror(points),
                color: *color,
            },
            Element::Stroke {
                points,
                width,
                joint,
                color,
            } => Element::Stroke {
                points: curves::mirror(points),
                width: *width,
                joint: *joint,
                color: *color,
            },
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        match self {
            Element::Ellipse {
                center,
                rx,
                ry,
                color,
            } => raster::fill_ellipse(canvas, *center, *rx, *ry, *color),
            Element::RoundedRect {
                min,
                max,
                radius,
                color,
            } => raster::fill_rounded_rect(canvas, *min, *max, *radius, *color),
            Element::Polygon { points, color } => raster::fill_polygon(canvas, points, *color),
            Element::Stroke {
                points,
                width,
                joint,
                color,
            } => raster::stroke_polyline(canvas, points, *width, *joint, *color),
        }
    }
}

/// An ordered list of elements; later elements are drawn on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glyph {
    elements: Vec<Element>,
}

impl Glyph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Pushes the left-hand mirror of `right`, then `right` itself.
    pub fn push_pair(&mut self, right: Element) -> &mut Self {
        self.elements.push(right.mirrored());
        self.elements.push(right);
        self
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        for element in &self.elements {
            element.draw(canvas);
        }
    }
}
