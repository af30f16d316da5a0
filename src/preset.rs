//! The two emblem designs.
//!
//! Both follow the same drawing order (base disc, stem, crown, arms, end caps,
//! accents, ring arcs) but use unrelated constants. Every left-hand element is
//! the mirror of its right-hand counterpart.

use crate::canvas::{Canvas, Color, Point, WHITE};
use crate::curves::{self, SineCurve};
use crate::export::{AssetSlot, Manifest, ManifestEntry};
use crate::glyph::{Element, Glyph};
use crate::gradient::{Easing, RadialGradient};
use crate::raster::Joint;
use image::Rgb;

/// Side length of the master raster.
pub const CANVAS_SIDE: u32 = 1024;

const MASTER_LABEL: &str = "NutriBalance-AppIcon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Linear gradient, thin ring, five preview sizes.
    #[value(alias = "v1")]
    Classic,
    /// Eased gradient, rounded stem, full iOS asset catalog sizes.
    #[value(alias = "v2")]
    Refined,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// End caps, and the rim of the classic gradient.
    pub primary: Color,
    /// Stem, crown and arms.
    pub dark: Color,
    /// Inner accent curves.
    pub accent: Color,
    /// Center of the background gradient.
    pub glow: Color,
    /// Rim of the background gradient.
    pub edge: Color,
}

const CLASSIC: Palette = Palette {
    primary: Rgb([16, 185, 129]),
    dark: Rgb([6, 95, 70]),
    accent: Rgb([167, 243, 208]),
    glow: Rgb([52, 211, 153]),
    edge: Rgb([16, 185, 129]),
};

const REFINED: Palette = Palette {
    primary: Rgb([16, 185, 129]),
    dark: Rgb([6, 78, 59]),
    accent: Rgb([236, 253, 245]),
    glow: Rgb([52, 211, 153]),
    edge: Rgb([5, 150, 105]),
};

/// (pixel size, label suffix, idiom, size in points, scale)
const IOS_SLOTS: [(u32, &str, &str, &str, &str); 12] = [
    (1024, "AppStore", "ios-marketing", "1024x1024", "1x"),
    (180, "iPhone-60@3x", "iphone", "60x60", "3x"),
    (120, "iPhone-60@2x", "iphone", "60x60", "2x"),
    (167, "iPad-Pro-83.5@2x", "ipad", "83.5x83.5", "2x"),
    (152, "iPad-76@2x", "ipad", "76x76", "2x"),
    (76, "iPad-76@1x", "ipad", "76x76", "1x"),
    (40, "Spotlight-40@1x", "ipad", "40x40", "1x"),
    (80, "Spotlight-40@2x", "iphone", "40x40", "2x"),
    (120, "Spotlight-40@3x", "iphone", "40x40", "3x"),
    (29, "Settings-29@1x", "ipad", "29x29", "1x"),
    (58, "Settings-29@2x", "iphone", "29x29", "2x"),
    (87, "Settings-29@3x", "iphone", "29x29", "3x"),
];

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Refined => "refined",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Preset::Classic => CLASSIC,
            Preset::Refined => REFINED,
        }
    }

    pub fn gradient(self) -> RadialGradient {
        let palette = self.palette();
        let (reach, easing) = match self {
            Preset::Classic => (0.9, Easing::Linear),
            Preset::Refined => (1.2, Easing::EaseOut),
        };
        RadialGradient {
            inner: palette.glow,
            outer: palette.edge,
            reach,
            easing,
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            Preset::Classic => classic_glyph(&CLASSIC),
            Preset::Refined => refined_glyph(&REFINED),
        }
    }

    /// Background plus emblem at full resolution.
    pub fn render(self) -> Canvas {
        let mut canvas = self.gradient().render(CANVAS_SIDE);
        self.glyph().draw(&mut canvas);
        canvas
    }

    pub fn manifest(self) -> Manifest {
        match self {
            Preset::Classic => Manifest::new(
                [1024, 512, 180, 120, 60]
                    .into_iter()
                    .map(|size| ManifestEntry::new(size, format!("{MASTER_LABEL}-{size}")))
                    .collect(),
            ),
            Preset::Refined => {
                let mut entries = vec![ManifestEntry::new(
                    CANVAS_SIDE,
                    format!("{MASTER_LABEL}-{CANVAS_SIDE}"),
                )];
                entries.extend(IOS_SLOTS.iter().map(|&(size, name, idiom, points, scale)| {
                    ManifestEntry::new(size, format!("Icon-{name}"))
                        .with_slot(AssetSlot::new(idiom, points, scale))
                }));
                Manifest::new(entries)
            }
        }
    }
}

fn classic_glyph(palette: &Palette) -> Glyph {
    let arm = SineCurve {
        start: Point::new(20.0, -60.0),
        reach: 140.0,
        phase: 0.7,
        drop: 180.0,
        bow: 40.0,
        samples: 51,
    };
    let accent = SineCurve {
        start: Point::new(40.0, 20.0),
        reach: 60.0,
        phase: 0.5,
        drop: 60.0,
        bow: 0.0,
        samples: 26,
    };

    let mut glyph = Glyph::new();
    glyph
        .push(Element::circle(Point::ORIGIN, 320.0, WHITE))
        .push(Element::stroke(
            vec![Point::new(0.0, -180.0), Point::new(0.0, 140.0)],
            24.0,
            Joint::Butt,
            palette.dark,
        ))
        .push(Element::circle(Point::new(0.0, -200.0), 24.0, palette.dark))
        .push_pair(Element::stroke(arm.points(), 24.0, Joint::Round, palette.dark))
        .push_pair(Element::circle(Point::new(155.0, 95.0), 20.0, palette.primary))
        .push_pair(Element::stroke(accent.points(), 8.0, Joint::Butt, palette.accent));
    for (start, end) in [(30.0, 60.0), (300.0, 330.0)] {
        glyph.push_pair(Element::stroke(
            curves::arc(360.0, start, end, 2.0),
            12.0,
            Joint::Butt,
            WHITE,
        ));
    }
    glyph
}

fn refined_glyph(palette: &Palette) -> Glyph {
    let arm = SineCurve {
        start: Point::new(30.0, -40.0),
        reach: 130.0,
        phase: 0.6,
        drop: 150.0,
        bow: 0.0,
        samples: 101,
    };
    let accent = SineCurve {
        start: Point::new(50.0, 10.0),
        reach: 50.0,
        phase: 0.4,
        drop: 60.0,
        bow: 0.0,
        samples: 61,
    };

    let mut glyph = Glyph::new();
    // feathered base disc: widest first, each smaller one on top
    for radius in (340..=343).rev() {
        glyph.push(Element::circle(Point::ORIGIN, radius as f64, WHITE));
    }
    glyph
        .push(Element::RoundedRect {
            min: Point::new(-14.0, -200.0),
            max: Point::new(14.0, 80.0),
            radius: 14.0,
            color: palette.dark,
        })
        .push(Element::circle(Point::new(0.0, -210.0), 32.0, palette.dark))
        .push_pair(Element::stroke(arm.points(), 26.0, Joint::Round, palette.dark))
        .push_pair(Element::circle(Point::new(145.0, 108.0), 24.0, palette.primary))
        .push_pair(Element::stroke(accent.points(), 10.0, Joint::Round, palette.accent));
    for (start, end) in [(25.0, 65.0), (295.0, 335.0)] {
        glyph.push_pair(Element::stroke(
            curves::arc(385.0, start, end, 0.5),
            14.0,
            Joint::Round,
            WHITE,
        ));
    }
    glyph
}
