//! Device-space layout of the temple emblem.
//!
//! [`Layout::compute`] resolves the reference geometry for one pixel size into
//! an ordered list of [`Primitive`]s. The order of that list is the painter's
//! order: later primitives occlude earlier ones.

use palette::Srgb;

use crate::geometry::{CenteredRect, MIN_DIMENSION, Scale, Style, TempleGeometry};

// ============================================================================
// RectPx
// ============================================================================

/// A rectangle in device pixels.
///
/// The rectangle covers columns `x..x + width` and rows `y..y + height`.
/// Positions are signed because small shapes placed relative to a larger one
/// can start left of or above the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle starting at origin (0, 0) with the given dimensions.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the right edge coordinate (x + width), exclusive.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Returns the bottom edge coordinate (y + height), exclusive.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Shrinks the rectangle by `amount` on every side.
    ///
    /// Returns `None` when nothing would remain.
    pub fn inset(&self, amount: u32) -> Option<Self> {
        let shrink = amount * 2;
        if self.width <= shrink || self.height <= shrink {
            return None;
        }
        Some(Self::new(
            self.x + amount as i32,
            self.y + amount as i32,
            self.width - shrink,
            self.height - shrink,
        ))
    }

    /// Returns true if the pixel at (`px`, `py`) lies inside the rectangle.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns the pixel at the centre of the rectangle.
    pub fn center(&self) -> (i32, i32) {
        (
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }
}

// ============================================================================
// Primitives
// ============================================================================

/// The outline a primitive is rasterized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle,
    /// An ellipse inscribed in the primitive's bounds.
    Ellipse,
}

/// Which part of the emblem a primitive draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Base,
    Entrance,
    Tier(usize),
    TierDome { tier: usize, index: usize },
    Dome,
    Finial(usize),
    FigureBody(usize),
    FigureLegs(usize),
}

impl Element {
    /// Position of this element's group in the painter's order.
    pub fn stage(&self) -> u8 {
        match self {
            Self::Base => 0,
            Self::Entrance => 1,
            Self::Tier(_) | Self::TierDome { .. } => 2,
            Self::Dome => 3,
            Self::Finial(_) => 4,
            Self::FigureBody(_) | Self::FigureLegs(_) => 5,
        }
    }
}

/// A single filled (and optionally outlined) shape in device pixels.
///
/// Shapes are authored as inclusive boxes: a shape `w` pixels wide starting
/// at `x` also covers column `x + w`, so `bounds.width` is `w + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub element: Element,
    pub shape: Shape,
    pub bounds: RectPx,
    pub style: Style,
}

// ============================================================================
// Backdrop
// ============================================================================

/// One ring of the background disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    pub bounds: RectPx,
    pub alpha: u8,
}

/// The radial fade behind the temple.
///
/// Approximated by `radius` nested discs, each one pixel smaller than the
/// last and painted over it. The outermost disc is the most opaque; opacity
/// falls linearly toward the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub center: i32,
    pub radius: u32,
    pub color: Srgb<u8>,
    pub peak_opacity: f32,
}

impl Backdrop {
    /// Iterates the rings from the outside in.
    pub fn rings(&self) -> impl Iterator<Item = Ring> + '_ {
        let r = self.radius;
        (0..r).map(move |i| {
            let fade = 1.0 - i as f32 / r as f32;
            let alpha = (255.0 * fade * self.peak_opacity).floor() as u8;
            let edge = self.center - r as i32 + i as i32;
            let diameter = (r - i) * 2;
            Ring {
                bounds: span(edge, edge, diameter, diameter),
                alpha,
            }
        })
    }

    /// Bounding box of the outermost ring.
    pub fn bounds(&self) -> RectPx {
        let edge = self.center - self.radius as i32;
        span(edge, edge, self.radius * 2, self.radius * 2)
    }
}

/// Inclusive box of `width`×`height` starting at (`x`, `y`).
fn span(x: i32, y: i32, width: u32, height: u32) -> RectPx {
    RectPx::new(x, y, width + 1, height + 1)
}

// ============================================================================
// Layout
// ============================================================================

/// The resolved emblem for one canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub size: u32,
    pub backdrop: Backdrop,
    pub primitives: Vec<Primitive>,
}

impl Layout {
    /// Scales `geometry` to a `size`×`size` canvas.
    pub fn compute(geometry: &TempleGeometry, size: u32) -> Self {
        let scale = Scale::for_size(size);
        let mut primitives = Vec::with_capacity(32);

        let backdrop = backdrop(geometry, &scale);

        primitives.push(centered(geometry.base, Element::Base, &scale));
        primitives.push(centered(geometry.entrance, Element::Entrance, &scale));
        push_tiers(&mut primitives, geometry, &scale);
        let dome = dome(geometry, &scale);
        primitives.push(dome);
        push_finials(&mut primitives, geometry, &scale, dome.bounds);
        push_figures(&mut primitives, geometry, &scale);

        Self {
            size,
            backdrop,
            primitives,
        }
    }

    /// Index of the figures that fit on the canvas.
    pub fn figures(&self) -> impl Iterator<Item = usize> + '_ {
        self.primitives.iter().filter_map(|p| match p.element {
            Element::FigureBody(i) => Some(i),
            _ => None,
        })
    }

    /// Finds the first primitive drawing `element`.
    pub fn find(&self, element: Element) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.element == element)
    }
}

fn backdrop(geometry: &TempleGeometry, scale: &Scale) -> Backdrop {
    let size = scale.size() as i32;
    let margin = scale.offset(geometry.backdrop.margin);
    let radius = ((size - margin * 2) / 2).max(0) as u32;
    Backdrop {
        center: size / 2,
        radius,
        color: geometry.backdrop.color,
        peak_opacity: geometry.backdrop.peak_opacity,
    }
}

fn centered(entry: CenteredRect, element: Element, scale: &Scale) -> Primitive {
    let width = scale.length(entry.width);
    let height = scale.length(entry.height);
    let x = (scale.size() as i32 - width as i32) / 2;
    Primitive {
        element,
        shape: Shape::Rectangle,
        bounds: span(x, scale.offset(entry.y), width, height),
        style: entry.style,
    }
}

fn push_tiers(out: &mut Vec<Primitive>, geometry: &TempleGeometry, scale: &Scale) {
    let tiers = &geometry.tiers;
    let dome_size = scale.length(tiers.dome_size);
    let half_dome = (dome_size / 2) as i32;
    let slots = tiers.domes_per_tier as i32 + 1;

    for (tier, rect) in tiers.rects.iter().enumerate() {
        let bounds = span(
            scale.offset(rect.x),
            scale.offset(rect.y),
            scale.length(rect.width),
            scale.length(rect.height),
        );
        out.push(Primitive {
            element: Element::Tier(tier),
            shape: Shape::Rectangle,
            bounds,
            style: tiers.style,
        });

        let w = scale.length(rect.width) as i32;
        let h = scale.length(rect.height) as i32;
        let dome_y = bounds.y + h / 2 - half_dome;
        for index in 0..tiers.domes_per_tier as usize {
            let dome_x = bounds.x + w / slots + (index as i32 * w) / slots - half_dome;
            out.push(Primitive {
                element: Element::TierDome { tier, index },
                shape: Shape::Ellipse,
                bounds: span(dome_x, dome_y, dome_size, dome_size),
                style: tiers.dome_style,
            });
        }
    }
}

fn dome(geometry: &TempleGeometry, scale: &Scale) -> Primitive {
    let entry = geometry.dome;
    let half_w = scale.length(entry.width) / 2;
    let half_h = scale.length(entry.height) / 2;
    let cx = (scale.size() / 2) as i32;
    let cy = scale.offset(entry.center_y);
    Primitive {
        element: Element::Dome,
        shape: Shape::Ellipse,
        bounds: span(
            cx - half_w as i32,
            cy - half_h as i32,
            (half_w * 2).max(MIN_DIMENSION),
            (half_h * 2).max(MIN_DIMENSION),
        ),
        style: entry.style,
    }
}

fn push_finials(out: &mut Vec<Primitive>, geometry: &TempleGeometry, scale: &Scale, dome: RectPx) {
    let entry = geometry.finials;
    let size = scale.length(entry.size);
    let cx = (scale.size() / 2) as i32;
    let y = dome.y - size as i32;
    for (i, offset) in entry.offsets.iter().enumerate() {
        let x = cx + scale.offset(*offset) - (size / 2) as i32;
        out.push(Primitive {
            element: Element::Finial(i),
            shape: Shape::Ellipse,
            bounds: span(x, y, size, size),
            style: entry.style,
        });
    }
}

fn push_figures(out: &mut Vec<Primitive>, geometry: &TempleGeometry, scale: &Scale) {
    let entry = geometry.figures;
    let person = scale.length(entry.size);
    let y = scale.offset(entry.y);
    let start = scale.offset(entry.start_x);
    let step = scale.offset(entry.spacing);
    let canvas = scale.size() as i32;

    for (i, color) in entry.palette.iter().enumerate() {
        let x = start + i as i32 * step;
        if x + person as i32 >= canvas {
            tracing::debug!(figure = i, x, size = canvas, "figure does not fit, skipping");
            continue;
        }

        out.push(Primitive {
            element: Element::FigureBody(i),
            shape: Shape::Ellipse,
            bounds: span(x, y, person, person),
            style: Style::filled(*color),
        });

        let quarter = person / 4;
        let legs_width = (3 * person / 4 - quarter).max(MIN_DIMENSION);
        let legs_height = (person / 2).max(MIN_DIMENSION);
        out.push(Primitive {
            element: Element::FigureLegs(i),
            shape: Shape::Rectangle,
            bounds: span(x + quarter as i32, y + person as i32, legs_width, legs_height),
            style: Style::filled(entry.legs),
        });
    }
}
