//! Reference geometry for the temple emblem.
//!
//! Every coordinate here is authored on a [`REFERENCE_SIZE`]-unit canvas and
//! is scaled linearly to the target pixel size by [`Scale`]. The table is
//! plain data: nothing in it is computed.

use palette::Srgb;

/// Side length of the canvas the reference geometry is authored on.
pub const REFERENCE_SIZE: f32 = 512.0;

/// Smallest pixel length any drawn dimension is clamped to.
pub const MIN_DIMENSION: u32 = 2;

// ============================================================================
// Colors
// ============================================================================

pub const BROWN: Srgb<u8> = Srgb::new(139, 69, 19);
pub const WHEAT: Srgb<u8> = Srgb::new(245, 222, 179);
pub const DOOR_BROWN: Srgb<u8> = Srgb::new(101, 67, 33);
pub const DOOR_EDGE: Srgb<u8> = Srgb::new(61, 41, 20);
pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);
pub const TAN: Srgb<u8> = Srgb::new(210, 180, 140);

// ============================================================================
// Reference Shapes
// ============================================================================

/// An axis-aligned rectangle in reference units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RefRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Fill and outline of a shape. An outline width of zero means no outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Srgb<u8>,
    pub outline: Option<Srgb<u8>>,
    pub outline_width: u32,
}

impl Style {
    pub const fn filled(fill: Srgb<u8>) -> Self {
        Self {
            fill,
            outline: None,
            outline_width: 0,
        }
    }

    pub const fn outlined(fill: Srgb<u8>, outline: Srgb<u8>, width: u32) -> Self {
        Self {
            fill,
            outline: Some(outline),
            outline_width: width,
        }
    }
}

/// The fading disc behind the temple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropSpec {
    /// Gap between the canvas edge and the disc, in reference units.
    pub margin: f32,
    pub color: Srgb<u8>,
    /// Opacity of the outermost ring, as a fraction of 255.
    pub peak_opacity: f32,
}

/// A horizontally centred rectangle (base, entrance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredRect {
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub style: Style,
}

/// The stacked tiers and the small domes placed along each one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierSpec {
    pub rects: [RefRect; 5],
    pub style: Style,
    pub dome_size: f32,
    pub domes_per_tier: u32,
    pub dome_style: Style,
}

/// The large dome crowning the topmost tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomeSpec {
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
    pub style: Style,
}

/// Finials sit directly on top of the dome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinialSpec {
    pub size: f32,
    /// Horizontal offsets from the canvas centre.
    pub offsets: [f32; 3],
    pub style: Style,
}

/// The row of figures in front of the temple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSpec {
    pub start_x: f32,
    pub spacing: f32,
    pub y: f32,
    pub size: f32,
    pub palette: [Srgb<u8>; 5],
    pub legs: Srgb<u8>,
}

/// The complete reference design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempleGeometry {
    pub backdrop: BackdropSpec,
    pub base: CenteredRect,
    pub entrance: CenteredRect,
    pub tiers: TierSpec,
    pub dome: DomeSpec,
    pub finials: FinialSpec,
    pub figures: FigureSpec,
}

/// The temple emblem as drawn on every launcher icon.
pub const TEMPLE: TempleGeometry = TempleGeometry {
    backdrop: BackdropSpec {
        margin: 20.0,
        color: BROWN,
        peak_opacity: 0.8,
    },
    base: CenteredRect {
        y: 350.0,
        width: 272.0,
        height: 60.0,
        style: Style::outlined(WHEAT, BROWN, 2),
    },
    entrance: CenteredRect {
        y: 360.0,
        width: 32.0,
        height: 40.0,
        style: Style::outlined(DOOR_BROWN, DOOR_EDGE, 1),
    },
    tiers: TierSpec {
        rects: [
            RefRect::new(140.0, 320.0, 232.0, 30.0),
            RefRect::new(160.0, 290.0, 192.0, 30.0),
            RefRect::new(180.0, 260.0, 152.0, 30.0),
            RefRect::new(200.0, 230.0, 112.0, 30.0),
            RefRect::new(220.0, 200.0, 72.0, 30.0),
        ],
        style: Style::outlined(WHEAT, BROWN, 1),
        dome_size: 8.0,
        domes_per_tier: 3,
        dome_style: Style::outlined(WHITE, TAN, 1),
    },
    dome: DomeSpec {
        center_y: 180.0,
        width: 72.0,
        height: 40.0,
        style: Style::outlined(WHITE, TAN, 2),
    },
    finials: FinialSpec {
        size: 6.0,
        offsets: [-16.0, 0.0, 16.0],
        style: Style::filled(BROWN),
    },
    figures: FigureSpec {
        start_x: 180.0,
        spacing: 40.0,
        y: 380.0,
        size: 8.0,
        palette: [
            Srgb::new(255, 107, 53),
            Srgb::new(78, 205, 196),
            Srgb::new(69, 183, 209),
            Srgb::new(150, 206, 180),
            Srgb::new(254, 202, 87),
        ],
        legs: WHITE,
    },
};

// ============================================================================
// Scale
// ============================================================================

/// Linear mapping from reference units to device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    size: u32,
    factor: f32,
}

impl Scale {
    /// Creates the scale for a `size`×`size` canvas.
    pub fn for_size(size: u32) -> Self {
        Self {
            size,
            factor: size as f32 / REFERENCE_SIZE,
        }
    }

    /// Side length of the target canvas in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Scales a reference position, truncating toward zero.
    pub fn offset(&self, value: f32) -> i32 {
        (value * self.factor) as i32
    }

    /// Scales a reference length, flooring and clamping to [`MIN_DIMENSION`].
    pub fn length(&self, value: f32) -> u32 {
        let scaled = (value * self.factor).floor().max(0.0) as u32;
        scaled.max(MIN_DIMENSION)
    }
}
