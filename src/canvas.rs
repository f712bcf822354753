//! Pixel canvas backed by a tiny-skia pixmap.
//!
//! Shapes are rasterized without anti-aliasing and with source-copy
//! blending: every covered pixel takes the paint's color and alpha outright,
//! so a later shape replaces whatever lies beneath it.

use image::{Rgba, RgbaImage};
use palette::{Srgb, Srgba, WithAlpha};
use resvg::tiny_skia::{BlendMode, FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

use crate::layout::{Backdrop, Primitive, RectPx, Shape};

/// A square RGBA drawing surface, initially fully transparent.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Creates a transparent `size`×`size` canvas.
    ///
    /// Returns `None` for a zero size.
    pub fn new(size: u32) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(size, size)?,
        })
    }

    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Paints the backdrop rings, outermost first.
    pub fn draw_backdrop(&mut self, backdrop: &Backdrop) {
        for ring in backdrop.rings() {
            self.fill(Shape::Ellipse, ring.bounds, backdrop.color.with_alpha(ring.alpha));
        }
    }

    /// Paints a primitive: the outline color over the full bounds, then the
    /// fill over the bounds inset by the outline width.
    ///
    /// The outline narrows so that at least one row and column of fill
    /// remain; a shape too small for both is painted in its fill color.
    pub fn draw(&mut self, primitive: &Primitive) {
        let style = primitive.style;
        let bounds = primitive.bounds;
        let width = style
            .outline_width
            .min((bounds.width.min(bounds.height).saturating_sub(1)) / 2);
        let fill_bounds = match style.outline {
            Some(outline) if width > 0 => {
                self.fill(primitive.shape, bounds, opaque(outline));
                bounds.inset(width)
            }
            _ => Some(bounds),
        };

        if let Some(bounds) = fill_bounds {
            self.fill(primitive.shape, bounds, opaque(style.fill));
        }
    }

    /// Replaces every pixel covered by `shape` within `bounds` with `color`.
    pub fn fill(&mut self, shape: Shape, bounds: RectPx, color: Srgba<u8>) {
        let Some(rect) = Rect::from_xywh(
            bounds.x as f32,
            bounds.y as f32,
            bounds.width as f32,
            bounds.height as f32,
        ) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(color.red, color.green, color.blue, color.alpha);
        paint.anti_alias = false;
        paint.blend_mode = BlendMode::Source;

        match shape {
            Shape::Rectangle => {
                self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
            Shape::Ellipse => {
                let Some(path) = PathBuilder::from_oval(rect) else {
                    return;
                };
                self.pixmap
                    .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }
    }

    /// Converts the canvas to straight-alpha RGBA.
    ///
    /// The pixmap stores premultiplied 8-bit color, so pixels with very low
    /// alpha lose precision: the innermost backdrop rings (alpha below about
    /// 10) come back darker than the paint. Channels at alpha 128 and above
    /// are within 1 of the painted value.
    pub fn into_image(self) -> RgbaImage {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let mut img = RgbaImage::new(width, height);

        // tiny-skia stores premultiplied alpha
        for (src, dst) in self.pixmap.pixels().iter().zip(img.pixels_mut()) {
            let color = src.demultiply();
            *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }

        img
    }
}

fn opaque(color: Srgb<u8>) -> Srgba<u8> {
    color.with_alpha(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Style;
    use crate::layout::Element;

    const RED: Srgb<u8> = Srgb::new(255, 0, 0);
    const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);

    #[test]
    fn new_canvas_is_transparent() {
        let img = Canvas::new(8).unwrap().into_image();
        assert_eq!(img.dimensions(), (8, 8));
        assert!(img.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn zero_size_has_no_canvas() {
        assert!(Canvas::new(0).is_none());
    }

    #[test]
    fn rectangle_covers_exact_pixels() {
        let mut canvas = Canvas::new(10).unwrap();
        canvas.fill(Shape::Rectangle, RectPx::new(2, 3, 4, 2), opaque(RED));
        let img = canvas.into_image();

        assert_eq!(img.get_pixel(2, 3).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 4).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(6, 4).0[3], 0);
        assert_eq!(img.get_pixel(2, 5).0[3], 0);
        assert_eq!(img.get_pixel(1, 3).0[3], 0);
    }

    #[test]
    fn later_fill_replaces_instead_of_blending() {
        let mut canvas = Canvas::new(4).unwrap();
        canvas.fill(Shape::Rectangle, RectPx::from_size(4, 4), opaque(RED));
        canvas.fill(Shape::Rectangle, RectPx::from_size(4, 4), Srgb::new(0, 0, 0).with_alpha(0));
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(1, 1).0[3], 0);
    }

    #[test]
    fn ellipse_leaves_corners_empty() {
        let mut canvas = Canvas::new(20).unwrap();
        canvas.fill(Shape::Ellipse, RectPx::from_size(20, 20), opaque(BLUE));
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(19, 19).0[3], 0);
    }

    #[test]
    fn tiny_ellipse_is_still_drawn() {
        let mut canvas = Canvas::new(6).unwrap();
        canvas.fill(Shape::Ellipse, RectPx::new(2, 2, 2, 2), opaque(BLUE));
        let img = canvas.into_image();
        assert!(img.pixels().any(|p| p.0[3] == 255));
    }

    #[test]
    fn outline_surrounds_fill() {
        let mut canvas = Canvas::new(10).unwrap();
        canvas.draw(&Primitive {
            element: Element::Base,
            shape: Shape::Rectangle,
            bounds: RectPx::new(1, 1, 8, 8),
            style: Style::outlined(RED, BLUE, 2),
        });
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(2, 5).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0, 255]);
    }

    #[test]
    fn outline_narrows_to_leave_fill_visible() {
        // A 5x3 box cannot hold a 2 px outline and any fill.
        let mut canvas = Canvas::new(8).unwrap();
        canvas.draw(&Primitive {
            element: Element::Dome,
            shape: Shape::Rectangle,
            bounds: RectPx::new(1, 1, 5, 3),
            style: Style::outlined(RED, BLUE, 2),
        });
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(3, 2).0, [255, 0, 0, 255]);
    }

    #[test]
    fn shape_too_small_for_outline_shows_fill() {
        let mut canvas = Canvas::new(6).unwrap();
        canvas.draw(&Primitive {
            element: Element::Entrance,
            shape: Shape::Rectangle,
            bounds: RectPx::new(1, 1, 2, 2),
            style: Style::outlined(RED, BLUE, 1),
        });
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);
    }

    #[test]
    fn translucent_backdrop_keeps_its_alpha() {
        let backdrop = Backdrop {
            center: 10,
            radius: 8,
            color: RED,
            peak_opacity: 0.8,
        };
        let mut canvas = Canvas::new(20).unwrap();
        canvas.draw_backdrop(&backdrop);
        let img = canvas.into_image();

        // Just inside the outer edge, only the first ring covers the pixel.
        assert_eq!(img.get_pixel(10, 2).0[3], 204);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert!(img.get_pixel(10, 10).0[3] < 204);
    }

    #[test]
    fn outer_backdrop_ring_keeps_its_color() {
        let brown = crate::geometry::BROWN;
        let backdrop = Backdrop {
            center: 48,
            radius: 40,
            color: brown,
            peak_opacity: 0.8,
        };
        let mut canvas = Canvas::new(96).unwrap();
        canvas.draw_backdrop(&backdrop);
        let img = canvas.into_image();

        let [r, g, b, a] = img.get_pixel(48, 8).0;
        assert_eq!(a, 204);
        for (got, want) in [(r, brown.red), (g, brown.green), (b, brown.blue)] {
            assert!(got.abs_diff(want) <= 1, "{:?}", img.get_pixel(48, 8));
        }
    }
}
