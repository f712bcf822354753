//! The temple icon rasterizer.

use image::RgbaImage;

use crate::canvas::Canvas;
use crate::geometry::{TEMPLE, TempleGeometry};
use crate::layout::Layout;

// ============================================================================
// IconRenderer
// ============================================================================

/// Draws the temple emblem at any pixel size.
///
/// Rendering is deterministic: the same size always yields the same pixels.
///
/// # Example
///
/// ```
/// use temple_icons::IconRenderer;
///
/// let icon = IconRenderer::new().render(48);
/// assert_eq!(icon.dimensions(), (48, 48));
/// ```
#[derive(Debug, Clone)]
pub struct IconRenderer {
    geometry: TempleGeometry,
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRenderer {
    /// Creates a renderer for the standard temple design.
    pub fn new() -> Self {
        Self::with_geometry(TEMPLE)
    }

    /// Creates a renderer for an alternate reference design.
    pub fn with_geometry(geometry: TempleGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &TempleGeometry {
        &self.geometry
    }

    /// Resolves the design to device pixels without rasterizing it.
    pub fn layout(&self, size: u32) -> Layout {
        Layout::compute(&self.geometry, size)
    }

    /// Renders a `size`×`size` RGBA icon.
    ///
    /// A zero size yields an empty image.
    pub fn render(&self, size: u32) -> RgbaImage {
        let Some(mut canvas) = Canvas::new(size) else {
            return RgbaImage::new(0, 0);
        };

        let layout = self.layout(size);
        canvas.draw_backdrop(&layout.backdrop);
        for primitive in &layout.primitives {
            canvas.draw(primitive);
        }

        tracing::debug!(
            size,
            rings = layout.backdrop.radius,
            primitives = layout.primitives.len(),
            "rendered temple icon"
        );

        canvas.into_image()
    }
}

/// Renders the standard temple icon at `size` pixels.
pub fn render(size: u32) -> RgbaImage {
    IconRenderer::new().render(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use crate::geometry::{BROWN, WHEAT};
    use crate::layout::Element;

    const PRESET_SIZES: [u32; 6] = [36, 48, 72, 96, 144, 192];

    fn corners(img: &RgbaImage) -> [Rgba<u8>; 4] {
        let max = img.width() - 1;
        [
            *img.get_pixel(0, 0),
            *img.get_pixel(max, 0),
            *img.get_pixel(0, max),
            *img.get_pixel(max, max),
        ]
    }

    #[test]
    fn renders_square_images_with_transparent_corners() {
        for size in PRESET_SIZES {
            let img = render(size);
            assert_eq!(img.dimensions(), (size, size));
            for corner in corners(&img) {
                assert_eq!(corner.0[3], 0, "size {size}");
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render(192);
        let b = render(192);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn every_primitive_paints_its_fill_at_small_sizes() {
        for size in [36, 48] {
            for primitive in &IconRenderer::new().layout(size).primitives {
                let mut canvas = Canvas::new(size).unwrap();
                canvas.draw(primitive);
                let fill = primitive.style.fill;
                let want = [fill.red, fill.green, fill.blue, 255];

                let img = canvas.into_image();
                assert!(
                    img.pixels().any(|p| p.0 == want),
                    "size {size}: {:?} at {:?} paints no fill",
                    primitive.element,
                    primitive.bounds
                );
            }
        }
    }

    #[test]
    fn zero_size_is_empty() {
        assert_eq!(render(0).dimensions(), (0, 0));
    }

    #[test]
    fn base_fill_is_opaque_wheat() {
        let renderer = IconRenderer::new();
        for size in PRESET_SIZES {
            let base = renderer.layout(size).find(Element::Base).unwrap().bounds;
            let img = renderer.render(size);
            // Third row of the base is inside the 2 px outline and left of the door.
            let px = img.get_pixel((base.x + 2) as u32, (base.y + 2) as u32);
            assert_eq!(px.0, [WHEAT.red, WHEAT.green, WHEAT.blue, 255], "size {size}");
        }
    }

    #[test]
    fn base_outline_is_brown() {
        let renderer = IconRenderer::new();
        let base = renderer.layout(192).find(Element::Base).unwrap().bounds;
        let img = renderer.render(192);
        let px = img.get_pixel(base.x as u32, base.y as u32);
        assert_eq!(px.0, [BROWN.red, BROWN.green, BROWN.blue, 255]);
    }

    #[test]
    fn figures_use_their_palette_color() {
        let renderer = IconRenderer::new();
        let layout = renderer.layout(192);
        let img = renderer.render(192);
        for (i, color) in renderer.geometry().figures.palette.iter().enumerate() {
            let body = layout.find(Element::FigureBody(i)).unwrap().bounds;
            let (cx, cy) = body.center();
            let px = img.get_pixel(cx as u32, cy as u32);
            assert_eq!(px.0, [color.red, color.green, color.blue, 255], "figure {i}");
        }
    }

    #[test]
    fn skipped_figures_leave_no_pixels() {
        let mut geometry = TEMPLE;
        geometry.figures.spacing = 120.0;
        let renderer = IconRenderer::with_geometry(geometry);
        let img = renderer.render(36);

        let fourth = geometry.figures.palette[3];
        let fifth = geometry.figures.palette[4];
        assert!(!img.pixels().any(|p| {
            let rgb = [p.0[0], p.0[1], p.0[2]];
            rgb == [fourth.red, fourth.green, fourth.blue]
                || rgb == [fifth.red, fifth.green, fifth.blue]
        }));
    }

    #[test]
    fn content_fits_inside_round_launcher_mask() {
        // Launchers crop round icons to the inscribed circle; nothing drawn
        // may fall more than a pixel outside it.
        for size in PRESET_SIZES {
            let img = render(size);
            let c = size as f32 / 2.0;
            for (x, y, p) in img.enumerate_pixels() {
                if p.0[3] == 0 {
                    continue;
                }
                let dx = x as f32 + 0.5 - c;
                let dy = y as f32 + 0.5 - c;
                let dist = (dx * dx + dy * dy).sqrt();
                assert!(dist <= c + 1.0, "size {size}: pixel ({x}, {y}) at {dist}");
            }
        }
    }
}
