//! temple-icons: procedural launcher icons for the Temple Finder app
//!
//! This crate draws a temple emblem from a fixed reference design and writes
//! it at every Android launcher density.
//!
//! # Example
//!
//! ```
//! use temple_icons::{DensityBucket, IconRenderer};
//!
//! let renderer = IconRenderer::new();
//! let icon = renderer.render(DensityBucket::Xxxhdpi.pixel_size());
//! assert_eq!(icon.dimensions(), (192, 192));
//!
//! // Corners lie outside the background disc.
//! assert_eq!(icon.get_pixel(0, 0).0[3], 0);
//! ```
//!
//! # Writing Resource Directories
//!
//! [`IconWriter`] renders the six fixed density presets and writes
//! `ic_launcher.png` and `ic_launcher_round.png` into each
//! `app/src/main/res/mipmap-<density>` directory:
//!
//! ```no_run
//! use temple_icons::IconWriter;
//!
//! let report = IconWriter::new(".").write_all()?;
//! for dir in &report.directories {
//!     println!("{}", dir.display());
//! }
//! # Ok::<(), temple_icons::IconError>(())
//! ```

mod canvas;
mod error;
mod geometry;
mod icon;
mod layout;
mod renderer;
mod writer;

pub use canvas::Canvas;
pub use error::{FailureKind, IconError, Result};
pub use geometry::{
    BackdropSpec, CenteredRect, DomeSpec, FigureSpec, FinialSpec, MIN_DIMENSION, REFERENCE_SIZE,
    RefRect, Scale, Style, TEMPLE, TempleGeometry, TierSpec,
};
pub use icon::{DensityBucket, IconImage, SizePreset, encode_png};
pub use layout::{Backdrop, Element, Layout, Primitive, RectPx, Ring, Shape};
pub use renderer::{IconRenderer, render};
pub use writer::{GenerationReport, IconWriter, RES_DIR, ROUND_NAME, SQUARE_NAME, WrittenIcon};
