//! Android launcher icon presets.
//!
//! Android picks a launcher icon from `mipmap-<density>` resource
//! directories. Each density bucket requires one fixed pixel size.

use std::fmt;
use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use serde::Serialize;

use crate::error::{IconError, Result};

// ============================================================================
// DensityBucket
// ============================================================================

/// An Android display density class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityBucket {
    Ldpi,
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl DensityBucket {
    /// Every bucket, smallest first.
    pub const ALL: [DensityBucket; 6] = [
        Self::Ldpi,
        Self::Mdpi,
        Self::Hdpi,
        Self::Xhdpi,
        Self::Xxhdpi,
        Self::Xxxhdpi,
    ];

    /// The qualifier used in resource directory names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ldpi => "ldpi",
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Launcher icon side length for this density.
    pub fn pixel_size(&self) -> u32 {
        match self {
            Self::Ldpi => 36,
            Self::Mdpi => 48,
            Self::Hdpi => 72,
            Self::Xhdpi => 96,
            Self::Xxhdpi => 144,
            Self::Xxxhdpi => 192,
        }
    }

    /// Resource directory name, e.g. `mipmap-hdpi`.
    pub fn directory(&self) -> String {
        format!("mipmap-{}", self.name())
    }
}

impl fmt::Display for DensityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// SizePreset
// ============================================================================

/// A density bucket paired with the pixel size rendered for it.
///
/// The size always comes from [`DensityBucket::pixel_size`]; presets cannot
/// be resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizePreset {
    density: DensityBucket,
    size: u32,
}

impl SizePreset {
    /// The six standard launcher presets, smallest first.
    pub fn android() -> [Self; 6] {
        DensityBucket::ALL.map(Self::from)
    }

    pub fn density(&self) -> DensityBucket {
        self.density
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

impl From<DensityBucket> for SizePreset {
    fn from(density: DensityBucket) -> Self {
        Self {
            density,
            size: density.pixel_size(),
        }
    }
}

// ============================================================================
// IconImage
// ============================================================================

/// A rendered icon for one preset.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    pub preset: SizePreset,

    /// The image data in RGBA format.
    pub data: RgbaImage,
}

impl IconImage {
    pub fn new(preset: SizePreset, data: RgbaImage) -> Self {
        Self { preset, data }
    }

    /// Encodes the image as a lossless RGBA PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.data)
    }
}

/// Encodes `img` as PNG into memory.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)
        .map_err(IconError::from_image)?;
    Ok(cursor.into_inner())
}
