//! Writes rendered launcher icons into resource directories.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{IconError, Result};
use crate::icon::{IconImage, SizePreset};
use crate::renderer::IconRenderer;

/// Resource directory of a standard Android app module.
pub const RES_DIR: &str = "app/src/main/res";
pub const SQUARE_NAME: &str = "ic_launcher.png";
/// Written with the same bytes as [`SQUARE_NAME`].
pub const ROUND_NAME: &str = "ic_launcher_round.png";

/// The files written for one preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenIcon {
    pub preset: SizePreset,
    pub square: PathBuf,
    pub round: PathBuf,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Every preset directory, smallest density first.
    pub directories: Vec<PathBuf>,
    pub written: Vec<WrittenIcon>,
}

impl GenerationReport {
    /// Number of files written.
    pub fn file_count(&self) -> usize {
        self.written.len() * 2
    }
}

/// Renders the six Android launcher presets and writes them under a root
/// directory, at `<root>/app/src/main/res/mipmap-<density>/`.
///
/// Presets are processed one at a time, smallest first. A failure stops the
/// run; files already written are left in place.
///
/// # Example
///
/// ```no_run
/// use temple_icons::IconWriter;
///
/// let report = IconWriter::new(".").write_all()?;
/// assert_eq!(report.file_count(), 12);
/// # Ok::<(), temple_icons::IconError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IconWriter {
    root: PathBuf,
    renderer: IconRenderer,
}

impl IconWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            renderer: IconRenderer::new(),
        }
    }

    /// Replaces the renderer used for every preset.
    pub fn with_renderer(mut self, renderer: IconRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Root-joined directory for `preset`.
    pub fn preset_dir(&self, preset: &SizePreset) -> PathBuf {
        self.root.join(RES_DIR).join(preset.density().directory())
    }

    /// Creates every preset directory. Existing directories are kept.
    pub fn prepare_directories(&self) -> Result<Vec<PathBuf>> {
        SizePreset::android()
            .iter()
            .map(|preset| {
                let dir = self.preset_dir(preset);
                fs::create_dir_all(&dir).map_err(|source| IconError::CreateDir {
                    path: dir.clone(),
                    source,
                })?;
                Ok(dir)
            })
            .collect()
    }

    /// Renders one preset without touching the filesystem.
    pub fn render(&self, preset: SizePreset) -> IconImage {
        IconImage::new(preset, self.renderer.render(preset.size()))
    }

    /// Creates the directories, then renders and writes every preset.
    pub fn write_all(&self) -> Result<GenerationReport> {
        self.write_all_with(|_| {})
    }

    /// Like [`write_all`](Self::write_all), calling `progress` before each
    /// preset is rendered.
    pub fn write_all_with(
        &self,
        mut progress: impl FnMut(&SizePreset),
    ) -> Result<GenerationReport> {
        let directories = self.prepare_directories()?;
        let presets = SizePreset::android();
        let mut written = Vec::with_capacity(presets.len());

        for (preset, dir) in presets.iter().zip(&directories) {
            progress(preset);
            tracing::debug!(density = %preset.density(), size = preset.size(), "rendering preset");
            written.push(self.write_preset(*preset, dir)?);
        }

        Ok(GenerationReport {
            directories,
            written,
        })
    }

    fn write_preset(&self, preset: SizePreset, dir: &Path) -> Result<WrittenIcon> {
        let png = self.render(preset).encode_png()?;

        let square = dir.join(SQUARE_NAME);
        let round = dir.join(ROUND_NAME);
        write_file(&square, &png)?;
        write_file(&round, &png)?;

        tracing::debug!(
            square = %square.display(),
            round = %round.display(),
            bytes = png.len(),
            "wrote launcher icons"
        );

        Ok(WrittenIcon {
            preset,
            square,
            round,
        })
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| IconError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
