//! Resizing the finished canvas and writing every manifest entry.

use crate::canvas::Canvas;
use anyhow::{bail, Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::{self, FilterType},
    ColorType, ImageEncoder, RgbImage,
};
use std::{
    collections::HashSet,
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Where an exported file goes in an Xcode app icon set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSlot {
    pub idiom: String,
    /// Size in points, e.g. "83.5x83.5".
    pub size: String,
    pub scale: String,
}

impl AssetSlot {
    pub fn new(idiom: &str, size: &str, scale: &str) -> Self {
        Self {
            idiom: idiom.to_string(),
            size: size.to_string(),
            scale: scale.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Width and height of the output raster.
    pub size: u32,
    /// File stem of the output.
    pub label: String,
    pub slot: Option<AssetSlot>,
}

impl ManifestEntry {
    pub fn new(size: u32, label: String) -> Self {
        Self {
            size,
            label,
            slot: None,
        }
    }

    pub fn with_slot(mut self, slot: AssetSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    /// Plain `{n}x{n}` outputs for user-chosen sizes.
    pub fn custom(sizes: &[u32]) -> Self {
        Self::new(
            sizes
                .iter()
                .map(|&size| ManifestEntry::new(size, format!("{size}x{size}")))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            bail!("Manifest has no output sizes");
        }
        let mut labels = HashSet::new();
        for entry in &self.entries {
            if entry.size == 0 {
                bail!("Output size for {} must be greater than zero", entry.label);
            }
            if !labels.insert(entry.label.as_str()) {
                bail!("Duplicate output label: {}", entry.label);
            }
        }
        Ok(())
    }
}

/// Destination for exported rasters.
pub trait IconSink {
    fn write(&mut self, entry: &ManifestEntry, image: &RgbImage) -> Result<()>;
}

/// Writes `<label>.png` files into a directory.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        create_dir_all(&dir)
            .with_context(|| format!("Can't create output directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl IconSink for DirectorySink {
    fn write(&mut self, entry: &ManifestEntry, image: &RgbImage) -> Result<()> {
        let path = self.dir.join(entry.file_name());
        let file = File::create(&path)
            .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_png(image, &mut out)
            .with_context(|| format!("Failed to write PNG {}", path.display()))?;
        out.flush()?;
        Ok(())
    }
}

/// Lanczos3 resample to `size × size`; the canvas is copied when it already has that size.
pub fn resize(canvas: &Canvas, size: u32) -> RgbImage {
    if size == canvas.side() {
        canvas.as_image().clone()
    } else {
        imageops::resize(canvas.as_image(), size, size, FilterType::Lanczos3)
    }
}

/// Resizes the canvas to every manifest entry, in order, and hands each result to `sink`.
pub fn export(canvas: &Canvas, manifest: &Manifest, sink: &mut dyn IconSink) -> Result<()> {
    manifest.validate()?;
    for entry in manifest.entries() {
        let image = resize(canvas, entry.size);
        sink.write(entry, &image)?;
        println!(
            "  ✓ Generated {} ({}x{})",
            entry.file_name(),
            entry.size,
            entry.size
        );
    }
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image: &RgbImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::WHITE;

    #[test]
    fn test_validate_rejects_zero_size() {
        let manifest = Manifest::custom(&[64, 0]);
        let err = manifest.validate().unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_validate_rejects_duplicate_labels() {
        let manifest = Manifest::custom(&[32, 32]);
        let err = manifest.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(Manifest::custom(&[]).validate().is_err());
    }

    #[test]
    fn test_custom_labels() {
        let manifest = Manifest::custom(&[48]);
        assert_eq!(manifest.entries()[0].file_name(), "48x48.png");
        assert!(manifest.entries()[0].slot.is_none());
    }

    #[test]
    fn test_resize_same_size_is_identity() {
        let canvas = Canvas::new(16, WHITE);
        assert_eq!(&resize(&canvas, 16), canvas.as_image());
        let small = resize(&canvas, 5);
        assert_eq!(small.dimensions(), (5, 5));
    }

    #[test]
    fn test_directory_sink_writes_png() {
        let temp_dir = std::env::temp_dir().join("emblem_gen_sink_test");
        let mut sink = DirectorySink::new(&temp_dir).unwrap();
        let entry = ManifestEntry::new(8, "probe".to_string());
        sink.write(&entry, &RgbImage::from_pixel(8, 8, WHITE)).unwrap();

        let written = image::open(temp_dir.join("probe.png")).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (8, 8));
        assert_eq!(*written.get_pixel(3, 3), WHITE);

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
