//! Contents.json for an Xcode `AppIcon.appiconset`
//!
//! Mirrors the subset of Apple's asset catalog schema that app icon sets use,
//! so the exported PNGs can be dropped into an asset catalog as-is.

use crate::export::Manifest;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// One entry per icon slot filled by an exported file
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within an app icon set
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// File name relative to the icon set directory
    pub filename: String,

    /// The device type for the image (e.g., "iphone", "ipad", "ios-marketing")
    pub idiom: String,

    /// The size of the image in points (e.g., "29x29", "83.5x83.5")
    pub size: String,

    /// The scale factor for the image (e.g., "1x", "2x", "3x")
    pub scale: String,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The format version of the asset catalog (always 1)
    pub version: u8,

    /// The application or tool that authored the asset catalog
    pub author: String,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            version: 1,
            author: "emblem-gen".to_string(),
        }
    }
}

impl ContentsFile {
    /// Builds the icon set description for every manifest entry that has an asset slot.
    ///
    /// Entries without a slot (the master render, custom sizes) are skipped.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let images = manifest
            .entries()
            .iter()
            .filter_map(|entry| {
                let slot = entry.slot.as_ref()?;
                Some(ImageEntry {
                    filename: entry.file_name(),
                    idiom: slot.idiom.clone(),
                    size: slot.size.clone(),
                    scale: slot.scale.clone(),
                })
            })
            .collect();
        Self {
            images,
            info: Info::default(),
        }
    }
}

/// Writes `Contents.json` into `dir`, returning the number of image entries.
pub fn write_contents_json(dir: &Path, manifest: &Manifest) -> Result<usize> {
    let contents = ContentsFile::from_manifest(manifest);
    let json =
        serde_json::to_string_pretty(&contents).context("Failed to serialize Contents.json")?;
    std::fs::write(dir.join("Contents.json"), json)
        .context("Failed to write Contents.json file")?;
    Ok(contents.images.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{AssetSlot, ManifestEntry};

    fn sample_manifest() -> Manifest {
        Manifest::new(vec![
            ManifestEntry::new(1024, "Master".to_string()),
            ManifestEntry::new(120, "Icon-iPhone-60@2x".to_string())
                .with_slot(AssetSlot::new("iphone", "60x60", "2x")),
            ManifestEntry::new(167, "Icon-iPad-Pro-83.5@2x".to_string())
                .with_slot(AssetSlot::new("ipad", "83.5x83.5", "2x")),
        ])
    }

    #[test]
    fn test_entries_without_slot_are_skipped() {
        let contents = ContentsFile::from_manifest(&sample_manifest());
        assert_eq!(contents.images.len(), 2);
        assert_eq!(contents.images[0].filename, "Icon-iPhone-60@2x.png");
        assert_eq!(contents.info.version, 1);
    }

    #[test]
    fn test_apple_contents_json_format() {
        let contents = ContentsFile::from_manifest(&sample_manifest());
        let json = serde_json::to_string_pretty(&contents).unwrap();

        let expected_fields = [
            "\"images\":",
            "\"filename\": \"Icon-iPad-Pro-83.5@2x.png\"",
            "\"idiom\": \"ipad\"",
            "\"size\": \"83.5x83.5\"",
            "\"scale\": \"2x\"",
            "\"info\":",
            "\"version\": 1",
            "\"author\": \"emblem-gen\"",
        ];
        for field in expected_fields {
            assert!(
                json.contains(field),
                "JSON missing expected field: {}\nActual JSON:\n{}",
                field,
                json
            );
        }
        assert!(!json.contains("Master"));
    }

    #[test]
    fn test_write_contents_json() {
        let temp_dir = std::env::temp_dir().join("emblem_gen_contents_test");
        std::fs::create_dir_all(&temp_dir).unwrap();

        let count = write_contents_json(&temp_dir, &sample_manifest()).unwrap();
        assert_eq!(count, 2);

        let file_content = std::fs::read_to_string(temp_dir.join("Contents.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&file_content).unwrap();
        assert_eq!(parsed["images"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["images"][0]["idiom"], "iphone");
        assert_eq!(parsed["info"]["author"], "emblem-gen");

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
