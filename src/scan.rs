//! Media directory scanning and manifest generation.
//!
//! Stage 1 of the media-deck pipeline. Walks a source directory and produces
//! the ordered list of [`MediaItem`]s that the compose stage consumes.
//!
//! ## Rules
//!
//! - Only files whose extension appears in the configured format lists are
//!   kept; everything else (unknown extensions, extensionless files,
//!   directories, hidden files, `config.toml`) is skipped silently.
//! - Entries are sorted by path so the deck order is deterministic across
//!   platforms and filesystems.
//! - By default only the top level is scanned; `recursive` descends into
//!   subdirectories.
//!
//! ## Output
//!
//! Produces a [`Manifest`] serialized to `manifest.json` between stages, so
//! `compose` can re-run without re-scanning.

use crate::config::DeckConfig;
use crate::types::MediaItem;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// The scanned source directory.
    pub source: PathBuf,
    /// Media items in deck order, paths relative to `source`.
    pub items: Vec<MediaItem>,
}

/// Scan a directory for media files.
///
/// Items are returned sorted by relative path. Unrecognized files are
/// skipped, not errors: a media folder routinely holds sidecar files.
pub fn scan(root: &Path, config: &DeckConfig, recursive: bool) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut items = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') || name == "config.toml" {
            continue;
        }

        let Some(extension) = entry
            .path()
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
        else {
            continue;
        };
        let Some(kind) = config.formats.classify(&extension) else {
            continue;
        };

        // min_depth(1) guarantees a non-root path, so strip_prefix can't fail
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();

        items.push(MediaItem {
            path: rel,
            name,
            kind,
            extension,
        });
    }

    items.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(Manifest {
        source: root.to_path_buf(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaKind;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "x").unwrap();
    }

    #[test]
    fn scan_keeps_only_recognized_extensions() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.jpg");
        touch(tmp.path(), "b.mp4");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "slides.pdf");
        touch(tmp.path(), "noext");

        let manifest = scan(tmp.path(), &DeckConfig::default(), false).unwrap();
        let names: Vec<&str> = manifest.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.mp4"]);
    }

    #[test]
    fn scan_classifies_kind_by_extension() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "photo.png");
        touch(tmp.path(), "clip.webm");

        let manifest = scan(tmp.path(), &DeckConfig::default(), false).unwrap();
        assert_eq!(manifest.items[0].kind, MediaKind::Image);
        assert_eq!(manifest.items[0].extension, "png");
        assert_eq!(manifest.items[1].kind, MediaKind::Video);
    }

    #[test]
    fn scan_uppercase_extension_normalized() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "photo.JPG");

        let manifest = scan(tmp.path(), &DeckConfig::default(), false).unwrap();
        assert_eq!(manifest.items.len(), 1);
        assert_eq!(manifest.items[0].extension, "jpg");
    }

    #[test]
    fn scan_order_is_sorted_by_path() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "c.jpg");
        touch(tmp.path(), "a.jpg");
        touch(tmp.path(), "b.jpg");

        let manifest = scan(tmp.path(), &DeckConfig::default(), false).unwrap();
        let names: Vec<&str> = manifest.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn scan_skips_hidden_and_config_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), ".hidden.jpg");
        fs::write(tmp.path().join("config.toml"), "").unwrap();
        touch(tmp.path(), "visible.jpg");

        let manifest = scan(tmp.path(), &DeckConfig::default(), false).unwrap();
        assert_eq!(manifest.items.len(), 1);
        assert_eq!(manifest.items[0].name, "visible.jpg");
    }

    #[test]
    fn scan_non_recursive_ignores_subdirectories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "top.jpg");
        let sub = tmp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        touch(&sub, "deep.jpg");

        let manifest = scan(tmp.path(), &DeckConfig::default(), false).unwrap();
        assert_eq!(manifest.items.len(), 1);
        assert_eq!(manifest.items[0].name, "top.jpg");
    }

    #[test]
    fn scan_recursive_descends_and_keeps_relative_paths() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "top.jpg");
        let sub = tmp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        touch(&sub, "deep.jpg");

        let manifest = scan(tmp.path(), &DeckConfig::default(), true).unwrap();
        let paths: Vec<String> = manifest
            .items
            .iter()
            .map(|i| i.path.to_string_lossy().to_string())
            .collect();
        assert_eq!(paths, vec!["nested/deep.jpg".to_string(), "top.jpg".to_string()]);
    }

    #[test]
    fn scan_empty_directory_yields_empty_manifest() {
        let tmp = TempDir::new().unwrap();
        let manifest = scan(tmp.path(), &DeckConfig::default(), false).unwrap();
        assert!(manifest.items.is_empty());
    }

    #[test]
    fn scan_missing_directory_is_error() {
        let result = scan(
            Path::new("/nonexistent/media"),
            &DeckConfig::default(),
            false,
        );
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn manifest_round_trips_through_json() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.png");

        let manifest = scan(tmp.path(), &DeckConfig::default(), false).unwrap();
        let json = serde_json::to_string(&manifest).unwrap();
        let back: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.items, manifest.items);
    }
}
