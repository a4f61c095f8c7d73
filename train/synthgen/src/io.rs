use image::{ImageFormat, RgbImage};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs::File,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::record::Dataset;

pub const IMAGES_DIR: &str = "images";
pub const PREVIEW_DIR: &str = "preview";
pub const MANIFEST: &str = "dataset.json";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write image {}", .path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write manifest {}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn image_name(index: usize) -> String {
    format!("{index}.png")
}

/// Creates `images/` (and `preview/` if asked) under `out_dir`; existing directories are fine.
pub fn init_output(out_dir: &Path, with_preview: bool) -> Result<(), OutputError> {
    let mut dirs = vec![out_dir.join(IMAGES_DIR)];
    if with_preview {
        dirs.push(out_dir.join(PREVIEW_DIR));
    }
    for path in dirs {
        std::fs::create_dir_all(&path).map_err(|source| OutputError::CreateDir { path, source })?;
    }
    Ok(())
}

pub fn save_png(img: &RgbImage, path: &Path) -> Result<(), OutputError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| OutputError::ImageWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes `dataset.json` with 4-space indentation and returns its path.
pub fn write_dataset(out_dir: &Path, dataset: &Dataset) -> Result<PathBuf, OutputError> {
    let path = out_dir.join(MANIFEST);
    let write = || -> io::Result<()> {
        let file = File::create(&path)?;
        let mut writer = BufWriter::with_capacity(8 << 20, file);
        let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        dataset.serialize(&mut ser).map_err(io::Error::from)?;
        writer.into_inner()?.sync_all()
    };
    write().map_err(|source| OutputError::ManifestWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use placer::{Annotation, ShapeKind};

    #[test]
    fn init_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("data");
        init_output(&out, false).unwrap();
        init_output(&out, true).unwrap();
        assert!(out.join(IMAGES_DIR).is_dir());
        assert!(out.join(PREVIEW_DIR).is_dir());
    }

    #[test]
    fn init_fails_under_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("data");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let err = init_output(&blocker, false).unwrap_err();
        assert!(matches!(err, OutputError::CreateDir { .. }));
    }

    #[test]
    fn manifest_uses_four_space_indent() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ds = Dataset::default();
        ds.push(
            image_name(0),
            vec![Annotation {
                bbox: [1, 2, 3, 4],
                category: ShapeKind::Rectangle,
            }],
        );
        let path = write_dataset(tmp.path(), &ds).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("{\n    \"0.png\": [\n        {\n"));
        assert!(text.contains("\"category\": \"rectangle\""));
    }
}
