//! Bitmap file discovery and decoding

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::{pack_luma, ConstName, MonoBitmap, NamedBitmap};

use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const BITMAP_EXTENSION: &str = "bmp";

#[derive(Debug)]
pub enum BitmapError {
    ReadDir(io::Error),
    Decode(image::ImageError),
    InvalidName(String),
}

impl Display for BitmapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BitmapError::ReadDir(e) => write!(f, "cannot read directory: {}", e),
            BitmapError::Decode(e) => write!(f, "cannot decode image: {}", e),
            BitmapError::InvalidName(s) => {
                write!(f, "cannot create a constant name from {:?}", s)
            }
        }
    }
}

impl From<image::ImageError> for BitmapError {
    fn from(e: image::ImageError) -> Self {
        Self::Decode(e)
    }
}

fn has_bitmap_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(BITMAP_EXTENSION))
}

/// Returns the `.bmp` files in `dir`, sorted by path.
///
/// Subdirectories are not searched.
pub fn find_bitmap_files(dir: &Path) -> Result<Vec<PathBuf>, BitmapError> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir).map_err(BitmapError::ReadDir)? {
        let path = entry.map_err(BitmapError::ReadDir)?.path();

        if path.is_file() && has_bitmap_extension(&path) {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

pub fn load_bitmap(path: &Path, threshold: u8) -> Result<MonoBitmap, BitmapError> {
    let image = image::open(path)?.into_luma8();

    Ok(pack_luma(&image, threshold))
}

pub fn load_named_bitmap(path: &Path, threshold: u8) -> Result<NamedBitmap, BitmapError> {
    let name = ConstName::from_path(path)?;
    let bitmap = load_bitmap(path, threshold)?;

    log::info!(
        "{}: {}x{} pixels, {} bytes",
        path.display(),
        bitmap.width,
        bitmap.height,
        bitmap.data.len()
    );

    Ok(NamedBitmap { name, bitmap })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_bitmap_extension() {
        assert!(has_bitmap_extension(Path::new("bird.bmp")));
        assert!(has_bitmap_extension(Path::new("dir/PIPE.BMP")));
        assert!(!has_bitmap_extension(Path::new("bird.png")));
        assert!(!has_bitmap_extension(Path::new("bmp")));
    }

    #[test]
    fn test_missing_directory() {
        let r = find_bitmap_files(Path::new("this directory does not exist"));
        assert!(matches!(r, Err(BitmapError::ReadDir(_))));
    }
}
