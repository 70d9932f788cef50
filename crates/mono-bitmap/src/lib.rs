//! A monochrome bitmap packing library

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]

mod const_name;
mod files;
mod pack;
mod rust_export;

pub use const_name::ConstName;
pub use files::{find_bitmap_files, load_bitmap, load_named_bitmap, BitmapError};
pub use pack::pack_luma;
pub use rust_export::{generate_rust_source, BYTES_PER_LINE, DEFAULT_IMAGE_TYPE};

/// Pixels with a brightness greater than or equal to this value are set.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Number of rows packed into a single byte.
pub const BAND_HEIGHT: u32 = 8;

/// A packed monochrome image.
///
/// Each byte holds a vertical strip of up to 8 pixels (bit 0 is the top pixel).
/// Bytes are stored band by band, left to right within each band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoBitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl MonoBitmap {
    pub fn n_bands(&self) -> u32 {
        self.height.div_ceil(BAND_HEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBitmap {
    pub name: ConstName,
    pub bitmap: MonoBitmap,
}
