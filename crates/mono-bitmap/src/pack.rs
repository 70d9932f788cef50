//! Vertical strip packing

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::{MonoBitmap, BAND_HEIGHT};

use image::{GrayImage, Luma};

/// Packs a greyscale image into 8-pixel vertical strips.
///
/// The last band only covers the remaining rows when the height is not a multiple of 8,
/// the unused high bits of those bytes are always clear.
pub fn pack_luma(image: &GrayImage, threshold: u8) -> MonoBitmap {
    let (width, height) = image.dimensions();
    let n_bands = height.div_ceil(BAND_HEIGHT);

    let mut data = Vec::with_capacity(n_bands as usize * width as usize);

    for band in 0..n_bands {
        let band_start = band * BAND_HEIGHT;
        let band_height = (height - band_start).min(BAND_HEIGHT);

        for x in 0..width {
            let mut byte = 0;
            for i in 0..band_height {
                let Luma([luma]) = *image.get_pixel(x, band_start + i);
                if luma >= threshold {
                    byte |= 1 << i;
                }
            }
            data.push(byte);
        }
    }

    MonoBitmap {
        width,
        height,
        data,
    }
}
