//! Rust source generator

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::NamedBitmap;

use std::fmt::Write;

pub const DEFAULT_IMAGE_TYPE: &str = "display::Image";
pub const BYTES_PER_LINE: usize = 12;

/// Generates a byte array and an image descriptor for each bitmap.
///
/// `image_type` is imported at the top of the file if it is a path.
#[rustfmt::skip::macros(writeln)]
pub fn generate_rust_source(
    images: &[NamedBitmap],
    image_type: &str,
) -> Result<String, std::fmt::Error> {
    let type_name = image_type
        .rsplit_once("::")
        .map_or(image_type, |(_, name)| name);

    let mut out = String::with_capacity(4096);

    if type_name != image_type {
        writeln!(out, "use {};", image_type)?;
        writeln!(out)?;
    }

    for NamedBitmap { name, bitmap } in images {
        writeln!(out)?;
        writeln!(out, "pub const _{}: [u8;{}] = [", name, bitmap.data.len())?;
        for line in bitmap.data.chunks(BYTES_PER_LINE) {
            out.push(' ');
            for b in line {
                write!(out, " 0x{:02x},", b)?;
            }
            out.push('\n');
        }
        writeln!(out, "];")?;

        writeln!(out, "pub const {name}: {type_name} = {type_name} {{ data: &_{name}, width: {}, height: {} }};", bitmap.width, bitmap.height)?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{ConstName, MonoBitmap};

    fn named_bitmap(name: &str, width: u32, height: u32, data: Vec<u8>) -> NamedBitmap {
        NamedBitmap {
            name: ConstName::from_file_stem(name).unwrap(),
            bitmap: MonoBitmap {
                width,
                height,
                data,
            },
        }
    }

    #[test]
    fn test_generate_rust_source() {
        let images = [
            named_bitmap("dot", 1, 3, vec![0x05]),
            named_bitmap("wide bar", 13, 8, (0..13).collect()),
        ];

        let out = generate_rust_source(&images, DEFAULT_IMAGE_TYPE).unwrap();

        assert_eq!(
            out,
            concat![
                "use display::Image;\n",
                "\n",
                "\n",
                "pub const _DOT: [u8;1] = [\n",
                "  0x05,\n",
                "];\n",
                "pub const DOT: Image = Image { data: &_DOT, width: 1, height: 3 };\n",
                "\n",
                "pub const _WIDE_BAR: [u8;13] = [\n",
                "  0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b,\n",
                "  0x0c,\n",
                "];\n",
                "pub const WIDE_BAR: Image = Image { data: &_WIDE_BAR, width: 13, height: 8 };\n",
            ]
        );
    }

    #[test]
    fn test_empty_bitmap() {
        let images = [named_bitmap("empty", 0, 0, Vec::new())];

        let out = generate_rust_source(&images, DEFAULT_IMAGE_TYPE).unwrap();

        assert!(out.ends_with(concat![
            "pub const _EMPTY: [u8;0] = [\n",
            "];\n",
            "pub const EMPTY: Image = Image { data: &_EMPTY, width: 0, height: 0 };\n",
        ]));
    }

    #[test]
    fn test_image_type_without_path() {
        let images = [named_bitmap("dot", 1, 1, vec![0x01])];

        let out = generate_rust_source(&images, "Sprite").unwrap();

        assert!(out.starts_with("\npub const _DOT: [u8;1] = [\n"));
        assert!(out.ends_with(
            "pub const DOT: Sprite = Sprite { data: &_DOT, width: 1, height: 1 };\n"
        ));
    }
}
