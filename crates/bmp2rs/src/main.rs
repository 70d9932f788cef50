//! bmp2rs binary

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use mono_bitmap::{
    find_bitmap_files, generate_rust_source, load_named_bitmap, DEFAULT_IMAGE_TYPE,
    DEFAULT_THRESHOLD,
};

use clap::Parser;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Every .bmp file in DIR is converted, in file name order")]
struct Args {
    #[arg(value_name = "DIR", default_value = ".", help = "directory containing the bitmaps")]
    dir: PathBuf,

    #[arg(short = 'o', long, value_name = "RS_FILE", help = "output file (default: stdout)")]
    output: Option<PathBuf>,

    #[arg(
        short = 't',
        long,
        value_name = "N",
        default_value_t = DEFAULT_THRESHOLD,
        help = "brightness threshold (pixels >= N are set)"
    )]
    threshold: u8,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_IMAGE_TYPE,
        help = "image descriptor type"
    )]
    image_type: String,
}

macro_rules! error {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
        std::process::exit(1);
    }};
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let files = match find_bitmap_files(&args.dir) {
        Ok(files) => files,
        Err(why) => error!("Error reading {}: {}", args.dir.display(), why),
    };

    if files.is_empty() {
        log::warn!("No bitmap files found in {}", args.dir.display());
    }

    let images: Vec<_> = files
        .iter()
        .map(|path| match load_named_bitmap(path, args.threshold) {
            Ok(image) => image,
            Err(why) => error!("Error reading {}: {}", path.display(), why),
        })
        .collect();

    let text = match generate_rust_source(&images, &args.image_type) {
        Ok(text) => text,
        Err(why) => error!("Cannot generate rust source: {}", why),
    };

    write_output(args.output, text);
}

fn write_output(output: Option<PathBuf>, text: String) {
    match output {
        Some(path) => match fs::write(&path, text) {
            Ok(()) => (),
            Err(why) => error!("Error writing {}: {}", path.display(), why),
        },
        None => match io::stdout().lock().write_all(text.as_bytes()) {
            Ok(()) => (),
            Err(why) => error!("Error writing to stdout: {}", why),
        },
    }
}
