//! midi2rs binary

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use duet::{generate_rust_source, load_midi_file};

use clap::Parser;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "A melody is extracted from the first track with a note-on event")]
#[command(arg_required_else_help = true)]
struct Args {
    #[arg(value_name = "MIDI_FILE", required = true, help = "input MIDI files")]
    inputs: Vec<PathBuf>,

    #[arg(short = 'o', long, value_name = "RS_FILE", help = "output file (default: stdout)")]
    output: Option<PathBuf>,

    #[arg(long, help = "Error if a note does not fit in the two voices")]
    strict: bool,
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

    let melodies: Vec<_> = args
        .inputs
        .iter()
        .map(|path| {
            let melody = match load_midi_file(path) {
                Ok(m) => m,
                Err(why) => error!("Error reading {}: {}", path.display(), why),
            };

            if args.strict {
                if let Err(why) = melody.check_no_dropped_notes() {
                    error!("Error reading {}: {}", path.display(), why);
                }
            }

            melody
        })
        .collect();

    let text = match generate_rust_source(&melodies) {
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
