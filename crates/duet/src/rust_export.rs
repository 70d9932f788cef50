//! Rust source generator

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::Melody;

use std::fmt::Write;

pub const PLAYS_PER_LINE: usize = 10;

/// Generates a `[(u16,u16,u16);N]` constant for each melody.
pub fn generate_rust_source(melodies: &[Melody]) -> Result<String, std::fmt::Error> {
    let mut out = String::with_capacity(4096);

    for m in melodies {
        writeln!(out, "pub const {}: [(u16,u16,u16);{}] = [", m.name, m.plays.len())?;
        for line in m.plays.chunks(PLAYS_PER_LINE) {
            for (i, p) in line.iter().enumerate() {
                if i > 0 {
                    out += " ";
                }
                write!(out, "({}, {}, {}),", p.pitch_a, p.pitch_b, p.duration)?;
            }
            writeln!(out)?;
        }
        writeln!(out, "];")?;
        writeln!(out)?;
    }

    Ok(out)
}
