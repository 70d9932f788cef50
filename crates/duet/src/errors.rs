//! Melody errors

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::fmt::Display;
use std::io;

#[derive(Debug)]
pub enum MelodyError {
    IoError(io::Error),
    MidiError(midly::Error),
    InvalidName(String),

    NoMelodicTrack,
    DesynchronizedVoices { tick_a: u64, tick_b: u64 },
    Silent,
    DurationOverflow { tick: u64, duration: u64 },
    TooManyVoices { tick: u64, pitch: u8 },
}

impl Display for MelodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => e.fmt(f),
            Self::MidiError(e) => write!(f, "invalid MIDI file: {}", e),
            Self::InvalidName(s) => write!(f, "cannot create a constant name from {:?}", s),

            Self::NoMelodicTrack => write!(f, "no melodic track (no track has a note-on event)"),
            Self::DesynchronizedVoices { tick_a, tick_b } => write!(
                f,
                "desynchronized voices (voice A at tick {}, voice B at tick {})",
                tick_a, tick_b
            ),
            Self::Silent => write!(f, "melody is silent (no notes)"),
            Self::DurationOverflow { tick, duration } => write!(
                f,
                "play at tick {} is too long ({} ticks, max {})",
                tick,
                duration,
                u16::MAX
            ),
            Self::TooManyVoices { tick, pitch } => write!(
                f,
                "too many voices: note {} at tick {} does not fit in two voices",
                pitch, tick
            ),
        }
    }
}

impl From<io::Error> for MelodyError {
    fn from(e: io::Error) -> Self {
        Self::IoError(e)
    }
}

impl From<midly::Error> for MelodyError {
    fn from(e: midly::Error) -> Self {
        Self::MidiError(e)
    }
}
