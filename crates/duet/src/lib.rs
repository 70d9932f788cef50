//! A two-voice melody extraction library
//!
//! Reduces a polyphonic MIDI track to at most two simultaneous voices and flattens them into a
//! list of `(pitch_a, pitch_b, duration)` plays.

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]

mod const_name;
mod errors;
mod midi_file;
mod rust_export;
mod timeline;
mod tracks;
mod voices;

pub use const_name::ConstName;
pub use errors::MelodyError;
pub use midi_file::{load_midi_file, melody_from_smf_bytes};
pub use rust_export::{generate_rust_source, PLAYS_PER_LINE};
pub use timeline::{
    build_melody, fix_pauses, merge_voices, strip_leading_pauses, MIN_PAUSE_PERCENT,
};
pub use tracks::select_melody_track;
pub use voices::{extract_voices, pad_pauses, DroppedNote, Voices, REPLACE_WINDOW_TICKS};

/// A MIDI key number, 0 is a pause.
pub type Pitch = u8;

pub const PAUSE: Pitch = 0;

/// A note-on that has not been closed by a note-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveNote {
    pub tick: u64,
    pub pitch: Pitch,
}

impl ActiveNote {
    pub fn finish(self, end_tick: u64) -> Note {
        Note {
            start_tick: self.tick,
            pitch: self.pitch,
            end_tick,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub start_tick: u64,
    pub pitch: Pitch,
    pub end_tick: u64,
}

impl Note {
    pub fn duration(&self) -> u64 {
        self.end_tick - self.start_tick
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    pub pitch_a: Pitch,
    pub pitch_b: Pitch,
    pub duration: u64,
}

impl Play {
    /// Marks the start of a melody.
    pub const SENTINEL: Play = Play::new(PAUSE, PAUSE, 0);

    pub const fn new(pitch_a: Pitch, pitch_b: Pitch, duration: u64) -> Self {
        Self {
            pitch_a,
            pitch_b,
            duration,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.pitch_a == PAUSE && self.pitch_b == PAUSE
    }

    /// Voice A always carries the pitch when only one voice sounds.
    pub fn promote_to_a(self) -> Self {
        if self.pitch_a == PAUSE && self.pitch_b != PAUSE {
            Self::new(self.pitch_b, PAUSE, self.duration)
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Melody {
    pub name: ConstName,

    /// Starts with `Play::SENTINEL`
    pub plays: Vec<Play>,

    /// note-on events discarded because both voices were in use
    pub dropped_notes: Vec<DroppedNote>,
}

impl Melody {
    /// Errors if a note-on was dropped because both voices were in use.
    pub fn check_no_dropped_notes(&self) -> Result<(), MelodyError> {
        match self.dropped_notes.first() {
            Some(d) => Err(MelodyError::TooManyVoices {
                tick: d.tick,
                pitch: d.pitch,
            }),
            None => Ok(()),
        }
    }
}
