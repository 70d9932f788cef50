//! MIDI file loading

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::{build_melody, select_melody_track, ConstName, Melody, MelodyError};

use std::fs;
use std::path::Path;

pub fn melody_from_smf_bytes(name: ConstName, data: &[u8]) -> Result<Melody, MelodyError> {
    let smf = midly::Smf::parse(data)?;
    let track = select_melody_track(&smf.tracks)?;

    build_melody(name, track)
}

/// Loads a Standard MIDI File, the melody is named after the file.
pub fn load_midi_file(path: &Path) -> Result<Melody, MelodyError> {
    let name = ConstName::from_path(path)?;
    let data = fs::read(path)?;

    melody_from_smf_bytes(name, &data)
}
