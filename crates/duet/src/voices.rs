//! Two-voice note extraction

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::tracks::NoteEvent;
use crate::{ActiveNote, Note, Pitch, PAUSE};

use midly::TrackEvent;

/// A note-on this close to a busy voice's note-on replaces it if the new pitch is higher.
pub const REPLACE_WINDOW_TICKS: u64 = 20;

/// A note-on that did not fit in either voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DroppedNote {
    pub tick: u64,
    pub pitch: Pitch,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Voices {
    pub a: Vec<Note>,
    pub b: Vec<Note>,
    pub dropped: Vec<DroppedNote>,
}

impl ActiveNote {
    fn in_replace_window(&self, tick: u64) -> bool {
        tick - self.tick < REPLACE_WINDOW_TICKS
    }
}

/// Splits a track into two monophonic voices.
///
/// Note-offs are matched by pitch, an unmatched note-off is ignored.
/// Notes that are still sounding at the end of the track are discarded.
pub fn extract_voices(track: &[TrackEvent]) -> Voices {
    let mut voices = Voices::default();

    let mut slot_a: Option<ActiveNote> = None;
    let mut slot_b: Option<ActiveNote> = None;
    let mut tick: u64 = 0;

    for event in track {
        tick += u64::from(event.delta.as_int());

        match NoteEvent::from_event(&event.kind) {
            Some(NoteEvent::On(pitch)) => {
                let note = ActiveNote { tick, pitch };

                if slot_a.is_none() {
                    slot_a = Some(note);
                } else if slot_b.is_none() {
                    slot_b = Some(note);
                } else if let Some(a) = slot_a.filter(|a| a.in_replace_window(tick)) {
                    if pitch > a.pitch {
                        slot_a = Some(note);
                    }
                } else if let Some(b) = slot_b.filter(|b| b.in_replace_window(tick)) {
                    if pitch > b.pitch {
                        slot_b = Some(note);
                    }
                } else {
                    log::warn!("both voices in use, dropping note {} at tick {}", pitch, tick);
                    voices.dropped.push(DroppedNote { tick, pitch });
                }
            }
            Some(NoteEvent::Off(pitch)) => {
                // Both voices can be playing the same pitch
                if let Some(a) = slot_a.take_if(|a| a.pitch == pitch) {
                    voices.a.push(a.finish(tick));
                }
                if let Some(b) = slot_b.take_if(|b| b.pitch == pitch) {
                    voices.b.push(b.finish(tick));
                }
            }
            None => (),
        }
    }

    voices
}

/// Fills the gaps between notes (and before the first note) with pauses.
pub fn pad_pauses(notes: &[Note]) -> Vec<Note> {
    let mut out = Vec::with_capacity(notes.len() * 2);
    let mut last_tick = 0;

    for note in notes {
        if note.start_tick > last_tick {
            out.push(Note {
                start_tick: last_tick,
                pitch: PAUSE,
                end_tick: note.start_tick,
            });
        }
        out.push(*note);
        last_tick = note.end_tick;
    }

    out
}
