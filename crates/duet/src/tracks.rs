//! MIDI track selection

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::{MelodyError, Pitch};

use midly::{MidiMessage, Track, TrackEvent, TrackEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoteEvent {
    On(Pitch),
    Off(Pitch),
}

impl NoteEvent {
    /// A note-on with a velocity of 0 is a note-off.
    /// The MIDI channel is ignored.
    pub(crate) fn from_event(kind: &TrackEventKind) -> Option<Self> {
        match kind {
            TrackEventKind::Midi { message, .. } => match *message {
                MidiMessage::NoteOn { key, vel } if vel.as_int() > 0 => {
                    Some(Self::On(key.as_int()))
                }
                MidiMessage::NoteOn { key, .. } | MidiMessage::NoteOff { key, .. } => {
                    Some(Self::Off(key.as_int()))
                }
                _ => None,
            },
            _ => None,
        }
    }
}

fn has_note_on(track: &[TrackEvent]) -> bool {
    track
        .iter()
        .any(|e| matches!(NoteEvent::from_event(&e.kind), Some(NoteEvent::On(_))))
}

/// Returns the first track that plays a note.
pub fn select_melody_track<'a, 'b>(
    tracks: &'b [Track<'a>],
) -> Result<&'b [TrackEvent<'a>], MelodyError> {
    match tracks.iter().position(|t| has_note_on(t)) {
        Some(i) => {
            log::debug!("melody track: {} of {}", i, tracks.len());
            Ok(tracks[i].as_slice())
        }
        None => Err(MelodyError::NoMelodicTrack),
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use midly::num::{u24, u28, u4, u7};
    use midly::{MetaMessage, MidiMessage, TrackEvent, TrackEventKind};

    fn midi(delta: u32, message: MidiMessage) -> TrackEvent<'static> {
        TrackEvent {
            delta: u28::new(delta),
            kind: TrackEventKind::Midi {
                channel: u4::new(0),
                message,
            },
        }
    }

    pub fn note_on(delta: u32, key: u8) -> TrackEvent<'static> {
        midi(
            delta,
            MidiMessage::NoteOn {
                key: u7::new(key),
                vel: u7::new(100),
            },
        )
    }

    pub fn note_off(delta: u32, key: u8) -> TrackEvent<'static> {
        midi(
            delta,
            MidiMessage::NoteOff {
                key: u7::new(key),
                vel: u7::new(64),
            },
        )
    }

    pub fn note_on_zero_velocity(delta: u32, key: u8) -> TrackEvent<'static> {
        midi(
            delta,
            MidiMessage::NoteOn {
                key: u7::new(key),
                vel: u7::new(0),
            },
        )
    }

    pub fn tempo(delta: u32) -> TrackEvent<'static> {
        TrackEvent {
            delta: u28::new(delta),
            kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(500_000))),
        }
    }

    pub fn end_of_track(delta: u32) -> TrackEvent<'static> {
        TrackEvent {
            delta: u28::new(delta),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::*;
    use super::*;

    #[test]
    fn test_note_event() {
        assert_eq!(
            NoteEvent::from_event(&note_on(0, 60).kind),
            Some(NoteEvent::On(60))
        );
        assert_eq!(
            NoteEvent::from_event(&note_off(0, 61).kind),
            Some(NoteEvent::Off(61))
        );
        assert_eq!(
            NoteEvent::from_event(&note_on_zero_velocity(0, 62).kind),
            Some(NoteEvent::Off(62))
        );
        assert_eq!(NoteEvent::from_event(&tempo(0).kind), None);
    }

    #[test]
    fn test_select_first_track_with_note_on() {
        let tracks = vec![
            vec![tempo(0), end_of_track(0)],
            vec![note_off(0, 40), end_of_track(0)],
            vec![note_on(10, 60), note_off(10, 60), end_of_track(0)],
            vec![note_on(0, 72), note_off(10, 72), end_of_track(0)],
        ];

        let track = select_melody_track(&tracks).unwrap();
        assert_eq!(track, tracks[2].as_slice());
    }

    #[test]
    fn test_no_melodic_track() {
        let tracks = vec![
            vec![tempo(0), end_of_track(0)],
            vec![note_on_zero_velocity(0, 60), end_of_track(0)],
        ];

        assert!(matches!(
            select_melody_track(&tracks),
            Err(MelodyError::NoMelodicTrack)
        ));
        assert!(matches!(
            select_melody_track(&[]),
            Err(MelodyError::NoMelodicTrack)
        ));
    }
}
