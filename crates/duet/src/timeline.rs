//! Play timeline

// SPDX-FileCopyrightText: © 2026 Marcus Rowe <undisbeliever@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::voices::{extract_voices, pad_pauses, Voices};
use crate::{ConstName, Melody, MelodyError, Note, Play, PAUSE};

use midly::TrackEvent;

use std::collections::VecDeque;

/// Pauses are never shorter than this percentage of the average note length.
pub const MIN_PAUSE_PERCENT: u64 = 20;

/// Merges two padded voices into a list of plays.
///
/// Both voices must start their notes at the same tick while both have notes remaining.
/// A play ends when the shortest of the two notes ends, the rest of the longer note is
/// carried over to the next play.
pub fn merge_voices(a: Vec<Note>, b: Vec<Note>) -> Result<Vec<Play>, MelodyError> {
    let mut plays = Vec::with_capacity(a.len() + b.len());

    let mut a = VecDeque::from(a);
    let mut b = VecDeque::from(b);

    loop {
        match (a.pop_front(), b.pop_front()) {
            (None, None) => break,
            (Some(na), None) => plays.push(Play::new(na.pitch, PAUSE, na.duration())),
            (None, Some(nb)) => plays.push(Play::new(PAUSE, nb.pitch, nb.duration())),
            (Some(na), Some(nb)) => {
                if na.start_tick != nb.start_tick {
                    return Err(MelodyError::DesynchronizedVoices {
                        tick_a: na.start_tick,
                        tick_b: nb.start_tick,
                    });
                }

                let end_tick = na.end_tick.min(nb.end_tick);
                plays.push(Play::new(na.pitch, nb.pitch, end_tick - na.start_tick));

                if na.end_tick > end_tick {
                    a.push_front(Note {
                        start_tick: end_tick,
                        ..na
                    });
                }
                if nb.end_tick > end_tick {
                    b.push_front(Note {
                        start_tick: end_tick,
                        ..nb
                    });
                }
            }
        }
    }

    Ok(plays)
}

pub fn strip_leading_pauses(plays: &[Play]) -> Result<&[Play], MelodyError> {
    match plays.iter().position(|p| !p.is_silent()) {
        Some(i) => Ok(&plays[i..]),
        None => Err(MelodyError::Silent),
    }
}

/// Lengthens short pauses.
///
/// Returns the minimum pause length.
pub fn fix_pauses(plays: &mut [Play]) -> Result<u64, MelodyError> {
    let (total, count) = plays
        .iter()
        .filter(|p| !p.is_silent())
        .fold((0u64, 0u64), |(total, count), p| (total + p.duration, count + 1));

    if count == 0 {
        return Err(MelodyError::Silent);
    }

    let average = total / count;
    let min_pause = (average * MIN_PAUSE_PERCENT / 100).max(1);

    for p in plays.iter_mut() {
        if p.is_silent() && p.duration < min_pause {
            p.duration = min_pause;
        }
    }

    Ok(min_pause)
}

/// Converts a MIDI track into a melody.
pub fn build_melody(name: ConstName, track: &[TrackEvent]) -> Result<Melody, MelodyError> {
    let Voices { a, b, dropped } = extract_voices(track);

    let plays = merge_voices(pad_pauses(&a), pad_pauses(&b))?;

    let mut plays: Vec<Play> = [Play::SENTINEL]
        .into_iter()
        .chain(strip_leading_pauses(&plays)?.iter().map(|p| p.promote_to_a()))
        .collect();

    let min_pause = fix_pauses(&mut plays[1..])?;
    log::debug!("{}: minimum pause is {} ticks", name, min_pause);

    let mut tick = 0;
    for p in &plays {
        if p.duration > u16::MAX.into() {
            return Err(MelodyError::DurationOverflow {
                tick,
                duration: p.duration,
            });
        }
        tick += p.duration;
    }

    log::info!("{}: {} plays, {} ticks", name, plays.len(), tick);

    Ok(Melody {
        name,
        plays,
        dropped_notes: dropped,
    })
}
