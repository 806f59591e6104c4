use alloc::vec::Vec;

use crate::{Pitch, song::Note};

/// A note whose release has not been seen yet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingNote {
    tick: u64,
    pitch: Pitch,
}

impl PendingNote {
    /// A note pressed at `tick`
    pub const fn new(tick: u64, pitch: Pitch) -> Self {
        Self { tick, pitch }
    }

    /// Onset of the note
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Pitch of the note
    pub const fn pitch(&self) -> Pitch {
        self.pitch
    }

    /// Finishes the note with a release at `release_tick`.
    pub const fn close(self, release_tick: u64) -> Note {
        Note::new(self.tick, self.pitch, release_tick.saturating_sub(self.tick))
    }
}

#[doc = r#"
The notes of a track that are pressed but not yet released, oldest first.

When several notes of the same pitch overlap, a release closes the oldest one.
"#]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingNotes {
    notes: Vec<PendingNote>,
}

impl PendingNotes {
    /// Remember a note pressed at `tick`
    pub fn open(&mut self, tick: u64, pitch: Pitch) {
        self.notes.push(PendingNote::new(tick, pitch));
    }

    /// Closes the oldest open note with this pitch.
    ///
    /// Returns `None`, leaving the buffer untouched, if no note with this
    /// pitch is open.
    pub fn release(&mut self, pitch: Pitch, tick: u64) -> Option<Note> {
        let position = self.notes.iter().position(|note| note.pitch == pitch)?;
        Some(self.notes.remove(position).close(tick))
    }

    /// Number of notes still open
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True if every note was released
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The open notes, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &PendingNote> {
        self.notes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(byte: u8) -> Pitch {
        Pitch::new(byte).unwrap()
    }

    #[test]
    fn release_closes_matching_note() {
        let mut pending = PendingNotes::default();
        pending.open(0, pitch(60));

        assert_eq!(pending.release(pitch(60), 10), Some(Note::new(0, pitch(60), 10)));
        assert!(pending.is_empty());
    }

    #[test]
    fn oldest_note_of_a_pitch_closes_first() {
        let mut pending = PendingNotes::default();
        pending.open(0, pitch(60));
        pending.open(5, pitch(60));

        assert_eq!(pending.release(pitch(60), 10), Some(Note::new(0, pitch(60), 10)));
        assert_eq!(pending.len(), 1);
        assert_eq!(
            pending.iter().next().copied(),
            Some(PendingNote::new(5, pitch(60)))
        );
    }

    #[test]
    fn other_pitches_are_skipped() {
        let mut pending = PendingNotes::default();
        pending.open(0, pitch(64));
        pending.open(2, pitch(60));
        pending.open(4, pitch(67));

        assert_eq!(pending.release(pitch(60), 8), Some(Note::new(2, pitch(60), 6)));
        let left: alloc::vec::Vec<_> = pending.iter().map(PendingNote::pitch).collect();
        assert_eq!(left, alloc::vec![pitch(64), pitch(67)]);
    }

    #[test]
    fn unmatched_release_is_ignored() {
        let mut pending = PendingNotes::default();
        pending.open(0, pitch(64));

        assert_eq!(pending.release(pitch(60), 3), None);
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn release_on_same_tick_has_zero_duration() {
        let mut pending = PendingNotes::default();
        pending.open(7, pitch(60));
        assert_eq!(pending.release(pitch(60), 7).map(|n| n.duration()), Some(0));
    }
}
