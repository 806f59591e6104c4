use alloc::vec::Vec;

use crate::{message::Program, song::Note};

#[doc = r#"
The notes of one instrument, sorted by onset.

A track has at most one instrument: once set by a program change it never
changes.
"#]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "TrackParts"))]
pub struct Track {
    notes: Vec<Note>,
    instrument: Option<Program>,
    is_drum: bool,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TrackParts {
    notes: Vec<Note>,
    #[serde(default)]
    instrument: Option<Program>,
    #[serde(default)]
    is_drum: bool,
}

#[cfg(feature = "serde")]
impl From<TrackParts> for Track {
    fn from(parts: TrackParts) -> Self {
        let mut track = Self {
            notes: parts.notes,
            instrument: parts.instrument,
            is_drum: parts.is_drum,
        };
        track.sort_by_onset();
        track
    }
}

impl Track {
    /// An empty track without instrument
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished notes of the track
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True if the track has no note
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The program set for this track, if any
    pub const fn instrument(&self) -> Option<Program> {
        self.instrument
    }

    /// True for a percussive track
    pub const fn is_drum(&self) -> bool {
        self.is_drum
    }

    /// Sets the instrument of the track.
    ///
    /// # Errors
    /// If an instrument is already set, it is returned untouched.
    pub fn set_instrument(&mut self, program: Program) -> Result<(), Program> {
        match self.instrument {
            Some(existing) => Err(existing),
            None => {
                self.instrument = Some(program);
                Ok(())
            }
        }
    }

    pub(crate) fn mark_drum(&mut self) {
        self.is_drum = true;
    }

    pub(crate) fn push(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Notes are pushed on release; a stable sort keeps release order for equal onsets.
    pub(crate) fn sort_by_onset(&mut self) {
        self.notes.sort_by_key(Note::tick);
    }
}

#[test]
fn instrument_is_set_once() {
    let piano = Program::new(0).unwrap();
    let violin = Program::new(40).unwrap();

    let mut track = Track::new();
    assert_eq!(track.instrument(), None);
    assert_eq!(track.set_instrument(piano), Ok(()));
    assert_eq!(track.set_instrument(violin), Err(piano));
    assert_eq!(track.instrument(), Some(piano));
}
