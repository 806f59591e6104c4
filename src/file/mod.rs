#![doc = r#"
Rusty representation of an already decoded [`MidiFile`]

Decoding the bytes of a `.mid` file is the job of a MIDI decoder; this module
only describes what such a decoder hands over.
"#]

mod format;
pub use format::*;

mod header;
pub use header::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use alloc::vec::Vec;

#[doc = r#"
A decoded MIDI file: its header plus every track, in file order.
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MidiFile<'a> {
    header: MidiFileHeader,
    tracks: Vec<MidiTrack<'a>>,
}

impl<'a> MidiFile<'a> {
    /// Create a file from its header and tracks
    pub fn new(header: MidiFileHeader, tracks: Vec<MidiTrack<'a>>) -> Self {
        Self { header, tracks }
    }

    /// Returns header info
    pub const fn header(&self) -> &MidiFileHeader {
        &self.header
    }

    /// Returns the format type for the file.
    pub const fn format_type(&self) -> FormatType {
        self.header.format_type()
    }

    /// Returns the timing of the file
    pub const fn timing(&self) -> &Timing {
        self.header.timing()
    }

    /// Returns the track list
    pub fn tracks(&self) -> &[MidiTrack<'a>] {
        &self.tracks
    }
}
