#![doc = r#"
Errors produced while loading a [`Song`](crate::song::Song)
"#]

use thiserror::Error;

use crate::{
    Channel, Pitch,
    file::{FormatType, Timing},
    message::{Program, meta::MetaKind},
};

#[doc = r#"
Every way a file can be rejected.

Loading is all-or-nothing: the first violation aborts the file and no partial
song is returned. Tracks that are merely uninteresting (too short, percussive)
are dropped by the [`TrackFilter`](crate::filter::TrackFilter) and never show up here.

Track indices are positions in the file, so the tempo map is track `0`.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SongError {
    /// Only the synchronous multi-track layout (format 1) is read
    #[error("Only format 1 (simultaneous) is supported, {0:?} given")]
    UnsupportedFormat(FormatType),
    /// SMPTE timing, or a resolution outside `1..128` ticks per quarter note
    #[error("Unsupported timing {0:?}, expected 1 to 127 ticks per quarter note")]
    UnsupportedTiming(Timing),
    /// The file does not contain a single track
    #[error("The file has no tempo map track")]
    MissingTempoMap,
    /// The tempo map contains something other than meta events
    #[error("Tempo map should only contain meta events (event {event} is not)")]
    StructuralViolation {
        /// Position of the offending event in the tempo map
        event: usize,
    },
    /// A key signature, time signature or tempo meta event outside the tempo map
    #[error("Track {track} should not contain {kind}")]
    MisplacedTempoMeta {
        /// Track index
        track: usize,
        /// The meta event kind found
        kind: MetaKind,
    },
    /// A meta event that is neither informational nor tempo related
    #[error("Track {track} contains unsupported meta message type ({kind})")]
    UnsupportedMeta {
        /// Track index
        track: usize,
        /// The meta event kind found
        kind: MetaKind,
    },
    /// A note was opened on a channel that does not belong to its track
    #[error("Notes belong to the wrong track (channel {channel} in track {track})")]
    ChannelTrackMismatch {
        /// Track index
        track: usize,
        /// Channel of the note-on event
        channel: Channel,
    },
    /// A second program change in the same track
    #[error("Track {track} already has a program defined ({existing:?}, got {program:?})")]
    DuplicateInstrument {
        /// Track index
        track: usize,
        /// The instrument set first
        existing: Program,
        /// The rejected instrument
        program: Program,
    },
    /// A message the note model has no place for
    #[error("Track {track} contains unsupported message type ({message})")]
    UnsupportedMessage {
        /// Track index
        track: usize,
        /// Name of the message type
        message: &'static str,
    },
    /// A note was opened outside the configured pitch range
    #[error("Track {track} contains a note ({pitch}) outside of the supported range")]
    PitchOutOfRange {
        /// Track index
        track: usize,
        /// The rejected pitch
        pitch: Pitch,
    },
    /// Notes still waiting for their release when the track ended
    #[error("Some notes ({count}) of track {track} did not end")]
    UnterminatedNote {
        /// Track index
        track: usize,
        /// Number of notes still open
        count: usize,
    },
    /// Every track was filtered out
    #[error("Empty song. No track added")]
    EmptySong,
}

impl SongError {
    /// The file track index the error refers to, if any
    pub const fn track(&self) -> Option<usize> {
        use SongError::*;
        match self {
            StructuralViolation { .. } => Some(0),
            MisplacedTempoMeta { track, .. }
            | UnsupportedMeta { track, .. }
            | ChannelTrackMismatch { track, .. }
            | DuplicateInstrument { track, .. }
            | UnsupportedMessage { track, .. }
            | PitchOutOfRange { track, .. }
            | UnterminatedNote { track, .. } => Some(*track),
            UnsupportedFormat(_) | UnsupportedTiming(_) | MissingTempoMap | EmptySong => None,
        }
    }
}

/// Raised when building checked MIDI values from raw numbers
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The leading bit of a data byte was set
    #[error("Data byte {0:#04x} has its leading bit set")]
    InvalidDataByte(u8),
    /// Channels go from 0 to 15
    #[error("Invalid channel index {0}")]
    InvalidChannel(u8),
    /// Format words go from 0 to 2
    #[error("Invalid format type {0}")]
    InvalidFormat(u16),
    /// SMPTE division with a frame rate other than -24, -25, -29 or -30
    #[error("Invalid SMPTE frame rate {0}")]
    SmpteFrameRate(i8),
    /// A pitch bend value above 14 bits
    #[error("Pitch bend value {0} exceeds 14 bits")]
    InvalidPitchBend(u16),
}

#[test]
fn track_index_of_errors() {
    assert_eq!(SongError::EmptySong.track(), None);
    assert_eq!(SongError::StructuralViolation { event: 3 }.track(), Some(0));
    assert_eq!(
        SongError::UnterminatedNote { track: 2, count: 1 }.track(),
        Some(2)
    );
}
