#![doc = r#"
Meta messages (`FF <type> <len> <data>`)

Meta messages never reach a synthesizer. They carry track names, lyrics and,
in the tempo map of a format 1 file, the tempo and signatures every other track
is played against.
"#]

mod tempo;
pub use tempo::*;

use alloc::borrow::Cow;
use core::fmt;

use num_enum::{FromPrimitive, IntoPrimitive};

use crate::Channel;

#[doc = r#"
The kind of a meta message, identified by its type byte.

# Example
```rust
# use midisong::prelude::*;
assert_eq!(MetaKind::from(0x51), MetaKind::Tempo);
assert_eq!(MetaKind::from(0x60), MetaKind::Unknown(0x60));
assert_eq!(u8::from(MetaKind::EndOfTrack), 0x2F);
```
"#]
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum MetaKind {
    SequenceNumber = 0x00,
    Text = 0x01,
    Copyright = 0x02,
    TrackName = 0x03,
    InstrumentName = 0x04,
    #[cfg_attr(feature = "serde", serde(rename = "lyrics"))]
    Lyric = 0x05,
    Marker = 0x06,
    #[cfg_attr(feature = "serde", serde(rename = "cue_marker"))]
    CuePoint = 0x07,
    ChannelPrefix = 0x20,
    MidiPort = 0x21,
    EndOfTrack = 0x2F,
    #[cfg_attr(feature = "serde", serde(rename = "set_tempo"))]
    Tempo = 0x51,
    SmpteOffset = 0x54,
    TimeSignature = 0x58,
    KeySignature = 0x59,
    SequencerSpecific = 0x7F,
    #[num_enum(catch_all)]
    Unknown(u8),
}

impl fmt::Display for MetaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MetaKind::*;
        let name = match self {
            SequenceNumber => "sequence_number",
            Text => "text",
            Copyright => "copyright",
            TrackName => "track_name",
            InstrumentName => "instrument_name",
            Lyric => "lyrics",
            Marker => "marker",
            CuePoint => "cue_marker",
            ChannelPrefix => "channel_prefix",
            MidiPort => "midi_port",
            EndOfTrack => "end_of_track",
            Tempo => "set_tempo",
            SmpteOffset => "smpte_offset",
            TimeSignature => "time_signature",
            KeySignature => "key_signature",
            SequencerSpecific => "sequencer_specific",
            Unknown(byte) => return write!(f, "unknown_meta({byte:#04x})"),
        };
        f.write_str(name)
    }
}

#[doc = r#"
A decoded meta message.

Text payloads are kept as raw bytes since MIDI files do not agree on an
encoding.
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetaMessage<'a> {
    /// Number of the sequence (format 2 pattern id)
    SequenceNumber(u16),
    /// Free text
    Text(Cow<'a, [u8]>),
    /// Copyright notice
    Copyright(Cow<'a, [u8]>),
    /// Name of the track (or of the sequence, in the tempo map)
    TrackName(Cow<'a, [u8]>),
    /// Name of the instrument
    InstrumentName(Cow<'a, [u8]>),
    /// A syllable of lyrics
    Lyric(Cow<'a, [u8]>),
    /// Rehearsal letter or section name
    Marker(Cow<'a, [u8]>),
    /// Something happening on stage
    CuePoint(Cow<'a, [u8]>),
    /// Channel following events are associated to
    ChannelPrefix(Channel),
    /// Output port of the track
    MidiPort(u8),
    /// Mandatory last event of a track
    EndOfTrack,
    /// Microseconds per quarter note
    Tempo(Tempo),
    /// Start time of the track, in SMPTE time code
    SmpteOffset([u8; 5]),
    /// Time signature
    TimeSignature {
        /// Beats per bar
        numerator: u8,
        /// Beat unit, as a power of two
        denominator_power: u8,
        /// MIDI clocks per metronome click
        clocks_per_click: u8,
        /// Notated 32nd notes per quarter note
        notated_32nds_per_quarter: u8,
    },
    /// Key signature
    KeySignature {
        /// Positive for sharps, negative for flats
        accidentals: i8,
        /// True for a minor key
        minor: bool,
    },
    /// Sequencer specific data
    SequencerSpecific(Cow<'a, [u8]>),
    /// A type byte this crate knows nothing about
    Unknown {
        /// The type byte
        kind: u8,
        /// Raw payload
        data: Cow<'a, [u8]>,
    },
}

impl MetaMessage<'_> {
    /// The kind of the message
    pub const fn kind(&self) -> MetaKind {
        use MetaMessage::*;
        match self {
            SequenceNumber(_) => MetaKind::SequenceNumber,
            Text(_) => MetaKind::Text,
            Copyright(_) => MetaKind::Copyright,
            TrackName(_) => MetaKind::TrackName,
            InstrumentName(_) => MetaKind::InstrumentName,
            Lyric(_) => MetaKind::Lyric,
            Marker(_) => MetaKind::Marker,
            CuePoint(_) => MetaKind::CuePoint,
            ChannelPrefix(_) => MetaKind::ChannelPrefix,
            MidiPort(_) => MetaKind::MidiPort,
            EndOfTrack => MetaKind::EndOfTrack,
            Tempo(_) => MetaKind::Tempo,
            SmpteOffset(_) => MetaKind::SmpteOffset,
            TimeSignature { .. } => MetaKind::TimeSignature,
            KeySignature { .. } => MetaKind::KeySignature,
            SequencerSpecific(_) => MetaKind::SequencerSpecific,
            Unknown { kind, .. } => MetaKind::Unknown(*kind),
        }
    }
}

#[test]
fn kind_matches_type_byte() {
    use alloc::vec;
    let messages = [
        (MetaMessage::TrackName(Cow::Owned(vec![b'a'])), 0x03),
        (MetaMessage::EndOfTrack, 0x2F),
        (MetaMessage::Tempo(Tempo::default()), 0x51),
        (
            MetaMessage::KeySignature {
                accidentals: -2,
                minor: false,
            },
            0x59,
        ),
    ];
    for (message, byte) in messages {
        assert_eq!(message.kind(), MetaKind::from(byte));
        assert_eq!(u8::from(message.kind()), byte);
    }
}

#[test]
fn unknown_kind_display() {
    assert_eq!(
        alloc::format!("{}", MetaKind::Unknown(0x60)),
        "unknown_meta(0x60)"
    );
    assert_eq!(alloc::format!("{}", MetaKind::Tempo), "set_tempo");
}
