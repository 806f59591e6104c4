#![doc = r#"
Rebuilds a note-level [`Song`](crate::song::Song) from an already decoded MIDI file.

A decoder hands over a [`MidiFile`](crate::file::MidiFile): the header
(format type and timing) and, per track, the ordered list of delta-timed
[`TrackEvent`](crate::message::TrackEvent)s. This crate then

1. checks the file-wide assumptions (synchronous multi-track layout, ticks per
   quarter note timing, a tempo map made of meta events only),
2. replays every remaining track through a
   [`TrackReconstructor`](crate::reconstruct::TrackReconstructor), pairing
   note-on and note-off events into finished [`Note`](crate::song::Note)s,
3. drops the tracks that are too short or percussive,
4. assembles what is left into a [`Song`](crate::song::Song).

Any violation aborts the whole file with a [`SongError`](crate::error::SongError).

# Example
```rust
use midisong::prelude::*;

let pitch = Pitch::new(60).unwrap();
let velocity = Velocity::new(100).unwrap();

let tempo_map = MidiTrack::new(vec![TrackEvent::new(
    0,
    TrackMessage::Meta(MetaMessage::Tempo(Tempo::new(500_000))),
)]);

let mut events = Vec::new();
for _ in 0..4 {
    events.push(TrackEvent::new(
        0,
        TrackMessage::ChannelVoice(ChannelVoiceMessage::new(
            Channel::One,
            VoiceEvent::NoteOn { pitch, velocity },
        )),
    ));
    events.push(TrackEvent::new(
        96,
        TrackMessage::ChannelVoice(ChannelVoiceMessage::new(
            Channel::One,
            VoiceEvent::NoteOff { pitch, velocity },
        )),
    ));
}

let file = MidiFile::new(
    MidiFileHeader::new(FormatType::Simultaneous, Timing::new_ticks_per_quarter_note(96)),
    vec![tempo_map, MidiTrack::new(events)],
);

let song = Song::from_midi(&file).unwrap();
assert_eq!(song.tracks().len(), 1);
assert_eq!(song.note_count(), 4);
```
"#]
#![warn(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod byte;
pub use byte::*;

mod channel;
pub use channel::*;

mod pitch;
pub use pitch::*;

pub mod config;
pub mod error;
pub mod file;
pub mod filter;
pub mod gate;
pub mod message;
pub mod reader;
pub mod reconstruct;
pub mod song;

pub use error::{ParseError, SongError};

/// Commonly used types
pub mod prelude {
    pub use crate::{
        byte::*,
        channel::*,
        config::*,
        error::*,
        file::*,
        filter::*,
        message::*,
        pitch::*,
        reader::*,
        reconstruct::*,
        song::*,
    };
}
