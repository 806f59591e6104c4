#![doc = r#"
The one configuration value shared by every stage of a load
"#]

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::{Channel, Pitch, message::meta::MetaKind};

#[doc = r#"
Policy knobs of a [`SongReader`](crate::reader::SongReader).

The value is never mutated during a load; every stage borrows it.

# Example
```rust
# use midisong::prelude::*;
let config = ReaderConfig::default()
    .with_min_track_length(8)
    .with_percussion_channel(None);

assert_eq!(config.min_track_length, 8);
assert!(config.is_informational(MetaKind::TrackName));
assert!(config.is_tempo(MetaKind::Tempo));
```
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// Tracks with fewer finished notes are dropped
    pub min_track_length: usize,
    /// Meta events that may appear in any track and are ignored
    pub informational_meta: Vec<MetaKind>,
    /// Meta events only allowed in the tempo map
    pub tempo_meta: Vec<MetaKind>,
    /// Notes or programs on this channel flag the track as percussive
    pub percussion_channel: Option<Channel>,
    /// Whether percussive tracks are dropped
    pub drop_percussion: bool,
    /// Pitches a note may be opened with
    pub pitch_range: RangeInclusive<u8>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        use MetaKind::*;
        Self {
            min_track_length: 4,
            informational_meta: alloc::vec![MidiPort, TrackName, Lyric, EndOfTrack],
            tempo_meta: alloc::vec![KeySignature, Tempo, TimeSignature],
            percussion_channel: Some(Channel::PERCUSSION),
            drop_percussion: true,
            pitch_range: 0..=127,
        }
    }
}

impl ReaderConfig {
    /// Set the minimum number of notes a track needs to be kept
    pub fn with_min_track_length(mut self, min_track_length: usize) -> Self {
        self.min_track_length = min_track_length;
        self
    }

    /// Set the channel marking percussive tracks, `None` to never flag one
    pub fn with_percussion_channel(mut self, channel: Option<Channel>) -> Self {
        self.percussion_channel = channel;
        self
    }

    /// Keep or drop percussive tracks
    pub fn with_drop_percussion(mut self, drop_percussion: bool) -> Self {
        self.drop_percussion = drop_percussion;
        self
    }

    /// Restrict the pitches notes may be opened with
    pub fn with_pitch_range(mut self, pitch_range: RangeInclusive<u8>) -> Self {
        self.pitch_range = pitch_range;
        self
    }

    /// Replace the list of ignored meta events
    pub fn with_informational_meta(mut self, kinds: impl IntoIterator<Item = MetaKind>) -> Self {
        self.informational_meta = kinds.into_iter().collect();
        self
    }

    /// Replace the list of meta events reserved to the tempo map
    pub fn with_tempo_meta(mut self, kinds: impl IntoIterator<Item = MetaKind>) -> Self {
        self.tempo_meta = kinds.into_iter().collect();
        self
    }

    /// True if the meta event kind can be safely ignored
    pub fn is_informational(&self, kind: MetaKind) -> bool {
        self.informational_meta.contains(&kind)
    }

    /// True if the meta event kind changes how the song is played
    pub fn is_tempo(&self, kind: MetaKind) -> bool {
        self.tempo_meta.contains(&kind)
    }

    /// True if the pitch is in the configured range
    pub fn accepts_pitch(&self, pitch: Pitch) -> bool {
        self.pitch_range.contains(&pitch.byte())
    }

    /// True if events on this channel mark a percussive track
    pub fn is_percussion(&self, channel: Channel) -> bool {
        self.percussion_channel == Some(channel)
    }

    /// Read a configuration from a TOML document.
    ///
    /// Missing keys keep their default value.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[test]
fn default_meta_tables() {
    let config = ReaderConfig::default();
    for kind in [
        MetaKind::MidiPort,
        MetaKind::TrackName,
        MetaKind::Lyric,
        MetaKind::EndOfTrack,
    ] {
        assert!(config.is_informational(kind));
        assert!(!config.is_tempo(kind));
    }
    for kind in [
        MetaKind::KeySignature,
        MetaKind::Tempo,
        MetaKind::TimeSignature,
    ] {
        assert!(config.is_tempo(kind));
        assert!(!config.is_informational(kind));
    }
    assert!(!config.is_informational(MetaKind::Marker));
    assert!(!config.is_tempo(MetaKind::Marker));
}

#[test]
fn pitch_range_limits_notes() {
    let config = ReaderConfig::default().with_pitch_range(21..=108);
    assert!(config.accepts_pitch(Pitch::MIDDLE_C));
    assert!(!config.accepts_pitch(Pitch::new(20).unwrap()));
    assert!(!config.accepts_pitch(Pitch::new(109).unwrap()));
}

#[cfg(feature = "toml")]
#[test]
fn partial_toml_keeps_defaults() {
    let config = ReaderConfig::from_toml_str(
        r#"
        min_track_length = 10
        drop_percussion = false
        tempo_meta = ["set_tempo"]
        informational_meta = ["lyrics", "cue_marker"]
        "#,
    )
    .unwrap();

    assert_eq!(config.min_track_length, 10);
    assert!(!config.drop_percussion);
    assert_eq!(config.tempo_meta, alloc::vec![MetaKind::Tempo]);
    assert_eq!(
        config.informational_meta,
        alloc::vec![MetaKind::Lyric, MetaKind::CuePoint]
    );
    assert_eq!(config.pitch_range, ReaderConfig::default().pitch_range);

    // kinds are spelled the way errors print them
    let kind = MetaKind::Tempo;
    let spelled = alloc::format!("tempo_meta = [\"{kind}\"]");
    assert!(ReaderConfig::from_toml_str(&spelled).unwrap().is_tempo(kind));
}
