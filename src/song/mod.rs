#![doc = r#"
The reconstructed song model

A [`Song`] owns its [`Track`]s, which own their [`Note`]s. Songs are only
obtained through a [`SongBuilder`] (or a [`SongReader`](crate::reader::SongReader),
which drives one), so a song always has at least one track.
"#]

mod note;
pub use note::*;

mod track;
pub use track::*;

use alloc::vec::Vec;
use core::fmt;

use crate::{SongError, file::MidiFile, reader::SongReader};

#[doc = r#"
An ordered, non-empty list of tracks, in the order they appear in the file.
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SongTracks"))]
pub struct Song {
    tracks: Vec<Track>,
}

/// Deserialized songs go through [`SongBuilder::build`] too.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SongTracks {
    tracks: Vec<Track>,
}

#[cfg(feature = "serde")]
impl TryFrom<SongTracks> for Song {
    type Error = SongError;

    fn try_from(raw: SongTracks) -> Result<Self, Self::Error> {
        SongBuilder { tracks: raw.tracks }.build()
    }
}

impl Song {
    /// Rebuild a song from a decoded file with the default configuration.
    ///
    /// See [`SongReader`] to tune the configuration.
    pub fn from_midi(file: &MidiFile<'_>) -> Result<Self, SongError> {
        SongReader::default().read(file)
    }

    /// The tracks of the song
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Gives the tracks away
    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }

    /// Total number of notes, all tracks included
    pub fn note_count(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    /// Track and note counts
    pub fn summary(&self) -> SongSummary {
        SongSummary {
            tracks: self.tracks.len(),
            notes: self.note_count(),
        }
    }
}

/// Size of a [`Song`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SongSummary {
    /// Number of tracks
    pub tracks: usize,
    /// Number of notes, all tracks included
    pub notes: usize,
}

impl fmt::Display for SongSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tracks, {} notes", self.tracks, self.notes)
    }
}

/// Collects the retained tracks of a file into a [`Song`].
#[derive(Default, Debug)]
pub struct SongBuilder {
    tracks: Vec<Track>,
}

impl SongBuilder {
    /// Appends a track after the ones already pushed.
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Number of tracks pushed so far
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// True if no track was pushed
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Attempts to finish the song from the pushed tracks.
    pub fn build(self) -> Result<Song, SongError> {
        if self.tracks.is_empty() {
            return Err(SongError::EmptySong);
        }
        let song = Song {
            tracks: self.tracks,
        };
        tracing::info!("Song loaded: {}", song.summary());
        Ok(song)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pitch;

    fn track_with(notes: usize) -> Track {
        let mut track = Track::new();
        for i in 0..notes as u64 {
            track.push(Note::new(i * 10, Pitch::MIDDLE_C, 10));
        }
        track
    }

    #[test]
    fn empty_builder_fails() {
        assert_eq!(SongBuilder::default().build(), Err(SongError::EmptySong));
    }

    #[test]
    fn tracks_keep_push_order() {
        let mut builder = SongBuilder::default();
        builder.push(track_with(5));
        builder.push(track_with(7));
        assert_eq!(builder.len(), 2);

        let song = builder.build().unwrap();
        assert_eq!(song.tracks()[0].len(), 5);
        assert_eq!(song.tracks()[1].len(), 7);
        assert_eq!(
            song.summary(),
            SongSummary {
                tracks: 2,
                notes: 12
            }
        );
        assert_eq!(alloc::format!("{}", song.summary()), "2 tracks, 12 notes");
    }

    #[cfg(feature = "toml")]
    #[test]
    fn deserialized_song_is_never_empty() {
        assert!(toml::from_str::<Song>("tracks = []").is_err());

        let song: Song = toml::from_str(
            r#"
            [[tracks]]
            instrument = 40
            notes = [
                { tick = 96, pitch = 64, duration = 48 },
                { tick = 0, pitch = 60, duration = 96 },
            ]
            "#,
        )
        .unwrap();

        let track = &song.tracks()[0];
        assert!(!track.is_drum());
        assert_eq!(track.instrument(), Some(crate::message::Program::new(40).unwrap()));
        assert_eq!(
            track.notes(),
            &[
                Note::new(0, Pitch::MIDDLE_C, 96),
                Note::new(96, Pitch::new(64).unwrap(), 48),
            ]
        );
    }
}
