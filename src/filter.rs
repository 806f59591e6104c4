#![doc = r#"
Decides which reconstructed tracks make it into the song

Dropping a track is a policy outcome, not an error: the file is fine, the
track is just not interesting.
"#]

use core::fmt;

use crate::{config::ReaderConfig, song::Track};

/// What the [`TrackFilter`] decided for a track
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Retention {
    /// The track goes into the song
    Keep,
    /// Fewer notes than the configured minimum
    TooShort {
        /// Number of notes in the track
        notes: usize,
    },
    /// The track is percussive
    Percussive,
}

impl Retention {
    /// True if the track is kept
    pub const fn is_kept(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

impl fmt::Display for Retention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keep => f.write_str("kept"),
            Self::TooShort { notes } => write!(f, "ignored (too short): {notes} notes"),
            Self::Percussive => f.write_str("ignored (is drum)"),
        }
    }
}

/// Drops tracks that are too short or percussive
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackFilter {
    min_track_length: usize,
    drop_percussion: bool,
}

impl TrackFilter {
    /// Create a filter from the reader configuration
    pub fn new(config: &ReaderConfig) -> Self {
        Self {
            min_track_length: config.min_track_length,
            drop_percussion: config.drop_percussion,
        }
    }

    /// Decide the fate of a finished track.
    ///
    /// Length is checked before percussion.
    pub fn retention(&self, track: &Track) -> Retention {
        if track.len() < self.min_track_length {
            Retention::TooShort {
                notes: track.len(),
            }
        } else if self.drop_percussion && track.is_drum() {
            Retention::Percussive
        } else {
            Retention::Keep
        }
    }
}

impl Default for TrackFilter {
    fn default() -> Self {
        Self::new(&ReaderConfig::default())
    }
}
