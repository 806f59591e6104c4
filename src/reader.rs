#![doc = r#"
Reads a whole [`MidiFile`] into a [`Song`]
"#]

use crate::{
    SongError,
    config::ReaderConfig,
    file::MidiFile,
    filter::TrackFilter,
    gate,
    reconstruct::TrackReconstructor,
    song::{Song, SongBuilder},
};

#[doc = r#"
Runs the whole pipeline on one file.

The file is checked by the [`gate`], then each track after the tempo map is
rebuilt in file order by a [`TrackReconstructor`], passed through the
[`TrackFilter`] and, if kept, pushed to a [`SongBuilder`].

The first error aborts the file. A batch of files should handle each file's
result on its own.
"#]
#[derive(Clone, Debug, Default)]
pub struct SongReader {
    config: ReaderConfig,
}

impl SongReader {
    /// Create a reader with the given configuration
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// The configuration of the reader
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Rebuilds the song of a decoded file
    pub fn read(&self, file: &MidiFile<'_>) -> Result<Song, SongError> {
        let tracks = file.tracks();
        tracing::info!(
            "type {:?}, {} tracks, {:?} ticks/beat",
            file.format_type(),
            tracks.len(),
            file.timing().ticks_per_quarter_note()
        );

        gate::check_file(file.header(), tracks.first())?;

        let filter = TrackFilter::new(&self.config);
        let mut builder = SongBuilder::default();

        // the tempo map is track 0
        for (index, track) in tracks.iter().enumerate().skip(1) {
            let name = track.name();
            tracing::debug!("Track {}: {}", index, name.as_deref().unwrap_or_default());

            let track = TrackReconstructor::new(&self.config, index).reconstruct(track.events())?;

            let retention = filter.retention(&track);
            if retention.is_kept() {
                builder.push(track);
            } else {
                tracing::info!("Track {} {}", index, retention);
            }
        }

        builder.build()
    }
}
