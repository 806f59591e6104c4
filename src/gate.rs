#![doc = r#"
File wide checks, run once before any track is reconstructed
"#]

use crate::{
    SongError,
    file::{FormatType, MidiFileHeader, MidiTrack, Timing},
};

/// Ticks per quarter note must stay below this value
pub const MAX_TICKS_PER_QUARTER_NOTE: u16 = 128;

/// Checks the header and the tempo map of a file.
///
/// - the format must be [`FormatType::Simultaneous`]
/// - the timing must be 1 to 127 ticks per quarter note
/// - the tempo map (first track) may only contain meta events
pub fn check_file(
    header: &MidiFileHeader,
    tempo_map: Option<&MidiTrack<'_>>,
) -> Result<(), SongError> {
    check_format(header.format_type())?;
    check_timing(header.timing())?;
    check_tempo_map(tempo_map.ok_or(SongError::MissingTempoMap)?)
}

/// Fails unless the file is a synchronous multi-track file
pub fn check_format(format: FormatType) -> Result<(), SongError> {
    match format {
        FormatType::Simultaneous => Ok(()),
        other => Err(SongError::UnsupportedFormat(other)),
    }
}

/// Fails on SMPTE timing and resolutions outside `1..128`
pub fn check_timing(timing: &Timing) -> Result<(), SongError> {
    match timing.ticks_per_quarter_note() {
        Some(tpqn) if tpqn > 0 && tpqn < MAX_TICKS_PER_QUARTER_NOTE => Ok(()),
        _ => Err(SongError::UnsupportedTiming(*timing)),
    }
}

/// Fails if the tempo map contains anything but meta events
pub fn check_tempo_map(tempo_map: &MidiTrack<'_>) -> Result<(), SongError> {
    match tempo_map
        .events()
        .iter()
        .position(|event| !event.message().is_meta())
    {
        Some(event) => Err(SongError::StructuralViolation { event }),
        None => Ok(()),
    }
}
