mod smpte;
pub use smpte::*;

use crate::{DataByte, ParseError};

/// The header timing type.
///
/// This is either the number of ticks per quarter note or
/// the alternative SMPTE format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// The midi file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(TicksPerQuarterNote),

    /// The midi file's delta times are defined using an SMPTE and MIDI Time Code
    Smpte(SmpteHeader),
}

impl Timing {
    /// The tickrate per quarter note defines what a "quarter note" means.
    ///
    /// The leading bit of the u16 is disregarded, so 0-32767
    pub const fn new_ticks_per_quarter_note(tpqn: u16) -> Self {
        Self::TicksPerQuarterNote(TicksPerQuarterNote(tpqn & 0x7FFF))
    }

    /// Define the timing in terms of fps and ticks per frame
    pub const fn new_smpte(fps: SmpteFps, ticks_per_frame: DataByte) -> Self {
        Self::Smpte(SmpteHeader {
            fps,
            ticks_per_frame,
        })
    }

    /// Interpret the division word of a file header.
    ///
    /// A clear leading bit means ticks per quarter note. Otherwise the high
    /// byte holds a negative frame rate (-24, -25, -29 or -30) and the low
    /// byte the ticks per frame.
    pub fn from_division(division: u16) -> Result<Self, ParseError> {
        let [msb, lsb] = division.to_be_bytes();
        if msb >> 7 == 0 {
            return Ok(Self::new_ticks_per_quarter_note(division));
        }
        let fps = SmpteFps::from_division_byte(msb as i8)?;
        Ok(Self::new_smpte(fps, DataByte::new_unchecked(lsb)))
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(t.ticks_per_quarter_note()),
            Self::Smpte(_) => None,
        }
    }
}

/// A representation of the `tpqn` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub struct TicksPerQuarterNote(u16);

impl TicksPerQuarterNote {
    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.0
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub struct SmpteHeader {
    fps: SmpteFps,
    ticks_per_frame: DataByte,
}

impl SmpteHeader {
    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame.value()
    }
}

#[test]
fn division_as_ticks_per_quarter_note() {
    let timing = Timing::from_division(96).unwrap();
    assert_eq!(timing.ticks_per_quarter_note(), Some(96));
}

#[test]
fn division_as_smpte() {
    // -25 fps, 40 ticks per frame
    let timing = Timing::from_division(u16::from_be_bytes([0xE7, 40])).unwrap();
    let Timing::Smpte(smpte) = timing else {
        panic!("expected smpte timing");
    };
    assert_eq!(smpte.fps(), SmpteFps::TwentyFive);
    assert_eq!(smpte.ticks_per_frame(), 40);
    assert_eq!(timing.ticks_per_quarter_note(), None);

    assert_eq!(
        Timing::from_division(u16::from_be_bytes([0xF0, 40])),
        Err(ParseError::SmpteFrameRate(-16))
    );
}
