use crate::ParseError;

/// The possible FPS (Frames Per Second) of an SMPTE timed file
///
/// The MIDI specification defines only four possible frame types:
/// - 24 fps: Standard film rate
/// - 25 fps: PAL/SECAM television standard
/// - 29.97 fps: NTSC color television (drop-frame timecode)
/// - 30 fps: NTSC black & white, some digital video formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmpteFps {
    /// 24 frames per second
    TwentyFour,
    /// 25 frames per second
    TwentyFive,
    /// 29.97 frames per second, drop-frame
    TwentyNine,
    /// 30 frames per second
    Thirty,
}

impl SmpteFps {
    /// Bits 14 thru 8 of the division word hold one of -24, -25, -29 or -30
    pub(crate) const fn from_division_byte(byte: i8) -> Result<Self, ParseError> {
        Ok(match byte {
            -24 => Self::TwentyFour,
            -25 => Self::TwentyFive,
            -29 => Self::TwentyNine,
            -30 => Self::Thirty,
            _ => return Err(ParseError::SmpteFrameRate(byte)),
        })
    }

    /// Get the nominal frame rate.
    ///
    /// Drop-frame 29.97 fps returns 30 here, as MIDI uses the nominal rate
    /// for division calculations.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine | Self::Thirty => 30,
        }
    }
}
