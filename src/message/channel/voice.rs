use crate::{DataByte, ParseError, Pitch};

#[doc = r#"
The body of a channel voice message.

A [`VoiceEvent::NoteOn`] with a velocity of zero is, by MIDI convention, a
release: see [`VoiceEvent::is_note_release`].
"#]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceEvent {
    /// A key was released
    NoteOff {
        /// The released pitch
        pitch: Pitch,
        /// Release velocity
        velocity: Velocity,
    },
    /// A key was pressed (or released, if the velocity is zero)
    NoteOn {
        /// The pressed pitch
        pitch: Pitch,
        /// Attack velocity
        velocity: Velocity,
    },
    /// Per-key pressure after the key was pressed
    PolyphonicAftertouch {
        /// The held pitch
        pitch: Pitch,
        /// Pressure amount
        pressure: DataByte,
    },
    /// Pedals, volume, modulation...
    ControlChange {
        /// Controller number
        controller: DataByte,
        /// Controller value
        value: DataByte,
    },
    /// Instrument change
    ProgramChange {
        /// The new instrument
        program: Program,
    },
    /// Pressure applied to the whole channel
    ChannelAftertouch {
        /// Pressure amount
        pressure: DataByte,
    },
    /// Pitch wheel movement
    PitchBend(PitchBend),
}

impl VoiceEvent {
    /// True for a note-on with a non zero velocity
    pub const fn is_note_start(&self) -> bool {
        matches!(self, Self::NoteOn { velocity, .. } if !velocity.is_zero())
    }

    /// True for a note-off, or a note-on with a zero velocity
    pub const fn is_note_release(&self) -> bool {
        match self {
            Self::NoteOff { .. } => true,
            Self::NoteOn { velocity, .. } => velocity.is_zero(),
            _ => false,
        }
    }

    /// A short human readable name of the event type
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NoteOff { .. } => "note off",
            Self::NoteOn { .. } => "note on",
            Self::PolyphonicAftertouch { .. } => "polyphonic aftertouch",
            Self::ControlChange { .. } => "control change",
            Self::ProgramChange { .. } => "program change",
            Self::ChannelAftertouch { .. } => "channel aftertouch",
            Self::PitchBend(_) => "pitch bend",
        }
    }
}

/// How hard a key was hit
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Velocity(DataByte);

impl Velocity {
    /// A zero velocity, which turns a note-on into a release
    pub const ZERO: Self = Self(DataByte(0));

    /// Checks for correctness (leading 0 bit).
    pub const fn new(byte: u8) -> Result<Self, ParseError> {
        match DataByte::new(byte) {
            Ok(byte) => Ok(Self(byte)),
            Err(e) => Err(e),
        }
    }

    /// True if the velocity is zero
    pub const fn is_zero(&self) -> bool {
        self.0.value() == 0
    }

    /// Returns the underlying byte
    pub const fn byte(&self) -> u8 {
        self.0.value()
    }
}

#[doc = r#"
A General MIDI program (instrument) number, 0-based.
"#]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Program(DataByte);

impl Program {
    /// Checks for correctness (leading 0 bit).
    pub const fn new(byte: u8) -> Result<Self, ParseError> {
        match DataByte::new(byte) {
            Ok(byte) => Ok(Self(byte)),
            Err(e) => Err(e),
        }
    }

    /// Returns the underlying byte
    pub const fn byte(&self) -> u8 {
        self.0.value()
    }
}

/// A 14-bit pitch wheel position, `0x2000` being the center
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PitchBend(u16);

impl PitchBend {
    /// The resting position of the wheel
    pub const CENTER: Self = Self(0x2000);

    /// Create a pitch bend from its 14-bit value
    pub const fn new(value: u16) -> Result<Self, ParseError> {
        if value > 0x3FFF {
            return Err(ParseError::InvalidPitchBend(value));
        }
        Ok(Self(value))
    }

    /// Create a pitch bend from the two data bytes of the message
    pub const fn from_bytes(lsb: DataByte, msb: DataByte) -> Self {
        Self(((msb.value() as u16) << 7) | lsb.value() as u16)
    }

    /// The raw 14-bit value
    pub const fn value(&self) -> u16 {
        self.0
    }
}

#[test]
fn zero_velocity_note_on_is_a_release() {
    let pitch = Pitch::MIDDLE_C;
    let silent = VoiceEvent::NoteOn {
        pitch,
        velocity: Velocity::ZERO,
    };
    assert!(silent.is_note_release());
    assert!(!silent.is_note_start());

    let loud = VoiceEvent::NoteOn {
        pitch,
        velocity: Velocity::new(90).unwrap(),
    };
    assert!(loud.is_note_start());
    assert!(!loud.is_note_release());

    let off = VoiceEvent::NoteOff {
        pitch,
        velocity: Velocity::new(64).unwrap(),
    };
    assert!(off.is_note_release());
}

#[test]
fn pitch_bend_from_bytes() {
    let bend = PitchBend::from_bytes(DataByte::new(0).unwrap(), DataByte::new(0x40).unwrap());
    assert_eq!(bend, PitchBend::CENTER);
    assert!(PitchBend::new(0x4000).is_err());
}
