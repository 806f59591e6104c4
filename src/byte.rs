use crate::ParseError;

/// A 7-bit MIDI data value (the leading bit is always `0`).
///
/// Pitches, velocities, programs and controller values are all data bytes.
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct DataByte(pub(crate) u8);

impl DataByte {
    /// The largest representable value.
    pub const MAX: Self = Self(0x7F);

    /// Checks for correctness (leading 0 bit).
    pub const fn new(byte: u8) -> Result<Self, ParseError> {
        if byte > 0x7F {
            return Err(ParseError::InvalidDataByte(byte));
        }
        Ok(Self(byte))
    }

    /// Masks off the leading bit instead of checking it.
    pub const fn new_unchecked(byte: u8) -> Self {
        Self(byte & 0x7F)
    }

    /// Returns the value of the byte
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DataByte {
    type Error = ParseError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DataByte> for u8 {
    fn from(value: DataByte) -> Self {
        value.0
    }
}

#[test]
fn data_byte_rejects_leading_bit() {
    assert_eq!(DataByte::new(127).unwrap().value(), 127);
    assert_eq!(DataByte::new(128), Err(ParseError::InvalidDataByte(128)));
    assert_eq!(DataByte::new_unchecked(0x80 | 5).value(), 5);
}
