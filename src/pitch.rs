use core::fmt;

use crate::{DataByte, ParseError};

#[doc = r#"
The pitch of a note, as carried by note-on and note-off events.

Pitches are interpreted as a 7-bit number. Each value corresponds to some
[`Key`] and [`Octave`]: pitch `0` is `C(-1)`, pitch `60` is middle C (`C4`)
and pitch `127` is `G9`.

# Example
```rust
# use midisong::prelude::*;
let pitch = Pitch::new(63).unwrap(); // 63 is between 0-127

assert_eq!(pitch.key(), Key::DSharp);
assert_eq!(pitch.octave(), Octave::new(4));
assert!(Pitch::new(128).is_err());
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pitch(DataByte);

impl Pitch {
    /// Middle C.
    pub const MIDDLE_C: Self = Self(DataByte(60));

    /// Create a new pitch.
    ///
    /// Checks for correctness (leading 0 bit).
    pub const fn new(byte: u8) -> Result<Self, ParseError> {
        match DataByte::new(byte) {
            Ok(byte) => Ok(Self(byte)),
            Err(e) => Err(e),
        }
    }

    /// Creates a pitch from an already checked data byte
    pub const fn from_databyte(byte: DataByte) -> Self {
        Self(byte)
    }

    /// Create a pitch from a given key and octave
    ///
    /// # Panics
    /// if you pass in, on `Octave::new(9)` a Key greater than `Key::G`.
    ///
    /// `Key::GSharp` to `Key::B` in octave 9 are not representable in MIDI.
    pub const fn from_key(key: Key, octave: Octave) -> Self {
        let octave_mult = (octave.value() + 1) as u8 * 12;
        let value = octave_mult + key.semitone();

        if value > 127 {
            panic!("Can't make Pitch. See documentation for details.");
        }

        Self(DataByte(value))
    }

    /// Identifies the key of the pitch
    #[inline]
    pub const fn key(&self) -> Key {
        Key::from_semitone(self.0.value() % 12)
    }

    /// Identifies the octave of the pitch
    #[inline]
    pub const fn octave(&self) -> Octave {
        Octave((self.0.value() / 12) as i8 - 1)
    }

    /// Returns the underlying byte of the pitch
    #[inline]
    pub const fn byte(&self) -> u8 {
        self.0.value()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key(), self.octave())
    }
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[doc = r#"
One of the twelve pitch classes of a [`Pitch`].
"#]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Key {
    const fn from_semitone(semitone: u8) -> Self {
        use Key::*;
        match semitone {
            0 => C,
            1 => CSharp,
            2 => D,
            3 => DSharp,
            4 => E,
            5 => F,
            6 => FSharp,
            7 => G,
            8 => GSharp,
            9 => A,
            10 => ASharp,
            _ => B,
        }
    }

    const fn semitone(&self) -> u8 {
        *self as u8
    }

    /// Returns true if the key is a black key on the piano
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        use Key::*;
        matches!(self, CSharp | DSharp | FSharp | GSharp | ASharp)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Key::*;
        let name = match self {
            C => "C",
            CSharp => "C#",
            D => "D",
            DSharp => "D#",
            E => "E",
            F => "F",
            FSharp => "F#",
            G => "G",
            GSharp => "G#",
            A => "A",
            ASharp => "A#",
            B => "B",
        };
        f.write_str(name)
    }
}

#[doc = r#"
Identifies the octave of a [`Pitch`]. Values range from -1 to 9.
"#]
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Octave(i8);

impl Octave {
    /// Should be a value between [-1, 9]. Clamps between these two values.
    pub const fn new(octave: i8) -> Self {
        if octave < -1 {
            Self(-1)
        } else if octave > 9 {
            Self(9)
        } else {
            Self(octave)
        }
    }

    /// The octave, from `[-1,9]`
    pub const fn value(&self) -> i8 {
        self.0
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[test]
fn pitch_from_key_octave_pairs() {
    for byte in 0..128 {
        let pitch = Pitch::new(byte).unwrap();
        assert_eq!(pitch, Pitch::from_key(pitch.key(), pitch.octave()));
    }
}

#[test]
fn middle_c() {
    assert_eq!(Pitch::MIDDLE_C.key(), Key::C);
    assert_eq!(Pitch::MIDDLE_C.octave().value(), 4);
    assert_eq!(alloc::format!("{}", Pitch::MIDDLE_C), "C4");
}

#[test]
fn sharps() {
    let a_sharp = Pitch::new(94).unwrap();
    assert_eq!(a_sharp.key(), Key::ASharp);
    assert!(a_sharp.key().is_sharp());
    assert_eq!(a_sharp.octave().value(), 6);
}
