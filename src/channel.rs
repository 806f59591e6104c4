use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::ParseError;

#[doc = r#"
Identifies one of the sixteen MIDI channels.

Channels are displayed 1-based (as musicians count them) but carried on the
wire, and compared against track positions, 0-based.

# Example
```rust
# use midisong::prelude::*;
let channel = Channel::from_index(9).unwrap();

assert_eq!(channel, Channel::Ten);
assert_eq!(channel.index(), 9);
assert!(Channel::from_index(16).is_err());
```
"#]
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// The General MIDI percussion channel.
    pub const PERCUSSION: Self = Self::Ten;

    /// Identify a channel from its 0-based index.
    pub fn from_index(index: u8) -> Result<Self, ParseError> {
        Self::try_from(index).map_err(|e| ParseError::InvalidChannel(e.number))
    }

    /// The 0-based channel number found in the status byte.
    pub fn index(&self) -> u8 {
        (*self).into()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

#[test]
fn channel_index_round_trips() {
    for index in 0..16 {
        assert_eq!(Channel::from_index(index).unwrap().index(), index);
    }
    assert_eq!(Channel::from_index(16), Err(ParseError::InvalidChannel(16)));
}

#[test]
fn channel_displays_one_based() {
    assert_eq!(alloc::format!("{}", Channel::One), "1");
    assert_eq!(alloc::format!("{}", Channel::PERCUSSION), "10");
}
