use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::ParseError;

#[doc = r#"
The format word of a MIDI file header.

```text
0: SingleMultiChannel
   all messages are saved in one multi-channel track
1: Simultaneous
   all tracks start at the same time; the first one is the tempo map
2: SequentiallyIndependent
   each track is an independent pattern
```

Only [`FormatType::Simultaneous`] files can be turned into a song.
"#]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
    /// Format 2
    SequentiallyIndependent = 2,
}

impl FormatType {
    /// Identify the format type from the header format word
    pub fn from_word(word: u16) -> Result<Self, ParseError> {
        Self::try_from(word).map_err(|e| ParseError::InvalidFormat(e.number))
    }
}

#[test]
fn format_words() {
    assert_eq!(FormatType::from_word(0), Ok(FormatType::SingleMultiChannel));
    assert_eq!(FormatType::from_word(1), Ok(FormatType::Simultaneous));
    assert_eq!(
        FormatType::from_word(2),
        Ok(FormatType::SequentiallyIndependent)
    );
    assert_eq!(FormatType::from_word(3), Err(ParseError::InvalidFormat(3)));
    assert_eq!(u16::from(FormatType::Simultaneous), 1);
}
