#![doc = r#"
The event model handed over by a MIDI decoder

# Hierarchy
```text
                     |------------|
                     | TrackEvent |  (delta ticks + message)
                     |------------|
                           |
                    |--------------|
                    | TrackMessage |
                    |--------------|
                 /         |          \
|-----------------------| |--------| |-------------|
| Channel Voice Message | | SysEx  | | Meta Message|
|-----------------------| |--------| |-------------|
```
"#]

pub mod channel;
pub use channel::*;

pub mod meta;
pub use meta::*;

use alloc::borrow::Cow;

#[doc = r#"
A message found in a track chunk.
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackMessage<'a> {
    /// A channel voice message (notes, programs, controllers...)
    ChannelVoice(ChannelVoiceMessage),
    /// Raw system exclusive bytes
    SystemExclusive(Cow<'a, [u8]>),
    /// File level information (names, tempo, signatures...)
    Meta(MetaMessage<'a>),
}

impl TrackMessage<'_> {
    /// True for meta messages
    pub const fn is_meta(&self) -> bool {
        matches!(self, Self::Meta(_))
    }
}

impl From<ChannelVoiceMessage> for TrackMessage<'_> {
    fn from(value: ChannelVoiceMessage) -> Self {
        Self::ChannelVoice(value)
    }
}

impl<'a> From<MetaMessage<'a>> for TrackMessage<'a> {
    fn from(value: MetaMessage<'a>) -> Self {
        Self::Meta(value)
    }
}

#[doc = r#"
A [`TrackMessage`] along with the number of ticks elapsed since the previous
event of the same track.
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackEvent<'a> {
    delta_ticks: u32,
    message: TrackMessage<'a>,
}

impl<'a> TrackEvent<'a> {
    /// Create a new track event
    pub fn new(delta_ticks: u32, message: impl Into<TrackMessage<'a>>) -> Self {
        Self {
            delta_ticks,
            message: message.into(),
        }
    }

    /// Ticks since the previous event
    pub const fn delta_ticks(&self) -> u32 {
        self.delta_ticks
    }

    /// The message of this event
    pub const fn message(&self) -> &TrackMessage<'a> {
        &self.message
    }
}
