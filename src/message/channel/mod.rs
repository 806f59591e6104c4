#![doc = r#"
Channel voice messages: everything a track says about the notes it plays
"#]

mod voice;
pub use voice::*;

use crate::Channel;

#[doc = r#"
A [`VoiceEvent`] addressed to a [`Channel`]
"#]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelVoiceMessage {
    channel: Channel,
    event: VoiceEvent,
}

impl ChannelVoiceMessage {
    /// Create a new channel voice message
    pub const fn new(channel: Channel, event: VoiceEvent) -> Self {
        Self { channel, event }
    }

    /// The channel of the message
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// The event of the message
    pub const fn event(&self) -> &VoiceEvent {
        &self.event
    }
}
