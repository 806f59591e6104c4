use alloc::{borrow::Cow, string::String, vec::Vec};

use crate::message::{MetaMessage, TrackEvent, TrackMessage};

#[doc = r#"
The decoded events of one `MTrk` chunk, in file order.
"#]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MidiTrack<'a> {
    events: Vec<TrackEvent<'a>>,
}

impl<'a> MidiTrack<'a> {
    /// Create a track from its events
    pub fn new(events: Vec<TrackEvent<'a>>) -> Self {
        Self { events }
    }

    /// The events of the track
    pub fn events(&self) -> &[TrackEvent<'a>] {
        &self.events
    }

    /// The content of the first track name meta event, if any.
    pub fn name(&self) -> Option<Cow<'_, str>> {
        self.events.iter().find_map(|event| match event.message() {
            TrackMessage::Meta(MetaMessage::TrackName(name)) => Some(String::from_utf8_lossy(name)),
            _ => None,
        })
    }
}

impl<'a> FromIterator<TrackEvent<'a>> for MidiTrack<'a> {
    fn from_iter<T: IntoIterator<Item = TrackEvent<'a>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[test]
fn track_name_from_meta() {
    let track: MidiTrack = [
        TrackEvent::new(0, MetaMessage::MidiPort(0)),
        TrackEvent::new(0, MetaMessage::TrackName(Cow::Borrowed(&b"Piano"[..]))),
        TrackEvent::new(0, MetaMessage::EndOfTrack),
    ]
    .into_iter()
    .collect();

    assert_eq!(track.name().as_deref(), Some("Piano"));
    assert_eq!(MidiTrack::default().name(), None);
}
