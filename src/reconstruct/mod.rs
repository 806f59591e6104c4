#![doc = r#"
Turns the events of one track into finished notes

A [`TrackReconstructor`] replays the events of one non tempo-map track in
order. It keeps the absolute tick of the current event, opens a
[`PendingNote`] on each note-on and closes it when the matching release comes
in (see [`PendingNotes`]).

In a format 1 file the tempo map is track `0`, so track `n` is expected to play
on channel `n - 1`.
"#]

mod pending;
pub use pending::*;

use crate::{
    Channel, Pitch, SongError,
    config::ReaderConfig,
    message::{ChannelVoiceMessage, MetaMessage, TrackEvent, TrackMessage, VoiceEvent},
    song::Track,
};

/// Rebuilds a [`Track`] from its events.
pub struct TrackReconstructor<'c> {
    config: &'c ReaderConfig,
    index: usize,
    expected_channel: Option<u8>,
    abs_tick: u64,
    pending: PendingNotes,
    track: Track,
}

impl<'c> TrackReconstructor<'c> {
    /// Prepare the reconstruction of the track at position `index` in the file.
    ///
    /// Index `0` is the tempo map, which has no channel: any note found by
    /// such a reconstructor is a mismatch.
    pub fn new(config: &'c ReaderConfig, index: usize) -> Self {
        let expected_channel = index.checked_sub(1).and_then(|c| u8::try_from(c).ok());
        Self {
            config,
            index,
            expected_channel,
            abs_tick: 0,
            pending: PendingNotes::default(),
            track: Track::new(),
        }
    }

    /// Replays every event of the track, then [`finish`](Self::finish)es it.
    pub fn reconstruct<'e, 'a: 'e, I>(mut self, events: I) -> Result<Track, SongError>
    where
        I: IntoIterator<Item = &'e TrackEvent<'a>>,
    {
        for event in events {
            self.handle_event(event)?;
        }
        self.finish()
    }

    /// The absolute tick of the last handled event
    pub const fn tick(&self) -> u64 {
        self.abs_tick
    }

    /// The notes still waiting for their release
    pub const fn pending(&self) -> &PendingNotes {
        &self.pending
    }

    /// Handles the next event of the track.
    pub fn handle_event(&mut self, event: &TrackEvent<'_>) -> Result<(), SongError> {
        self.abs_tick += u64::from(event.delta_ticks());

        match event.message() {
            TrackMessage::Meta(meta) => self.handle_meta(meta),
            TrackMessage::ChannelVoice(message) => self.handle_voice(message),
            TrackMessage::SystemExclusive(_) => Err(SongError::UnsupportedMessage {
                track: self.index,
                message: "system exclusive",
            }),
        }
    }

    /// Ends the track.
    ///
    /// Fails if some notes were never released. Notes are sorted by onset,
    /// ties keeping their release order.
    pub fn finish(mut self) -> Result<Track, SongError> {
        if !self.pending.is_empty() {
            return Err(SongError::UnterminatedNote {
                track: self.index,
                count: self.pending.len(),
            });
        }
        self.track.sort_by_onset();
        Ok(self.track)
    }

    fn handle_meta(&self, meta: &MetaMessage<'_>) -> Result<(), SongError> {
        let kind = meta.kind();
        if self.config.is_informational(kind) {
            Ok(())
        } else if self.config.is_tempo(kind) {
            Err(SongError::MisplacedTempoMeta {
                track: self.index,
                kind,
            })
        } else {
            Err(SongError::UnsupportedMeta {
                track: self.index,
                kind,
            })
        }
    }

    fn handle_voice(&mut self, message: &ChannelVoiceMessage) -> Result<(), SongError> {
        let channel = message.channel();
        let event = message.event();
        match *event {
            VoiceEvent::NoteOn { pitch, .. } if event.is_note_start() => {
                self.start_note(channel, pitch)
            }
            VoiceEvent::NoteOn { pitch, .. } | VoiceEvent::NoteOff { pitch, .. }
                if event.is_note_release() =>
            {
                self.release_note(pitch);
                Ok(())
            }
            VoiceEvent::ProgramChange { program } => {
                self.flag_percussion(channel);
                self.track
                    .set_instrument(program)
                    .map_err(|existing| SongError::DuplicateInstrument {
                        track: self.index,
                        existing,
                        program,
                    })
            }
            VoiceEvent::ControlChange { .. }
            | VoiceEvent::ChannelAftertouch { .. }
            | VoiceEvent::PitchBend(_) => Ok(()),
            _ => Err(SongError::UnsupportedMessage {
                track: self.index,
                message: event.name(),
            }),
        }
    }

    fn start_note(&mut self, channel: Channel, pitch: Pitch) -> Result<(), SongError> {
        self.check_channel(channel)?;
        if !self.config.accepts_pitch(pitch) {
            return Err(SongError::PitchOutOfRange {
                track: self.index,
                pitch,
            });
        }
        self.flag_percussion(channel);
        self.pending.open(self.abs_tick, pitch);
        Ok(())
    }

    fn release_note(&mut self, pitch: Pitch) {
        match self.pending.release(pitch, self.abs_tick) {
            Some(note) => self.track.push(note),
            None => tracing::warn!(
                "Track {}: release of {} at tick {} matches no open note",
                self.index,
                pitch,
                self.abs_tick
            ),
        }
    }

    fn check_channel(&self, channel: Channel) -> Result<(), SongError> {
        if self.expected_channel == Some(channel.index()) {
            Ok(())
        } else {
            Err(SongError::ChannelTrackMismatch {
                track: self.index,
                channel,
            })
        }
    }

    fn flag_percussion(&mut self, channel: Channel) {
        if self.config.is_percussion(channel) {
            self.track.mark_drum();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        message::{MetaKind, PitchBend, Program, Tempo, Velocity},
        song::Note,
    };
    use alloc::{borrow::Cow, vec, vec::Vec};

    fn pitch(byte: u8) -> Pitch {
        Pitch::new(byte).unwrap()
    }

    fn voice(delta: u32, channel: Channel, event: VoiceEvent) -> TrackEvent<'static> {
        TrackEvent::new(delta, ChannelVoiceMessage::new(channel, event))
    }

    fn on(delta: u32, channel: Channel, note: u8) -> TrackEvent<'static> {
        voice(
            delta,
            channel,
            VoiceEvent::NoteOn {
                pitch: pitch(note),
                velocity: Velocity::new(100).unwrap(),
            },
        )
    }

    fn off(delta: u32, channel: Channel, note: u8) -> TrackEvent<'static> {
        voice(
            delta,
            channel,
            VoiceEvent::NoteOff {
                pitch: pitch(note),
                velocity: Velocity::new(64).unwrap(),
            },
        )
    }

    fn run(index: usize, events: &[TrackEvent<'static>]) -> Result<Track, SongError> {
        let config = ReaderConfig::default();
        TrackReconstructor::new(&config, index).reconstruct(events)
    }

    #[test]
    fn single_note() {
        let track = run(1, &[on(0, Channel::One, 60), off(10, Channel::One, 60)]).unwrap();
        assert_eq!(track.notes(), &[Note::new(0, pitch(60), 10)]);
    }

    #[test]
    fn zero_velocity_note_on_releases() {
        let release = voice(
            12,
            Channel::Two,
            VoiceEvent::NoteOn {
                pitch: pitch(62),
                velocity: Velocity::ZERO,
            },
        );
        let track = run(2, &[on(3, Channel::Two, 62), release]).unwrap();
        assert_eq!(track.notes(), &[Note::new(3, pitch(62), 12)]);
    }

    #[test]
    fn overlapping_same_pitch_leaves_one_open() {
        let events = [
            on(0, Channel::One, 60),
            on(5, Channel::One, 60),
            off(5, Channel::One, 60),
        ];
        let config = ReaderConfig::default();
        let mut reconstructor = TrackReconstructor::new(&config, 1);
        for event in &events {
            reconstructor.handle_event(event).unwrap();
        }
        assert_eq!(reconstructor.tick(), 10);
        assert_eq!(
            reconstructor.pending().iter().copied().collect::<Vec<_>>(),
            vec![PendingNote::new(5, pitch(60))]
        );
        assert_eq!(
            reconstructor.finish(),
            Err(SongError::UnterminatedNote { track: 1, count: 1 })
        );
    }

    #[test]
    fn delta_ticks_accumulate_over_meta_events() {
        let events = [
            TrackEvent::new(4, MetaMessage::TrackName(Cow::Borrowed(&b"Lead"[..]))),
            on(6, Channel::One, 60),
            TrackEvent::new(10, MetaMessage::Lyric(Cow::Borrowed(&b"la"[..]))),
            off(5, Channel::One, 60),
            TrackEvent::new(0, MetaMessage::EndOfTrack),
        ];
        let track = run(1, &events).unwrap();
        assert_eq!(track.notes(), &[Note::new(10, pitch(60), 15)]);
    }

    #[test]
    fn notes_sorted_by_onset() {
        let events = [
            on(0, Channel::One, 60),
            on(5, Channel::One, 64),
            off(1, Channel::One, 64),
            off(4, Channel::One, 60),
        ];
        let track = run(1, &events).unwrap();
        assert_eq!(
            track.notes(),
            &[Note::new(0, pitch(60), 10), Note::new(5, pitch(64), 1)]
        );
    }

    #[test]
    fn tempo_meta_outside_tempo_map() {
        let events = [TrackEvent::new(0, MetaMessage::Tempo(Tempo::default()))];
        assert_eq!(
            run(1, &events),
            Err(SongError::MisplacedTempoMeta {
                track: 1,
                kind: MetaKind::Tempo
            })
        );

        let events = [TrackEvent::new(
            0,
            MetaMessage::KeySignature {
                accidentals: 1,
                minor: true,
            },
        )];
        assert_eq!(
            run(3, &events),
            Err(SongError::MisplacedTempoMeta {
                track: 3,
                kind: MetaKind::KeySignature
            })
        );
    }

    #[test]
    fn unsupported_meta() {
        let events = [TrackEvent::new(0, MetaMessage::Marker(Cow::Borrowed(&b"A"[..])))];
        assert_eq!(
            run(1, &events),
            Err(SongError::UnsupportedMeta {
                track: 1,
                kind: MetaKind::Marker
            })
        );
    }

    #[test]
    fn channel_must_follow_track_index() {
        assert_eq!(
            run(2, &[on(0, Channel::One, 60)]),
            Err(SongError::ChannelTrackMismatch {
                track: 2,
                channel: Channel::One
            })
        );
        assert_eq!(
            run(0, &[on(0, Channel::One, 60)]),
            Err(SongError::ChannelTrackMismatch {
                track: 0,
                channel: Channel::One
            })
        );
        assert_eq!(
            run(17, &[on(0, Channel::Sixteen, 60)]),
            Err(SongError::ChannelTrackMismatch {
                track: 17,
                channel: Channel::Sixteen
            })
        );
    }

    #[test]
    fn releases_do_not_check_the_channel() {
        let track = run(1, &[on(0, Channel::One, 60), off(4, Channel::Three, 60)]).unwrap();
        assert_eq!(track.len(), 1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn unmatched_release_is_dropped_with_a_warning() {
        let events = [
            off(2, Channel::One, 61),
            on(0, Channel::One, 60),
            off(4, Channel::One, 60),
        ];
        let warnings = WarnCounter::default();
        let track =
            tracing::subscriber::with_default(warnings.clone(), || run(1, &events)).unwrap();

        assert_eq!(track.notes(), &[Note::new(2, pitch(60), 4)]);
        assert_eq!(warnings.count(), 1);
    }

    /// Counts the warnings emitted while it is the default subscriber.
    #[cfg(feature = "std")]
    #[derive(Clone, Default)]
    struct WarnCounter(std::sync::Arc<core::sync::atomic::AtomicUsize>);

    #[cfg(feature = "std")]
    impl WarnCounter {
        fn count(&self) -> usize {
            self.0.load(core::sync::atomic::Ordering::SeqCst)
        }
    }

    #[cfg(feature = "std")]
    impl tracing::Subscriber for WarnCounter {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

        fn event(&self, event: &tracing::Event<'_>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, core::sync::atomic::Ordering::SeqCst);
            }
        }

        fn enter(&self, _: &tracing::span::Id) {}

        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn second_program_change_fails() {
        let piano = Program::new(0).unwrap();
        let organ = Program::new(19).unwrap();
        let events = [
            voice(0, Channel::One, VoiceEvent::ProgramChange { program: piano }),
            voice(0, Channel::One, VoiceEvent::ProgramChange { program: organ }),
        ];
        assert_eq!(
            run(1, &events),
            Err(SongError::DuplicateInstrument {
                track: 1,
                existing: piano,
                program: organ
            })
        );
    }

    #[test]
    fn expressive_events_are_ignored() {
        let events = [
            voice(0, Channel::One, VoiceEvent::ProgramChange {
                program: Program::new(5).unwrap(),
            }),
            on(0, Channel::One, 60),
            voice(1, Channel::One, VoiceEvent::ControlChange {
                controller: crate::DataByte::new(64).unwrap(),
                value: crate::DataByte::new(127).unwrap(),
            }),
            voice(1, Channel::One, VoiceEvent::ChannelAftertouch {
                pressure: crate::DataByte::new(30).unwrap(),
            }),
            voice(1, Channel::One, VoiceEvent::PitchBend(PitchBend::CENTER)),
            off(1, Channel::One, 60),
        ];
        let track = run(1, &events).unwrap();
        assert_eq!(track.notes(), &[Note::new(0, pitch(60), 4)]);
        assert_eq!(track.instrument(), Program::new(5).ok());
        assert!(!track.is_drum());
    }

    #[test]
    fn polyphonic_aftertouch_and_sysex_are_unsupported() {
        let aftertouch = voice(0, Channel::One, VoiceEvent::PolyphonicAftertouch {
            pitch: pitch(60),
            pressure: crate::DataByte::new(10).unwrap(),
        });
        assert_eq!(
            run(1, &[aftertouch]),
            Err(SongError::UnsupportedMessage {
                track: 1,
                message: "polyphonic aftertouch"
            })
        );

        let sysex = TrackEvent::new(0, TrackMessage::SystemExclusive(Cow::Owned(vec![0x7E])));
        assert_eq!(
            run(1, &[sysex]),
            Err(SongError::UnsupportedMessage {
                track: 1,
                message: "system exclusive"
            })
        );
    }

    #[test]
    fn percussion_channel_flags_drum() {
        let track = run(10, &[on(0, Channel::Ten, 36), off(1, Channel::Ten, 36)]).unwrap();
        assert!(track.is_drum());

        let config = ReaderConfig::default().with_percussion_channel(None);
        let track = TrackReconstructor::new(&config, 10)
            .reconstruct(&[on(0, Channel::Ten, 36), off(1, Channel::Ten, 36)])
            .unwrap();
        assert!(!track.is_drum());
    }

    #[test]
    fn pitch_out_of_range() {
        let config = ReaderConfig::default().with_pitch_range(21..=108);
        let result = TrackReconstructor::new(&config, 1).reconstruct(&[on(0, Channel::One, 10)]);
        assert_eq!(
            result,
            Err(SongError::PitchOutOfRange {
                track: 1,
                pitch: pitch(10)
            })
        );
    }
}
