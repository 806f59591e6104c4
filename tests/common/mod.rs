#![allow(dead_code)]

use midisong::prelude::*;

pub fn channel(index: u8) -> Channel {
    Channel::from_index(index).unwrap()
}

pub fn pitch(byte: u8) -> Pitch {
    Pitch::new(byte).unwrap()
}

pub fn note_on(delta_ticks: u32, channel_index: u8, note: u8, velocity: u8) -> TrackEvent<'static> {
    TrackEvent::new(
        delta_ticks,
        ChannelVoiceMessage::new(
            channel(channel_index),
            VoiceEvent::NoteOn {
                pitch: pitch(note),
                velocity: Velocity::new(velocity).unwrap(),
            },
        ),
    )
}

pub fn note_off(delta_ticks: u32, channel_index: u8, note: u8) -> TrackEvent<'static> {
    TrackEvent::new(
        delta_ticks,
        ChannelVoiceMessage::new(
            channel(channel_index),
            VoiceEvent::NoteOff {
                pitch: pitch(note),
                velocity: Velocity::new(64).unwrap(),
            },
        ),
    )
}

pub fn program_change(delta_ticks: u32, channel_index: u8, program: u8) -> TrackEvent<'static> {
    TrackEvent::new(
        delta_ticks,
        ChannelVoiceMessage::new(
            channel(channel_index),
            VoiceEvent::ProgramChange {
                program: Program::new(program).unwrap(),
            },
        ),
    )
}

pub fn meta(delta_ticks: u32, message: MetaMessage<'static>) -> TrackEvent<'static> {
    TrackEvent::new(delta_ticks, message)
}

pub fn track_name(name: &'static str) -> TrackEvent<'static> {
    meta(0, MetaMessage::TrackName(name.as_bytes().into()))
}

pub fn end_of_track() -> TrackEvent<'static> {
    meta(0, MetaMessage::EndOfTrack)
}

pub fn tempo_map() -> MidiTrack<'static> {
    MidiTrack::new(vec![
        track_name("Tempo Track"),
        meta(
            0,
            MetaMessage::TimeSignature {
                numerator: 4,
                denominator_power: 2,
                clocks_per_click: 24,
                notated_32nds_per_quarter: 8,
            },
        ),
        meta(0, MetaMessage::Tempo(Tempo::new(500_000))),
        end_of_track(),
    ])
}

/// A melodic track playing `notes` consecutive quarter notes (96 ticks) on `channel_index`
pub fn scale(channel_index: u8, notes: u8) -> MidiTrack<'static> {
    let mut events = vec![track_name("Melody")];
    for i in 0..notes {
        events.push(note_on(0, channel_index, 60 + i, 90));
        events.push(note_off(96, channel_index, 60 + i));
    }
    events.push(end_of_track());
    MidiTrack::new(events)
}

pub fn format_one(tracks: Vec<MidiTrack<'static>>) -> MidiFile<'static> {
    MidiFile::new(
        MidiFileHeader::new(
            FormatType::Simultaneous,
            Timing::new_ticks_per_quarter_note(96),
        ),
        tracks,
    )
}
