use crate::Pitch;

#[doc = r#"
A finished note: a pitch held for `duration` ticks starting at `tick`.

Ticks are counted from the start of the track. Notes only exist once their
release has been matched; a note still waiting for its release is a
[`PendingNote`](crate::reconstruct::PendingNote).
"#]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    tick: u64,
    pitch: Pitch,
    duration: u64,
}

impl Note {
    /// Create a finished note
    pub const fn new(tick: u64, pitch: Pitch, duration: u64) -> Self {
        Self {
            tick,
            pitch,
            duration,
        }
    }

    /// Onset, in ticks from the start of the track
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// The pitch of the note
    pub const fn pitch(&self) -> Pitch {
        self.pitch
    }

    /// Number of ticks the note is held
    pub const fn duration(&self) -> u64 {
        self.duration
    }

    /// Tick at which the note is released, capped at `u64::MAX`
    pub const fn end_tick(&self) -> u64 {
        self.tick.saturating_add(self.duration)
    }
}

#[test]
fn end_tick() {
    assert_eq!(Note::new(96, Pitch::MIDDLE_C, 48).end_tick(), 144);
    assert_eq!(Note::new(u64::MAX, Pitch::MIDDLE_C, 1).end_tick(), u64::MAX);
}
