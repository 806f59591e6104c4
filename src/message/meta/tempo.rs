/// The tempo of a track, in microseconds per quarter note.
///
/// Stored on three bytes in a file; defaults to 120 beats per minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tempo(u32);

impl Tempo {
    /// Create a tempo. Only the low 24 bits are kept.
    pub const fn new(micros_per_quarter_note: u32) -> Self {
        Self(micros_per_quarter_note & 0x00FF_FFFF)
    }

    /// Read the tempo from the three payload bytes of the meta event
    pub const fn new_from_bytes(bytes: [u8; 3]) -> Self {
        Self(((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | bytes[2] as u32)
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Quarter notes per minute
    pub fn beats_per_minute(&self) -> f64 {
        60_000_000. / self.0 as f64
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self(500_000)
    }
}

#[test]
fn tempo_from_bytes() {
    let tempo = Tempo::new_from_bytes([0x07, 0xA1, 0x20]);
    assert_eq!(tempo.micros_per_quarter_note(), 500_000);
    assert_eq!(tempo, Tempo::default());
    assert_eq!(tempo.beats_per_minute(), 120.);
}
