use crate::file::{FormatType, Timing};

#[doc = r#"
   The file wide information read from the `MThd` chunk
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiFileHeader {
    format: FormatType,
    timing: Timing,
}

impl MidiFileHeader {
    /// Create a new header from a format type and timing
    pub const fn new(format: FormatType, timing: Timing) -> Self {
        Self { format, timing }
    }

    /// Get the format type
    pub const fn format_type(&self) -> FormatType {
        self.format
    }

    /// Get the timing props
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }
}
