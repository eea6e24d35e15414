#[doc = r#"
The data of a time signature meta event (`FF 58 04 nn dd cc bb`).

The bytes are written exactly as given:
- `numerator`: beats per bar
- `denominator`: the note value of a beat as a power of two (2 is a quarter note)
- `clocks_per_click`: MIDI clocks (24 per quarter note) between metronome clicks
- `thirty_seconds_per_quarter`: notated 32nd notes in a MIDI quarter note, usually 8

Nothing checks that these make musical sense.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    /// Beats per bar
    pub numerator: u8,
    /// Power-of-two exponent of the beat's note value
    pub denominator: u8,
    /// MIDI clocks per metronome click
    pub clocks_per_click: u8,
    /// Notated 32nd notes per MIDI quarter note
    pub thirty_seconds_per_quarter: u8,
}

impl TimeSignature {
    /// Create a time signature from its raw bytes
    pub const fn new(
        numerator: u8,
        denominator: u8,
        clocks_per_click: u8,
        thirty_seconds_per_quarter: u8,
    ) -> Self {
        Self {
            numerator,
            denominator,
            clocks_per_click,
            thirty_seconds_per_quarter,
        }
    }

    /// The four data bytes of the meta event
    pub const fn to_bytes(&self) -> [u8; 4] {
        [
            self.numerator,
            self.denominator,
            self.clocks_per_click,
            self.thirty_seconds_per_quarter,
        ]
    }
}

/// 4/4, clicking every quarter note
impl Default for TimeSignature {
    fn default() -> Self {
        Self::new(4, 2, 24, 8)
    }
}
