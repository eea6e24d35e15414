use crate::ArgumentError;

const MICROS_PER_MINUTE: u32 = 60_000_000;

#[doc = r#"
The length of a quarter note in microseconds, as a tempo meta event stores it.

The value occupies three big-endian bytes, so anything past `0xFF_FFFF`
(slower than about 3.6 beats per minute) can't be written.

# Example
```rust
# use smf_track_writer::prelude::*;
let tempo = Tempo::from_bpm(120).unwrap();
assert_eq!(tempo.micros_per_quarter_note(), 500_000);
assert_eq!(tempo.to_bytes(), [0x07, 0xA1, 0x20]);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Tempo(u32);

impl Tempo {
    /// Largest value three bytes hold
    pub const MAX_MICROS: u32 = 0x00FF_FFFF;

    /// 120 beats per minute
    pub const DEFAULT: Self = Self(500_000);

    /// Use an exact microseconds-per-quarter-note value.
    pub const fn from_micros_per_quarter_note(micros: u32) -> Result<Self, ArgumentError> {
        if micros == 0 || micros > Self::MAX_MICROS {
            return Err(ArgumentError::TempoOutOfRange(micros));
        }
        Ok(Self(micros))
    }

    /// `60_000_000 / bpm`, truncating.
    pub const fn from_bpm(bpm: u32) -> Result<Self, ArgumentError> {
        if bpm == 0 {
            return Err(ArgumentError::ZeroTempo);
        }
        Self::from_micros_per_quarter_note(MICROS_PER_MINUTE / bpm)
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Beats per minute this tempo stands for
    pub fn bpm(&self) -> f64 {
        MICROS_PER_MINUTE as f64 / self.0 as f64
    }

    /// The three data bytes of the meta event
    pub const fn to_bytes(&self) -> [u8; 3] {
        let [_, hi, mid, lo] = self.0.to_be_bytes();
        [hi, mid, lo]
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Tempo {
    type Error = ArgumentError;
    fn try_from(micros: u32) -> Result<Self, Self::Error> {
        Self::from_micros_per_quarter_note(micros)
    }
}

impl From<Tempo> for u32 {
    fn from(tempo: Tempo) -> Self {
        tempo.0
    }
}

#[test]
fn bpm_conversion_truncates() {
    use pretty_assertions::assert_eq;

    // 60_000_000 / 7 = 8_571_428.57...
    assert_eq!(Tempo::from_bpm(7).unwrap().micros_per_quarter_note(), 8_571_428);
    assert_eq!(Tempo::from_bpm(4).unwrap().to_bytes(), [0xE4, 0xE1, 0xC0]);
    assert_eq!(Tempo::DEFAULT.bpm(), 120.);
}

#[test]
fn unrepresentable_tempos() {
    use pretty_assertions::assert_eq;

    assert_eq!(Tempo::from_bpm(0), Err(ArgumentError::ZeroTempo));
    assert_eq!(
        Tempo::from_bpm(3),
        Err(ArgumentError::TempoOutOfRange(20_000_000))
    );
    assert_eq!(
        Tempo::from_bpm(60_000_001),
        Err(ArgumentError::TempoOutOfRange(0))
    );
    assert_eq!(
        Tempo::from_micros_per_quarter_note(0x0100_0000),
        Err(ArgumentError::TempoOutOfRange(0x0100_0000))
    );
}
