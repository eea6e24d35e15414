use crate::ArgumentError;

/// Ticks per quarter note used when none are given
pub const DEFAULT_TICKS_PER_QUARTER_NOTE: u16 = 96;

/// The header timing type.
///
/// Only ticks per quarter note can be written. Setting the leading bit of the
/// division selects SMPTE timing, so valid rates are 1-32767.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// The midi file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(TicksPerQuarterNote),
}

impl Timing {
    /// The tickrate per quarter note defines what a "quarter note" means.
    pub const fn new_ticks_per_quarter_note(tpqn: u16) -> Result<Self, ArgumentError> {
        match TicksPerQuarterNote::new(tpqn) {
            Ok(t) => Ok(Self::TicksPerQuarterNote(t)),
            Err(e) => Err(e),
        }
    }

    /// Returns the ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        match self {
            Self::TicksPerQuarterNote(t) => t.ticks_per_quarter_note(),
        }
    }

    /// The two bytes closing the header chunk
    pub const fn to_bytes(&self) -> [u8; 2] {
        match self {
            Self::TicksPerQuarterNote(t) => t.inner,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::TicksPerQuarterNote(TicksPerQuarterNote {
            inner: DEFAULT_TICKS_PER_QUARTER_NOTE.to_be_bytes(),
        })
    }
}

/// A representation of the `tpqn` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct TicksPerQuarterNote {
    pub(crate) inner: [u8; 2],
}

impl TicksPerQuarterNote {
    /// Fails for 0 and for anything with the leading bit set.
    pub const fn new(tpqn: u16) -> Result<Self, ArgumentError> {
        if tpqn == 0 || tpqn > 0x7FFF {
            return Err(ArgumentError::InvalidTimeDivision(tpqn));
        }
        Ok(Self {
            inner: tpqn.to_be_bytes(),
        })
    }

    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        u16::from_be_bytes(self.inner)
    }
}

impl TryFrom<u16> for TicksPerQuarterNote {
    type Error = ArgumentError;
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TicksPerQuarterNote> for u16 {
    fn from(value: TicksPerQuarterNote) -> Self {
        value.ticks_per_quarter_note()
    }
}

#[test]
fn division_range() {
    use pretty_assertions::assert_eq;

    assert_eq!(Timing::default().ticks_per_quarter_note(), 96);
    assert_eq!(Timing::default().to_bytes(), [0x00, 0x60]);
    assert_eq!(
        Timing::new_ticks_per_quarter_note(0x7FFF).unwrap().to_bytes(),
        [0x7F, 0xFF]
    );
    assert_eq!(
        Timing::new_ticks_per_quarter_note(0x8000),
        Err(ArgumentError::InvalidTimeDivision(0x8000))
    );
    assert_eq!(
        TicksPerQuarterNote::new(0),
        Err(ArgumentError::InvalidTimeDivision(0))
    );
}
