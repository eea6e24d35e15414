#![doc = r#"
Channel voice messages the writer can emit

# Hierarchy
```text
                |-----------------|
                | Channel Message |
                |-----------------|
                 /               \
|-----------------------|   |----------------------|
| Channel Voice Message |   | Channel Mode Message |
|-----------------------|   |----------------------|
```

Only the three-byte voice messages (note off, note on, control change) are
written here. Each one is a [`StatusByte`](crate::message::StatusByte)
followed by two [`DataByte`](crate::message::DataByte)s, which is what lets
them share running status.
"#]

mod voice;
pub use voice::*;

use crate::ArgumentError;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// One of the sixteen MIDI channels.
///
/// Channels are numbered 1-16 for humans and 0-15 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    /// 0b0000
    One = 0,
    /// 0b0001
    Two,
    /// 0b0010
    Three,
    /// 0b0011
    Four,
    /// 0b0100
    Five,
    /// 0b0101
    Six,
    /// 0b0110
    Seven,
    /// 0b0111
    Eight,
    /// 0b1000
    Nine,
    /// 0b1001
    Ten,
    /// 0b1010
    Eleven,
    /// 0b1011
    Twelve,
    /// 0b1100
    Thirteen,
    /// 0b1101
    Fourteen,
    /// 0b1110
    Fifteen,
    /// 0b1111
    Sixteen,
}

impl Channel {
    const ALL: [Channel; 16] = [
        Channel::One,
        Channel::Two,
        Channel::Three,
        Channel::Four,
        Channel::Five,
        Channel::Six,
        Channel::Seven,
        Channel::Eight,
        Channel::Nine,
        Channel::Ten,
        Channel::Eleven,
        Channel::Twelve,
        Channel::Thirteen,
        Channel::Fourteen,
        Channel::Fifteen,
        Channel::Sixteen,
    ];

    /// Look a channel up by its wire index (0-15)
    pub fn from_index(index: u8) -> Result<Self, ArgumentError> {
        Self::try_from(index).map_err(|e| ArgumentError::InvalidChannel(e.number))
    }

    /// Reads the lower nibble of a status byte.
    pub(crate) const fn from_index_masked(byte: u8) -> Self {
        Self::ALL[(byte & 0x0F) as usize]
    }

    /// The wire index (0-15)
    pub const fn index(&self) -> u8 {
        *self as u8
    }
}

#[test]
fn channel_indices() {
    use pretty_assertions::assert_eq;

    assert_eq!(Channel::from_index(0).unwrap(), Channel::One);
    assert_eq!(Channel::from_index(15).unwrap(), Channel::Sixteen);
    assert_eq!(
        Channel::from_index(16).unwrap_err(),
        ArgumentError::InvalidChannel(16)
    );
    assert_eq!(u8::from(Channel::Ten), 9);
}
