#![doc = r#"
Byte-level building blocks of channel messages

A channel message is a status byte followed by data bytes. Status bytes
always have their leading bit set; data bytes never do. The writer leans on
that distinction for running status: a reader seeing a data byte where a
status byte was expected reuses the last status it saw.
"#]

pub mod channel;
pub use channel::*;

use crate::ArgumentError;

/// A 7-bit value carried by a MIDI message (key, velocity, controller value, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct DataByte(pub(crate) u8);

impl DataByte {
    /// Checks for correctness (leading 0 bit).
    pub const fn new(byte: u8) -> Result<Self, ArgumentError> {
        if byte > 0x7F {
            return Err(ArgumentError::InvalidDataByte(byte));
        }
        Ok(Self(byte))
    }

    /// Creates a data byte without checking the leading bit
    pub const fn new_unchecked(byte: u8) -> Self {
        Self(byte)
    }

    /// The underlying byte
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DataByte {
    type Error = ArgumentError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DataByte> for u8 {
    fn from(byte: DataByte) -> Self {
        byte.0
    }
}

#[doc = r#"
The status byte of a channel voice message.

The upper nibble selects the message (`0x8` note off, `0x9` note on, ...),
the lower nibble the channel. `0xF0` and above are system messages, which
this writer does not emit.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusByte(u8);

impl StatusByte {
    pub(crate) const NOTE_OFF: u8 = 0x80;
    pub(crate) const NOTE_ON: u8 = 0x90;
    pub(crate) const CONTROL_CHANGE: u8 = 0xB0;

    /// Accepts 0x80..=0xEF
    pub const fn new(byte: u8) -> Result<Self, ArgumentError> {
        match byte {
            0x80..=0xEF => Ok(Self(byte)),
            _ => Err(ArgumentError::InvalidStatus(byte)),
        }
    }

    /// Combine a message nibble (e.g. `0x90`) with a channel.
    pub(crate) const fn from_parts(message: u8, channel: Channel) -> Self {
        Self((message & 0xF0) | channel.index())
    }

    /// The underlying byte
    pub const fn byte(&self) -> u8 {
        self.0
    }

    /// The channel this status addresses
    pub fn channel(&self) -> Channel {
        Channel::from_index_masked(self.0)
    }
}

impl TryFrom<u8> for StatusByte {
    type Error = ArgumentError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[test]
fn status_bytes_cover_channel_voice_range() {
    use pretty_assertions::assert_eq;

    assert_eq!(StatusByte::new(0x7F), Err(ArgumentError::InvalidStatus(0x7F)));
    assert_eq!(StatusByte::new(0xF0), Err(ArgumentError::InvalidStatus(0xF0)));
    assert_eq!(StatusByte::new(0xFF), Err(ArgumentError::InvalidStatus(0xFF)));

    let status = StatusByte::new(0x9A).unwrap();
    assert_eq!(status.byte(), 0x9A);
    assert_eq!(status.channel(), Channel::Eleven);

    assert_eq!(StatusByte::new(0xEF).unwrap().channel(), Channel::Sixteen);
}

#[test]
fn data_bytes_keep_leading_bit_clear() {
    use pretty_assertions::assert_eq;

    assert_eq!(DataByte::new(127).unwrap().value(), 127);
    assert_eq!(DataByte::new(128), Err(ArgumentError::InvalidDataByte(128)));
    assert_eq!(DataByte::try_from(0).unwrap(), DataByte::new_unchecked(0));
}
