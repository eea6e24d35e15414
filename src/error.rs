use thiserror::Error;

#[doc = r#"
A value handed to the writer that cannot be encoded.

These are caught before any byte of the offending event reaches the sink,
so a rejected call leaves the stream exactly as it was.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// Not a channel voice status byte (0x80..=0xEF)
    #[error("Invalid channel voice status byte {0:#04X}")]
    InvalidStatus(u8),
    /// A data byte with its leading bit set
    #[error("Invalid data byte {0:#04X}: the leading bit must be clear")]
    InvalidDataByte(u8),
    /// Channels are indexed 0-15
    #[error("Invalid channel index {0}")]
    InvalidChannel(u8),
    /// A track name or copyright notice longer than 255 bytes
    #[error("Text of {len} bytes is longer than the 255 bytes a meta event may carry")]
    TextTooLong {
        /// Length of the rejected text in bytes
        len: usize,
    },
    /// A tempo of zero beats per minute
    #[error("Tempo must be at least one beat per minute")]
    ZeroTempo,
    /// The microseconds per quarter note don't fit in 24 bits, or are zero
    #[error("Tempo of {0} microseconds per quarter note does not fit in 24 bits")]
    TempoOutOfRange(u32),
    /// Advancing would push the pending delta-time past what a VLQ can hold
    #[error("Advancing {pending} pending ticks by {requested} exceeds the largest delta-time")]
    DeltaOverflow {
        /// Ticks already waiting to be flushed
        pending: u32,
        /// Ticks the caller tried to add
        requested: u32,
    },
    /// Values above 0x0FFF_FFFF have no MIDI variable-length encoding
    #[error("{0} does not fit a variable-length quantity")]
    VlqOutOfRange(u32),
    /// Ticks per quarter note must be within 1-32767
    #[error("Invalid time division {0}: ticks per quarter note must be within 1-32767")]
    InvalidTimeDivision(u16),
}
