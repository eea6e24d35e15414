use crate::{
    ArgumentError,
    message::{Channel, DataByte, StatusByte},
};

#[doc = r#"
A three-byte channel voice message.

# Example
```rust
# use smf_track_writer::prelude::*;
let on = ChannelVoiceMessage::note_on(Channel::One, 36, 127).unwrap();
assert_eq!(on.status().byte(), 0x90);
assert_eq!(on.to_bytes(), [0x90, 36, 127]);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelVoiceMessage {
    /// Release a key
    NoteOff {
        /// The channel the key sounds on
        channel: Channel,
        /// The key
        note: DataByte,
        /// Release velocity
        velocity: DataByte,
    },
    /// Press a key
    NoteOn {
        /// The channel the key sounds on
        channel: Channel,
        /// The key
        note: DataByte,
        /// Attack velocity. Zero is read as a note off by most devices.
        velocity: DataByte,
    },
    /// Set a controller value
    ControlChange {
        /// The channel the controller belongs to
        channel: Channel,
        /// Controller number
        controller: DataByte,
        /// New value
        value: DataByte,
    },
}

impl ChannelVoiceMessage {
    /// Create a note on message, checking both data bytes.
    pub fn note_on(channel: Channel, note: u8, velocity: u8) -> Result<Self, ArgumentError> {
        Ok(Self::NoteOn {
            channel,
            note: DataByte::new(note)?,
            velocity: DataByte::new(velocity)?,
        })
    }

    /// Create a note off message, checking both data bytes.
    pub fn note_off(channel: Channel, note: u8, velocity: u8) -> Result<Self, ArgumentError> {
        Ok(Self::NoteOff {
            channel,
            note: DataByte::new(note)?,
            velocity: DataByte::new(velocity)?,
        })
    }

    /// Create a control change message, checking both data bytes.
    pub fn control_change(
        channel: Channel,
        controller: u8,
        value: u8,
    ) -> Result<Self, ArgumentError> {
        Ok(Self::ControlChange {
            channel,
            controller: DataByte::new(controller)?,
            value: DataByte::new(value)?,
        })
    }

    /// Parse a raw status byte and two data bytes.
    ///
    /// Only note off, note on and control change statuses map onto this
    /// type. Other channel voice statuses (aftertouch, pitch bend, ...)
    /// produce [`ArgumentError::InvalidStatus`]; write those through
    /// [`TrackWriter::write_note_event`](crate::writer::TrackWriter::write_note_event).
    pub fn from_bytes(status: u8, first: u8, second: u8) -> Result<Self, ArgumentError> {
        let status = StatusByte::new(status)?;
        let channel = status.channel();
        match status.byte() & 0xF0 {
            StatusByte::NOTE_OFF => Self::note_off(channel, first, second),
            StatusByte::NOTE_ON => Self::note_on(channel, first, second),
            StatusByte::CONTROL_CHANGE => Self::control_change(channel, first, second),
            _ => Err(ArgumentError::InvalidStatus(status.byte())),
        }
    }

    /// The channel the message addresses
    pub const fn channel(&self) -> Channel {
        match self {
            Self::NoteOff { channel, .. }
            | Self::NoteOn { channel, .. }
            | Self::ControlChange { channel, .. } => *channel,
        }
    }

    /// The status byte, combining the message kind and the channel
    pub const fn status(&self) -> StatusByte {
        match self {
            Self::NoteOff { channel, .. } => StatusByte::from_parts(StatusByte::NOTE_OFF, *channel),
            Self::NoteOn { channel, .. } => StatusByte::from_parts(StatusByte::NOTE_ON, *channel),
            Self::ControlChange { channel, .. } => {
                StatusByte::from_parts(StatusByte::CONTROL_CHANGE, *channel)
            }
        }
    }

    /// The two data bytes following the status
    pub const fn data(&self) -> [DataByte; 2] {
        match self {
            Self::NoteOff { note, velocity, .. } | Self::NoteOn { note, velocity, .. } => {
                [*note, *velocity]
            }
            Self::ControlChange {
                controller, value, ..
            } => [*controller, *value],
        }
    }

    /// The full three bytes, status included
    pub const fn to_bytes(&self) -> [u8; 3] {
        let [first, second] = self.data();
        [self.status().byte(), first.value(), second.value()]
    }
}

#[test]
fn status_combines_kind_and_channel() {
    use pretty_assertions::assert_eq;

    let off = ChannelVoiceMessage::note_off(Channel::Three, 60, 64).unwrap();
    assert_eq!(off.to_bytes(), [0x82, 60, 64]);

    let cc = ChannelVoiceMessage::control_change(Channel::Sixteen, 7, 100).unwrap();
    assert_eq!(cc.status().byte(), 0xBF);
    assert_eq!(cc.channel(), Channel::Sixteen);
}

#[test]
fn from_bytes_validates_every_byte() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        ChannelVoiceMessage::from_bytes(0x91, 60, 100).unwrap(),
        ChannelVoiceMessage::note_on(Channel::Two, 60, 100).unwrap()
    );
    assert_eq!(
        ChannelVoiceMessage::from_bytes(0x90, 128, 100),
        Err(ArgumentError::InvalidDataByte(128))
    );
    assert_eq!(
        ChannelVoiceMessage::from_bytes(0x40, 60, 100),
        Err(ArgumentError::InvalidStatus(0x40))
    );
    // pitch bend is a valid status, but not one of ours
    assert_eq!(
        ChannelVoiceMessage::from_bytes(0xE0, 0, 64),
        Err(ArgumentError::InvalidStatus(0xE0))
    );
}
