use crate::{file::chunk::HEADER_TAG, prelude::*};
use std::io::Write;

/// Size of the header chunk, tag and length field included
pub const HEADER_CHUNK_LEN: usize = 14;

/// The value of a header chunk's length field. It never varies.
const HEADER_DATA_LEN: u32 = 6;

/// Format 0: one track carrying every channel.
const FORMAT_SINGLE_MULTICHANNEL: u16 = 0;

#[doc = r#"
The header chunk of a single-track MIDI file.

Every field is big-endian on the wire:
```text
4D 54 68 64   "MThd"
00 00 00 06   chunk length
00 00         format 0
00 01         one track
tt tt         ticks per quarter note
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFileHeader {
    timing: Timing,
}

impl MidiFileHeader {
    /// Create a new header from timing
    pub const fn new(timing: Timing) -> Self {
        Self { timing }
    }
    /// Get the timing props
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Always 0: a single multi-channel track
    pub const fn format(&self) -> u16 {
        FORMAT_SINGLE_MULTICHANNEL
    }

    /// Always 1
    pub const fn track_count(&self) -> u16 {
        1
    }

    /// The complete chunk as it appears at the start of the file
    pub fn to_bytes(&self) -> [u8; HEADER_CHUNK_LEN] {
        let mut bytes = [0; HEADER_CHUNK_LEN];
        bytes[0..4].copy_from_slice(HEADER_TAG);
        bytes[4..8].copy_from_slice(&HEADER_DATA_LEN.to_be_bytes());
        bytes[8..10].copy_from_slice(&self.format().to_be_bytes());
        bytes[10..12].copy_from_slice(&self.track_count().to_be_bytes());
        bytes[12..14].copy_from_slice(&self.timing.to_bytes());
        bytes
    }

    /// Write the chunk to a sink.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> std::io::Result<()> {
        sink.write_all(&self.to_bytes())
    }
}

#[test]
fn header_bytes() {
    use pretty_assertions::assert_eq;

    let header = MidiFileHeader::new(Timing::new_ticks_per_quarter_note(96).unwrap());
    assert_eq!(
        header.to_bytes(),
        [
            0x4D, 0x54, 0x68, 0x64, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x01, 0x00, 0x60
        ]
    );

    let header = MidiFileHeader::new(Timing::new_ticks_per_quarter_note(480).unwrap());
    assert_eq!(&header.to_bytes()[12..], &[0x01, 0xE0]);
}
