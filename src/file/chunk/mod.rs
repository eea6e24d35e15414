#![doc = r#"
Chunk framing for MIDI files

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII type identifier
followed by a 32-bit big-endian length field and then the chunk data. A single-track file
written by this crate holds exactly two of them.

## Header chunk

The header chunk (identified by "MThd") must be the first chunk in a MIDI file. See
[`MidiFileHeader`](crate::file::MidiFileHeader). It always has a fixed length of 6 bytes.

## Track chunk

The track chunk (identified by "MTrk") holds the delta-timed events. Its length is declared
*before* its content, but is only known once the last event is out. The writer therefore
lays down [`LENGTH_PLACEHOLDER`], remembers where it sits, and overwrites it when the track
is finished.

# Example Structure

```text
[Header Chunk: "MThd" | 00 00 00 06 | format | tracks | division]
[Track Chunk:  "MTrk" | length      | delta event delta event ... 00 FF 2F 00]
```
"#]

/// Tag opening the header chunk
pub const HEADER_TAG: &[u8; 4] = b"MThd";

/// Tag opening a track chunk
pub const TRACK_TAG: &[u8; 4] = b"MTrk";

/// Bytes taken by a chunk's length field
pub const LENGTH_FIELD_LEN: u64 = 4;

/// Written in place of the track length until the track is finished
pub const LENGTH_PLACEHOLDER: [u8; 4] = [0; 4];

/// The encoded length field of a chunk holding `len` bytes.
///
/// Returns `None` if `len` doesn't fit in 32 bits.
pub fn length_field(len: u64) -> Option<[u8; 4]> {
    u32::try_from(len).ok().map(u32::to_be_bytes)
}

#[test]
fn length_field_is_big_endian() {
    use pretty_assertions::assert_eq;

    assert_eq!(length_field(6), Some([0x00, 0x00, 0x00, 0x06]));
    assert_eq!(length_field(0x0102_0304), Some([0x01, 0x02, 0x03, 0x04]));
    assert_eq!(length_field(u32::MAX as u64 + 1), None);
}
