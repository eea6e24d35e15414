#![allow(dead_code)]

use smf_track_writer::prelude::*;
use std::io::Cursor;

/// Decodes a variable-length quantity, independently of the crate.
///
/// Returns the value and the number of bytes it took.
pub fn decode_vlq(bytes: &[u8]) -> (u32, usize) {
    let mut value = 0u32;
    for (i, byte) in bytes.iter().enumerate() {
        value = (value << 7) | (byte & 0x7F) as u32;
        if byte & 0x80 == 0 {
            return (value, i + 1);
        }
    }
    panic!("Unterminated variable-length quantity in {bytes:02X?}");
}

/// Runs `events` against a writer over an in-memory buffer and returns the file.
pub fn write_track(
    config: WriterConfig,
    events: impl FnOnce(&mut TrackWriter<&mut Cursor<Vec<u8>>>) -> WriteResult<()>,
) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    let mut writer = TrackWriter::with_config(&mut bytes, config).unwrap();
    events(&mut writer).unwrap();
    writer.finish().unwrap();
    bytes.into_inner()
}

/// The track chunk's declared length and its data.
pub fn track_chunk(file: &[u8]) -> (u32, &[u8]) {
    assert_eq!(&file[14..18], b"MTrk");
    let len = u32::from_be_bytes(file[18..22].try_into().unwrap());
    (len, &file[22..])
}

/// The track data between the initial placeholder and the end-of-track marker.
pub fn events_of(file: &[u8]) -> &[u8] {
    let (_, data) = track_chunk(file);
    assert_eq!(&data[data.len() - 4..], &[0x00, 0xFF, 0x2F, 0x00]);
    &data[..data.len() - 4]
}
