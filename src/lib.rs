#![warn(missing_docs)]
#![doc = r#"
A streaming writer for single-track Standard MIDI Files (SMF format 0).

Events are encoded straight into any [`Write`](std::io::Write) +
[`Seek`](std::io::Seek) sink as they are emitted. Nothing is buffered
in memory: the track chunk's length field is reserved when the track
opens and backfilled once the end-of-track marker has been written.

# Example
```rust
# use std::io::Cursor;
use smf_track_writer::prelude::*;

let mut bytes = Cursor::new(Vec::new());

let mut writer = TrackWriter::new(&mut bytes, Timing::default())?;
writer.add_track_name("track 1")?;
writer.add_time_signature(4, 2, 0x24, 8)?;
writer.add_tempo(120)?;
writer.write_note_event(0x90, 36, 127)?; // note on
writer.advance(10)?;
writer.write_note_event(0x80, 36, 0)?; // note off
let track_len = writer.finish()?;

let bytes = bytes.into_inner();
assert_eq!(&bytes[..4], b"MThd");
assert_eq!(bytes.len(), 14 + 8 + track_len as usize);
# Ok::<(), smf_track_writer::writer::WriterError>(())
```
"#]

mod error;
pub use error::*;

pub mod file;

pub mod message;

mod vlq;
pub use vlq::*;

pub mod writer;

/// Commonly used types
pub mod prelude {
    pub use crate::{
        ArgumentError, Vlq,
        file::{MetaKind, MidiFileHeader, Tempo, TicksPerQuarterNote, TimeSignature, Timing},
        message::{Channel, ChannelVoiceMessage, DataByte, StatusByte},
        writer::{
            MidiFileWriter, RunningStatus, TextOverflow, TrackWriter, WriteResult, WriterConfig,
            WriterError, WriterErrorKind,
        },
    };
}
