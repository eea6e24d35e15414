#![doc = r#"
The pieces of a Standard MIDI File the writer lays down

A format 0 file is a header chunk followed by exactly one track chunk.
See [`chunk`] for the framing, [`MidiFileHeader`] for the header bytes and
[`MetaKind`] for the meta events a track may carry.
"#]

pub mod chunk;

mod header;
pub use header::*;

mod timing;
pub use timing::*;

mod meta;
pub use meta::*;
