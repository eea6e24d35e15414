#![doc = r#"
Meta events

Meta events carry information about the track rather than performance data.
On the wire each is:
```text
FF <kind> <length as a variable-length quantity> <data>
```
"#]

mod tempo;
pub use tempo::*;

mod time_signature;
pub use time_signature::*;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Leading byte of every meta event
pub const META_MARKER: u8 = 0xFF;

/// Longest text a track name or copyright notice may hold
pub const MAX_TEXT_LEN: usize = 255;

/// The kinds of meta event the writer emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum MetaKind {
    /// `FF 02 len text`
    Copyright = 0x02,
    /// `FF 03 len text`
    TrackName = 0x03,
    /// `FF 2F 00`, always last in a track
    EndOfTrack = 0x2F,
    /// `FF 51 03 tt tt tt`
    Tempo = 0x51,
    /// `FF 58 04 nn dd cc bb`
    TimeSignature = 0x58,
}

impl MetaKind {
    /// True for the kinds whose payload is free text.
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Copyright | Self::TrackName)
    }
}

#[test]
fn meta_kind_bytes() {
    use pretty_assertions::assert_eq;

    assert_eq!(u8::from(MetaKind::EndOfTrack), 0x2F);
    assert_eq!(MetaKind::try_from(0x51).unwrap(), MetaKind::Tempo);
    assert!(MetaKind::try_from(0x54).is_err());
    assert!(MetaKind::TrackName.is_text());
    assert!(!MetaKind::Tempo.is_text());
}
