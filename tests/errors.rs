mod common;

use common::*;
use pretty_assertions::assert_eq;
use smf_track_writer::prelude::*;
use std::io::{self, Cursor, Seek, SeekFrom, Write};

/// Accepts `capacity` bytes, then fails every write.
#[derive(Debug)]
struct FailingSink {
    inner: Cursor<Vec<u8>>,
    capacity: usize,
}

impl FailingSink {
    fn new(capacity: usize) -> Self {
        Self {
            inner: Cursor::new(Vec::new()),
            capacity,
        }
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.get_ref().len();
        if written + buf.len() > self.capacity {
            return Err(io::Error::other("disk full"));
        }
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for FailingSink {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

fn argument_error(result: WriteResult<()>) -> ArgumentError {
    result.unwrap_err().argument_error().unwrap()
}

#[test]
fn rejected_arguments_write_nothing() {
    let file = write_track(WriterConfig::default(), |w| {
        w.advance(5)?;

        assert_eq!(
            argument_error(w.write_note_event(0x70, 60, 100)),
            ArgumentError::InvalidStatus(0x70)
        );
        assert_eq!(
            argument_error(w.write_note_event(0xF0, 60, 100)),
            ArgumentError::InvalidStatus(0xF0)
        );
        assert_eq!(
            argument_error(w.write_note_event(0x90, 128, 100)),
            ArgumentError::InvalidDataByte(128)
        );
        assert_eq!(
            argument_error(w.note_off(Channel::One, 60, 200)),
            ArgumentError::InvalidDataByte(200)
        );
        assert_eq!(argument_error(w.add_tempo(0)), ArgumentError::ZeroTempo);
        assert_eq!(
            argument_error(w.add_tempo(2)),
            ArgumentError::TempoOutOfRange(30_000_000)
        );
        assert_eq!(
            argument_error(w.add_copyright(&"c".repeat(300))),
            ArgumentError::TextTooLong { len: 300 }
        );

        assert_eq!(w.track_len(), 0);
        assert_eq!(w.pending_ticks(), 5);
        assert_eq!(w.running_status(), None);
        assert!(w.is_usable());
        Ok(())
    });

    assert_eq!(track_chunk(&file).1, &[0x05, 0xFF, 0x2F, 0x00]);
}

#[test]
fn advance_is_capped_at_largest_delta() {
    let file = write_track(WriterConfig::default(), |w| {
        w.advance(Vlq::MAX - 1)?;
        assert_eq!(
            argument_error(w.advance(2)),
            ArgumentError::DeltaOverflow {
                pending: Vlq::MAX - 1,
                requested: 2
            }
        );
        assert_eq!(
            argument_error(w.advance(u32::MAX)),
            ArgumentError::DeltaOverflow {
                pending: Vlq::MAX - 1,
                requested: u32::MAX
            }
        );
        w.advance(1)?;
        w.note_on(Channel::One, 0, 0)?;
        assert_eq!(w.pending_ticks(), 0);
        w.advance(Vlq::MAX)
    });

    assert_eq!(
        track_chunk(&file).1,
        &[
            0xFF, 0xFF, 0xFF, 0x7F, 0x90, 0, 0, //
            0xFF, 0xFF, 0xFF, 0x7F, 0xFF, 0x2F, 0x00,
        ]
    );
}

#[test]
fn argument_errors_report_position() {
    let mut bytes = Cursor::new(Vec::new());
    let mut writer = TrackWriter::new(&mut bytes, Timing::default()).unwrap();
    writer.note_on(Channel::One, 60, 100).unwrap();

    let err = writer.write_note_event(0x00, 0, 0).unwrap_err();
    assert_eq!(err.position(), 22 + 4);
    assert!(matches!(
        err.error_kind(),
        WriterErrorKind::InvalidArgument(ArgumentError::InvalidStatus(0x00))
    ));
    assert!(!err.is_io());
}

#[test]
fn header_write_failure_is_reported() {
    let err = TrackWriter::new(FailingSink::new(10), Timing::default()).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn failed_write_poisons_the_writer() {
    // header, track tag, placeholder, then room for one event
    let mut writer = TrackWriter::new(FailingSink::new(22 + 4), Timing::default()).unwrap();
    writer.note_on(Channel::One, 60, 100).unwrap();
    assert!(writer.is_usable());

    let err = writer.note_on(Channel::One, 62, 100).unwrap_err();
    assert!(err.is_io());
    assert!(!writer.is_usable());

    let err = writer.add_track_name("late").unwrap_err();
    assert!(matches!(err.error_kind(), WriterErrorKind::Poisoned));

    let err = writer.advance(10).unwrap_err();
    assert!(matches!(err.error_kind(), WriterErrorKind::Poisoned));
    assert_eq!(writer.pending_ticks(), 0);

    let err = writer.finish().unwrap_err();
    assert!(matches!(err.error_kind(), WriterErrorKind::Poisoned));
}

#[test]
fn end_of_track_failure_surfaces_from_finish() {
    let mut writer = TrackWriter::new(FailingSink::new(22 + 2), Timing::default()).unwrap();
    writer.advance(1).unwrap();
    let err = writer.finish().unwrap_err();
    assert!(err.is_io());
}

#[test]
fn failed_drop_does_not_panic() {
    let mut writer = TrackWriter::new(FailingSink::new(22), Timing::default()).unwrap();
    writer.advance(1).unwrap();
    drop(writer);
}

#[test]
fn invalid_time_division() {
    assert_eq!(
        Timing::new_ticks_per_quarter_note(0),
        Err(ArgumentError::InvalidTimeDivision(0))
    );
    assert_eq!(
        Timing::new_ticks_per_quarter_note(0xE728),
        Err(ArgumentError::InvalidTimeDivision(0xE728))
    );
}

#[test]
fn error_messages() {
    let mut bytes = Cursor::new(Vec::new());
    let mut writer = TrackWriter::new(&mut bytes, Timing::default()).unwrap();
    let err = writer.add_tempo(0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Writing at Position 22, Invalid argument: Tempo must be at least one beat per minute"
    );
}
