#![doc = r#"
Streams one track into a [`Write`] + [`Seek`] sink

[`TrackWriter`] writes the header chunk and opens the track chunk as soon as
it is created. Each event is then encoded straight into the sink, preceded by
the ticks accumulated through [`TrackWriter::advance`]. Finishing the track
writes the end-of-track marker and goes back once to fill in the track
chunk's length, the only backwards seek the writer ever makes.
"#]

mod config;
pub use config::*;

mod error;
pub use error::*;

mod fs;
pub use fs::*;

use crate::{
    ArgumentError, Vlq,
    file::{
        MAX_TEXT_LEN, META_MARKER, MetaKind, MidiFileHeader, Tempo, TimeSignature, Timing,
        chunk::{LENGTH_FIELD_LEN, LENGTH_PLACEHOLDER, TRACK_TAG, length_field},
    },
    message::{Channel, ChannelVoiceMessage, DataByte, StatusByte},
};
use std::io::{self, Seek, SeekFrom, Write};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    Open,
    Poisoned,
    Finished,
}

#[doc = r#"
Writes a single-track (format 0) MIDI file event by event.

The sink may be owned (`BufWriter<File>`) or borrowed (`&mut Cursor<Vec<u8>>`).
The writer must be the only thing writing to it until the track is finished.

Call [`TrackWriter::finish`] to close the track and learn about failures.
Dropping an unfinished writer closes the track too, but can only log what
goes wrong.

# Example
```rust
# use std::io::Cursor;
# use smf_track_writer::prelude::*;
let mut bytes = Cursor::new(Vec::new());
let mut writer = TrackWriter::new(&mut bytes, Timing::default())?;

writer.note_on(Channel::One, 60, 100)?;
writer.advance(96)?;
writer.note_off(Channel::One, 60, 0)?;
writer.finish()?;

assert_eq!(
    &bytes.get_ref()[22..],
    &[0x00, 0x90, 60, 100, 0x60, 0x80, 60, 0, 0x00, 0xFF, 0x2F, 0x00]
);
# Ok::<(), WriterError>(())
```
"#]
#[derive(Debug)]
pub struct TrackWriter<W: Write + Seek> {
    sink: W,
    config: WriterConfig,
    pending_ticks: u32,
    running_status: Option<StatusByte>,
    fixup_offset: u64,
    track_len: u64,
    state: WriterState,
}

impl<W: Write + Seek> TrackWriter<W> {
    /// Open a track with default settings and the given timing.
    pub fn new(sink: W, timing: Timing) -> WriteResult<Self> {
        Self::with_config(sink, WriterConfig::new(timing))
    }

    /// Write the header chunk and open the track chunk.
    ///
    /// The file starts wherever the sink is currently positioned. Offsets,
    /// including the one backpatched on finish, are absolute positions in
    /// the sink, so bytes already written before it are left alone.
    pub fn with_config(mut sink: W, config: WriterConfig) -> WriteResult<Self> {
        let header = MidiFileHeader::new(config.timing);

        let start = sink.stream_position().map_err(|e| WriterError::io(0, e))?;
        header
            .write_to(&mut sink)
            .and_then(|_| sink.write_all(TRACK_TAG))
            .map_err(|e| WriterError::io(start, e))?;

        let fixup_offset = sink
            .stream_position()
            .map_err(|e| WriterError::io(start, e))?;
        sink.write_all(&LENGTH_PLACEHOLDER)
            .map_err(|e| WriterError::io(fixup_offset, e))?;

        debug!(
            ticks_per_quarter_note = config.timing.ticks_per_quarter_note(),
            fixup_offset, "Opened MIDI track"
        );

        Ok(Self {
            sink,
            config,
            pending_ticks: 0,
            running_status: None,
            fixup_offset,
            track_len: 0,
            state: WriterState::Open,
        })
    }

    /// False once the sink has failed. Nothing more can be written then.
    pub fn is_usable(&self) -> bool {
        self.state == WriterState::Open
    }

    /// The settings this writer was opened with
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Ticks waiting to be written before the next event
    pub fn pending_ticks(&self) -> u32 {
        self.pending_ticks
    }

    /// The status byte a reader would currently assume
    pub fn running_status(&self) -> Option<StatusByte> {
        self.running_status
    }

    /// Bytes of track data written so far, not counting the end-of-track marker
    pub fn track_len(&self) -> u64 {
        self.track_len
    }

    /// Where the track's length field sits in the sink
    pub fn fixup_offset(&self) -> u64 {
        self.fixup_offset
    }

    /// Borrow the sink
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Let `ticks` pass before the next event.
    ///
    /// Fails if the pending delta would grow past [`Vlq::MAX`]; the pending
    /// ticks are left as they were. Fails with [`WriterErrorKind::Poisoned`]
    /// once the sink has failed.
    pub fn advance(&mut self, ticks: u32) -> WriteResult<()> {
        self.ensure_usable()?;
        match self
            .pending_ticks
            .checked_add(ticks)
            .filter(|total| *total <= Vlq::MAX)
        {
            Some(total) => {
                self.pending_ticks = total;
                Ok(())
            }
            None => Err(self.reject(ArgumentError::DeltaOverflow {
                pending: self.pending_ticks,
                requested: ticks,
            })),
        }
    }

    /// Write a three-byte channel voice event from raw bytes.
    ///
    /// `status` must be a channel voice status (0x80..=0xEF) and both data
    /// bytes must be below 0x80. The status is left out when it matches the
    /// running status.
    pub fn write_note_event(&mut self, status: u8, note: u8, velocity: u8) -> WriteResult<()> {
        let parsed = StatusByte::new(status)
            .and_then(|s| Ok((s, DataByte::new(note)?, DataByte::new(velocity)?)));
        match parsed {
            Ok((status, note, velocity)) => self.write_channel_event(status, [note, velocity]),
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Write a typed channel voice message.
    pub fn write_message(&mut self, message: ChannelVoiceMessage) -> WriteResult<()> {
        self.write_channel_event(message.status(), message.data())
    }

    /// Write a note on (`0x9n`).
    pub fn note_on(&mut self, channel: Channel, note: u8, velocity: u8) -> WriteResult<()> {
        match ChannelVoiceMessage::note_on(channel, note, velocity) {
            Ok(message) => self.write_message(message),
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Write a note off (`0x8n`).
    pub fn note_off(&mut self, channel: Channel, note: u8, velocity: u8) -> WriteResult<()> {
        match ChannelVoiceMessage::note_off(channel, note, velocity) {
            Ok(message) => self.write_message(message),
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Write a control change (`0xBn`).
    pub fn control_change(
        &mut self,
        channel: Channel,
        controller: u8,
        value: u8,
    ) -> WriteResult<()> {
        match ChannelVoiceMessage::control_change(channel, controller, value) {
            Ok(message) => self.write_message(message),
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Write a track name meta event (`FF 03`).
    pub fn add_track_name(&mut self, name: &str) -> WriteResult<()> {
        self.add_text(MetaKind::TrackName, name)
    }

    /// Write a copyright notice meta event (`FF 02`).
    pub fn add_copyright(&mut self, text: &str) -> WriteResult<()> {
        self.add_text(MetaKind::Copyright, text)
    }

    /// Write a time signature meta event (`FF 58 04`) from its four raw bytes.
    ///
    /// `denominator` is the power-of-two exponent, so 4/4 is `(4, 2, 24, 8)`.
    pub fn add_time_signature(
        &mut self,
        numerator: u8,
        denominator: u8,
        clocks_per_click: u8,
        thirty_seconds_per_quarter: u8,
    ) -> WriteResult<()> {
        self.add_time_signature_event(TimeSignature::new(
            numerator,
            denominator,
            clocks_per_click,
            thirty_seconds_per_quarter,
        ))
    }

    /// Write a time signature meta event (`FF 58 04`).
    pub fn add_time_signature_event(&mut self, signature: TimeSignature) -> WriteResult<()> {
        self.ensure_usable()?;
        self.write_meta(MetaKind::TimeSignature, &signature.to_bytes())
    }

    /// Write a tempo meta event (`FF 51 03`) of `60_000_000 / bpm`
    /// microseconds per quarter note.
    pub fn add_tempo(&mut self, bpm: u32) -> WriteResult<()> {
        match Tempo::from_bpm(bpm) {
            Ok(tempo) => self.add_tempo_micros(tempo),
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Write a tempo meta event (`FF 51 03`) with an exact tempo.
    pub fn add_tempo_micros(&mut self, tempo: Tempo) -> WriteResult<()> {
        self.ensure_usable()?;
        self.write_meta(MetaKind::Tempo, &tempo.to_bytes())
    }

    /// End the track and fill in its length.
    ///
    /// Returns the track chunk's length, as written to its length field.
    pub fn finish(mut self) -> WriteResult<u32> {
        let result = self.finalize();
        self.state = WriterState::Finished;
        result
    }

    fn write_channel_event(&mut self, status: StatusByte, data: [DataByte; 2]) -> WriteResult<()> {
        self.ensure_usable()?;
        self.flush_timestamp()?;

        let write_status = match self.config.running_status {
            RunningStatus::Disabled => true,
            RunningStatus::AcrossMeta | RunningStatus::ResetOnMeta => {
                self.running_status != Some(status)
            }
        };
        if write_status {
            self.write_bytes(&[status.byte()])?;
        }
        self.running_status = Some(status);

        let [first, second] = data;
        self.write_bytes(&[first.value(), second.value()])?;

        trace!(
            status = status.byte(),
            data = ?[first.value(), second.value()],
            running = !write_status,
            "Wrote channel event"
        );
        Ok(())
    }

    fn add_text(&mut self, kind: MetaKind, text: &str) -> WriteResult<()> {
        debug_assert!(kind.is_text());
        self.ensure_usable()?;
        let text = match self.config.text_overflow.apply(text) {
            Ok(text) => text,
            Err(e) => return Err(self.reject(e)),
        };
        self.write_meta(kind, text.as_bytes())
    }

    /// `data` is at most [`MAX_TEXT_LEN`] bytes long.
    fn write_meta(&mut self, kind: MetaKind, data: &[u8]) -> WriteResult<()> {
        debug_assert!(data.len() <= MAX_TEXT_LEN);

        self.flush_timestamp()?;
        self.write_bytes(&[META_MARKER, kind.into()])?;
        self.write_bytes(Vlq::encode(data.len() as u32).as_bytes())?;
        self.write_bytes(data)?;

        if self.config.running_status == RunningStatus::ResetOnMeta {
            self.running_status = None;
        }

        trace!(?kind, len = data.len(), "Wrote meta event");
        Ok(())
    }

    fn flush_timestamp(&mut self) -> WriteResult<()> {
        // `advance` keeps the pending ticks within a VLQ
        let delta = Vlq::encode(self.pending_ticks);
        self.write_bytes(delta.as_bytes())?;
        self.pending_ticks = 0;
        Ok(())
    }

    fn finalize(&mut self) -> WriteResult<u32> {
        self.ensure_usable()?;
        self.flush_timestamp()?;
        self.write_bytes(&[META_MARKER, MetaKind::EndOfTrack.into()])?;
        self.write_bytes(Vlq::ZERO.as_bytes())?;

        let end = self.io(|sink| sink.stream_position())?;
        let len = end.saturating_sub(self.fixup_offset + LENGTH_FIELD_LEN);
        let Some(field) = length_field(len) else {
            return Err(WriterError::new(end, WriterErrorKind::TrackTooLong(len)));
        };

        let fixup_offset = self.fixup_offset;
        self.io(|sink| sink.seek(SeekFrom::Start(fixup_offset)))?;
        self.io(|sink| sink.write_all(&field))?;
        self.io(|sink| sink.seek(SeekFrom::Start(end)))?;
        self.io(|sink| sink.flush())?;

        debug!(track_len = len, fixup_offset, "Finished MIDI track");
        Ok(u32::from_be_bytes(field))
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> WriteResult<()> {
        self.io(|sink| sink.write_all(bytes))?;
        self.track_len += bytes.len() as u64;
        Ok(())
    }

    /// Runs an operation on the sink, poisoning the writer if it fails.
    fn io<T>(&mut self, op: impl FnOnce(&mut W) -> io::Result<T>) -> WriteResult<T> {
        op(&mut self.sink).map_err(|e| {
            self.state = WriterState::Poisoned;
            WriterError::io(self.position(), e)
        })
    }

    fn ensure_usable(&self) -> WriteResult<()> {
        match self.state {
            WriterState::Open => Ok(()),
            WriterState::Poisoned | WriterState::Finished => {
                Err(WriterError::new(self.position(), WriterErrorKind::Poisoned))
            }
        }
    }

    fn reject(&self, error: ArgumentError) -> WriterError {
        warn!(%error, "Rejected MIDI event argument");
        WriterError::invalid_argument(self.position(), error)
    }

    /// Offset just past the last byte written.
    fn position(&self) -> u64 {
        self.fixup_offset + LENGTH_FIELD_LEN + self.track_len
    }
}

impl<W: Write + Seek> Drop for TrackWriter<W> {
    fn drop(&mut self) {
        if self.state != WriterState::Open {
            return;
        }
        if let Err(error) = self.finalize() {
            warn!(%error, "Failed to finish MIDI track on drop");
        }
        self.state = WriterState::Finished;
    }
}
