use super::{TrackWriter, WriteResult, WriterConfig, WriterError};
use std::{fs::File, io::BufWriter, path::Path};
use tracing::debug;

/// A [`TrackWriter`] writing to a file on disk
pub type MidiFileWriter = TrackWriter<BufWriter<File>>;

impl TrackWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path` and open a track in it.
    ///
    /// Fails if the file can't be created. The file is complete once the
    /// writer is finished or dropped.
    pub fn create(path: impl AsRef<Path>, config: WriterConfig) -> WriteResult<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| WriterError::io(0, e))?;
        debug!(path = %path.display(), "Created MIDI file");
        Self::with_config(BufWriter::new(file), config)
    }
}
