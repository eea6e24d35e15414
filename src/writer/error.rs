use crate::ArgumentError;
use thiserror::Error;

#[doc = r#"
A set of errors that can occur while writing a track
"#]
#[derive(Debug, Error)]
#[error("Writing at Position {position}, {kind}")]
pub struct WriterError {
    position: u64,
    pub(crate) kind: WriterErrorKind,
}

/// A kind of error that a writer can produce
#[derive(Debug, Error)]
pub enum WriterErrorKind {
    /// The sink failed
    #[error("I/O {0}")]
    Io(#[from] std::io::Error),
    /// A value that can't be encoded
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
    /// An earlier I/O failure left the track unfinishable
    #[error("The writer is unusable after an earlier I/O failure")]
    Poisoned,
    /// The track grew past what a chunk length field can declare
    #[error("Track of {0} bytes is too long for a chunk")]
    TrackTooLong(u64),
}

impl WriterError {
    /// Create a writer error from a position and kind
    pub const fn new(position: u64, kind: WriterErrorKind) -> Self {
        Self { position, kind }
    }

    /// Create a new I/O error
    pub const fn io(position: u64, error: std::io::Error) -> Self {
        Self {
            position,
            kind: WriterErrorKind::Io(error),
        }
    }

    /// Create a new invalid argument error
    pub const fn invalid_argument(position: u64, error: ArgumentError) -> Self {
        Self {
            position,
            kind: WriterErrorKind::InvalidArgument(error),
        }
    }

    /// True if the sink failed
    pub const fn is_io(&self) -> bool {
        matches!(self.kind, WriterErrorKind::Io(_))
    }

    /// The rejected argument, if that is what went wrong.
    pub const fn argument_error(&self) -> Option<ArgumentError> {
        match self.kind {
            WriterErrorKind::InvalidArgument(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the error kind of the writer.
    pub fn error_kind(&self) -> &WriterErrorKind {
        &self.kind
    }

    /// Returns the stream offset where the write error occurred.
    pub fn position(&self) -> u64 {
        self.position
    }
}

/// The Write Result type (see [`WriterError`])
pub type WriteResult<T> = Result<T, WriterError>;
