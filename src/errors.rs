use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while extracting a duration
#[derive(Debug)]
pub enum DurationError {
    /// The stream terminated before a required header, skip, or field could be
    /// fully read, or an atom with the to-end-of-stream size escape had to be
    /// skipped (its end cannot be located).
    UnexpectedEndOfStream,
    /// Structural impossibility at the container level, e.g. a moov box whose
    /// own extent is unknown.
    MalformedContainer { message: String },
    /// An atom declares a size too small for the fields it must contain.
    MalformedBox { message: String },
    /// Transport-level failure from an HTTP byte source.
    Stream(StreamError),
    /// Any other I/O failure from the underlying stream.
    Other(io::Error),
}

/// Byte stream transport specific errors
#[derive(Debug)]
pub struct StreamError {
    pub message: String,
}

impl StreamError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationError::UnexpectedEndOfStream => write!(f, "unexpected end of stream"),
            DurationError::MalformedContainer { message } => {
                write!(f, "Malformed container: {}", message)
            }
            DurationError::MalformedBox { message } => write!(f, "Malformed box: {}", message),
            DurationError::Stream(err) => write!(f, "Stream error: {}", err),
            DurationError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for DurationError {}
impl Error for StreamError {}

// Conversion implementations
impl From<io::Error> for DurationError {
    fn from(err: io::Error) -> Self {
        // read_exact and friends report short reads as UnexpectedEof; surface
        // those as the typed end-of-stream kind.
        if err.kind() == io::ErrorKind::UnexpectedEof {
            DurationError::UnexpectedEndOfStream
        } else {
            DurationError::Other(err)
        }
    }
}

impl From<StreamError> for DurationError {
    fn from(err: StreamError) -> Self {
        DurationError::Stream(err)
    }
}

// Conversion to io::Error for callers that deal in plain I/O errors
impl From<DurationError> for io::Error {
    fn from(err: DurationError) -> Self {
        match err {
            DurationError::UnexpectedEndOfStream => io::ErrorKind::UnexpectedEof.into(),
            DurationError::Other(err) => err,
            other => io::Error::other(other),
        }
    }
}

impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with DurationError
pub type DurationResult<T> = Result<T, DurationError>;
