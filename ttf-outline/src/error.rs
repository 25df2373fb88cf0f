//! Error types associated with loading fonts and outlines.

use core::fmt;

pub use ttf_read::ReadError;

/// Errors that may occur when loading a font file.
#[derive(Debug)]
pub enum OutlineError {
    /// Error occurred when reading font data.
    Read(ReadError),
    /// The font file could not be read from disk.
    Io(std::io::Error),
}

impl From<ReadError> for OutlineError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

impl From<std::io::Error> for OutlineError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "failed to read font file: {e}"),
        }
    }
}

impl std::error::Error for OutlineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}
