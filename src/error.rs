// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    /// Missing or malformed command-line argument.
    Usage(String),

    /// The source image path does not resolve to a readable file.
    NotFound(PathBuf),

    /// The source bytes could not be decoded as an image.
    Decode(String),

    /// A rendered icon could not be encoded.
    Encode(String),

    /// Any other I/O failure (permission denied, missing output directory, disk full...).
    Io(String),
}

impl Error {
    /// Process exit status for this error. Every failure shares status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(e) => write!(f, "{}", e),
            Error::NotFound(path) => write!(f, "Source image not found: {}", path.display()),
            // Underlying library messages are surfaced verbatim.
            Error::Decode(e) | Error::Encode(e) | Error::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(e) => Error::Io(e.to_string()),
            other => Error::Encode(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
