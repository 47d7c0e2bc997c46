use thiserror::Error;

#[derive(Error, Debug)]
pub enum CircleError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid detection parameters: {0}")]
    InvalidParameters(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Machine-checkable classification of a [`CircleError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input buffer could not be decoded or has a zero dimension.
    InvalidImage,
    /// Detection parameters violate their invariants.
    InvalidParameters,
    /// Anything the caller could not have prevented (I/O, encoding, config).
    Internal,
}

impl ErrorKind {
    /// True when the failure was caused by the caller's input.
    pub fn is_client_error(self) -> bool {
        matches!(self, Self::InvalidImage | Self::InvalidParameters)
    }
}

impl CircleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidImage(_) => ErrorKind::InvalidImage,
            Self::InvalidParameters(_) => ErrorKind::InvalidParameters,
            Self::Io(_) | Self::Image(_) | Self::Config(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, CircleError>;
