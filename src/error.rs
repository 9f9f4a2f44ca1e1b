//! Main Crate Error

#[derive(thiserror::Error, Debug)]
/// Drumlin crate error enum.
pub enum Error {
    #[error(transparent)]
    /// Transparent [std::io::Error]
    IO(#[from] std::io::Error),

    /// Indicates that an id byte representation is not of length
    /// [ID_SIZE](crate::ID_SIZE).
    #[error("Invalid Id size, expected 64, got {0}")]
    InvalidIdSize(usize),

    /// A key's external hex representation could not be parsed.
    #[error("Invalid hex key: {0:?}")]
    InvalidHexKey(String),

    /// A netstring frame was malformed.
    #[error("Malformed netstring frame: {0}")]
    MalformedFrame(&'static str),

    /// A netstring frame declared a payload length above the allowed maximum.
    #[error("Frame length {0} exceeds maximum {1}")]
    FrameTooLarge(usize, usize),
}

pub type Result<T> = std::result::Result<T, Error>;
