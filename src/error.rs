//! The error type shared by the encoder, the decoder and the collaborators
//! they drive.

use std::path::PathBuf;

/// Everything that can go wrong while turning text into glyphs and back.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The byte-encoding name is not recognized.
    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),

    /// The text holds a character that the encoding can't represent.
    #[error("can't encode {character:?} at byte {position} using {encoding}")]
    Encoding {
        encoding: &'static str,
        character: char,
        position: usize,
    },

    /// The image to decode is missing or could not be read.
    #[error("image '{}' not found or unreadable: {reason}", path.display())]
    ImageNotFound { path: PathBuf, reason: String },

    /// The scanned digit sequence could not be turned into bytes.
    #[error("hex conversion failed: {0}")]
    HexConversion(String),

    /// The cell size and line width can't produce a decodable image.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The image could not be written.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// A file system operation failed.
    #[error("file system error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
