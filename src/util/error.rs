use std::io;

use thiserror::Error;

/// Errors from encoding or decoding a tuple in the portable format.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("bad magic bytes {0:?}, not an encoded tuple")]
    BadMagic([u8; 4]),
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),
    #[error("element type mismatch: expected {expected}, found {found}")]
    ElementMismatch {
        expected: &'static str,
        found: String,
    },
    #[error("length mismatch: expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("tuple of {0} elements is too long to encode")]
    TooLong(usize),
    #[error("{0} unread byte(s) after the encoded tuple")]
    TrailingBytes(usize),
    #[error(transparent)]
    Io(#[from] io::Error),
}
