//! Error types for dictionary access and attribute decoding.

use crate::types::DictOffset;

/// Errors raised while decoding attributes out of a dictionary buffer.
///
/// Dictionaries are validated when they are compiled, so these only occur on
/// corrupt or truncated buffers.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// A read ran past the end of the buffer
    #[error("Read past end of dictionary buffer at offset {offset}")]
    OutOfBounds { offset: DictOffset },

    /// The size header of a shortcut list disagrees with its entry chain
    #[error(
        "Shortcut list at offset {offset} declares {declared_size} bytes but its chain spans {decoded_size}"
    )]
    InconsistentChain {
        offset: DictOffset,
        declared_size: usize,
        decoded_size: usize,
    },

    /// Any other failure reported by the underlying reader
    #[error("IO error")]
    Io(#[source] std::io::Error),
}

impl DecodeError {
    pub(crate) fn from_io(err: std::io::Error, offset: DictOffset) -> DecodeError {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => DecodeError::OutOfBounds { offset },
            _ => DecodeError::Io(err),
        }
    }
}

/// Errors raised while loading a dictionary or its configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    #[error("IO error")]
    Io(#[source] std::io::Error),

    #[error("Memory mapping error")]
    Memmap(#[source] std::io::Error),

    #[error("Invalid decoder configuration")]
    Config(#[source] serde_json::Error),
}

impl DictionaryError {
    pub fn into_io_error(self) -> std::io::Error {
        match self {
            DictionaryError::Io(v) => v,
            DictionaryError::Memmap(v) => v,
            DictionaryError::Config(v) => v.into(),
        }
    }
}
