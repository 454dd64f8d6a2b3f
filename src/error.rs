#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! error defines the failures of phrase decoding and key construction.

use thiserror::Error;

use crate::params::MNEMONIC_SIZE;

/// Result is the crate-wide result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error is returned by every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A recovery phrase did not have exactly MNEMONIC_SIZE words.
    #[error("mnemonics must be {expected} words long, got {got} words")]
    InvalidWordCount {
        /// expected is always MNEMONIC_SIZE.
        expected: usize,
        /// got is the number of words supplied.
        got: usize,
    },

    /// A word is not in the dictionary.
    #[error("word {} ({:?}) is not in the dictionary", .position + 1, .word)]
    UnknownWord {
        /// position is the zero-based index of the word in the phrase.
        position: usize,
        /// word is the word as it was supplied.
        word: String,
    },

    /// A word index does not fit in the dictionary.
    #[error("word index {0} is outside the dictionary")]
    IndexOutOfRange(u16),

    /// The checksum embedded in a phrase does not match its payload. The phrase was mistyped,
    /// has words out of order, or was produced by an incompatible encoder.
    #[error("failed to validate checksum embedded in mnemonic phrase")]
    InvalidChecksum,

    /// The version bits of a phrase name a format this crate does not know.
    #[error("unsupported mnemonic version {0}")]
    UnsupportedVersion(u8),

    /// The key expiry is not strictly after the key creation time.
    #[error("expiry time predates key creation time")]
    ExpiryTooEarly,

    /// The key creation time is after the latest time a phrase can represent.
    #[error("key creation time exceeds maximum")]
    CreationTooLate,

    /// The key creation time is before the epoch start.
    #[error("key creation time precedes epoch start")]
    CreationTooEarly,

    /// The key set builder failed. The source is passed through unchanged.
    #[error("failed to {context}")]
    KeySet {
        /// context names the key set operation that failed.
        context: &'static str,
        /// source is the builder's own error.
        #[source]
        source: anyhow::Error,
    },

    /// Constructing a key from a successfully decoded phrase failed.
    #[error("failed to recover key from decoded mnemonic: {0}")]
    Recover(#[source] Box<Error>),
}

/// ErrorKind classifies an Error without its context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See Error::InvalidWordCount.
    InvalidWordCount,
    /// See Error::UnknownWord.
    UnknownWord,
    /// See Error::IndexOutOfRange.
    IndexOutOfRange,
    /// See Error::InvalidChecksum.
    InvalidChecksum,
    /// See Error::UnsupportedVersion.
    UnsupportedVersion,
    /// See Error::ExpiryTooEarly.
    ExpiryTooEarly,
    /// See Error::CreationTooLate.
    CreationTooLate,
    /// See Error::CreationTooEarly.
    CreationTooEarly,
    /// See Error::KeySet.
    KeySet,
}

impl Error {
    /// kind returns the classification of the error. Recovery context is looked through, so a
    /// construction failure during recovery reports the same kind as it would from
    /// Mnemonikey::new.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidWordCount { .. } => ErrorKind::InvalidWordCount,
            Error::UnknownWord { .. } => ErrorKind::UnknownWord,
            Error::IndexOutOfRange(_) => ErrorKind::IndexOutOfRange,
            Error::InvalidChecksum => ErrorKind::InvalidChecksum,
            Error::UnsupportedVersion(_) => ErrorKind::UnsupportedVersion,
            Error::ExpiryTooEarly => ErrorKind::ExpiryTooEarly,
            Error::CreationTooLate => ErrorKind::CreationTooLate,
            Error::CreationTooEarly => ErrorKind::CreationTooEarly,
            Error::KeySet { .. } => ErrorKind::KeySet,
            Error::Recover(inner) => inner.kind(),
        }
    }

    pub(crate) fn invalid_word_count(got: usize) -> Self {
        Error::InvalidWordCount {
            expected: MNEMONIC_SIZE,
            got,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn check_recover_keeps_kind() {
        let err = Error::Recover(Box::new(Error::CreationTooLate));
        assert_eq!(err.kind(), ErrorKind::CreationTooLate);
        assert!(err.to_string().contains("failed to recover key"));
        assert!(err.source().is_some());
    }

    #[test]
    fn check_key_set_source_is_preserved() {
        let err = Error::KeySet {
            context: "derive key set",
            source: anyhow::anyhow!("builder exploded"),
        };
        assert_eq!(err.kind(), ErrorKind::KeySet);
        assert_eq!(err.to_string(), "failed to derive key set");
        assert_eq!(err.source().unwrap().to_string(), "builder exploded");
    }

    #[test]
    fn check_word_count_message() {
        let err = Error::invalid_word_count(14);
        assert_eq!(err.to_string(), "mnemonics must be 15 words long, got 14 words");
    }
}
