//! Error types for id128 decoding and persistence.

use std::io;

use thiserror::Error;

/// Errors that can occur when decoding, reading or writing an id128.
#[derive(Debug, Error)]
pub enum Id128Error {
    /// The text or frame does not have the shape of an id128.
    #[error("invalid id128: {reason}")]
    InvalidArgument { reason: &'static str },

    /// Nothing was read where a record was expected.
    #[error("no id128 record: input is empty")]
    NoMedium,

    /// The underlying open, read or write failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The writer accepted fewer bytes than the frame holds.
    #[error("short write: wrote {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Id128Error>;

impl Id128Error {
    pub(crate) const fn invalid(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }

    /// Returns true if the input was malformed.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Id128Error::InvalidArgument { .. })
    }

    /// Returns true if the input was empty.
    pub fn is_no_medium(&self) -> bool {
        matches!(self, Id128Error::NoMedium)
    }

    /// Negative errno for this error, for callers that speak the C convention.
    ///
    /// I/O errors keep their original OS code; errors without one map to `-EIO`.
    pub fn errno(&self) -> i32 {
        match self {
            Id128Error::InvalidArgument { .. } => -libc::EINVAL,
            Id128Error::NoMedium => -libc::ENOMEDIUM,
            Id128Error::Io(e) => -e.raw_os_error().unwrap_or(libc::EIO),
            Id128Error::ShortWrite { .. } => -libc::EIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_mapping() {
        assert_eq!(Id128Error::invalid("x").errno(), -libc::EINVAL);
        assert_eq!(Id128Error::NoMedium.errno(), -libc::ENOMEDIUM);
        assert_eq!(
            Id128Error::ShortWrite {
                written: 3,
                expected: 33
            }
            .errno(),
            -libc::EIO
        );
    }

    #[test]
    fn test_io_errno_is_preserved() {
        let err = Id128Error::from(io::Error::from_raw_os_error(libc::ENOENT));
        assert_eq!(err.errno(), -libc::ENOENT);

        let err = Id128Error::from(io::Error::other("synthetic"));
        assert_eq!(err.errno(), -libc::EIO);
    }

    #[test]
    fn test_predicates() {
        assert!(Id128Error::invalid("x").is_invalid_argument());
        assert!(!Id128Error::invalid("x").is_no_medium());
        assert!(Id128Error::NoMedium.is_no_medium());
    }
}
