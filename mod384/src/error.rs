//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Montgomery arithmetic requires an odd modulus.
    EvenModulus,

    /// The modulus must be greater than one.
    ModulusTooSmall,

    /// The supplied constant is not `-p^-1 mod 2^64`.
    InvalidInverse,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EvenModulus => write!(f, "modulus is even"),
            Error::ModulusTooSmall => write!(f, "modulus must be greater than one"),
            Error::InvalidInverse => write!(f, "invalid Montgomery inverse for modulus"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
